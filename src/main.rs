//! block-kill: terminate blocklisted processes as soon as they appear
//!
//! Polls the process table and kills every process whose executable name is
//! on the configured blocklist.

use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use block_kill::cli::{CliArgs, ExecutionMode};
use block_kill::config::Config;
use block_kill::enforcer::Enforcer;
use block_kill::error::BlockKillError;
use block_kill::init::InitCommand;
use block_kill::process_info::SystemProcessSource;
use block_kill::status::StatusWriter;
use block_kill::ticker::IntervalTicker;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("block-kill: {}", e);
            e.exit_code().into()
        }
    }
}

/// Main execution logic
fn run() -> Result<(), BlockKillError> {
    let args = CliArgs::parse_args();
    let mode = args.validate()?;
    let signal = args.parse_signal()?;

    if let ExecutionMode::InitConfig { force } = mode {
        let path = InitCommand::execute(args.config.as_deref(), force)?;
        println!("Created: {}", path.display());
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => Config::load_strict(path)?,
        None => Config::load(),
    };
    let blocklist = config.blocklist()?;

    if mode == ExecutionMode::ListBlocklist {
        for name in blocklist.iter() {
            println!("{}", name);
        }
        return Ok(());
    }

    let source = SystemProcessSource::new(signal);
    log::info!(
        "terminating with {} ({})",
        source.signal().name(),
        source.signal().number()
    );
    let mut enforcer =
        Enforcer::new(blocklist, source, StatusWriter::stdout()).with_dry_run(args.dry_run);

    if mode == ExecutionMode::Once {
        enforcer.start()?;
        let report = enforcer.sweep()?;
        log::info!(
            "matched {} process(es), killed {}",
            report.matched,
            report.killed
        );
        return Ok(());
    }

    let shutdown = Arc::new(AtomicBool::new(false));
    let flag = shutdown.clone();
    ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))
        .map_err(|e| BlockKillError::SystemError(format!("Failed to set signal handler: {}", e)))?;

    enforcer.run(&mut IntervalTicker::default(), &shutdown)
}
