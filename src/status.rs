//! Line-oriented status output
//!
//! Every line is flushed as soon as it is written so an operator watching the
//! stream sees kills as they happen.

use std::io::{self, Write};

/// Banner printed once when enforcement starts
pub const BANNER: &str = "block-kill running...";

/// Destination for human-readable status lines
pub trait StatusSink {
    /// Write one line and make it visible immediately
    fn line(&mut self, line: &str) -> io::Result<()>;

    /// Announce that enforcement is active
    fn banner(&mut self) -> io::Result<()> {
        self.line(BANNER)
    }

    /// Report a terminated process by executable name
    fn killed(&mut self, name: &str) -> io::Result<()> {
        self.line(&format!("Killed: {}", name))
    }

    /// Report a match that was not signalled because of dry-run mode
    fn would_kill(&mut self, name: &str, pid: u32) -> io::Result<()> {
        self.line(&format!("Would kill: {} (PID {})", name, pid))
    }
}

/// [`StatusSink`] over any writer
pub struct StatusWriter<W: Write> {
    out: W,
}

impl<W: Write> StatusWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the sink and return the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl StatusWriter<io::Stdout> {
    /// Status sink on process stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> StatusSink for StatusWriter<W> {
    fn line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{}", line)?;
        self.out.flush()
    }
}

/// In-memory sink that keeps every line, handy for tests and embedding
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StatusLog {
    pub lines: Vec<String>,
}

impl StatusLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatusSink for StatusLog {
    fn line(&mut self, line: &str) -> io::Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_killed_line_format() {
        let mut log = StatusLog::new();
        log.killed("Notepad.exe").unwrap();
        assert_eq!(log.lines, vec!["Killed: Notepad.exe"]);
    }

    #[test]
    fn test_would_kill_line_format() {
        let mut log = StatusLog::new();
        log.would_kill("cmd.exe", 77).unwrap();
        assert_eq!(log.lines, vec!["Would kill: cmd.exe (PID 77)"]);
    }

    #[test]
    fn test_banner() {
        let mut log = StatusLog::new();
        log.banner().unwrap();
        assert_eq!(log.lines, vec![BANNER]);
    }

    #[test]
    fn test_writer_appends_newlines() {
        let mut writer = StatusWriter::new(Vec::new());
        writer.banner().unwrap();
        writer.killed("steam.exe").unwrap();
        let out = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(out, "block-kill running...\nKilled: steam.exe\n");
    }

    struct FlushCounter {
        buf: Vec<u8>,
        flushes: usize,
    }

    impl Write for FlushCounter {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.buf.extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_writer_flushes_every_line() {
        let mut writer = StatusWriter::new(FlushCounter {
            buf: Vec::new(),
            flushes: 0,
        });
        writer.killed("a.exe").unwrap();
        writer.killed("b.exe").unwrap();
        let inner = writer.into_inner();
        assert_eq!(inner.flushes, 2);
        assert_eq!(inner.buf, b"Killed: a.exe\nKilled: b.exe\n");
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writer_reports_write_errors() {
        let mut writer = StatusWriter::new(BrokenPipe);
        assert!(writer.killed("a.exe").is_err());
    }
}
