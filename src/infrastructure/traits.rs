//! I/O boundary traits for testability
//!
//! These traits abstract terminal interaction, allowing the session loop
//! to be driven by scripted input in tests.

use std::io::{self, BufRead, Write};

/// Terminal abstraction for the interactive session.
pub trait Console {
    /// Print a prompt (no newline) and read one line of input.
    /// The returned line has the trailing newline stripped.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;

    /// Write one line of output.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// Real console on stdin/stdout.
#[derive(Debug, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            // EOF on stdin ends the session
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        println!("{}", line);
        Ok(())
    }
}
