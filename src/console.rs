//! Terminal input/output as an injected capability.
//!
//! The session never touches stdin/stdout directly; it talks to a [`Console`],
//! so the resolver and namer stay pure and the whole interactive flow can be
//! driven from tests with scripted input. [`StdConsole`] is the production
//! implementation; the scripted double lives in [`tests`].

use std::io::{self, BufRead, Write};

/// One-line prompts in, one-line messages out.
pub trait Console {
    /// Show `message` (no trailing newline) and read one line of input,
    /// with the line terminator stripped. EOF reads as an empty line, which
    /// every prompt loop treats as cancellation.
    fn prompt(&mut self, message: &str) -> io::Result<String>;

    /// Print one message line.
    fn emit(&mut self, message: &str);
}

/// Console over the process's stdin and stdout.
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn prompt(&mut self, message: &str) -> io::Result<String> {
        print!("{message}");
        io::stdout().flush()?;

        let mut line = String::new();
        let bytes = io::stdin().lock().read_line(&mut line)?;
        if bytes == 0 {
            return Ok(String::new());
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    fn emit(&mut self, message: &str) {
        println!("{message}");
    }
}
