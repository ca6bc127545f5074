//! Terminal prompts on stdin/stdout.

use std::io::{self, BufRead, Write};

use nebula_node_core::input::Prompter;

pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, label: &str) -> io::Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{} ", label)?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line)
    }

    fn ask_secret(&mut self, label: &str) -> io::Result<String> {
        rpassword::prompt_password(format!("{} ", label))
    }
}
