//! Menu-driven command loop over a [`Table`].
//!
//! The session owns only its input and output streams. The table is passed
//! in by the caller for every command.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::table::Table;

pub const MENU: &str = "\n1. Insert, 2. Retrieve, 3. Delete, 4. Display, 5. Exit: ";
const NOT_FOUND: &str = "Key not found!";
const INVALID_CHOICE: &str = "Invalid choice! Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Insert { key: String, value: String },
    Retrieve { key: String },
    Delete { key: String },
    Display,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

/// Run one command against `table`, writing its result to `out`.
pub fn execute<W: Write>(table: &mut Table, command: Command, out: &mut W) -> Result<Outcome> {
    match command {
        Command::Insert { key, value } => {
            log::debug!("insert {key:?}");
            table.insert(key, value);
        }
        Command::Retrieve { key } => match table.get(&key) {
            Some(value) => writeln!(out, "Value: {value}")?,
            None => writeln!(out, "{NOT_FOUND}")?,
        },
        Command::Delete { key } => {
            if table.remove(&key).is_some() {
                writeln!(out, "Key deleted successfully.")?;
            } else {
                writeln!(out, "{NOT_FOUND}")?;
            }
        }
        Command::Display => write!(out, "{table}")?,
        Command::Exit => return Ok(Outcome::Exit),
    }
    Ok(Outcome::Continue)
}

/// Interactive session reading menu choices from `input`.
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompt until exit or end of input.
    pub fn run(&mut self, table: &mut Table) -> Result<()> {
        while let Some(command) = self.next_command()? {
            if execute(table, command, &mut self.output)? == Outcome::Exit {
                break;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    /// Show the menu and read a full command. `None` at end of input.
    pub fn next_command(&mut self) -> Result<Option<Command>> {
        loop {
            let Some(choice) = self.prompt(MENU)? else {
                return Ok(None);
            };

            let command = match choice.trim() {
                "1" => {
                    let Some(key) = self.prompt("Enter key (string): ")? else {
                        return Ok(None);
                    };
                    let Some(value) = self.prompt("Enter value (string): ")? else {
                        return Ok(None);
                    };
                    Command::Insert { key, value }
                }
                "2" => match self.prompt("Enter key to retrieve (string): ")? {
                    Some(key) => Command::Retrieve { key },
                    None => return Ok(None),
                },
                "3" => match self.prompt("Enter key to delete (string): ")? {
                    Some(key) => Command::Delete { key },
                    None => return Ok(None),
                },
                "4" => Command::Display,
                "5" => Command::Exit,
                other => {
                    log::debug!("unrecognized menu choice {other:?}");
                    writeln!(self.output, "{INVALID_CHOICE}")?;
                    continue;
                }
            };
            return Ok(Some(command));
        }
    }

    /// Write `prompt` and read one line without its terminator.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}
