use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use colored::Colorize;
use snafu::{ResultExt, Snafu};
use tracing::{debug, info};

use crate::navigator::{Listing, ListingEntry, Navigator, format_size};
use crate::shell::Command;

const WELCOME: &str = "Welcome to the CLI File System. Type 'help' to see commands.";
const UNKNOWN_COMMAND: &str = "Unknown command. Type 'help' to list available commands.";
const CD_USAGE: &str = "Usage: cd <dirname>";
const HELP: &str = "\
Available commands:
  current            - Show current path
  cd <dirname>   - Change into subdirectory
  cd..           - Move up to parent directory
  ls             - List contents of current directory
  size           - Calculate total size of current directory
  reset          - Go back to root directory
  help           - Show this help message
  exit           - Quit the program";

/// Interactive prompt driving a [`Navigator`] from line based input.
pub struct Shell<R, W> {
    navigator: Navigator,
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(navigator: Navigator, input: R, output: W, color: bool) -> Self {
        Self {
            navigator,
            input,
            output,
            color,
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Runs the prompt loop until `exit` or end of input.
    pub fn run(&mut self) -> Result<(), ShellError> {
        writeln!(self.output, "{WELCOME}").context(WriteSnafu)?;

        let mut line = String::new();
        loop {
            write!(self.output, "{} > ", self.navigator.current_path()).context(WriteSnafu)?;
            self.output.flush().context(WriteSnafu)?;

            line.clear();
            let read = self.input.read_line(&mut line).context(ReadSnafu)?;
            if read == 0 {
                debug!("Input closed, leaving shell");
                writeln!(self.output).context(WriteSnafu)?;
                break;
            }

            let command = Command::parse(&line);
            debug!("Parsed command: {command:?}");
            if self.execute(command)?.is_break() {
                break;
            }
        }

        info!("Shell session finished");
        Ok(())
    }

    /// Executes a single command, writing its rendering to the output.
    pub fn execute(&mut self, command: Command) -> Result<ControlFlow<()>, ShellError> {
        match command {
            Command::Current => {
                let path = self.navigator.current_path();
                self.print(&path)?;
            }
            Command::ChangeInto(None) => self.print(CD_USAGE)?,
            Command::ChangeInto(Some(name)) => {
                if let Err(error) = self.navigator.change_into(&name) {
                    self.print_error(&error.to_string())?;
                }
            }
            Command::ChangeToParent => {
                if let Err(error) = self.navigator.change_to_parent() {
                    self.print_error(&error.to_string())?;
                }
            }
            Command::Reset => self.navigator.reset(),
            Command::List => self.print_listing()?,
            Command::Size => {
                let size = self.navigator.current_total_size();
                self.print(&format!("Total size: {} ({size} KB)", format_size(size)))?;
            }
            Command::Help => self.print(HELP)?,
            Command::Exit => return Ok(ControlFlow::Break(())),
            Command::Unknown(_) => self.print_error(UNKNOWN_COMMAND)?,
        }

        Ok(ControlFlow::Continue(()))
    }

    fn print_listing(&mut self) -> Result<(), ShellError> {
        match self.navigator.list_current() {
            Listing::Empty => self.print("Directory is empty"),
            Listing::Entries { directories, files } => {
                self.print_section("Directories:", &directories)?;
                self.print_section("Files:", &files)
            }
        }
    }

    fn print_section(&mut self, title: &str, entries: &[ListingEntry]) -> Result<(), ShellError> {
        if entries.is_empty() {
            return Ok(());
        }

        self.print(title)?;
        for entry in entries {
            self.print(&format!("  {} ({})", entry.name, format_size(entry.size_kib)))?;
        }
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<(), ShellError> {
        writeln!(self.output, "{text}").context(WriteSnafu)
    }

    fn print_error(&mut self, text: &str) -> Result<(), ShellError> {
        if self.color {
            writeln!(self.output, "{}", text.red()).context(WriteSnafu)
        } else {
            self.print(text)
        }
    }
}

#[derive(Debug, Snafu)]
pub enum ShellError {
    #[snafu(display("Failed to read from the console"))]
    ReadError { source: std::io::Error },
    #[snafu(display("Failed to write to the console"))]
    WriteError { source: std::io::Error },
}
