mod command;
#[allow(clippy::module_inception)]
mod shell;

pub use command::Command;
pub use shell::{Shell, ShellError};
