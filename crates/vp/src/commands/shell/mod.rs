mod cli;
mod repl;

pub use crate::helpers::readline::{LineReader, ShellEditor};
pub use cli::run;
pub use repl::{Session, ShellCommand};
