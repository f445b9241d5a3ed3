//! Coloured status messages for terminal output.
use colored::Colorize;
use std::io::{self, Write};

const TICK: &str = "✓";
const ERROR: &str = "Error:";

/// Write a success message.
pub fn write_success(
    out: &mut impl Write,
    msg: impl AsRef<str>,
) -> io::Result<()> {
    writeln!(out, "{} {}", msg.as_ref().green(), TICK.green())
}

/// Write a warning message.
pub fn write_warn(
    out: &mut impl Write,
    msg: impl AsRef<str>,
) -> io::Result<()> {
    writeln!(out, "{}", msg.as_ref().yellow())
}

/// Write an error message for failure.
pub fn write_fail(
    out: &mut impl Write,
    msg: impl AsRef<str>,
) -> io::Result<()> {
    writeln!(out, "{} {}", ERROR.red(), msg.as_ref())
}

/// Print an error message for failure.
pub fn fail(msg: impl AsRef<str>) {
    let _ = write_fail(&mut io::stdout(), msg);
}
