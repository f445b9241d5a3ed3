use std::io::Write;
use vp_cli_helpers::messages::{write_success, write_warn};
use vp_password::{validate, Validation};

use crate::Result;

/// Check a password and print the outcome.
pub fn run(out: &mut impl Write, password: &str) -> Result<Validation> {
    let outcome = validate(password);
    report(out, &outcome)?;
    Ok(outcome)
}

/// Print the outcome of a validation.
pub(crate) fn report(out: &mut impl Write, outcome: &Validation) -> Result<()> {
    if outcome.is_valid() {
        write_success(
            out,
            format!("Password validation successful: {}", outcome),
        )?;
    } else {
        write_warn(out, format!("Password validation failed: {}", outcome))?;
    }
    Ok(())
}
