use secrecy::ExposeSecret;
use std::io::Write;
use vp_password::PasswordGen;

use crate::Result;

/// Generate `count` passwords of `length` characters.
pub fn run(
    out: &mut impl Write,
    length: usize,
    count: usize,
    entropy: bool,
) -> Result<()> {
    let generator = PasswordGen::new(length);
    for result in generator.many(count)? {
        let password = result.password.expose_secret();
        if entropy {
            let estimate = result.entropy();
            writeln!(
                out,
                "{}  (score {}/4, 10^{:.1} guesses)",
                password,
                estimate.score(),
                estimate.guesses_log10(),
            )?;
        } else {
            writeln!(out, "{}", password)?;
        }
    }
    Ok(())
}
