#![deny(missing_docs)]
#![forbid(unsafe_code)]
//! Random password generation and composition policy checks
//! for the `vp` command line tool.

mod error;
pub mod generator;
pub mod validator;

pub use error::Error;
pub use generator::{generate, measure_entropy, PasswordGen, PasswordResult};
pub use validator::{validate, Rule, Validation};

pub use zxcvbn;

/// Default cryptographically secure RNG.
pub(crate) fn csprng() -> impl rand::CryptoRng + rand::RngCore {
    rand::rngs::OsRng
}

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Minimum number of characters for generated and validated passwords.
pub const MIN_LENGTH: usize = 8;

/// Lowercase roman letters.
pub const ROMAN_LOWER: &str = "abcdefghijklmnopqrstuvwxyz";

/// Uppercase roman letters.
pub const ROMAN_UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Numerical digits.
pub const DIGITS: &str = "0123456789";

/// Characters accepted as special by the validator.
pub const SPECIAL: &str = "!@#$%^&*()";

/// Alphabet that generated passwords are drawn from.
pub const ALPHABET: &str = concat!(
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "0123456789",
    "!@#$%^&*()",
);
