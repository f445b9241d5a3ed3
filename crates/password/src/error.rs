use thiserror::Error;

/// Errors generated by the password library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when the requested password length
    /// is below the minimum.
    #[error("Password length must be at least {minimum} characters")]
    InvalidLength {
        /// Requested length.
        length: usize,
        /// Minimum length allowed.
        minimum: usize,
    },

    /// Error generated when the secure random source fails
    /// to supply bytes.
    #[error("failed to generate random character: {0}")]
    RandomSource(#[from] rand::Error),
}
