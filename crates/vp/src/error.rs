use thiserror::Error;

/// Errors generated by the executable.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when a shell command is not recognised.
    #[error("{0} is not a known command")]
    UnknownCommand(String),

    /// Error generated when a shell length is not an integer.
    #[error("invalid password length '{0}'")]
    InvalidLengthInput(String),

    /// Error generated by the password library.
    #[error(transparent)]
    Password(#[from] vp_password::Error),

    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
