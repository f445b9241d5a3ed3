use std::{collections::VecDeque, io::Write, str::FromStr};

use rand::{rngs::OsRng, CryptoRng, RngCore};
use secrecy::ExposeSecret;
use terminal_banner::{Banner, Padding};
use vp_cli_helpers::messages::write_fail;
use vp_password::{validate, PasswordGen};

use crate::{
    commands::validate::report, helpers::readline::LineReader, Error,
    Result,
};

const WELCOME: &str = "Password Generator and Validator";
const DEFAULT_PROMPT: &str = "Enter a command: ";
const LENGTH_PROMPT: &str = "Enter the desired password length (minimum 8): ";
const PASSWORD_PROMPT: &str = "Enter the password to validate: ";
const UNKNOWN: &str =
    "Unknown command. Please use 'generate', 'validate', or 'exit'.";
const GOODBYE: &str = "Goodbye!";

const USAGE: &str = r#"
Commands:
  generate - Generate a new password
  validate - Validate an existing password
  exit     - Exit the application"#;

/// Command understood by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    /// Generate a password.
    Generate,
    /// Validate a password.
    Validate,
    /// Exit the shell.
    Exit,
}

impl FromStr for ShellCommand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "generate" => Ok(Self::Generate),
            "validate" => Ok(Self::Validate),
            "exit" | "quit" | "q" => Ok(Self::Exit),
            _ => Err(Error::UnknownCommand(s.to_owned())),
        }
    }
}

/// Whether the shell keeps reading commands.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Interactive shell session.
///
/// Input is consumed as whitespace separated tokens so a
/// single line may carry a command and its argument, for
/// example `generate 16`. Tokens left over on a line are
/// used before another line is read.
pub struct Session<R, W, G = OsRng> {
    reader: R,
    out: W,
    rng: G,
    prompt: String,
    tokens: VecDeque<String>,
}

impl<R: LineReader, W: Write> Session<R, W> {
    /// Create a session reading from `reader` and
    /// printing to `out`.
    pub fn new(reader: R, out: W) -> Self {
        Self {
            reader,
            out,
            rng: OsRng,
            prompt: DEFAULT_PROMPT.to_owned(),
            tokens: VecDeque::new(),
        }
    }
}

impl<R, W, G> Session<R, W, G>
where
    R: LineReader,
    W: Write,
    G: RngCore + CryptoRng,
{
    /// Use `rng` as the random source for generated passwords.
    pub fn with_rng<T>(self, rng: T) -> Session<R, W, T>
    where
        T: RngCore + CryptoRng,
    {
        Session {
            reader: self.reader,
            out: self.out,
            rng,
            prompt: self.prompt,
            tokens: self.tokens,
        }
    }

    /// Set the prompt shown when reading a command.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Consume the session and return the output.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run until the exit command or the end of input.
    pub fn run(&mut self) -> Result<()> {
        self.welcome()?;
        loop {
            writeln!(self.out, "{}", USAGE)?;
            self.out.flush()?;

            let prompt = self.prompt.clone();
            let Some(token) = self.next_token(&prompt)? else {
                return self.goodbye();
            };

            match token.parse::<ShellCommand>() {
                Ok(cmd) => {
                    tracing::debug!(command = ?cmd, "shell::exec");
                    if self.exec(cmd)? == Flow::Exit {
                        return self.goodbye();
                    }
                }
                Err(e) => {
                    tracing::debug!(error = %e, "shell::exec");
                    writeln!(self.out, "{}", UNKNOWN)?;
                }
            }
        }
    }

    fn welcome(&mut self) -> Result<()> {
        let help_info = r#"Type "exit" or "q" to quit"#;
        let banner = Banner::new()
            .padding(Padding::one())
            .text(WELCOME.into())
            .text(help_info.into())
            .render();
        writeln!(self.out, "{}", banner)?;
        Ok(())
    }

    fn goodbye(&mut self) -> Result<()> {
        writeln!(self.out, "{}", GOODBYE)?;
        self.out.flush()?;
        Ok(())
    }

    /// Next whitespace separated token, reading more input
    /// when no tokens are pending.
    fn next_token(&mut self, prompt: &str) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.tokens.pop_front() {
                return Ok(Some(token));
            }
            match self.reader.read_line(prompt)? {
                Some(line) => self
                    .tokens
                    .extend(line.split_whitespace().map(String::from)),
                None => return Ok(None),
            }
        }
    }

    fn exec(&mut self, cmd: ShellCommand) -> Result<Flow> {
        match cmd {
            ShellCommand::Generate => {
                let Some(token) = self.next_token(LENGTH_PROMPT)? else {
                    return Ok(Flow::Exit);
                };
                match parse_length(&token).and_then(|length| {
                    Ok(PasswordGen::new(length).one_with_rng(&mut self.rng)?)
                }) {
                    Ok(result) => writeln!(
                        self.out,
                        "Generated password: {}",
                        result.password.expose_secret()
                    )?,
                    Err(e) => write_fail(&mut self.out, e.to_string())?,
                }
                Ok(Flow::Continue)
            }
            ShellCommand::Validate => {
                let Some(password) = self.next_token(PASSWORD_PROMPT)? else {
                    return Ok(Flow::Exit);
                };
                report(&mut self.out, &validate(&password))?;
                Ok(Flow::Continue)
            }
            ShellCommand::Exit => Ok(Flow::Exit),
        }
    }
}

/// Parse a length token.
///
/// Negative numbers map to zero so they are rejected by
/// the generator with the minimum length message.
fn parse_length(token: &str) -> Result<usize> {
    let value = token
        .parse::<i64>()
        .map_err(|_| Error::InvalidLengthInput(token.to_owned()))?;
    Ok(usize::try_from(value).unwrap_or(0))
}
