use clap::{CommandFactory, Parser, Subcommand};

use crate::{
    commands::{generate, shell, validate},
    CommandTree, Result,
};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Vp {
    #[clap(subcommand)]
    cmd: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate random passwords.
    #[clap(alias = "gen")]
    Generate {
        /// Number of characters in each password.
        #[clap(short, long, default_value_t = 16)]
        length: usize,

        /// Number of passwords to generate.
        #[clap(short, long, default_value_t = 1)]
        count: usize,

        /// Print the strength estimate for each password.
        #[clap(short, long)]
        entropy: bool,
    },
    /// Check a password against the composition rules.
    Validate {
        /// Password to check.
        password: String,
    },
    /// Interactive generate and validate shell.
    Shell {
        /// Prompt for commands.
        #[clap(long, env = "VP_PROMPT", hide_env_values = true)]
        prompt: Option<String>,
    },
}

/// Parse arguments and run the selected command.
///
/// Returns the process exit code.
pub fn run() -> Result<i32> {
    // Support JSON output of command tree
    if std::env::var("VP_CLI_JSON").ok().is_some() {
        let cmd = Vp::command();
        let tree: CommandTree = (&cmd).into();
        serde_json::to_writer_pretty(std::io::stdout(), &tree)?;
        return Ok(0);
    }

    let args = Vp::parse();
    let mut out = std::io::stdout();
    match args.cmd {
        Some(Command::Generate {
            length,
            count,
            entropy,
        }) => {
            generate::run(&mut out, length, count, entropy)?;
        }
        Some(Command::Validate { password }) => {
            let outcome = validate::run(&mut out, &password)?;
            if !outcome.is_valid() {
                return Ok(1);
            }
        }
        Some(Command::Shell { prompt }) => shell::run(prompt)?,
        None => shell::run(std::env::var("VP_PROMPT").ok())?,
    }
    Ok(0)
}
