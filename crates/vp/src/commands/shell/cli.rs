use crate::{helpers::readline::ShellEditor, Result};

use super::repl::Session;

/// Run the interactive shell on the terminal.
pub fn run(prompt: Option<String>) -> Result<()> {
    let editor = ShellEditor::new()?;
    let mut session = Session::new(editor, std::io::stdout());
    if let Some(prompt) = prompt {
        session = session.with_prompt(prompt);
    }
    tracing::debug!("shell::start");
    session.run()
}
