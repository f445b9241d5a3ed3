use rustyline::{error::ReadlineError, history::MemHistory, Editor};

use crate::Result;

/// Source of input lines for the shell.
pub trait LineReader {
    /// Read a line of input after showing the prompt.
    ///
    /// Returns `None` once the input is closed.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

pub(crate) fn basic_editor() -> Result<Editor<(), MemHistory>> {
    Ok(Editor::<(), MemHistory>::with_history(
        Default::default(),
        MemHistory::new(),
    )?)
}

/// Line editor for interactive terminals.
pub struct ShellEditor {
    editor: Editor<(), MemHistory>,
}

impl ShellEditor {
    /// Create a line editor with in-memory history.
    pub fn new() -> Result<Self> {
        Ok(Self {
            editor: basic_editor()?,
        })
    }
}

impl LineReader for ShellEditor {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                self.editor.add_history_entry(line.as_str())?;
                Ok(Some(line))
            }
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}
