use anyhow::Result;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;

use crate::helper::{MenuHelper, PromptKind};

/// One read from the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    /// CTRL-C
    Interrupted,
    /// CTRL-D or closed stdin
    Eof,
}

/// Source of user input for the menu loop.
pub trait LineReader {
    fn read_line(&mut self, prompt: &str, kind: PromptKind) -> Result<Input>;
}

/// Terminal input through rustyline, with menu hints and history.
pub struct RustylineReader {
    editor: Editor<MenuHelper, DefaultHistory>,
}

impl RustylineReader {
    pub fn new() -> Result<Self> {
        let mut editor = Editor::new()?;
        editor.set_helper(Some(MenuHelper::new()));
        Ok(Self { editor })
    }
}

impl LineReader for RustylineReader {
    fn read_line(&mut self, prompt: &str, kind: PromptKind) -> Result<Input> {
        if let Some(helper) = self.editor.helper_mut() {
            helper.set_kind(kind);
        }

        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Input::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
            Err(ReadlineError::Eof) => Ok(Input::Eof),
            Err(err) => Err(err.into()),
        }
    }
}
