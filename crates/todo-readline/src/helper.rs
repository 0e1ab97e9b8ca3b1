use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// What the user is currently being asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// The main menu choice.
    Menu,
    /// The a/b/c listing sub-choice.
    ListFilter,
    /// Free text (task text, task id, search term).
    Text,
}

const MENU_CHOICES: &[(&str, &str)] = &[
    ("1", "add task"),
    ("2", "list tasks"),
    ("3", "mark task as done"),
    ("4", "search tasks"),
    ("5", "exit"),
    ("exit", ""),
    ("quit", ""),
];

const FILTER_CHOICES: &[(&str, &str)] = &[
    ("a", "incomplete"),
    ("b", "complete"),
    ("c", "all"),
];

/// Rustyline helper for the menu: hints, completion and highlighting of
/// menu choices. Free-text prompts are left alone.
#[derive(Clone)]
pub struct MenuHelper {
    kind: PromptKind,
}

impl MenuHelper {
    pub fn new() -> Self {
        Self {
            kind: PromptKind::Menu,
        }
    }

    pub fn set_kind(&mut self, kind: PromptKind) {
        self.kind = kind;
    }

    fn choices(&self) -> &'static [(&'static str, &'static str)] {
        match self.kind {
            PromptKind::Menu => MENU_CHOICES,
            PromptKind::ListFilter => FILTER_CHOICES,
            PromptKind::Text => &[],
        }
    }
}

impl Helper for MenuHelper {}

impl Completer for MenuHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.is_empty() {
            return Ok((0, vec![]));
        }

        let candidates: Vec<Pair> = self
            .choices()
            .iter()
            .filter(|(choice, _)| choice.starts_with(line))
            .map(|(choice, _)| Pair {
                display: choice.to_string(),
                replacement: choice.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for MenuHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if self.choices().iter().any(|(choice, _)| *choice == line.trim()) {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        self.kind != PromptKind::Text
    }
}

impl Hinter for MenuHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if line.is_empty() {
            return None;
        }

        self.choices()
            .iter()
            .find(|(choice, _)| choice.starts_with(line))
            .and_then(|(choice, label)| {
                let rest = &choice[line.len()..];
                match (rest.is_empty(), label.is_empty()) {
                    (true, true) => None,
                    (true, false) => Some(format!("  ({})", label).bright_black().to_string()),
                    (false, _) => Some(rest.to_string()),
                }
            })
    }
}

impl Validator for MenuHelper {}
