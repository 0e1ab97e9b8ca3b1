use std::io::Write;

use anyhow::Result;
use colored::Colorize;
use todo_core::TaskStore;
use todo_core::TodoError;
use todo_core::task::{Selection, TaskFilter, TaskId};
use tracing::{debug, info};

use crate::helper::PromptKind;
use crate::reader::{Input, LineReader};
use crate::render::Renderer;

const MENU: &str = "\
To-Do List Manager
1. Add Task
2. List Tasks
    a. Show Incomplete Tasks
    b. Show Complete Tasks
    c. Show All (default)
3. Mark Task as Done
4. Search Tasks
5. Exit";

const LIST_MENU: &str = "\
  a. Show Incomplete Tasks
  b. Show Complete Tasks
  c. Show All (default)";

/// Whether the loop keeps going after a menu action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// The interactive menu: reads a choice, runs one store operation, prints
/// the result, repeats until the user exits.
pub struct Menu<'a, R, W> {
    store: &'a mut TaskStore,
    reader: R,
    out: W,
    renderer: Renderer,
}

impl<'a, R: LineReader, W: Write> Menu<'a, R, W> {
    pub fn new(store: &'a mut TaskStore, reader: R, out: W, renderer: Renderer) -> Self {
        Self {
            store,
            reader,
            out,
            renderer,
        }
    }

    /// Runs until the user picks exit or input ends.
    pub fn run(&mut self) -> Result<()> {
        info!("menu loop started");
        loop {
            writeln!(self.out)?;
            writeln!(self.out, "{}", MENU)?;

            let choice = match self.reader.read_line("Choose an option: ", PromptKind::Menu)? {
                Input::Line(line) => line.trim().to_string(),
                Input::Interrupted => {
                    writeln!(self.out, "{}", "CTRL-C detected. Choose 5 to exit.".yellow())?;
                    continue;
                }
                Input::Eof => break,
            };

            if self.dispatch(&choice)? == Flow::Exit {
                break;
            }
        }

        writeln!(self.out, "{}", "Goodbye!".bright_green())?;
        info!(tasks = self.store.len(), "menu loop finished");
        Ok(())
    }

    fn dispatch(&mut self, choice: &str) -> Result<Flow> {
        debug!(choice, "menu choice");
        match choice {
            "1" => self.add_task(),
            "2" => self.list_tasks(),
            "3" => self.mark_done(),
            "4" => self.search(),
            "5" | "exit" | "quit" => Ok(Flow::Exit),
            _ => {
                writeln!(self.out, "Invalid option!")?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Reads a trimmed line for a sub-prompt. `Err(flow)` means the action was
    /// abandoned and tells the caller whether to keep running.
    fn prompt(&mut self, prompt: &str, kind: PromptKind) -> Result<Result<String, Flow>> {
        match self.reader.read_line(prompt, kind)? {
            Input::Line(line) => Ok(Ok(line.trim().to_string())),
            Input::Interrupted => {
                writeln!(self.out, "{}", "Cancelled.".yellow())?;
                Ok(Err(Flow::Continue))
            }
            Input::Eof => Ok(Err(Flow::Exit)),
        }
    }

    fn add_task(&mut self) -> Result<Flow> {
        let text = match self.prompt("Enter task: ", PromptKind::Text)? {
            Ok(text) => text,
            Err(flow) => return Ok(flow),
        };

        self.store.add_task(&text);
        writeln!(self.out, "Task added!")?;
        Ok(Flow::Continue)
    }

    fn list_tasks(&mut self) -> Result<Flow> {
        writeln!(self.out, "{}", LIST_MENU)?;
        let choice = match self.prompt("Choose an option: ", PromptKind::ListFilter)? {
            Ok(choice) => choice,
            Err(flow) => return Ok(flow),
        };

        let filter = match choice.as_str() {
            "a" => TaskFilter::Incomplete,
            "b" => TaskFilter::Complete,
            _ => TaskFilter::All,
        };

        let selection = self.store.list(filter);
        self.renderer.write_listing(&mut self.out, &selection, filter)?;
        if filter == TaskFilter::All {
            self.renderer.write_summary(&mut self.out, self.store.stats())?;
        }
        Ok(Flow::Continue)
    }

    fn mark_done(&mut self) -> Result<Flow> {
        let selection = self.store.list_all();
        self.renderer
            .write_listing(&mut self.out, &selection, TaskFilter::All)?;
        if self.store.is_empty() {
            return Ok(Flow::Continue);
        }

        let input = match self.prompt("Enter task ID to mark as done: ", PromptKind::Text)? {
            Ok(input) => input,
            Err(flow) => return Ok(flow),
        };

        let outcome = input
            .parse::<TaskId>()
            .and_then(|id| self.store.mark_done(id).map(|_| ()));

        match outcome {
            Ok(()) => writeln!(self.out, "Task marked as done!")?,
            Err(TodoError::InvalidId { .. }) => writeln!(self.out, "Invalid ID!")?,
            Err(TodoError::TaskNotFound { .. }) => writeln!(self.out, "Task not found!")?,
            Err(err) => return Err(err.into()),
        }
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> Result<Flow> {
        let term = match self.prompt("Enter search term: ", PromptKind::Text)? {
            Ok(term) => term,
            Err(flow) => return Ok(flow),
        };

        match self.store.search(&term) {
            Ok(Selection::Matches(tasks)) => {
                writeln!(self.out, "Tasks containing '{}':", term)?;
                self.renderer.write_tasks(&mut self.out, &tasks)?;
            }
            Ok(Selection::NoTasks | Selection::NoMatches) => {
                writeln!(self.out, "No tasks found containing '{}'", term)?;
            }
            Err(TodoError::InvalidArgument(_)) => {
                writeln!(self.out, "Search term cannot be empty!")?;
            }
            Err(err) => return Err(err.into()),
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use todo_core::config::DisplayConfig;

    /// Replays canned input; behaves like CTRL-D once exhausted.
    struct ScriptedReader {
        inputs: VecDeque<Input>,
        prompts: Vec<String>,
    }

    impl ScriptedReader {
        fn lines(lines: &[&str]) -> Self {
            Self::inputs(lines.iter().map(|line| Input::Line(line.to_string())).collect())
        }

        fn inputs(inputs: Vec<Input>) -> Self {
            Self {
                inputs: inputs.into(),
                prompts: Vec::new(),
            }
        }
    }

    impl LineReader for &mut ScriptedReader {
        fn read_line(&mut self, prompt: &str, _kind: PromptKind) -> Result<Input> {
            self.prompts.push(prompt.to_string());
            Ok(self.inputs.pop_front().unwrap_or(Input::Eof))
        }
    }

    fn run(store: &mut TaskStore, reader: &mut ScriptedReader) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let renderer = Renderer::new(&DisplayConfig::default(), false);
        Menu::new(store, reader, &mut out, renderer)
            .run()
            .expect("menu loop should not fail");
        String::from_utf8(out).unwrap()
    }

    fn run_lines(lines: &[&str]) -> (TaskStore, String) {
        let mut store = TaskStore::new();
        let mut reader = ScriptedReader::lines(lines);
        let output = run(&mut store, &mut reader);
        (store, output)
    }

    #[test]
    fn test_add_trims_and_stores() {
        let (store, output) = run_lines(&["1", "  Buy milk  ", "5"]);

        assert_eq!(store.len(), 1);
        assert_eq!(store.tasks()[0].text, "Buy milk");
        assert!(output.contains("Task added!"));
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_list_filters() {
        let (_, output) = run_lines(&[
            "1", "Buy milk", "1", "Call mom", "3", "1", "2", "a", "2", "b", "2", "", "5",
        ]);

        assert!(output.contains("[1] [✗] Buy milk\n[2] [✗] Call mom\nTask marked as done!\n"));
        assert!(output.contains("(default)\n[2] [✗] Call mom\n\nTo-Do"));
        assert!(output.contains("(default)\n[1] [✓] Buy milk\n\nTo-Do"));
        assert!(output.contains(
            "(default)\n[1] [✓] Buy milk\n[2] [✗] Call mom\n2 tasks, 1 done, 1 pending\n"
        ));
    }

    #[test]
    fn test_list_on_empty_store() {
        let (_, output) = run_lines(&["2", "c", "5"]);
        assert!(output.contains("No tasks yet!"));
        assert!(!output.contains("pending"));
    }

    #[test]
    fn test_list_complete_with_none_done() {
        let (_, output) = run_lines(&["1", "a", "2", "b", "5"]);
        assert!(output.contains("No complete tasks!"));
    }

    #[test]
    fn test_mark_done_on_empty_store_skips_prompt() {
        let mut store = TaskStore::new();
        let mut reader = ScriptedReader::lines(&["3", "5"]);
        let output = run(&mut store, &mut reader);

        assert!(output.contains("No tasks yet!"));
        assert!(!reader.prompts.iter().any(|p| p.contains("task ID")));
    }

    #[test]
    fn test_mark_done_errors() {
        let (store, output) = run_lines(&["1", "a", "3", "abc", "3", "99", "5"]);

        assert!(output.contains("Invalid ID!"));
        assert!(output.contains("Task not found!"));
        assert!(!store.tasks()[0].done);
    }

    #[test]
    fn test_mark_done_negative_id_is_not_found() {
        let (store, output) = run_lines(&["1", "a", "3", "-1", "2", "b", "5"]);

        assert!(output.contains("Task not found!"));
        assert!(!output.contains("Invalid ID!"));
        assert!(output.contains("No complete tasks!"));
        assert!(!store.tasks()[0].done);
    }

    #[test]
    fn test_menu_shows_list_sub_options() {
        let (_, output) = run_lines(&["5"]);
        assert!(output.contains(
            "2. List Tasks\n    a. Show Incomplete Tasks\n    b. Show Complete Tasks\n    c. Show All (default)\n3. Mark Task as Done"
        ));
    }

    #[test]
    fn test_search() {
        let (_, output) = run_lines(&[
            "1", "Buy Milk", "1", "Call mom", "4", "MILK", "4", "bread", "4", "   ", "5",
        ]);

        assert!(output.contains("Tasks containing 'MILK':\n[1] [✗] Buy Milk\n"));
        assert!(output.contains("No tasks found containing 'bread'"));
        assert!(output.contains("Search term cannot be empty!"));
    }

    #[test]
    fn test_search_on_empty_store() {
        let (_, output) = run_lines(&["4", "milk", "5"]);
        assert!(output.contains("No tasks found containing 'milk'"));
    }

    #[test]
    fn test_invalid_option_redisplays_menu() {
        let (_, output) = run_lines(&["9", "5"]);

        assert!(output.contains("Invalid option!"));
        assert_eq!(output.matches("To-Do List Manager").count(), 2);
    }

    #[test]
    fn test_exit_words() {
        for word in ["exit", "quit", " 5 "] {
            let (_, output) = run_lines(&[word, "1"]);
            assert_eq!(output.matches("To-Do List Manager").count(), 1);
            assert!(output.ends_with("Goodbye!\n"));
        }
    }

    #[test]
    fn test_eof_exits_cleanly() {
        let (store, output) = run_lines(&["1"]);
        assert!(store.is_empty());
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_interrupt_cancels_action() {
        let mut store = TaskStore::new();
        let mut reader = ScriptedReader::inputs(vec![
            Input::Interrupted,
            Input::Line("1".to_string()),
            Input::Interrupted,
            Input::Line("5".to_string()),
        ]);
        let output = run(&mut store, &mut reader);

        assert!(store.is_empty());
        assert!(output.contains("CTRL-C detected"));
        assert!(output.contains("Cancelled."));
        assert!(output.ends_with("Goodbye!\n"));
    }
}
