use std::io::{self, Write};

use colored::Colorize;
use todo_core::TaskStats;
use todo_core::config::DisplayConfig;
use todo_core::task::{Selection, Task, TaskFilter, TaskStatus};

/// Formats tasks as `[<id>] [<glyph>] <text>` lines.
#[derive(Debug, Clone)]
pub struct Renderer {
    color: bool,
    done_glyph: String,
    pending_glyph: String,
    show_summary: bool,
}

impl Renderer {
    /// `color` is the final decision after command-line overrides.
    pub fn new(display: &DisplayConfig, color: bool) -> Self {
        Self {
            color: color && display.color,
            done_glyph: display.done_glyph.clone(),
            pending_glyph: display.pending_glyph.clone(),
            show_summary: display.show_summary,
        }
    }

    pub fn task_line(&self, task: &Task) -> String {
        let status = match (task.status(), self.color) {
            (TaskStatus::Done, true) => self.done_glyph.green().to_string(),
            (TaskStatus::Pending, true) => self.pending_glyph.red().to_string(),
            (TaskStatus::Done, false) => self.done_glyph.clone(),
            (TaskStatus::Pending, false) => self.pending_glyph.clone(),
        };
        format!("[{}] [{}] {}", task.id, status, task.text)
    }

    pub fn write_tasks<W: Write>(&self, out: &mut W, tasks: &[&Task]) -> io::Result<()> {
        for task in tasks {
            writeln!(out, "{}", self.task_line(task))?;
        }
        Ok(())
    }

    /// Writes a filtered listing, with a friendly line when nothing matched.
    pub fn write_listing<W: Write>(
        &self,
        out: &mut W,
        selection: &Selection<'_>,
        filter: TaskFilter,
    ) -> io::Result<()> {
        match selection {
            Selection::NoTasks => writeln!(out, "No tasks yet!"),
            Selection::NoMatches => writeln!(out, "{}", empty_message(filter)),
            Selection::Matches(tasks) => self.write_tasks(out, tasks),
        }
    }

    pub fn write_summary<W: Write>(&self, out: &mut W, stats: TaskStats) -> io::Result<()> {
        if !self.show_summary || stats.total == 0 {
            return Ok(());
        }
        let noun = if stats.total == 1 { "task" } else { "tasks" };
        writeln!(
            out,
            "{} {}, {} done, {} pending",
            stats.total, noun, stats.done, stats.pending
        )
    }
}

/// Resolves whether output is colored. When it is not, coloring is switched
/// off process-wide so menu messages and prompt hints stay plain too.
pub fn configure_color(display: &DisplayConfig, no_color: bool) -> bool {
    let enabled = display.color && !no_color;
    if !enabled {
        colored::control::set_override(false);
    }
    enabled
}

fn empty_message(filter: TaskFilter) -> &'static str {
    match filter {
        TaskFilter::All => "No tasks yet!",
        TaskFilter::Incomplete => "No incomplete tasks!",
        TaskFilter::Complete => "No complete tasks!",
    }
}
