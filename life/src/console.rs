// console.rs - Text console: line parsing and a capped history log

use std::collections::VecDeque;

use crate::command;
use crate::controller::SimulationController;
use crate::error::CommandError;
use crate::render::RenderSink;

pub const NOT_FOUND: &str = "command not found";
pub const GENERIC_ERROR: &str = "error: check command name / params";

/// Upper bound on the configurable history length.
pub const MAX_HISTORY: usize = 1024;

/// One submitted line and the response it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub input: String,
    pub output: String,
}

/// Fixed-capacity log; pushing onto a full log evicts the oldest entry.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity >= 1, "history must hold at least one entry");
        Self { entries: VecDeque::new(), capacity }
    }

    pub fn push(&mut self, entry: LogEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }
}

/// Turns a dispatch result into the single status line shown to the user.
pub fn response(result: Result<String, CommandError>) -> String {
    match result {
        Ok(status) => status,
        Err(CommandError::NotFound(_)) => NOT_FOUND.to_string(),
        Err(_) => GENERIC_ERROR.to_string(),
    }
}

/// The command console: parses submitted lines, dispatches them and logs
/// the exchange.
#[derive(Debug, Clone)]
pub struct Console {
    history: History,
}

impl Console {
    pub fn new(capacity: usize) -> Self {
        Self { history: History::new(capacity) }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Runs one line. Blank lines are ignored and not logged.
    pub fn submit<R: RenderSink>(&mut self, controller: &mut SimulationController<R>, line: &str) -> Option<String> {
        let mut tokens = line.split_whitespace();
        let name = tokens.next()?;
        let args: Vec<&str> = tokens.collect();

        let output = response(command::dispatch(controller, name, &args));
        self.history.push(LogEntry { input: line.trim().to_string(), output: output.clone() });
        Some(output)
    }
}
