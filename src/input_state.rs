//! Record of the lines the user has submitted.

/// Maximum submitted lines remembered
const MAX_HISTORY: usize = 100;

#[derive(Default, Debug, Clone)]
pub struct InputState {
    /// Submitted lines, oldest first
    pub history: Vec<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line. Consecutive duplicates are stored once.
    pub fn push_history(&mut self, line: &str) {
        if self.history.last().map(String::as_str) == Some(line) {
            return;
        }
        self.history.push(line.to_string());
        if self.history.len() > MAX_HISTORY {
            self.history.remove(0);
        }
    }

    /// Most recently submitted line
    pub fn last(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }
}
