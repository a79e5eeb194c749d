/// Shell-style history of accepted command lines.
#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    entries: Vec<String>,
    /// Index being shown, `None` when editing a fresh line.
    cursor: Option<usize>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Append a line and reset navigation.
    pub fn record(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
        self.cursor = None;
    }

    /// Step towards older entries. `None` when there is no history.
    pub fn prev(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let index = self
            .cursor
            .map_or(self.entries.len() - 1, |i| i.saturating_sub(1));
        self.cursor = Some(index);
        self.entries.get(index).map(String::as_str)
    }

    /// Step towards newer entries.
    ///
    /// Stepping past the newest entry yields an empty line and leaves
    /// navigation. `None` when not navigating.
    pub fn next(&mut self) -> Option<&str> {
        let index = self.cursor? + 1;
        if index >= self.entries.len() {
            self.cursor = None;
            return Some("");
        }
        self.cursor = Some(index);
        self.entries.get(index).map(String::as_str)
    }
}
