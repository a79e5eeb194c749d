//! Scrolling log of command inputs and their results.

/// Shown when a line is not a recognised command.
pub const INVALID_COMMAND: &str = "Invalid command. Type :help for available commands.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptEntry {
    /// A submitted line, echoed as `> line`.
    Input(String),
    /// Interpreter output. Multi-line messages stay one entry.
    Output { success: bool, message: String },
    /// The fixed invalid-command notice.
    Invalid,
}

impl TranscriptEntry {
    /// Lines as they appear on screen.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Input(line) => vec![format!("> {line}")],
            Self::Output { message, .. } => message.lines().map(ToOwned::to_owned).collect(),
            Self::Invalid => vec![INVALID_COMMAND.to_string()],
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, entry: TranscriptEntry) {
        self.entries.push(entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Every entry flattened into display lines.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().flat_map(TranscriptEntry::lines).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_flatten_multiline_output() {
        let mut transcript = Transcript::new();
        transcript.push(TranscriptEntry::Input(":list".to_string()));
        transcript.push(TranscriptEntry::Output {
            success: true,
            message: "Saved notes:\na (1/2/2024)".to_string(),
        });
        transcript.push(TranscriptEntry::Invalid);
        assert_eq!(
            transcript.lines(),
            vec![
                "> :list".to_string(),
                "Saved notes:".to_string(),
                "a (1/2/2024)".to_string(),
                INVALID_COMMAND.to_string(),
            ]
        );
    }

    #[test]
    fn test_clear_empties() {
        let mut transcript = Transcript::new();
        transcript.push(TranscriptEntry::Invalid);
        transcript.clear();
        assert!(transcript.is_empty());
    }
}
