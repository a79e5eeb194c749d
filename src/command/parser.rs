use std::fmt;

use thiserror::Error;

/// The command keywords understood by the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Save,
    Open,
    Delete,
    List,
    New,
    Help,
    Clear,
}

impl CommandKind {
    pub const ALL: [Self; 7] = [
        Self::Save,
        Self::Open,
        Self::Delete,
        Self::List,
        Self::New,
        Self::Help,
        Self::Clear,
    ];

    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Save => "save",
            Self::Open => "open",
            Self::Delete => "delete",
            Self::List => "list",
            Self::New => "new",
            Self::Help => "help",
            Self::Clear => "clear",
        }
    }

    /// Match a keyword, ignoring case.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let keyword = keyword.to_lowercase();
        Self::ALL.into_iter().find(|kind| kind.keyword() == keyword)
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.keyword())
    }
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub kind: CommandKind,
    /// Positional arguments, split on single spaces. Empty when none were given.
    pub args: Vec<String>,
}

impl Command {
    pub const fn new(kind: CommandKind, args: Vec<String>) -> Self {
        Self { kind, args }
    }

    /// The arguments rejoined with single spaces, for free-form names.
    ///
    /// `None` when there are no arguments or they join to an empty string.
    pub fn joined_args(&self) -> Option<String> {
        let joined = self.args.join(" ");
        if joined.is_empty() {
            None
        } else {
            Some(joined)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("input does not start with ':'")]
    NotACommand,
    #[error("unknown command :{0}")]
    UnknownCommand(String),
}

/// Parse a raw command-line entry.
///
/// The trimmed input must start with `:`. The rest is split on single
/// spaces (repeated spaces produce empty tokens); the first token is the
/// case-insensitive keyword and the remainder are arguments.
///
/// # Errors
///
/// [`ParseError::NotACommand`] when the colon is missing,
/// [`ParseError::UnknownCommand`] when the keyword is not recognised.
pub fn parse(raw: &str) -> Result<Command, ParseError> {
    let trimmed = raw.trim();
    let body = trimmed.strip_prefix(':').ok_or(ParseError::NotACommand)?;

    let mut tokens = body.split(' ');
    let keyword = tokens.next().unwrap_or_default();
    let kind = CommandKind::from_keyword(keyword)
        .ok_or_else(|| ParseError::UnknownCommand(keyword.to_string()))?;
    let args = tokens.map(str::to_string).collect();

    Ok(Command::new(kind, args))
}
