//! The notepad core: repository, session, transcript and history wired
//! together behind a single `submit` entry point.
//!
//! Submitting a line runs parse → execute → apply effects → transcript.
//! Editor changes go straight to the session through [`Notepad::update_content`].

mod history;

pub use history::CommandHistory;

use chrono::{DateTime, Utc};

use crate::command::{self, CommandKind, CommandResult, Effect, ParseError};
use crate::note::Note;
use crate::repo::NoteRepository;
use crate::session::Session;
use crate::storage::BlobStore;
use crate::transcript::{Transcript, TranscriptEntry};

/// What happened to a submitted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Blank input; nothing recorded.
    Ignored,
    /// Not a command; the invalid-command notice was logged.
    Rejected(ParseError),
    /// The command ran.
    Executed {
        kind: CommandKind,
        result: CommandResult,
    },
}

#[derive(Debug)]
pub struct Notepad {
    repo: NoteRepository,
    session: Session,
    transcript: Transcript,
    history: CommandHistory,
}

impl Notepad {
    /// Load saved notes from `store`.
    ///
    /// With `welcome` set and nothing saved yet, the welcome note becomes
    /// the current note (unsaved).
    pub fn open(store: impl BlobStore + 'static, welcome: bool) -> Self {
        Self::open_boxed(Box::new(store), welcome)
    }

    pub fn open_boxed(store: Box<dyn BlobStore>, welcome: bool) -> Self {
        let repo = NoteRepository::load_boxed(store);
        let current = (welcome && repo.is_empty()).then(|| Note::welcome(Utc::now()));
        Self {
            repo,
            session: Session::new(current),
            transcript: Transcript::new(),
            history: CommandHistory::new(),
        }
    }

    pub const fn repository(&self) -> &NoteRepository {
        &self.repo
    }

    pub const fn session(&self) -> &Session {
        &self.session
    }

    pub const fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub const fn current(&self) -> Option<&Note> {
        self.session.current()
    }

    pub const fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub const fn history_mut(&mut self) -> &mut CommandHistory {
        &mut self.history
    }

    /// Submit a command-line entry.
    pub fn submit(&mut self, line: &str) -> Submission {
        self.submit_at(line, Utc::now())
    }

    pub fn submit_at(&mut self, line: &str, now: DateTime<Utc>) -> Submission {
        if line.trim().is_empty() {
            return Submission::Ignored;
        }

        let command = match command::parse(line) {
            Ok(command) => command,
            Err(err) => {
                tracing::debug!(input = line, error = %err, "rejected command line");
                self.transcript.push(TranscriptEntry::Input(line.to_string()));
                self.transcript.push(TranscriptEntry::Invalid);
                return Submission::Rejected(err);
            }
        };

        let outcome = command::execute(&command, self.repo.notes(), self.session.current(), now);
        tracing::debug!(
            command = %command.kind,
            success = outcome.result.success,
            effects = outcome.effects.len(),
            "executed command"
        );
        self.apply(outcome.effects);

        self.transcript.push(TranscriptEntry::Input(line.to_string()));
        self.transcript.push(TranscriptEntry::Output {
            success: outcome.result.success,
            message: outcome.result.message.clone(),
        });
        self.history.record(line);

        Submission::Executed {
            kind: command.kind,
            result: outcome.result,
        }
    }

    fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ReplaceNotes(notes) => self.repo.replace(notes),
                Effect::SetCurrent(note) => self.session.set_current(note),
                Effect::ClearTranscript => self.transcript.clear(),
            }
        }
    }

    /// Forward the editor's full text into the current note.
    pub fn update_content(&mut self, text: impl Into<String>) {
        self.session.update_content(text, Utc::now());
    }
}
