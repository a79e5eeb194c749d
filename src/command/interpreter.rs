use chrono::{DateTime, Local, Utc};

use crate::note::{Note, NoteId, UNTITLED};
use crate::repo::position_by_name;

use super::{Command, CommandKind};

pub const HELP_TEXT: &str = "Available commands:
:save [name] - Save current note with optional name
:open <name> - Open an existing note
:delete <name> - Delete a note
:list - List all saved notes
:new [name] - Create a new note
:clear - Clear the terminal
:help - Show this help message";

/// User-visible outcome of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub success: bool,
    pub message: String,
}

impl CommandResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// A state change requested by a command, applied by the caller in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Replace the saved-note list (and persist it).
    ReplaceNotes(Vec<Note>),
    /// Replace the note bound to the editor.
    SetCurrent(Option<Note>),
    /// Empty the transcript.
    ClearTranscript,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub result: CommandResult,
    pub effects: Vec<Effect>,
}

impl Outcome {
    fn message(result: CommandResult) -> Self {
        Self {
            result,
            effects: Vec::new(),
        }
    }

    fn with_effects(result: CommandResult, effects: Vec<Effect>) -> Self {
        Self { result, effects }
    }
}

/// Execute `command` against the saved notes and the current note.
///
/// Pure: nothing is mutated here. Failures carry no effects.
pub fn execute(
    command: &Command,
    notes: &[Note],
    current: Option<&Note>,
    now: DateTime<Utc>,
) -> Outcome {
    match command.kind {
        CommandKind::Help => Outcome::message(CommandResult::ok(HELP_TEXT)),
        CommandKind::Save => save(command, notes, current, now),
        CommandKind::Open => open(command, notes),
        CommandKind::Delete => delete(command, notes, current),
        CommandKind::List => Outcome::message(list(notes)),
        CommandKind::New => {
            let name = command.joined_args().unwrap_or_else(|| UNTITLED.to_string());
            let note = Note::new(name.clone(), now);
            Outcome::with_effects(
                CommandResult::ok(format!("Created new note \"{name}\"")),
                vec![Effect::SetCurrent(Some(note))],
            )
        }
        CommandKind::Clear => Outcome::with_effects(
            CommandResult::ok("Terminal cleared"),
            vec![Effect::ClearTranscript],
        ),
    }
}

fn save(command: &Command, notes: &[Note], current: Option<&Note>, now: DateTime<Utc>) -> Outcome {
    let Some(current) = current else {
        return Outcome::message(CommandResult::fail("No note to save"));
    };

    let name = command
        .joined_args()
        .or_else(|| Some(current.name.clone()).filter(|name| !name.is_empty()))
        .unwrap_or_else(|| UNTITLED.to_string());

    let mut next = notes.to_vec();
    let stored = match position_by_name(notes, &name) {
        // Overwrite keeps the stored note's identity and creation time.
        Some(index) => {
            let target = &mut next[index];
            target.content.clone_from(&current.content);
            target.rename(name.clone(), now);
            target.clone()
        }
        None => {
            let mut fresh = current.clone();
            if notes.iter().any(|note| note.id == fresh.id) {
                fresh.id = NoteId::generate();
                fresh.created_at = now;
            }
            fresh.rename(name.clone(), now);
            next.push(fresh.clone());
            fresh
        }
    };

    Outcome::with_effects(
        CommandResult::ok(format!("Note \"{name}\" saved successfully")),
        vec![Effect::ReplaceNotes(next), Effect::SetCurrent(Some(stored))],
    )
}

fn open(command: &Command, notes: &[Note]) -> Outcome {
    let Some(name) = command.joined_args() else {
        return Outcome::message(CommandResult::fail("Usage: :open <note_name>"));
    };
    let Some(index) = position_by_name(notes, &name) else {
        return Outcome::message(CommandResult::fail(format!("Note \"{name}\" not found")));
    };
    Outcome::with_effects(
        CommandResult::ok(format!("Opened note \"{name}\"")),
        vec![Effect::SetCurrent(Some(notes[index].clone()))],
    )
}

fn delete(command: &Command, notes: &[Note], current: Option<&Note>) -> Outcome {
    let Some(name) = command.joined_args() else {
        return Outcome::message(CommandResult::fail("Usage: :delete <note_name>"));
    };
    let Some(index) = position_by_name(notes, &name) else {
        return Outcome::message(CommandResult::fail(format!("Note \"{name}\" not found")));
    };

    let mut remaining = notes.to_vec();
    remaining.remove(index);

    let mut effects = vec![Effect::ReplaceNotes(remaining)];
    if current.is_some_and(|note| note.name == name) {
        effects.push(Effect::SetCurrent(None));
    }
    Outcome::with_effects(CommandResult::ok(format!("Note \"{name}\" deleted")), effects)
}

fn list(notes: &[Note]) -> CommandResult {
    if notes.is_empty() {
        return CommandResult::ok("No saved notes");
    }
    let lines: Vec<String> = notes
        .iter()
        .map(|note| format!("{} ({})", note.name, short_date(&note.updated_at)))
        .collect();
    CommandResult::ok(format!("Saved notes:\n{}", lines.join("\n")))
}

/// Local calendar date as `M/D/YYYY`.
pub fn short_date(timestamp: &DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%-m/%-d/%Y")
        .to_string()
}
