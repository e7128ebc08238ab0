//! Notes model
//!
//! An in-memory, append-ordered list of free-text notes attached to the claim.
//!
//! - Notes are only created by `NoteAdded` with non-blank content and only
//!   destroyed by `NoteDeleted`; they are never mutated in place.
//! - Ids come from a counter owned by the store, so they stay unique for the
//!   lifetime of the store even after deletions.
//! - `NoteEditRequested` is accepted but changes nothing.

use std::fmt;

use chrono::NaiveDateTime;

use crate::domain::{claim::SeededNote, text::format_note_timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteId(u64);

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "note-{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    id: NoteId,
    content: String,
    created_at: String,
}

impl Note {
    pub fn id(&self) -> NoteId {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Display timestamp captured when the note was added
    pub fn created_at(&self) -> &str {
        &self.created_at
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The reviewer submitted `content`; `at` is the local time of submission
    NoteAdded { content: String, at: NaiveDateTime },
    NoteDeleted { id: NoteId },
    NoteEditRequested { id: NoteId },
}

/// What an update did to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Added(NoteId),
    Deleted(Note),
    EditRequested(NoteId),
    Unchanged,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notes {
    notes: Vec<Note>,
    next_id: u64,
}

impl Notes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding notes that already exist, in the given order
    pub fn with_seeded<'a>(seeded: impl IntoIterator<Item = &'a SeededNote>) -> Self {
        let mut notes = Self::new();
        for note in seeded {
            notes.push(note.content.clone(), note.created_at.clone());
        }
        notes
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Note> {
        self.notes.get(index)
    }

    pub fn find(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn position(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|note| note.id == id)
    }

    fn push(&mut self, content: String, created_at: String) -> NoteId {
        let id = NoteId(self.next_id);
        self.next_id += 1;
        self.notes.push(Note {
            id,
            content,
            created_at,
        });
        id
    }

    pub fn update(&mut self, message: Message) -> Change {
        match message {
            Message::NoteAdded { content, at } => {
                let content = content.trim();
                if content.is_empty() {
                    return Change::Unchanged;
                }
                let id = self.push(content.to_string(), format_note_timestamp(&at));
                Change::Added(id)
            }
            Message::NoteDeleted { id } => match self.position(id) {
                Some(index) => Change::Deleted(self.notes.remove(index)),
                None => Change::Unchanged,
            },
            Message::NoteEditRequested { id } => {
                if self.find(id).is_some() {
                    Change::EditRequested(id)
                } else {
                    Change::Unchanged
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 4)
            .and_then(|d| d.and_hms_opt(10, 7, 0))
            .expect("valid datetime")
    }

    fn added(content: &str) -> Message {
        Message::NoteAdded {
            content: content.to_string(),
            at: at(),
        }
    }

    fn contents(notes: &Notes) -> Vec<&str> {
        notes.notes().iter().map(Note::content).collect()
    }

    #[test]
    fn test_blank_content_is_ignored() {
        let mut notes = Notes::new();
        assert_eq!(notes.update(added("")), Change::Unchanged);
        assert_eq!(notes.update(added("   ")), Change::Unchanged);
        assert_eq!(notes.update(added("\n\t ")), Change::Unchanged);
        assert!(notes.is_empty());
    }

    #[test]
    fn test_note_added() {
        let mut notes = Notes::new();
        let change = notes.update(added("Hello"));

        let Change::Added(id) = change else {
            panic!("expected Added, got {change:?}");
        };
        assert_eq!(notes.len(), 1);
        let note = notes.find(id).expect("note exists");
        assert_eq!(note.content(), "Hello");
        assert_eq!(note.created_at(), "Mar 4, 10:07 AM");
    }

    #[test]
    fn test_content_is_trimmed() {
        let mut notes = Notes::new();
        notes.update(added("  Call the carrier  "));
        assert_eq!(contents(&notes), vec!["Call the carrier"]);
    }

    #[test]
    fn test_added_notes_keep_append_order_and_unique_ids() {
        let mut notes = Notes::new();
        for content in ["first", "second", "third"] {
            notes.update(added(content));
        }

        assert_eq!(contents(&notes), vec!["first", "second", "third"]);
        let ids: HashSet<NoteId> = notes.notes().iter().map(Note::id).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_note_deleted_removes_only_that_note() {
        let mut notes = Notes::new();
        notes.update(added("a"));
        let Change::Added(middle) = notes.update(added("b")) else {
            panic!("expected Added");
        };
        notes.update(added("c"));

        let change = notes.update(Message::NoteDeleted { id: middle });

        assert!(matches!(change, Change::Deleted(ref note) if note.content() == "b"));
        assert_eq!(contents(&notes), vec!["a", "c"]);
    }

    #[test]
    fn test_deleting_unknown_id_is_ignored() {
        let mut notes = Notes::new();
        let Change::Added(id) = notes.update(added("a")) else {
            panic!("expected Added");
        };
        notes.update(Message::NoteDeleted { id });

        let before = notes.clone();
        assert_eq!(notes.update(Message::NoteDeleted { id }), Change::Unchanged);
        assert_eq!(notes, before);
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let mut notes = Notes::new();
        let Change::Added(first) = notes.update(added("a")) else {
            panic!("expected Added");
        };
        notes.update(Message::NoteDeleted { id: first });
        let Change::Added(second) = notes.update(added("b")) else {
            panic!("expected Added");
        };
        assert_ne!(first, second);
    }

    #[test]
    fn test_edit_requested_changes_nothing() {
        let mut notes = Notes::new();
        let Change::Added(id) = notes.update(added("keep me")) else {
            panic!("expected Added");
        };
        let before = notes.clone();

        assert_eq!(
            notes.update(Message::NoteEditRequested { id }),
            Change::EditRequested(id)
        );
        assert_eq!(notes, before);
    }

    #[test]
    fn test_with_seeded_keeps_given_timestamps() {
        let seeded = vec![SeededNote {
            content: "Test Notes".to_string(),
            created_at: "Mar 3, 3:58 PM".to_string(),
        }];
        let notes = Notes::with_seeded(&seeded);

        assert_eq!(notes.len(), 1);
        assert_eq!(notes.get(0).map(Note::created_at), Some("Mar 3, 3:58 PM"));
    }

    #[test]
    fn test_note_id_display() {
        let mut notes = Notes::new();
        notes.update(added("a"));
        let id = notes.get(0).map(Note::id).expect("note exists");
        assert_eq!(id.to_string(), "note-0");
    }
}
