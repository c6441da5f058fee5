//! Error types surfaced by the record controller.
//!
//! Input and selection errors are recoverable and leave the store untouched.
//! Storage errors carry the underlying cause and are treated as fatal by
//! callers.

use crate::model::Subject;
use std::fmt;
use thiserror::Error;

/// Why a form was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("nilai {subject} harus berupa bilangan bulat (got {value:?})")]
    NotAnInteger { subject: Subject, value: String },

    #[error("nama siswa tidak boleh kosong")]
    EmptyName,
}

/// The operation that needed a selected record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Select,
    Update,
    Delete,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Select => "select",
            Action::Update => "update",
            Action::Delete => "delete",
        })
    }
}

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("input tidak valid: {0}")]
    InvalidInput(#[from] InputError),

    #[error("no record selected for {0}")]
    NoSelection(Action),

    #[error("storage unavailable: {0:#}")]
    StorageUnavailable(anyhow::Error),
}

impl RecordError {
    /// Recoverable errors are reported to the user; everything else is fatal.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            RecordError::InvalidInput(_) | RecordError::NoSelection(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_field() {
        let e = RecordError::from(InputError::NotAnInteger {
            subject: Subject::Fisika,
            value: "abc".into(),
        });
        let msg = e.to_string();
        assert!(msg.contains("fisika"), "{msg}");
        assert!(msg.contains("\"abc\""), "{msg}");
        assert!(e.is_recoverable());
    }

    #[test]
    fn storage_errors_are_fatal() {
        let e = RecordError::StorageUnavailable(anyhow::anyhow!("disk gone"));
        assert!(!e.is_recoverable());
        assert!(e.to_string().contains("disk gone"));
        assert_eq!(
            RecordError::NoSelection(Action::Delete).to_string(),
            "no record selected for delete"
        );
    }
}
