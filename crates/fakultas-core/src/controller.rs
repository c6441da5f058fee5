//! Validation, prediction and persistence for the record form.
//!
//! The controller holds no UI state. The currently selected record id is
//! passed in by the caller on every call, and every successful write returns
//! the complete re-listed table so the caller can redraw and clear its
//! selection.

use crate::errors::{Action, InputError, RecordError};
use crate::model::{Faculty, NewRecord, RecordForm, StudentRecord, Subject};
use crate::predict::predict;
use crate::storage::Store;

/// Result of a write plus the full table as it stands afterwards.
#[derive(Debug, Clone)]
pub struct Outcome<T> {
    pub value: T,
    pub records: Vec<StudentRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Created {
    pub id: i64,
    pub prediction: Faculty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Updated {
    pub id: i64,
    pub prediction: Faculty,
    /// 0 when the id no longer exists.
    pub affected: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deleted {
    pub id: i64,
    pub affected: usize,
}

#[derive(Clone)]
pub struct RecordController {
    store: Store,
}

impl RecordController {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn ensure_schema(&self) -> Result<(), RecordError> {
        self.store.init_schema().map_err(RecordError::StorageUnavailable)
    }

    pub fn list_all(&self) -> Result<Vec<StudentRecord>, RecordError> {
        self.store.list_all().map_err(RecordError::StorageUnavailable)
    }

    /// Loads a row into form values for editing.
    pub fn select(&self, id: i64) -> Result<RecordForm, RecordError> {
        match self.store.get(id).map_err(RecordError::StorageUnavailable)? {
            Some(rec) => Ok(rec.to_form()),
            None => Err(RecordError::NoSelection(Action::Select)),
        }
    }

    pub fn create(&self, form: &RecordForm) -> Result<Outcome<Created>, RecordError> {
        let rec = validate(form)?;
        let id = self
            .store
            .insert(&rec)
            .map_err(RecordError::StorageUnavailable)?;

        tracing::info!(
            event = "record_created",
            id,
            prediction = %rec.predicted_faculty
        );

        self.refreshed(Created {
            id,
            prediction: rec.predicted_faculty,
        })
    }

    /// The prediction is always recomputed from the submitted scores, never
    /// carried over from the stored row.
    pub fn update(
        &self,
        selected: Option<i64>,
        form: &RecordForm,
    ) -> Result<Outcome<Updated>, RecordError> {
        let id = selected.ok_or(RecordError::NoSelection(Action::Update))?;
        let rec = validate(form)?;
        let affected = self
            .store
            .update(id, &rec)
            .map_err(RecordError::StorageUnavailable)?;

        if affected == 0 {
            tracing::warn!(event = "update_missing_id", id);
        } else {
            tracing::info!(
                event = "record_updated",
                id,
                prediction = %rec.predicted_faculty
            );
        }

        self.refreshed(Updated {
            id,
            prediction: rec.predicted_faculty,
            affected,
        })
    }

    pub fn delete(&self, selected: Option<i64>) -> Result<Outcome<Deleted>, RecordError> {
        let id = selected.ok_or(RecordError::NoSelection(Action::Delete))?;
        let affected = self
            .store
            .delete(id)
            .map_err(RecordError::StorageUnavailable)?;

        if affected == 0 {
            tracing::warn!(event = "delete_missing_id", id);
        } else {
            tracing::info!(event = "record_deleted", id);
        }

        self.refreshed(Deleted { id, affected })
    }

    fn refreshed<T>(&self, value: T) -> Result<Outcome<T>, RecordError> {
        let records = self.list_all()?;
        Ok(Outcome { value, records })
    }
}

/// Parses the scores (biologi, fisika, inggris in that order), then checks the
/// name, then derives the prediction.
pub fn validate(form: &RecordForm) -> Result<NewRecord, InputError> {
    let biology = parse_score(Subject::Biologi, &form.biology)?;
    let physics = parse_score(Subject::Fisika, &form.physics)?;
    let english = parse_score(Subject::Inggris, &form.english)?;

    if form.name.is_empty() {
        return Err(InputError::EmptyName);
    }

    Ok(NewRecord {
        name: form.name.clone(),
        biology,
        physics,
        english,
        predicted_faculty: predict(biology, physics, english),
    })
}

/// Accepts surrounding whitespace and an optional sign.
pub fn parse_score(subject: Subject, raw: &str) -> Result<i64, InputError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| InputError::NotAnInteger {
            subject,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_score_trims_and_accepts_sign() {
        assert_eq!(parse_score(Subject::Biologi, " 90 "), Ok(90));
        assert_eq!(parse_score(Subject::Biologi, "+5"), Ok(5));
        assert_eq!(parse_score(Subject::Biologi, "-12"), Ok(-12));
    }

    #[test]
    fn parse_score_rejects_non_integers() {
        for raw in ["", "  ", "9.5", "abc", "1e3", "99999999999999999999"] {
            let err = parse_score(Subject::Inggris, raw).unwrap_err();
            assert_eq!(
                err,
                InputError::NotAnInteger {
                    subject: Subject::Inggris,
                    value: raw.to_string()
                }
            );
        }
    }

    #[test]
    fn scores_are_checked_before_name() {
        let form = RecordForm::new("", "x", "1", "1");
        assert!(matches!(
            validate(&form),
            Err(InputError::NotAnInteger {
                subject: Subject::Biologi,
                ..
            })
        ));

        let form = RecordForm::new("", "1", "1", "1");
        assert_eq!(validate(&form), Err(InputError::EmptyName));
    }

    #[test]
    fn first_bad_score_is_reported() {
        let form = RecordForm::new("Ani", "1", "satu", "dua");
        assert!(matches!(
            validate(&form),
            Err(InputError::NotAnInteger {
                subject: Subject::Fisika,
                ..
            })
        ));
    }

    #[test]
    fn validate_derives_prediction() {
        let rec = validate(&RecordForm::new("Ani", "60", "90", "70")).unwrap();
        assert_eq!(rec.predicted_faculty, Faculty::Teknik);
        assert_eq!((rec.biology, rec.physics, rec.english), (60, 90, 70));
    }

    #[test]
    fn whitespace_name_is_not_empty_to_the_controller() {
        let rec = validate(&RecordForm::new(" ", "1", "2", "3")).unwrap();
        assert_eq!(rec.name, " ");
    }
}
