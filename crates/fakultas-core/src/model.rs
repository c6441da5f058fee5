use serde::Serialize;
use std::fmt;

/// Faculty label derived from the strongest of the three subject scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Faculty {
    Kedokteran,
    Teknik,
    Bahasa,
    TidakDiketahui,
}

impl Faculty {
    pub const ALL: [Faculty; 4] = [
        Faculty::Kedokteran,
        Faculty::Teknik,
        Faculty::Bahasa,
        Faculty::TidakDiketahui,
    ];

    /// Label text as it is stored in `prediksi_fakultas`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Faculty::Kedokteran => "Kedokteran",
            Faculty::Teknik => "Teknik",
            Faculty::Bahasa => "Bahasa",
            Faculty::TidakDiketahui => "Tidak diketahui",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == s)
    }
}

impl fmt::Display for Faculty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    Biologi,
    Fisika,
    Inggris,
}

impl Subject {
    pub fn column(&self) -> &'static str {
        match self {
            Subject::Biologi => "biologi",
            Subject::Fisika => "fisika",
            Subject::Inggris => "inggris",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// One row of `nilai_siswa`.
///
/// `predicted_faculty` is kept as raw text so rows written by other tools
/// survive a read unchanged; use [`StudentRecord::faculty`] for the typed view.
/// The score columns are nullable in the table, so they are `None` for rows
/// that were written without them.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StudentRecord {
    pub id: i64,
    #[serde(rename = "nama_siswa")]
    pub name: String,
    #[serde(rename = "biologi")]
    pub biology: Option<i64>,
    #[serde(rename = "fisika")]
    pub physics: Option<i64>,
    #[serde(rename = "inggris")]
    pub english: Option<i64>,
    #[serde(rename = "prediksi_fakultas")]
    pub predicted_faculty: String,
}

impl StudentRecord {
    pub fn faculty(&self) -> Option<Faculty> {
        Faculty::parse(&self.predicted_faculty)
    }

    /// Form values for editing this record. Missing scores become empty
    /// fields.
    pub fn to_form(&self) -> RecordForm {
        RecordForm {
            name: self.name.clone(),
            biology: score_text(self.biology),
            physics: score_text(self.physics),
            english: score_text(self.english),
        }
    }
}

/// Text shown for a stored score; empty for NULL.
pub fn score_text(score: Option<i64>) -> String {
    score.map(|s| s.to_string()).unwrap_or_default()
}

/// Validated field values ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    pub name: String,
    pub biology: i64,
    pub physics: i64,
    pub english: i64,
    pub predicted_faculty: Faculty,
}

/// Raw text of the input form, exactly as the user typed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordForm {
    pub name: String,
    pub biology: String,
    pub physics: String,
    pub english: String,
}

impl RecordForm {
    pub fn new(
        name: impl Into<String>,
        biology: impl Into<String>,
        physics: impl Into<String>,
        english: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            biology: biology.into(),
            physics: physics.into(),
            english: english.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faculty_labels_round_trip_through_parse() {
        for f in Faculty::ALL {
            assert_eq!(Faculty::parse(f.as_str()), Some(f));
        }
        assert_eq!(Faculty::parse("kedokteran"), None);
        assert_eq!(Faculty::TidakDiketahui.to_string(), "Tidak diketahui");
    }

    #[test]
    fn record_serializes_with_column_names() {
        let rec = StudentRecord {
            id: 7,
            name: "Ani".into(),
            biology: Some(90),
            physics: Some(70),
            english: Some(60),
            predicted_faculty: "Kedokteran".into(),
        };
        let v = serde_json::to_value(&rec).unwrap();
        assert_eq!(v["nama_siswa"], "Ani");
        assert_eq!(v["biologi"], 90);
        assert_eq!(v["prediksi_fakultas"], "Kedokteran");
        assert_eq!(rec.faculty(), Some(Faculty::Kedokteran));
    }

    #[test]
    fn to_form_renders_scores_as_text() {
        let rec = StudentRecord {
            id: 1,
            name: "Budi".into(),
            biology: Some(-3),
            physics: Some(0),
            english: Some(100),
            predicted_faculty: "Bahasa".into(),
        };
        assert_eq!(rec.to_form(), RecordForm::new("Budi", "-3", "0", "100"));
    }

    #[test]
    fn missing_scores_become_empty_fields() {
        let rec = StudentRecord {
            id: 2,
            name: "Lama".into(),
            biology: None,
            physics: Some(5),
            english: None,
            predicted_faculty: String::new(),
        };
        assert_eq!(rec.to_form(), RecordForm::new("Lama", "", "5", ""));
        let v = serde_json::to_value(&rec).unwrap();
        assert!(v["biologi"].is_null());
    }
}
