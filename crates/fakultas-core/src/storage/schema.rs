/// Column order is part of the on-disk format shared with existing databases.
pub const DDL: &str = r#"
CREATE TABLE IF NOT EXISTS nilai_siswa (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  nama_siswa TEXT NOT NULL,
  biologi INTEGER,
  fisika INTEGER,
  inggris INTEGER,
  prediksi_fakultas TEXT
);
"#;
