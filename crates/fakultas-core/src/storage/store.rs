use crate::model::{NewRecord, StudentRecord};
use anyhow::Context;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

const SELECT_COLUMNS: &str =
    "SELECT id, nama_siswa, biologi, fisika, inggris, prediksi_fakultas FROM nilai_siswa";

/// Handle to the `nilai_siswa` table.
///
/// Every method runs exactly one statement under the connection lock and
/// autocommits it. Nothing spans calls.
#[derive(Clone)]
pub struct Store {
    conn: Arc<Mutex<Connection>>,
}

pub struct StoreStats {
    pub records: Option<u64>,
    pub last_id: Option<i64>,
    pub sqlite_version: String,
}

impl Store {
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("failed to open sqlite db {}", path.display()))?;
        tracing::debug!(event = "store_open", path = %path.display());
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn memory() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory().context("failed to open in-memory sqlite db")?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn conn(&self) -> anyhow::Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow::anyhow!("sqlite connection lock poisoned"))
    }

    /// Creates the table when absent. Safe on every startup.
    pub fn init_schema(&self) -> anyhow::Result<()> {
        let conn = self.conn()?;
        conn.execute_batch(crate::storage::schema::DDL)
            .context("failed to create nilai_siswa table")?;
        Ok(())
    }

    /// All rows in the engine's natural order (rowid order for this table).
    pub fn list_all(&self) -> anyhow::Result<Vec<StudentRecord>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(SELECT_COLUMNS)?;
        let rows = stmt.query_map([], row_to_record)?;

        let mut records = Vec::new();
        for r in rows {
            records.push(r?);
        }
        Ok(records)
    }

    pub fn get(&self, id: i64) -> anyhow::Result<Option<StudentRecord>> {
        let conn = self.conn()?;
        let rec = conn
            .query_row(
                &format!("{SELECT_COLUMNS} WHERE id = ?1"),
                params![id],
                row_to_record,
            )
            .optional()?;
        Ok(rec)
    }

    pub fn insert(&self, rec: &NewRecord) -> anyhow::Result<i64> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO nilai_siswa(nama_siswa, biologi, fisika, inggris, prediksi_fakultas)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                rec.name,
                rec.biology,
                rec.physics,
                rec.english,
                rec.predicted_faculty.as_str()
            ],
        )
        .context("failed to insert into nilai_siswa")?;
        Ok(conn.last_insert_rowid())
    }

    /// Overwrites every mutable field of row `id`. Returns the number of rows
    /// touched; a missing id is a no-op, not an error.
    pub fn update(&self, id: i64, rec: &NewRecord) -> anyhow::Result<usize> {
        let conn = self.conn()?;
        let n = conn
            .execute(
                "UPDATE nilai_siswa
                 SET nama_siswa=?1, biologi=?2, fisika=?3, inggris=?4, prediksi_fakultas=?5
                 WHERE id=?6",
                params![
                    rec.name,
                    rec.biology,
                    rec.physics,
                    rec.english,
                    rec.predicted_faculty.as_str(),
                    id
                ],
            )
            .context("failed to update nilai_siswa")?;
        Ok(n)
    }

    /// Same no-op-if-missing contract as [`Store::update`].
    pub fn delete(&self, id: i64) -> anyhow::Result<usize> {
        let conn = self.conn()?;
        let n = conn
            .execute("DELETE FROM nilai_siswa WHERE id=?1", params![id])
            .context("failed to delete from nilai_siswa")?;
        Ok(n)
    }

    /// Row count and highest id; tolerates a missing table.
    pub fn stats_best_effort(&self) -> anyhow::Result<StoreStats> {
        let conn = self.conn()?;

        let records: Option<u64> = conn
            .query_row("SELECT COUNT(*) FROM nilai_siswa", [], |r| {
                r.get::<_, i64>(0).map(|x| x as u64)
            })
            .ok();

        let last_id: Option<i64> = conn
            .query_row("SELECT MAX(id) FROM nilai_siswa", [], |r| {
                r.get::<_, Option<i64>>(0)
            })
            .ok()
            .flatten();

        Ok(StoreStats {
            records,
            last_id,
            sqlite_version: rusqlite::version().to_string(),
        })
    }
}

fn row_to_record(row: &rusqlite::Row<'_>) -> rusqlite::Result<StudentRecord> {
    Ok(StudentRecord {
        id: row.get(0)?,
        name: row.get(1)?,
        biology: row.get::<_, Option<i64>>(2)?,
        physics: row.get::<_, Option<i64>>(3)?,
        english: row.get::<_, Option<i64>>(4)?,
        predicted_faculty: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
    })
}
