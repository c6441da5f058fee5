use crate::model::StudentRecord;
use std::path::Path;

pub fn to_json(records: &[StudentRecord]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

pub fn write_json(records: &[StudentRecord], out: &Path) -> anyhow::Result<()> {
    std::fs::write(out, to_json(records)?)?;
    Ok(())
}
