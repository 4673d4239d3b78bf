use std::path::Path;

use crate::error::{Error, Result};
use crate::models::IgnoreRecord;

/// Write one row per record under the fixed column schema. Refuses to
/// produce a header-only file: an empty input is an export failure.
pub fn write_csv(records: &[IgnoreRecord], path: &Path) -> Result<()> {
    if records.is_empty() {
        return Err(Error::NoRecords);
    }

    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}
