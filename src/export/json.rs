use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::IgnoreRecord;

/// Pretty-printed dump of the records for archival and debugging.
pub fn write_json(records: &[IgnoreRecord], path: &Path) -> Result<()> {
    if records.is_empty() {
        return Err(Error::NoRecords);
    }

    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), records)?;

    Ok(())
}
