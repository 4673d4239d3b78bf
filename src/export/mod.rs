pub mod csv;
pub mod json;

pub use self::csv::write_csv;
pub use self::json::write_json;

use chrono::Utc;

/// Timestamped default file name, e.g. `snyk_ignores_20240115T103000Z.csv`.
pub fn default_file_name(extension: &str) -> String {
    format!(
        "snyk_ignores_{}.{}",
        Utc::now().format("%Y%m%dT%H%M%SZ"),
        extension
    )
}
