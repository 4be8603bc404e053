use serde::{Deserialize, Serialize};

// canonical field names, matching the documented input header
pub static TIMESTAMP: &str = "Timestamp";
pub static ADDRESS: &str = "Address";
pub static ZIP: &str = "ZIP";
pub static FULL_NAME: &str = "FullName";
pub static FOO_DURATION: &str = "FooDuration";
pub static BAR_DURATION: &str = "BarDuration";
pub static TOTAL_DURATION: &str = "TotalDuration";
pub static NOTES: &str = "Notes";

/// Canonical field order, used both for positional input mapping and for the
/// output header.
pub static FIELD_NAMES: [&str; 8] = [
    TIMESTAMP,
    ADDRESS,
    ZIP,
    FULL_NAME,
    FOO_DURATION,
    BAR_DURATION,
    TOTAL_DURATION,
    NOTES,
];

/// One input row. Fields are declared in canonical order so serde-based CSV
/// output emits them positionally without renaming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Record {
    pub timestamp: String,
    pub address: String,
    pub zip: String,
    pub full_name: String,
    pub foo_duration: String,
    pub bar_duration: String,
    pub total_duration: String,
    pub notes: String,
}

impl Record {
    /// Build a record from a positional csv row. Header names are never
    /// consulted; missing trailing fields become empty strings so every field
    /// is present (possibly empty) downstream, and extra fields are ignored.
    pub fn from_positional(row: &csv::StringRecord) -> Record {
        let field = |i: usize| row.get(i).unwrap_or("").to_string();
        Record {
            timestamp: field(0),
            address: field(1),
            zip: field(2),
            full_name: field(3),
            foo_duration: field(4),
            bar_duration: field(5),
            total_duration: field(6),
            notes: field(7),
        }
    }
}
