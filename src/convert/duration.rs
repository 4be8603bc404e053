use std::sync::OnceLock;

use regex::Regex;

use super::ParseFailure;
use crate::record;

static DURATION_RE: OnceLock<Regex> = OnceLock::new();

// hours may run past two digits ("50:24:10.221"); seconds may carry a fraction
fn duration_re() -> &'static Regex {
    DURATION_RE.get_or_init(|| Regex::new(r"^(\d+):(\d+):(\d+(?:\.\d+)?)$").unwrap())
}

/// Convert an `H:MM:SS.fff` duration string into decimal seconds, formatted
/// with exactly three decimal places.
///
/// `field` names the column being converted so a failure can be traced back
/// to it.
pub fn duration_to_seconds(duration: &str, field: &'static str) -> Result<String, ParseFailure> {
    let caps = duration_re().captures(duration).ok_or_else(|| {
        ParseFailure::new(field, "must be a duration in the format H:MM:SS.fff")
    })?;
    let hours = numeric(&caps[1], field)?;
    let minutes = numeric(&caps[2], field)?;
    let seconds = numeric(&caps[3], field)?;
    let total = hours * 3600.0 + minutes * 60.0 + seconds;
    Ok(format!("{total:.3}"))
}

/// Sum two already-normalized decimal-second strings, formatted with exactly
/// three decimal places.
pub fn sum_durations(foo_seconds: &str, bar_seconds: &str) -> Result<String, ParseFailure> {
    let total = numeric(foo_seconds, record::TOTAL_DURATION)?
        + numeric(bar_seconds, record::TOTAL_DURATION)?;
    Ok(format!("{total:.3}"))
}

fn numeric(part: &str, field: &'static str) -> Result<f64, ParseFailure> {
    part.parse()
        .map_err(|_| ParseFailure::new(field, format!("component [{part}] is not numeric")))
}
