use chrono::{LocalResult, NaiveDateTime, SecondsFormat, TimeZone};
use chrono_tz::US::{Eastern, Pacific};

use super::ParseFailure;
use crate::record;

/// Expected format of raw timestamps, e.g. `4/1/11 11:00:00 AM`. chrono
/// accepts unpadded month, day, and hour here; two-digit years window into
/// the 2000s for values below 69.
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%y %I:%M:%S %p";

/// Convert a zone-less US/Pacific wall-clock timestamp into the equivalent
/// US/Eastern instant, formatted RFC 3339 with second precision, e.g.
/// `2011-04-01T14:00:00-04:00`.
///
/// The offset applied is the one in force on the specific date, so dates on
/// either side of a DST transition come out with different offsets.
pub fn to_eastern_rfc3339(timestamp: &str) -> Result<String, ParseFailure> {
    let naive = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT)
        .map_err(|_| bad_timestamp())?;
    let pacific = match Pacific.from_local_datetime(&naive) {
        LocalResult::Single(instant) => instant,
        // fall-back repeats an hour; resolve to the standard-time reading
        LocalResult::Ambiguous(_, standard) => standard,
        // spring-forward gap: this wall-clock time never happened
        LocalResult::None => return Err(bad_timestamp()),
    };
    Ok(pacific
        .with_timezone(&Eastern)
        .to_rfc3339_opts(SecondsFormat::Secs, false))
}

fn bad_timestamp() -> ParseFailure {
    ParseFailure::new(
        record::TIMESTAMP,
        format!("must be a valid date in the format {TIMESTAMP_FORMAT}"),
    )
}
