#[cfg(test)]
mod tests;

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};

use crate::models::game::AppId;
use crate::models::steam::{StoreAppDetails, StoreAppDetailsResponse};

/// Parse a raw store details payload, returning None unless steam reported success for `id`
pub fn parse_store_data(id: AppId, raw: &str) -> serde_json::Result<Option<StoreAppDetails>> {
    let mut res: StoreAppDetailsResponse = serde_json::from_str(raw)?;

    Ok(
        res.results
            .remove(&id.to_string())
            .filter(|entry| entry.success)
            .and_then(|entry| entry.data)
    )
}

const EXACT_DATE_FORMATS: [&str; 4] = ["%d %b, %Y", "%b %d, %Y", "%d %B, %Y", "%B %d, %Y"];

fn midnight(date: NaiveDate) -> Option<DateTime<Utc>> {
    Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?))
}

fn first_of_month(year: i32, month: u32) -> Option<DateTime<Utc>> {
    // Month 13 rolls over into the next year
    let (year, month) = if month > 12 { (year.checked_add(1)?, month - 12) } else { (year, month) };
    midnight(NaiveDate::from_ymd_opt(year, month, 1)?)
}

/// Estimate when a game is (or will certainly be) released, given steam's free-text date.
///
/// Vague dates resolve to the end of the period they name, e.g. "Q2 2025" gives 1 Jul 2025.
pub fn parse_release_date(date: &str) -> Option<DateTime<Utc>> {
    let date = date.trim();

    for fmt in EXACT_DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(date, fmt) {
            return midnight(d);
        }
    }

    // Month and year, e.g. "Apr 2025" or "April 2025"
    for fmt in ["%d %b %Y", "%d %B %Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(&format!("1 {}", date), fmt) {
            return first_of_month(d.year(), d.month() + 1);
        }
    }

    let parts: Vec<&str> = date.split_whitespace().collect();
    match parts.as_slice() {
        [quarter, year] if quarter.starts_with('Q') => {
            let q: u32 = quarter[1..].parse().ok().filter(|q| (1..=4).contains(q))?;
            first_of_month(year.parse().ok()?, q * 3 + 1)
        }
        [year] => {
            let year: i32 = year.parse().ok()?;
            first_of_month(year.checked_add(1)?, 1)
        }
        _ => None,
    }
}
