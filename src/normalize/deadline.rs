// src/normalize/deadline.rs
use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone};
use regex::Regex;

use super::timezone::parse_timezone;

// date, optional time (`T` or spaces), then whatever trails (usually a timezone)
static DEADLINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})(?:(?:T|\s+)(\d{1,2}):(\d{2})(?::(\d{2}))?)?\s*(.*)$")
        .expect("deadline regex")
});

/// Parse a timeline deadline such as `2025-03-01 23:59:59` or `2025-03-01 23:59 AoE`.
///
/// The result keeps the offset it was read in. A trailing timezone overrides
/// `edition_tz`; trailing text that is not a timezone is ignored. Date-only values
/// mean the last second of that day. `TBD` and anything unreadable give `None`.
pub fn parse_deadline(raw: &str, edition_tz: FixedOffset) -> Option<DateTime<FixedOffset>> {
    let t = raw.trim();
    if t.is_empty() || t.eq_ignore_ascii_case("tbd") {
        return None;
    }

    let caps = DEADLINE_RE.captures(t)?;
    let num = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());

    let year: i32 = caps[1].parse().ok()?;
    let date = NaiveDate::from_ymd_opt(year, num(2)?, num(3)?)?;
    let time = match num(4) {
        Some(h) => NaiveTime::from_hms_opt(h, num(5)?, num(6).unwrap_or(0))?,
        None => NaiveTime::from_hms_opt(23, 59, 59)?,
    };

    let trailing = caps.get(7).map_or("", |m| m.as_str()).trim();
    let tz = if trailing.is_empty() {
        edition_tz
    } else {
        match parse_timezone(trailing) {
            Some(tz) => tz,
            None => {
                logd!("ignoring trailing {trailing:?} in deadline {raw:?}");
                edition_tz
            }
        }
    };

    tz.from_local_datetime(&date.and_time(time)).single()
}
