// src/normalize/date_range.rs
use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone};
use regex::Regex;

/// Inclusive span of conference days, as printed in an edition's `date` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Last second of the last conference day in `tz`.
    pub fn end_instant(&self, tz: FixedOffset) -> Option<DateTime<FixedOffset>> {
        let last = self.end.and_time(NaiveTime::from_hms_opt(23, 59, 59)?);
        tz.from_local_datetime(&last).single()
    }
}

// "June 11-15, 2025", "July 27 - August 1, 2025", "Dec 30, 2025 - Jan 3, 2026", "May 5, 2025"
static WORDY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^([a-z]+)\.?\s+(\d{1,2})(?:,?\s*(\d{4}))?(?:\s*-\s*(?:([a-z]+)\.?\s+)?(\d{1,2}))?(?:,?\s*(\d{4}))?$",
    )
    .expect("date range regex")
});

// "2025-06-11" or "2025-06-11 - 2025-06-15"
static ISO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})-(\d{2})(?:\s*-\s*(\d{4})-(\d{2})-(\d{2}))?$")
        .expect("iso range regex")
});

static ORDINAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d)(?:st|nd|rd|th)\b").expect("ordinal regex"));

const MONTHS: [&str; 12] = [
    "january", "february", "march", "april", "may", "june",
    "july", "august", "september", "october", "november", "december",
];

/// Month number from a full name or any prefix of at least three letters ("Sep", "Sept").
fn month_number(word: &str) -> Option<u32> {
    let w = word.to_ascii_lowercase();
    if w.len() < 3 {
        return None;
    }
    MONTHS
        .iter()
        .position(|m| m.starts_with(&w))
        .map(|i| i as u32 + 1)
}

/// Best-effort parse of a conference `date` string. `year_hint` (usually the edition
/// year) fills in a missing year. Returns `None` for anything it does not recognize.
pub fn parse_date_range(s: &str, year_hint: Option<i32>) -> Option<DateRange> {
    let cleaned = s.replace(['\u{2013}', '\u{2014}', '~'], "-");
    let cleaned = ORDINAL_RE.replace_all(&cleaned, "$1");
    let cleaned = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.is_empty() {
        return None;
    }

    if let Some(caps) = ISO_RE.captures(&cleaned) {
        let ymd = |y: usize| {
            NaiveDate::from_ymd_opt(
                caps[y].parse().ok()?,
                caps[y + 1].parse().ok()?,
                caps[y + 2].parse().ok()?,
            )
        };
        let start = ymd(1)?;
        let end = if caps.get(4).is_some() { ymd(4)? } else { start };
        return (end >= start).then_some(DateRange { start, end });
    }

    let caps = WORDY_RE.captures(&cleaned)?;
    let year_at = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<i32>().ok());

    let start_month = month_number(&caps[1])?;
    let start_day: u32 = caps[2].parse().ok()?;
    let end_month = match caps.get(4) {
        Some(m) => month_number(m.as_str())?,
        None => start_month,
    };
    let end_day: u32 = match caps.get(5) {
        Some(m) => m.as_str().parse().ok()?,
        None => start_day,
    };

    let (first_year, last_year) = (year_at(3), year_at(6));
    let mut start_year = first_year.or(last_year).or(year_hint)?;
    let mut end_year = last_year.or(first_year).or(year_hint)?;

    // "Dec 30 - Jan 3, 2026": the year belongs to the end, so the start is a year earlier.
    // "Dec 30, 2025 - Jan 3": the other way around.
    if (end_month, end_day) < (start_month, start_day) && start_year == end_year {
        if first_year.is_none() && last_year.is_some() {
            start_year = start_year.checked_sub(1)?;
        } else {
            end_year = end_year.checked_add(1)?;
        }
    }

    let start = NaiveDate::from_ymd_opt(start_year, start_month, start_day)?;
    let end = NaiveDate::from_ymd_opt(end_year, end_month, end_day)?;
    (end >= start).then_some(DateRange { start, end })
}
