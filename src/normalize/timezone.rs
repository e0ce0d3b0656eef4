// src/normalize/timezone.rs
use std::sync::LazyLock;

use chrono::{FixedOffset, Offset, Utc};
use regex::Regex;

const HOUR: i32 = 3600;
const MAX_OFFSET_SECS: i32 = 14 * HOUR;
const AOE_WEST_SECS: i32 = 12 * HOUR;

// Applied to the upper-cased, whitespace-free form: "UTC+8", "GMT-05:30", "+0800".
static OFFSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:UTC|GMT)?([+-])(\d{1,2})(?::?(\d{2}))?$").expect("offset regex")
});

/// Anywhere on Earth, UTC-12.
pub fn aoe() -> FixedOffset {
    FixedOffset::west_opt(AOE_WEST_SECS).unwrap_or_else(|| Utc.fix())
}

/// Parse the dataset's timezone notations into a fixed offset.
///
/// Accepts `AoE`, `UTC`, `UTC±H[H][[:]MM]`, `GMT±…`, a bare `±H` and a few common
/// abbreviations. `CST` is China Standard Time (UTC+8), which is what the dataset means by it.
pub fn parse_timezone(s: &str) -> Option<FixedOffset> {
    let compact: String = s.split_whitespace().collect::<String>().to_ascii_uppercase();
    if compact.is_empty() {
        return None;
    }
    if let Some(secs) = named_offset(&compact) {
        return FixedOffset::east_opt(secs);
    }

    let caps = OFFSET_RE.captures(&compact)?;
    let sign = if &caps[1] == "-" { -1 } else { 1 };
    let hours: i32 = caps[2].parse().ok()?;
    let minutes: i32 = match caps.get(3) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    if minutes >= 60 {
        return None;
    }

    let secs = sign * (hours * HOUR + minutes * 60);
    if secs.abs() > MAX_OFFSET_SECS {
        return None;
    }
    FixedOffset::east_opt(secs)
}

fn named_offset(upper: &str) -> Option<i32> {
    let secs = match upper {
        "AOE" => -AOE_WEST_SECS,
        "UTC" | "GMT" | "UT" | "Z" => 0,
        "PST" => -8 * HOUR,
        "PDT" => -7 * HOUR,
        "EST" => -5 * HOUR,
        "EDT" => -4 * HOUR,
        "CET" | "BST" => HOUR,
        "CEST" => 2 * HOUR,
        "IST" => 5 * HOUR + 30 * 60,
        "CST" => 8 * HOUR,
        "JST" | "KST" => 9 * HOUR,
        _ => return None,
    };
    Some(secs)
}

/// `UTC`, `UTC+8`, `UTC-12`, `UTC+5:30`.
pub fn format_offset(offset: FixedOffset) -> String {
    let secs = offset.local_minus_utc();
    if secs == 0 {
        return "UTC".to_string();
    }
    let sign = if secs < 0 { '-' } else { '+' };
    let abs = secs.abs();
    let (h, m) = (abs / HOUR, (abs % HOUR) / 60);
    if m == 0 {
        format!("UTC{sign}{h}")
    } else {
        format!("UTC{sign}{h}:{m:02}")
    }
}

/// Like [`format_offset`] but says `AoE` for UTC-12, as the dataset does.
pub fn offset_label(offset: FixedOffset) -> String {
    if offset == aoe() {
        "AoE".to_string()
    } else {
        format_offset(offset)
    }
}
