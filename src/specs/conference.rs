// src/specs/conference.rs
//! Document model for one ccf-deadlines conference file.
//!
//! Purpose:
//! - Model `conference/<sub>/<name>.yml` as `Series` → `Edition` → `TimelineItem`.
//! - Accept both document shapes seen upstream: a list of series, or a single series mapping.
//!
//! Tolerance:
//! - Every field is optional. Numbers where strings are expected are stringified;
//!   other unexpected shapes become `None`. `null` lists become empty.
//! - `year` must be an integer; anything else counts as missing.
//! - A list entry that still fails to deserialize is skipped (debug log), not fatal.

use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

use crate::config::options::Target;
use crate::core::net::Source;
use crate::error::Result;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Series {
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub sub: Option<String>,
    #[serde(deserialize_with = "lenient_rank")]
    pub rank: Rank,
    #[serde(deserialize_with = "lenient_string")]
    pub dblp: Option<String>,
    #[serde(deserialize_with = "seq_or_null")]
    pub confs: Vec<Edition>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Rank {
    #[serde(deserialize_with = "lenient_string")]
    pub ccf: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub core: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub thcpl: Option<String>,
}

impl Rank {
    /// `CCF A / CORE A*`, skipping blanks and the dataset's `N` (unranked) marker.
    pub fn summary(&self) -> String {
        [("CCF", &self.ccf), ("CORE", &self.core), ("THCPL", &self.thcpl)]
            .into_iter()
            .filter_map(|(name, v)| {
                let v = v.as_deref()?.trim();
                (!v.is_empty() && !v.eq_ignore_ascii_case("n")).then(|| format!("{name} {v}"))
            })
            .collect::<Vec<_>>()
            .join(" / ")
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Edition {
    #[serde(deserialize_with = "lenient_year")]
    pub year: Option<i32>,
    #[serde(deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub link: Option<String>,
    #[serde(deserialize_with = "seq_or_null")]
    pub timeline: Vec<TimelineItem>,
    #[serde(deserialize_with = "lenient_string")]
    pub timezone: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub date: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub place: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TimelineItem {
    #[serde(deserialize_with = "lenient_string")]
    pub deadline: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub abstract_deadline: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub comment: Option<String>,
}

/// Fetch and parse one target's document.
pub fn fetch(source: &dyn Source, target: &Target) -> Result<Vec<Series>> {
    let text = source.fetch(target)?;
    parse_document(&text)
}

/// Normalize either document shape into a list of series.
pub fn parse_document(text: &str) -> Result<Vec<Series>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let value: Value = serde_yaml::from_str(text)?;
    let items = match value {
        Value::Sequence(items) => items,
        mapping @ Value::Mapping(_) => vec![mapping],
        Value::Null => Vec::new(),
        other => {
            logd!("top-level YAML is neither a list nor a mapping: {other:?}");
            Vec::new()
        }
    };

    let series = items
        .into_iter()
        .filter_map(|item| match serde_yaml::from_value::<Series>(item) {
            Ok(s) => Some(s),
            Err(e) => {
                logd!("skipping unreadable series entry: {e}");
                None
            }
        })
        .collect();
    Ok(series)
}

/* ---------------- lenient field readers ---------------- */

fn lenient_string<'de, D: Deserializer<'de>>(
    d: D,
) -> std::result::Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

fn lenient_year<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<Option<i32>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Number(n) => n.as_i64().and_then(|y| i32::try_from(y).ok()),
        _ => None,
    })
}

fn lenient_rank<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<Rank, D::Error> {
    let value = Value::deserialize(d)?;
    if value.is_mapping() {
        Ok(serde_yaml::from_value(value).unwrap_or_default())
    } else {
        Ok(Rank::default())
    }
}

fn seq_or_null<'de, D, T>(d: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(d)?.unwrap_or_default())
}
