// src/select.rs
//
// From a parsed document to one table row: which edition, which deadline, what status.
// Everything takes `now` explicitly so runs and tests are reproducible.

use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset, Utc};

use crate::config::options::Target;
use crate::core::sanitize::{clean_opt, safe_link};
use crate::data::{ConferenceRow, Status};
use crate::normalize::timezone::offset_label;
use crate::normalize::{parse_date_range, parse_deadline, parse_timezone};
use crate::specs::conference::{Edition, Series, TimelineItem};

/// The edition with the greatest year across every series entry of the document.
/// Ties keep the first one seen. Editions without an integer year are ignored.
pub fn pick_edition(series: &[Series]) -> Option<(&Series, &Edition)> {
    let mut best: Option<(&Series, &Edition, i32)> = None;
    for s in series {
        for e in &s.confs {
            let Some(year) = e.year else { continue };
            if best.is_none_or(|(_, _, best_year)| year > best_year) {
                best = Some((s, e, year));
            }
        }
    }
    best.map(|(s, e, _)| (s, e))
}

#[derive(Clone, Copy, Debug)]
pub struct PickedDeadline<'a> {
    pub item: &'a TimelineItem,
    pub at: DateTime<FixedOffset>,
}

/// Earliest deadline at or after `now`; failing that, the latest one that has passed.
/// Equal instants keep the first item listed. Items without a readable deadline never win.
pub fn pick_deadline(
    timeline: &[TimelineItem],
    tz: FixedOffset,
    now: DateTime<Utc>,
) -> Option<PickedDeadline<'_>> {
    let parsed: Vec<PickedDeadline<'_>> = timeline
        .iter()
        .filter_map(|item| {
            let raw = item.deadline.as_deref()?;
            let at = parse_deadline(raw, tz);
            if at.is_none() && !raw.trim().eq_ignore_ascii_case("tbd") {
                logd!("unreadable deadline {raw:?}");
            }
            at.map(|at| PickedDeadline { item, at })
        })
        .collect();

    parsed
        .iter()
        .copied()
        .filter(|p| p.at.with_timezone(&Utc) >= now)
        .min_by_key(|p| p.at)
        .or_else(|| {
            parsed
                .iter()
                .copied()
                .reduce(|best, p| if p.at > best.at { p } else { best })
        })
}

/// Open while a deadline is ahead (or none is announced yet), finished once the
/// conference's last day is over, in progress in between.
pub fn classify(
    deadline: Option<DateTime<FixedOffset>>,
    conference_end: Option<DateTime<FixedOffset>>,
    now: DateTime<Utc>,
) -> Status {
    if deadline.is_some_and(|d| d.with_timezone(&Utc) >= now) {
        return Status::Open;
    }
    if conference_end.is_some_and(|end| end.with_timezone(&Utc) < now) {
        return Status::Finished;
    }
    if deadline.is_none() { Status::Open } else { Status::InProgress }
}

/// Assemble the row for `target`. `None` when the document has no edition with a year.
pub fn build_row(
    target: &Target,
    series: &[Series],
    default_tz: FixedOffset,
    now: DateTime<Utc>,
) -> Option<ConferenceRow> {
    let (owner, edition) = pick_edition(series)?;
    let year = edition.year?;

    let tz_raw = clean_opt(edition.timezone.as_deref());
    let tz = match tz_raw.as_deref() {
        Some(raw) => parse_timezone(raw).unwrap_or_else(|| {
            logw!("{}: unknown timezone {raw:?}, using {}", target.label, offset_label(default_tz));
            default_tz
        }),
        None => default_tz,
    };

    if edition.timeline.is_empty() {
        logw!("No timeline for {} {year}", target.label);
    }

    let picked = pick_deadline(&edition.timeline, tz, now);
    let deadline = picked.map(|p| p.at);
    // With nothing readable (all TBD) the first entry still carries the useful comment.
    let item = picked.map(|p| p.item).or_else(|| edition.timeline.first());

    let abstract_deadline = picked
        .and_then(|p| p.item.abstract_deadline.as_deref())
        .and_then(|raw| parse_deadline(raw, tz));

    let date = clean_opt(edition.date.as_deref());
    let range = date.as_deref().and_then(|d| {
        let r = parse_date_range(d, Some(year));
        if r.is_none() {
            logd!("{}: unreadable conference date {d:?}", target.label);
        }
        r
    });
    let conference_end = range.and_then(|r| r.end_instant(tz));

    let status = classify(deadline, conference_end, now);

    Some(ConferenceRow {
        label: target.label.clone(),
        title: clean_opt(owner.title.as_deref()).unwrap_or_else(|| target.label.clone()),
        description: clean_opt(owner.description.as_deref()),
        year,
        link: safe_link(edition.link.as_deref()),
        timezone: tz_raw.unwrap_or_else(|| offset_label(default_tz)),
        date,
        place: clean_opt(edition.place.as_deref()),
        rank: owner.rank.clone(),
        deadline_raw: picked
            .and_then(|p| clean_opt(p.item.deadline.as_deref()))
            .unwrap_or_else(|| "TBD".to_string()),
        deadline,
        abstract_deadline,
        comment: item.and_then(|i| clean_opt(i.comment.as_deref())),
        conference_end,
        status,
    })
}

/// Open rows first, soonest deadline on top; then in-progress and finished rows,
/// most recent deadline on top. Rows without a deadline sink within their group.
pub fn sort_rows(rows: &mut [ConferenceRow]) {
    rows.sort_by(|a, b| {
        a.status
            .ordinal()
            .cmp(&b.status.ordinal())
            .then_with(|| cmp_deadline(a, b))
            .then_with(|| a.label.cmp(&b.label))
    });
}

fn cmp_deadline(a: &ConferenceRow, b: &ConferenceRow) -> Ordering {
    match (a.deadline, b.deadline) {
        (Some(x), Some(y)) if a.status == Status::Open => x.cmp(&y),
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
