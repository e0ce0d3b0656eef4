// src/data.rs
//
// The one record this tool produces: a conference edition reduced to what the table shows.
// Built by `select::build_row`, consumed by `html::render_table`, dropped after the write.

use chrono::{DateTime, FixedOffset, Utc};

use crate::specs::conference::Rank;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    /// A deadline is still ahead, or the call is announced as TBD.
    Open,
    /// Deadlines passed; the conference itself has not ended (or its dates are unknown).
    InProgress,
    /// The conference's last day is over.
    Finished,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Open => "Open",
            Status::InProgress => "In progress",
            Status::Finished => "Finished",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Status::Open => "ddl-open",
            Status::InProgress => "ddl-in-progress",
            Status::Finished => "ddl-finished",
        }
    }

    /// Table order: open first.
    pub fn ordinal(self) -> u8 {
        match self {
            Status::Open => 0,
            Status::InProgress => 1,
            Status::Finished => 2,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConferenceRow {
    pub label: String,
    pub title: String,
    pub description: Option<String>,
    pub year: i32,
    pub link: Option<String>,
    /// Edition timezone as written upstream, or the default's label.
    pub timezone: String,
    /// Free-text conference dates, e.g. "June 11-15, 2025".
    pub date: Option<String>,
    pub place: Option<String>,
    pub rank: Rank,
    /// Deadline as written upstream; "TBD" when there is none.
    pub deadline_raw: String,
    pub deadline: Option<DateTime<FixedOffset>>,
    pub abstract_deadline: Option<DateTime<FixedOffset>>,
    pub comment: Option<String>,
    pub conference_end: Option<DateTime<FixedOffset>>,
    pub status: Status,
}

impl ConferenceRow {
    pub fn deadline_utc(&self) -> Option<DateTime<Utc>> {
        self.deadline.map(|d| d.with_timezone(&Utc))
    }
}
