// src/html.rs
// Static HTML output: one <table> fragment meant to be included by a site generator.
// Every cell carries a `data-sort` key so the optional inline script can re-order rows
// by clicking a header, without any external JS.

use chrono::{DateTime, FixedOffset, Utc};

use crate::config::consts::{DATASET_URL, TABLE_ID};
use crate::config::options::RenderOptions;
use crate::core::sanitize::escape_html;
use crate::data::{ConferenceRow, Status};
use crate::normalize::timezone::offset_label;

const HEADERS: &[(&str, SortType)] = &[
    ("Conference", SortType::Text),
    ("Year", SortType::Num),
    ("Deadline", SortType::Num),
    ("Status", SortType::Num),
    ("Date", SortType::Num),
    ("Place", SortType::Text),
    ("Rank", SortType::Text),
    ("Note", SortType::Text),
];

#[derive(Clone, Copy)]
enum SortType {
    Text,
    Num,
}

impl SortType {
    fn attr(self) -> &'static str {
        match self {
            SortType::Text => "text",
            SortType::Num => "num",
        }
    }
}

// Sorts tbody rows by the clicked column's data-sort; second click reverses.
const SORT_SCRIPT: &str = r#"<script>
(function () {
  var table = document.getElementById("__ID__");
  if (!table) return;
  var heads = table.tHead.rows[0].cells;
  for (var i = 0; i < heads.length; i++) {
    (function (col, th) {
      th.style.cursor = "pointer";
      th.addEventListener("click", function () {
        var asc = th.getAttribute("data-dir") !== "asc";
        for (var j = 0; j < heads.length; j++) heads[j].removeAttribute("data-dir");
        th.setAttribute("data-dir", asc ? "asc" : "desc");
        var num = th.getAttribute("data-sort-type") === "num";
        var body = table.tBodies[0];
        var rows = Array.prototype.slice.call(body.rows);
        rows.sort(function (a, b) {
          var x = a.cells[col].getAttribute("data-sort");
          var y = b.cells[col].getAttribute("data-sort");
          var c = num ? (parseFloat(x) - parseFloat(y)) : x.localeCompare(y);
          return asc ? c : -c;
        });
        rows.forEach(function (r) { body.appendChild(r); });
      });
    })(i, heads[i]);
  }
})();
</script>"#;

// Sort key for rows without an instant; keeps them last in ascending order.
const NO_TIME_KEY: i64 = i64::MAX / 2;

/// Render the table fragment. `rows` are emitted in the given order; see `select::sort_rows`.
pub fn render_table(rows: &[ConferenceRow], opts: &RenderOptions, now: DateTime<Utc>) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(rows.len() + 12);

    lines.push(format!(r#"<table id="{TABLE_ID}" class="table table-sm ccf-ddl">"#));
    lines.push("  <thead>".into());
    let ths: String = HEADERS
        .iter()
        .map(|(name, ty)| format!(r#"<th data-sort-type="{}">{name}</th>"#, ty.attr()))
        .collect();
    lines.push(format!("    <tr>{ths}</tr>"));
    lines.push("  </thead>".into());
    lines.push("  <tbody>".into());

    for row in rows {
        lines.push(render_row(row, opts, now));
    }

    lines.push("  </tbody>".into());
    lines.push("</table>".into());

    lines.push(format!(
        r#"<p><small>Last updated: {} (data from <a href="{DATASET_URL}" target="_blank" rel="noopener noreferrer">ccfddl</a>)</small></p>"#,
        now.format("%Y-%m-%d %H:%M UTC")
    ));

    if opts.embed_script {
        lines.push(SORT_SCRIPT.replace("__ID__", TABLE_ID));
    }

    lines.join("\n") + "\n"
}

fn render_row(row: &ConferenceRow, opts: &RenderOptions, now: DateTime<Utc>) -> String {
    let year = row.year.to_string();
    let cells = [
        conference_cell(row),
        cell(&year, &year),
        deadline_cell(row, opts, now),
        status_cell(row.status),
        date_cell(row),
        text_cell(row.place.as_deref()),
        text_cell(Some(row.rank.summary().as_str())),
        note_cell(row, now),
    ];
    format!(r#"    <tr class="{}">{}</tr>"#, row.status.css_class(), cells.concat())
}

fn cell(sort_key: &str, inner_html: &str) -> String {
    format!(r#"<td data-sort="{}">{inner_html}</td>"#, escape_html(sort_key))
}

fn text_cell(text: Option<&str>) -> String {
    let text = text.unwrap_or("");
    cell(text, &escape_html(text))
}

fn conference_cell(row: &ConferenceRow) -> String {
    let label = escape_html(&row.label);
    let hover = escape_html(row.description.as_deref().unwrap_or(&row.title));
    let inner = match &row.link {
        Some(link) => format!(
            r#"<a href="{}" title="{hover}" target="_blank" rel="noopener noreferrer">{label}</a>"#,
            escape_html(link)
        ),
        None => format!(r#"<span title="{hover}">{label}</span>"#),
    };
    cell(&row.label, &inner)
}

fn deadline_cell(row: &ConferenceRow, opts: &RenderOptions, now: DateTime<Utc>) -> String {
    let Some(at) = row.deadline else {
        let inner = format!(
            r#"{} <small>({})</small>"#,
            escape_html(&row.deadline_raw),
            escape_html(&row.timezone)
        );
        return cell(&NO_TIME_KEY.to_string(), &inner);
    };

    let mut inner = fmt_local(at);
    if let Some(tz) = opts.display_tz.filter(|tz| *tz != *at.offset()) {
        inner.push_str(&format!("<br><small>{}</small>", fmt_local(at.with_timezone(&tz))));
    }
    if row.status == Status::Open {
        if let Some(left) = row.deadline_utc().and_then(|d| countdown(d, now)) {
            inner.push_str(&format!(r#"<br><small class="ddl-countdown">{left}</small>"#));
        }
    }
    cell(&at.timestamp().to_string(), &inner)
}

fn status_cell(status: Status) -> String {
    let inner = format!(
        r#"<span class="ddl-status {}">{}</span>"#,
        status.css_class(),
        status.label()
    );
    cell(&status.ordinal().to_string(), &inner)
}

fn date_cell(row: &ConferenceRow) -> String {
    let key = row
        .conference_end
        .map_or(NO_TIME_KEY, |end| end.timestamp())
        .to_string();
    cell(&key, &escape_html(row.date.as_deref().unwrap_or("")))
}

fn note_cell(row: &ConferenceRow, now: DateTime<Utc>) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(comment) = &row.comment {
        parts.push(escape_html(comment));
    }
    if let Some(abs) = row.abstract_deadline.filter(|a| a.with_timezone(&Utc) >= now) {
        parts.push(format!("Abstract: {}", fmt_local(abs)));
    }
    let plain = row.comment.clone().unwrap_or_default();
    cell(&plain, &parts.join("<br>"))
}

/// `2025-11-15 23:59 AoE`
fn fmt_local(at: DateTime<FixedOffset>) -> String {
    format!("{} {}", at.format("%Y-%m-%d %H:%M"), offset_label(*at.offset()))
}

/// Human countdown for a future instant; `None` once it has passed.
pub fn countdown(at: DateTime<Utc>, now: DateTime<Utc>) -> Option<String> {
    let left = at.signed_duration_since(now);
    if left < chrono::Duration::zero() {
        return None;
    }
    let plural = |n: i64, unit: &str| {
        if n == 1 { format!("in 1 {unit}") } else { format!("in {n} {unit}s") }
    };
    let text = if left.num_days() >= 1 {
        plural(left.num_days(), "day")
    } else if left.num_hours() >= 1 {
        plural(left.num_hours(), "hour")
    } else {
        plural(left.num_minutes().max(1), "minute")
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn countdown_units() {
        let now = at(2025, 1, 1, 0, 0);
        assert_eq!(countdown(at(2025, 1, 13, 0, 0), now).as_deref(), Some("in 12 days"));
        assert_eq!(countdown(at(2025, 1, 2, 6, 0), now).as_deref(), Some("in 1 day"));
        assert_eq!(countdown(at(2025, 1, 1, 5, 30), now).as_deref(), Some("in 5 hours"));
        assert_eq!(countdown(at(2025, 1, 1, 0, 0), now).as_deref(), Some("in 1 minute"));
        assert_eq!(countdown(at(2024, 12, 31, 0, 0), now), None);
    }
}
