// src/runner.rs
use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::{
    config::options::AppOptions,
    core::net::Source,
    data::ConferenceRow,
    error::Result,
    file::write_output,
    html::render_table,
    progress::Progress,
    select::{build_row, sort_rows},
    specs::conference,
};

/// A conference that produced no row, and why.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Skipped {
    pub label: String,
    pub reason: String,
}

/// Everything a run produced, before (or instead of) touching the disk.
pub struct Report {
    pub rows: Vec<ConferenceRow>,
    pub skipped: Vec<Skipped>,
    pub html: String,
}

/// Summary of what was produced.
pub struct RunSummary {
    pub report: Report,
    pub file_written: PathBuf,
}

/// Fetch every target in order and build its row. Failures are logged and skipped;
/// this never fails as a whole.
pub fn collect_rows(
    source: &dyn Source,
    opts: &AppOptions,
    now: DateTime<Utc>,
    mut progress: Option<&mut dyn Progress>,
) -> (Vec<ConferenceRow>, Vec<Skipped>) {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(opts.targets.len());
    }

    let mut rows = Vec::with_capacity(opts.targets.len());
    let mut skipped = Vec::new();

    for target in &opts.targets {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Fetching {}", target.label));
        }
        let outcome = conference::fetch(source, target)
            .map(|series| build_row(target, &series, opts.default_tz, now));

        let reason = match outcome {
            Ok(Some(row)) => {
                logd!("{}: {} {} -> {:?}", row.label, row.year, row.deadline_raw, row.status);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(&target.label);
                }
                rows.push(row);
                continue;
            }
            Ok(None) => {
                logw!("No valid 'confs' for {}", target.name);
                "no edition with a year".to_string()
            }
            Err(e) => {
                loge!("Failed to fetch {}: {e}", target.name);
                e.to_string()
            }
        };

        if let Some(p) = progress.as_deref_mut() {
            p.item_failed(&target.label, &reason);
        }
        skipped.push(Skipped { label: target.label.clone(), reason });
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    sort_rows(&mut rows);
    (rows, skipped)
}

/// Collect and render without writing.
pub fn build_report(
    source: &dyn Source,
    opts: &AppOptions,
    now: DateTime<Utc>,
    progress: Option<&mut dyn Progress>,
) -> Report {
    let (rows, skipped) = collect_rows(source, opts, now, progress);
    let html = render_table(&rows, &opts.render, now);
    Report { rows, skipped, html }
}

/// Top-level run: collect, render, write `opts.out`. Only the write can fail.
pub fn run(
    source: &dyn Source,
    opts: &AppOptions,
    now: DateTime<Utc>,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let report = build_report(source, opts, now, progress);
    let file_written = write_output(&opts.out, &report.html)?;
    logf!(
        "Wrote {} ({} rows, {} skipped)",
        file_written.display(),
        report.rows.len(),
        report.skipped.len()
    );
    Ok(RunSummary { report, file_written })
}
