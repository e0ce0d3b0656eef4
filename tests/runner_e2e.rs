// tests/runner_e2e.rs
//
// Whole pipeline over in-memory documents: skipping, ordering, writing.
//
use std::collections::HashMap;
use std::fs;

use chrono::{DateTime, Utc};

use ccf_ddl::config::options::{AppOptions, Target};
use ccf_ddl::core::net::Source;
use ccf_ddl::data::Status;
use ccf_ddl::progress::{NullProgress, Progress};
use ccf_ddl::runner::{build_report, run};
use ccf_ddl::{Error, Result};

struct MemorySource {
    docs: HashMap<&'static str, &'static str>,
}

impl Source for MemorySource {
    fn fetch(&self, target: &Target) -> Result<String> {
        self.docs
            .get(target.name.as_str())
            .map(|d| d.to_string())
            .ok_or_else(|| Error::Status { url: target.url("https://mem"), status: 404 })
    }
}

#[derive(Default)]
struct Recorder {
    total: usize,
    lines: Vec<String>,
    done: Vec<String>,
    failed: Vec<String>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.lines.push(msg.to_string());
    }
    fn item_done(&mut self, label: &str) {
        self.done.push(label.to_string());
    }
    fn item_failed(&mut self, label: &str, _reason: &str) {
        self.failed.push(label.to_string());
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}

const AAAI: &str = r#"
- title: AAAI
  confs:
    - year: 2026
      link: https://aaai.org/conference/aaai/aaai-26/
      timeline:
        - deadline: '2025-08-01 23:59:59'
      timezone: UTC-12
      date: January 20-27, 2026
      place: Singapore
"#;

const CVPR: &str = r#"
title: CVPR
confs:
  - year: 2026
    timeline:
      - deadline: '2025-11-13 23:59:59'
    timezone: AoE
    date: June 3-7, 2026
"#;

const ICCV: &str = r#"
- title: ICCV
  confs:
    - year: 2025
      timeline:
        - deadline: '2025-03-07 23:59:59'
      timezone: UTC-10
      date: October 19-23, 2025
"#;

fn now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-11-01T00:00:00Z").unwrap().with_timezone(&Utc)
}

fn source() -> MemorySource {
    let docs = HashMap::from([
        ("aaai", AAAI),
        ("cvpr", CVPR),
        ("iccv", ICCV),
        ("bmvc", "- title: BMVC\n  confs: []\n"),
        ("emnlp", "- title: [broken"),
    ]);
    MemorySource { docs }
}

fn options(out: std::path::PathBuf) -> AppOptions {
    let mut opts = AppOptions::default();
    opts.out = out;
    opts.retain_targets(&[
        "aaai".into(), "cvpr".into(), "iccv".into(), "bmvc".into(), "emnlp".into(), "miccai".into(),
    ])
    .unwrap();
    opts
}

#[test]
fn failures_are_skipped_and_the_rest_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("site/_includes/ccf_deadlines.html");
    let opts = options(out.clone());
    let mut progress = Recorder::default();

    let summary = run(&source(), &opts, now(), Some(&mut progress)).unwrap();

    assert_eq!(summary.file_written, out);
    let written = fs::read_to_string(&out).unwrap();
    assert_eq!(written, summary.report.html);

    let labels: Vec<&str> = summary.report.rows.iter().map(|r| r.label.as_str()).collect();
    // open CVPR first, then in-progress AAAI, then finished ICCV
    assert_eq!(labels, ["CVPR", "AAAI", "ICCV"]);
    let statuses: Vec<Status> = summary.report.rows.iter().map(|r| r.status).collect();
    assert_eq!(statuses, [Status::Open, Status::InProgress, Status::Finished]);

    let skipped: Vec<&str> = summary.report.skipped.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(skipped, ["EMNLP", "BMVC", "MICCAI"]);
    assert!(summary.report.skipped[2].reason.contains("404"));

    assert_eq!(progress.total, 6);
    assert_eq!(progress.done, ["AAAI", "CVPR", "ICCV"]);
    assert_eq!(progress.failed, ["EMNLP", "BMVC", "MICCAI"]);
    assert!(progress.finished);
    // one status line per target, no repeats
    assert_eq!(progress.lines.len(), 6);
    assert_eq!(progress.lines.first().map(String::as_str), Some("Fetching AAAI"));

    assert!(written.contains(">CVPR<"));
    assert!(!written.contains("BMVC"));
}

#[test]
fn report_does_not_touch_the_disk() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("never.html");
    let opts = options(out.clone());

    let report = build_report(&source(), &opts, now(), Some(&mut NullProgress));
    assert_eq!(report.rows.len(), 3);
    assert!(report.html.contains("<table"));
    assert!(!out.exists());
}

#[test]
fn nothing_fetched_still_writes_an_empty_table() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = AppOptions::default();
    opts.out = dir.path().to_path_buf();

    let empty = MemorySource { docs: HashMap::new() };
    let summary = run(&empty, &opts, now(), None).unwrap();

    assert!(summary.report.rows.is_empty());
    assert_eq!(summary.report.skipped.len(), 11);
    assert_eq!(summary.file_written, dir.path().join("ccf_deadlines.html"));
    assert!(fs::read_to_string(&summary.file_written).unwrap().contains("<tbody>"));
}
