// benches/pipeline.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use chrono::{DateTime, Utc};

use ccf_ddl::{
    config::options::{RenderOptions, Target},
    html::render_table,
    normalize::{parse_date_range, timezone::aoe},
    select::build_row,
    specs::conference::parse_document,
};

// Shaped like a long-running series upstream: many editions, several deadlines each.
fn sample_doc() -> String {
    let mut doc = String::from("- title: AAAI\n  rank: {ccf: A, core: A*, thcpl: A}\n  confs:\n");
    for year in 2000..2027 {
        doc.push_str(&format!(
            "    - year: {year}\n      link: https://aaai.org/{year}\n      timezone: UTC-12\n      \
             date: February 20 - 27, {year}\n      place: Somewhere\n      timeline:\n        \
             - abstract_deadline: '{p}-08-07 23:59:59'\n          deadline: '{p}-08-15 23:59:59'\n          \
             comment: main\n        - deadline: '{p}-09-01 23:59:59 UTC+8'\n",
            p = year - 1
        ));
    }
    doc
}

fn now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-08-01T00:00:00Z").unwrap().with_timezone(&Utc)
}

fn bench_pipeline(c: &mut Criterion) {
    let doc = sample_doc();
    let target = Target::new("AI", "aaai", Some("AAAI")).unwrap();
    let series = parse_document(&doc).unwrap();
    let rows: Vec<_> = (0..11)
        .filter_map(|_| build_row(&target, &series, aoe(), now()))
        .collect();
    let opts = RenderOptions::default();

    c.bench_function("parse_document", |b| {
        b.iter(|| black_box(parse_document(black_box(&doc)).unwrap().len()))
    });

    c.bench_function("build_row", |b| {
        b.iter(|| black_box(build_row(&target, black_box(&series), aoe(), now())))
    });

    c.bench_function("parse_date_range", |b| {
        b.iter(|| black_box(parse_date_range(black_box("Dec 30, 2025 - Jan 3, 2026"), None)))
    });

    c.bench_function("render_table", |b| {
        b.iter(|| black_box(render_table(black_box(&rows), &opts, now()).len()))
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
