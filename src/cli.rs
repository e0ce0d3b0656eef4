// src/cli.rs
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Parser;
use color_eyre::eyre::{eyre, WrapErr};

use crate::config::options::{AppOptions, FileConfig};
use crate::core::net::HttpSource;
use crate::progress::Progress;
use crate::runner;

#[derive(Parser, Debug)]
#[command(
    name = "ccf_ddl",
    about = "Fetch conference deadlines from ccfddl/ccf-deadlines and render a static HTML table",
    version
)]
pub struct Args {
    /// Output file (or directory ending in '/').
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// YAML config file overlaying the built-in defaults.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Dataset root (defaults to the raw GitHub URL of ccfddl/ccf-deadlines).
    #[arg(long)]
    pub base_url: Option<String>,

    /// Only these conferences, by dataset name or label (comma-separated).
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,

    /// Also show every deadline in this timezone (e.g. "UTC+8").
    #[arg(long)]
    pub display_tz: Option<String>,

    /// Leave out the inline click-to-sort script.
    #[arg(long)]
    pub no_script: bool,

    /// Print the HTML to stdout instead of writing the file.
    #[arg(long)]
    pub dry_run: bool,

    /// Print the configured conferences and exit.
    #[arg(long)]
    pub list: bool,

    /// Pretend the current time is this RFC 3339 instant (reproducible output).
    #[arg(long, hide = true)]
    pub now: Option<String>,

    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins if set.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Precedence: flag > config file > built-in default.
pub fn resolve_options(args: &Args) -> color_eyre::Result<AppOptions> {
    let mut opts = AppOptions::default();

    if let Some(path) = &args.config {
        let cfg = FileConfig::load(path)
            .wrap_err_with(|| format!("reading config {}", path.display()))?;
        opts.apply_file(cfg)?;
    }
    if let Some(url) = &args.base_url {
        opts.set_base_url(url)?;
    }
    if let Some(out) = &args.out {
        opts.out = out.clone();
    }
    if let Some(tz) = &args.display_tz {
        opts.set_display_tz(tz)?;
    }
    if args.no_script {
        opts.render.embed_script = false;
    }
    if !args.only.is_empty() {
        opts.retain_targets(&args.only)?;
    }
    Ok(opts)
}

fn resolve_now(args: &Args) -> color_eyre::Result<DateTime<Utc>> {
    match &args.now {
        Some(s) => DateTime::parse_from_rfc3339(s)
            .map(|d| d.with_timezone(&Utc))
            .map_err(|e| eyre!("invalid --now {s:?}: {e}")),
        None => Ok(Utc::now()),
    }
}

/// Progress lines on stderr, so `--dry-run` output on stdout stays clean.
struct ConsoleProgress {
    total: usize,
    seen: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn item_done(&mut self, label: &str) {
        self.seen += 1;
        eprintln!("[{}/{}] {label}", self.seen, self.total);
    }
    fn item_failed(&mut self, label: &str, reason: &str) {
        self.seen += 1;
        eprintln!("[{}/{}] {label} skipped: {reason}", self.seen, self.total);
    }
}

pub fn run() -> color_eyre::Result<()> {
    let args = Args::parse();
    crate::log::init(&args.log_level);

    let opts = resolve_options(&args)?;

    if args.list {
        for t in &opts.targets {
            println!("{},{},{}", t.sub, t.name, t.label);
        }
        return Ok(());
    }

    let now = resolve_now(&args)?;
    let source = HttpSource::new(&opts.fetch)?;
    let mut progress = ConsoleProgress { total: 0, seen: 0 };

    if args.dry_run {
        let report = runner::build_report(&source, &opts, now, Some(&mut progress));
        print!("{}", report.html);
        return Ok(());
    }

    let summary = runner::run(&source, &opts, now, Some(&mut progress))?;
    println!("Wrote {}", summary.file_written.display());
    Ok(())
}
