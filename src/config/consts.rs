// src/config/consts.rs

// Net config
pub const RAW_BASE: &str = "https://raw.githubusercontent.com/ccfddl/ccf-deadlines/main";
pub const DATASET_URL: &str = "https://github.com/ccfddl/ccf-deadlines";
pub const USER_AGENT: &str = concat!("ccf_ddl/", env!("CARGO_PKG_VERSION"));
pub const TIMEOUT_SECS: u64 = 20;

// Normalize
pub const DEFAULT_TIMEZONE: &str = "AoE"; // ccfddl's own fallback when `timezone` is absent

// Export
pub const DEFAULT_OUT_FILE: &str = "_includes/ccf_deadlines.html";
pub const DEFAULT_FILENAME: &str = "ccf_deadlines.html";
pub const TABLE_ID: &str = "ccf-ddl-table";

/// `(sub, name, label)`. `sub` and `name` must match `conference/<sub>/<name>.yml` upstream;
/// `label` is what the table shows.
pub const DEFAULT_TARGETS: &[(&str, &str, &str)] = &[
    ("AI", "aaai", "AAAI"),
    ("AI", "nips", "NeurIPS"),
    ("AI", "cvpr", "CVPR"),
    ("AI", "emnlp", "EMNLP"),
    ("AI", "iccv", "ICCV"),
    ("AI", "eccv", "ECCV"),
    ("AI", "ijcai", "IJCAI"),
    ("MX", "www", "WWW"), // moves between DB and MX upstream; check before a release
    ("AI", "bmvc", "BMVC"),
    ("MX", "miccai", "MICCAI"),
    ("MX", "isbi", "ISBI"),
];
