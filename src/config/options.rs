// src/config/options.rs
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::FixedOffset;
use serde::Deserialize;

use super::consts::*;
use crate::error::{Error, Result};
use crate::normalize::timezone::{aoe, parse_timezone};

/// One conference to fetch: `conference/<sub>/<name>.yml` upstream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target {
    pub sub: String,
    pub name: String,
    pub label: String,
}

impl Target {
    /// Validated constructor. An empty or missing label falls back to the upper-cased name.
    pub fn new(sub: &str, name: &str, label: Option<&str>) -> Result<Self> {
        let sub = sub.trim();
        let name = name.trim();
        validate_segment("sub", sub)?;
        validate_segment("name", name)?;

        let label = label
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| name.to_ascii_uppercase());

        Ok(Self { sub: sub.to_string(), name: name.to_string(), label })
    }

    pub fn url(&self, base_url: &str) -> String {
        format!("{}/conference/{}/{}.yml", base_url.trim_end_matches('/'), self.sub, self.name)
    }

    /// Case-insensitive match on either the dataset name or the display label.
    pub fn matches(&self, key: &str) -> bool {
        let key = key.trim();
        self.name.eq_ignore_ascii_case(key) || self.label.eq_ignore_ascii_case(key)
    }
}

// Path segments go straight into a URL; keep them boring.
fn validate_segment(field: &str, value: &str) -> Result<()> {
    let ok = !value.is_empty()
        && value.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if ok {
        Ok(())
    } else {
        Err(Error::Config(format!("invalid target {field} {value:?}")))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            base_url: RAW_BASE.to_string(),
            timeout: Duration::from_secs(TIMEOUT_SECS),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Extra timezone every deadline is converted into (e.g. the reader's own).
    pub display_tz: Option<FixedOffset>,
    /// Emit the inline click-to-sort script after the table.
    pub embed_script: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { display_tz: None, embed_script: true }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub render: RenderOptions,
    pub targets: Vec<Target>,
    /// Used when an edition carries no (or an unreadable) `timezone`.
    pub default_tz: FixedOffset,
    pub out: PathBuf,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            fetch: FetchOptions::default(),
            render: RenderOptions::default(),
            targets: default_targets(),
            default_tz: parse_timezone(DEFAULT_TIMEZONE).unwrap_or_else(aoe),
            out: PathBuf::from(DEFAULT_OUT_FILE),
        }
    }
}

pub fn default_targets() -> Vec<Target> {
    DEFAULT_TARGETS
        .iter()
        .map(|&(sub, name, label)| Target {
            sub: sub.to_string(),
            name: name.to_string(),
            label: label.to_string(),
        })
        .collect()
}

impl AppOptions {
    /// Overlay a config file on top of the current values. Only keys present in the file change.
    pub fn apply_file(&mut self, cfg: FileConfig) -> Result<()> {
        if let Some(url) = cfg.base_url {
            self.set_base_url(&url)?;
        }
        if let Some(secs) = cfg.timeout_secs {
            if secs == 0 {
                return Err(Error::Config("timeout_secs must be greater than zero".into()));
            }
            self.fetch.timeout = Duration::from_secs(secs);
        }
        if let Some(out) = cfg.out {
            self.out = out;
        }
        if let Some(tz) = cfg.display_timezone {
            self.set_display_tz(&tz)?;
        }
        if let Some(tz) = cfg.default_timezone {
            self.default_tz = parse_timezone(&tz).ok_or(Error::Timezone(tz))?;
        }
        if let Some(embed) = cfg.embed_script {
            self.render.embed_script = embed;
        }
        if let Some(entries) = cfg.targets {
            if entries.is_empty() {
                return Err(Error::Config("targets list is empty".into()));
            }
            self.targets = entries
                .iter()
                .map(|e| Target::new(&e.sub, &e.name, e.label.as_deref()))
                .collect::<Result<Vec<_>>>()?;
        }
        Ok(())
    }

    pub fn set_base_url(&mut self, url: &str) -> Result<()> {
        let url = url.trim();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(Error::Config(format!("base_url must be http(s): {url:?}")));
        }
        self.fetch.base_url = url.trim_end_matches('/').to_string();
        Ok(())
    }

    pub fn set_display_tz(&mut self, tz: &str) -> Result<()> {
        let offset = parse_timezone(tz).ok_or_else(|| Error::Timezone(tz.to_string()))?;
        self.render.display_tz = Some(offset);
        Ok(())
    }

    /// Keep only the targets named in `keys` (by dataset name or label), in configured order.
    pub fn retain_targets(&mut self, keys: &[String]) -> Result<()> {
        let unknown: Vec<&str> = keys
            .iter()
            .map(|k| k.trim())
            .filter(|k| !k.is_empty() && !self.targets.iter().any(|t| t.matches(k)))
            .collect();
        if !unknown.is_empty() {
            return Err(Error::Config(format!("unknown conference(s): {}", unknown.join(", "))));
        }
        self.targets.retain(|t| keys.iter().any(|k| t.matches(k)));
        Ok(())
    }
}

/// On-disk overlay. Every key is optional; unknown keys are rejected so typos surface early.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub out: Option<PathBuf>,
    pub display_timezone: Option<String>,
    pub default_timezone: Option<String>,
    pub embed_script: Option<bool>,
    pub targets: Option<Vec<TargetEntry>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetEntry {
    pub sub: String,
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_yaml(&text)
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_label_defaults_to_upper_name() {
        let t = Target::new("AI", "icml", None).unwrap();
        assert_eq!(t.label, "ICML");
        let t = Target::new("AI", "icml", Some("  ")).unwrap();
        assert_eq!(t.label, "ICML");
    }

    #[test]
    fn target_rejects_path_tricks() {
        assert!(Target::new("AI", "../etc", None).is_err());
        assert!(Target::new("", "aaai", None).is_err());
        assert!(Target::new("AI", "a a", None).is_err());
    }

    #[test]
    fn target_url_joins_without_double_slash() {
        let t = Target::new("AI", "cvpr", Some("CVPR")).unwrap();
        assert_eq!(
            t.url("https://example.org/data/"),
            "https://example.org/data/conference/AI/cvpr.yml"
        );
    }
}
