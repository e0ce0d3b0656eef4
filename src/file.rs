// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::consts::DEFAULT_FILENAME;
use crate::error::{Error, Result};

/// Resolve the user's `--out` value. A directory (existing, or hinted with a trailing
/// separator) gets the default filename appended.
pub fn resolve_out_path(out: &Path) -> PathBuf {
    if out.as_os_str().is_empty() {
        return PathBuf::from(DEFAULT_FILENAME);
    }
    if looks_like_dir_hint(out) || out.is_dir() {
        out.join(DEFAULT_FILENAME)
    } else {
        out.to_path_buf()
    }
}

/// Write the rendered fragment, creating parent directories. Returns the final path.
pub fn write_output(out: &Path, contents: &str) -> Result<PathBuf> {
    let path = resolve_out_path(out);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(&path, contents).map_err(|e| Error::io(&path, e))?;
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::Config(format!("path exists but is not a directory: {}", dir.display())));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_separator_means_directory() {
        assert_eq!(
            resolve_out_path(Path::new("site/_includes/")),
            Path::new("site/_includes/").join(DEFAULT_FILENAME)
        );
        assert_eq!(resolve_out_path(Path::new("x/ddl.html")), PathBuf::from("x/ddl.html"));
        assert_eq!(resolve_out_path(Path::new("")), PathBuf::from(DEFAULT_FILENAME));
    }

    #[test]
    fn writes_into_fresh_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("a/b/out.html");
        let written = write_output(&target, "<table></table>\n").unwrap();
        assert_eq!(written, target);
        assert_eq!(fs::read_to_string(&written).unwrap(), "<table></table>\n");
    }

    #[test]
    fn refuses_file_where_directory_is_needed() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();
        assert!(write_output(&blocker.join("out.html"), "x").is_err());
    }
}
