// src/core/sanitize.rs

/// Escape text for HTML element content and double-quoted attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Collapse runs of whitespace (YAML folded strings carry newlines) to a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

/// Normalized, non-empty text or `None`.
pub fn clean_opt(s: Option<&str>) -> Option<String> {
    s.map(normalize_ws).filter(|t| !t.is_empty())
}

/// Only `http(s)` links make it into an `href`; anything else is dropped.
pub fn safe_link(s: Option<&str>) -> Option<String> {
    let link = s?.trim();
    let lower = link.to_ascii_lowercase();
    (lower.starts_with("https://") || lower.starts_with("http://")).then(|| link.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_and_quotes() {
        assert_eq!(
            escape_html(r#"<b>"A&B's"</b>"#),
            "&lt;b&gt;&quot;A&amp;B&#39;s&quot;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(normalize_ws("  Main\n  track \t papers "), "Main track papers");
        assert_eq!(clean_opt(Some("   ")), None);
        assert_eq!(clean_opt(Some(" x ")).as_deref(), Some("x"));
        assert_eq!(clean_opt(None), None);
    }

    #[test]
    fn links_must_be_http() {
        assert_eq!(safe_link(Some(" https://a.org/x ")).as_deref(), Some("https://a.org/x"));
        assert_eq!(safe_link(Some("javascript:alert(1)")), None);
        assert_eq!(safe_link(Some("")), None);
        assert_eq!(safe_link(None), None);
    }
}
