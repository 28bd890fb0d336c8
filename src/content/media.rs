//! Media path normalization.

/// Normalize a stored media path into a publicly fetchable absolute URL.
///
/// Empty input maps to None. Already-absolute URLs pass through unchanged,
/// which also makes the function idempotent: feeding its own output back in
/// is a no-op. Relative storage paths are rooted under a single `/static/`
/// segment and prefixed with `base_url`.
pub fn absolute_url(path: Option<&str>, base_url: &str) -> Option<String> {
    let path = path.map(str::trim).filter(|p| !p.is_empty())?;

    if path.starts_with("http://") || path.starts_with("https://") {
        return Some(path.to_string());
    }

    let normalized = if path.starts_with("static/") {
        format!("/{path}")
    } else if path.starts_with("/static/") {
        path.to_string()
    } else if let Some(rest) = path.strip_prefix('/') {
        format!("/static/{rest}")
    } else {
        format!("/static/{path}")
    };

    Some(format!("{}{}", base_url.trim_end_matches('/'), normalized))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://cdn.example.com";

    #[test]
    fn empty_and_missing_paths_are_none() {
        assert_eq!(absolute_url(None, BASE), None);
        assert_eq!(absolute_url(Some(""), BASE), None);
        assert_eq!(absolute_url(Some("   "), BASE), None);
    }

    #[test]
    fn absolute_urls_pass_through() {
        let url = "https://other.example.com/img/logo.png";
        assert_eq!(absolute_url(Some(url), BASE).as_deref(), Some(url));
        let url = "http://plain.example.com/a.jpg";
        assert_eq!(absolute_url(Some(url), BASE).as_deref(), Some(url));
    }

    #[test]
    fn bare_paths_gain_static_prefix() {
        assert_eq!(
            absolute_url(Some("uploads/products/a.png"), BASE).as_deref(),
            Some("https://cdn.example.com/static/uploads/products/a.png")
        );
    }

    #[test]
    fn existing_static_prefix_is_not_doubled() {
        assert_eq!(
            absolute_url(Some("static/uploads/a.png"), BASE).as_deref(),
            Some("https://cdn.example.com/static/uploads/a.png")
        );
        assert_eq!(
            absolute_url(Some("/static/uploads/a.png"), BASE).as_deref(),
            Some("https://cdn.example.com/static/uploads/a.png")
        );
    }

    #[test]
    fn leading_slash_is_collapsed() {
        assert_eq!(
            absolute_url(Some("/uploads/a.png"), BASE).as_deref(),
            Some("https://cdn.example.com/static/uploads/a.png")
        );
    }

    #[test]
    fn trailing_slash_on_base_is_trimmed() {
        assert_eq!(
            absolute_url(Some("a.png"), "https://cdn.example.com/").as_deref(),
            Some("https://cdn.example.com/static/a.png")
        );
    }

    #[test]
    fn normalization_is_idempotent() {
        for input in ["a.png", "static/a.png", "/static/a.png", "/a.png", "https://x.test/a.png"] {
            let once = absolute_url(Some(input), BASE).unwrap();
            let twice = absolute_url(Some(&once), BASE).unwrap();
            assert_eq!(once, twice);
        }
    }
}
