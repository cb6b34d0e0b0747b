use regex::Regex;
use std::sync::LazyLock;

static SVG_BODY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<svg[^>]*>(.*?)</svg>").unwrap());
static VIEW_BOX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<svg[^>]*?\bviewBox=["']([^"']*)["']"#).unwrap());

/// Returns the trimmed markup between the first `<svg ...>` and the next
/// `</svg>`. Falls back to the whole (trimmed) input when no wrapper is found.
pub fn extract_inner_markup(svg: &str) -> &str {
    match SVG_BODY_RE.captures(svg).and_then(|caps| caps.get(1)) {
        Some(body) => body.as_str().trim(),
        None => svg.trim(),
    }
}

/// `viewBox` of the outer wrapper, if it declares one.
pub fn extract_view_box(svg: &str) -> Option<&str> {
    VIEW_BOX_RE
        .captures(svg)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_wrapper_attributes() {
        let svg = r#"<svg width="16" height="16" viewBox="0 0 16 16" xmlns="http://www.w3.org/2000/svg">
  <path d="M1 1h14"/>
</svg>
"#;
        assert_eq!(extract_inner_markup(svg), r#"<path d="M1 1h14"/>"#);
    }

    #[test]
    fn test_missing_wrapper_uses_whole_input() {
        let svg = "\n  <path d=\"M0 0\"/>\n";
        assert_eq!(extract_inner_markup(svg), "<path d=\"M0 0\"/>");
    }

    #[test]
    fn test_stops_at_first_closing_tag() {
        let svg = "<svg><g/></svg>\n<svg><rect/></svg>";
        assert_eq!(extract_inner_markup(svg), "<g/>");
    }

    #[test]
    fn test_view_box() {
        assert_eq!(
            extract_view_box(r#"<svg width="24" viewBox="0 0 24 24"><g/></svg>"#),
            Some("0 0 24 24")
        );
        assert_eq!(extract_view_box("<svg><g/></svg>"), None);
    }
}
