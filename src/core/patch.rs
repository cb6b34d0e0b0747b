use crate::domain::model::{PreparedFragment, TargetDocument};
use crate::utils::error::Result;
use regex::Regex;

pub const WRAPPER_OPEN: &str = r#"<svg width="16" height="16" viewBox="0 0 16 16" fill="none" xmlns="http://www.w3.org/2000/svg">"#;

/// Pattern for the placeholder block of `target_id`: a 16x16 wrapper whose
/// first child is `<mask id="target_id"`, up to the first `</svg>`.
fn placeholder_pattern(target_id: &str) -> Result<Regex> {
    let pattern = format!(
        r#"(?s)<svg width="16" height="16"[^>]*>\s*<mask id="{}".*?</svg>"#,
        regex::escape(target_id)
    );
    Ok(Regex::new(&pattern)?)
}

pub fn render_wrapper(fragment: &str, closing_indent: usize) -> String {
    format!(
        "{}\n{}\n{}</svg>",
        WRAPPER_OPEN,
        fragment,
        " ".repeat(closing_indent)
    )
}

/// Replaces the first placeholder block for `target_id` in `content`.
/// Returns `None` when no placeholder exists.
pub fn replace_placeholder(
    content: &str,
    target_id: &str,
    fragment: &str,
    closing_indent: usize,
) -> Result<Option<String>> {
    let re = placeholder_pattern(target_id)?;
    let Some(found) = re.find(content) else {
        return Ok(None);
    };

    let mut patched = String::with_capacity(content.len() + fragment.len());
    patched.push_str(&content[..found.start()]);
    patched.push_str(&render_wrapper(fragment, closing_indent));
    patched.push_str(&content[found.end()..]);
    Ok(Some(patched))
}

/// Patches `document` in place with `fragment`. Returns whether the
/// placeholder was found; the buffer is untouched when it was not.
pub fn apply_fragment(
    document: &mut TargetDocument,
    fragment: &PreparedFragment,
    closing_indent: usize,
) -> Result<bool> {
    match replace_placeholder(
        &document.content,
        &fragment.target_id,
        &fragment.markup,
        closing_indent,
    )? {
        Some(patched) => {
            document.content = patched;
            document.replacements += 1;
            Ok(true)
        }
        None => Ok(false),
    }
}
