use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static MASK_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"id=(?:"(mask[^"]*)"|'(mask[^']*)')"#).unwrap());

/// First `id` attribute whose value starts with `mask`, in either quote style.
pub fn find_mask_id(fragment: &str) -> Option<&str> {
    let caps = MASK_ID_RE.captures(fragment)?;
    caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str())
}

/// Replaces every definition (`id="old"`, `id='old'`) and reference
/// (`url(#old)`) of `old_id` with `new_id`. Definitions come out double-quoted.
pub fn replace_mask_id(fragment: &str, old_id: &str, new_id: &str) -> String {
    let double = format!("id=\"{}\"", old_id);
    let single = format!("id='{}'", old_id);
    let reference = format!("url(#{})", old_id);

    fragment
        .replace(&double, &format!("id=\"{}\"", new_id))
        .replace(&single, &format!("id=\"{}\"", new_id))
        .replace(&reference, &format!("url(#{})", new_id))
}

/// Rewrites the fragment's mask identifier to `target_id`. Only the first mask
/// identifier found is considered; fragments without one pass through.
pub fn rewrite_mask_id<'a>(fragment: &'a str, target_id: &str) -> Cow<'a, str> {
    match find_mask_id(fragment) {
        Some(old_id) => {
            tracing::debug!("Rewriting mask id {} -> {}", old_id, target_id);
            Cow::Owned(replace_mask_id(fragment, old_id, target_id))
        }
        None => Cow::Borrowed(fragment),
    }
}
