use crate::core::dialect::adapt_for_jsx;
use crate::core::extract::extract_inner_markup;
use crate::core::mask::rewrite_mask_id;
use crate::domain::model::{Dialect, PreparedFragment};

/// Trims every line, drops blank ones and prefixes the rest with `width` spaces.
pub fn reindent(markup: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    markup
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| format!("{}{}", pad, line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the inline copy of `svg` for `target_id`: inner markup, mask id
/// rewritten to the target, JSX attribute syntax when needed, re-indented.
pub fn prepare_fragment(
    svg: &str,
    target_id: &str,
    dialect: Dialect,
    indent: usize,
) -> PreparedFragment {
    let inner = extract_inner_markup(svg);
    let rewritten = rewrite_mask_id(inner, target_id);

    let markup = match dialect {
        Dialect::Markup => reindent(&rewritten, indent),
        Dialect::Jsx => reindent(&adapt_for_jsx(&rewritten), indent),
    };

    PreparedFragment {
        target_id: target_id.to_string(),
        markup,
    }
}
