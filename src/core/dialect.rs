//! Attribute syntax rewrites for the JSX component file.

/// Hyphenated attribute prefixes and their camel-cased JSX spelling.
pub const JSX_ATTRIBUTE_RENAMES: &[(&str, &str)] = &[
    ("stroke-width=\"", "strokeWidth=\""),
    ("stroke-linecap=\"", "strokeLinecap=\""),
    ("stroke-linejoin=\"", "strokeLinejoin=\""),
];

/// Inline style declarations rewritten into JSX object-literal styles.
pub const JSX_STYLE_REWRITES: &[(&str, &str)] =
    &[("style=\"mask-type:alpha\"", "style={{maskType: 'alpha'}}")];

/// Rewrites the fixed attribute and style set into JSX syntax. Everything else
/// is left untouched.
pub fn adapt_for_jsx(fragment: &str) -> String {
    JSX_STYLE_REWRITES
        .iter()
        .chain(JSX_ATTRIBUTE_RENAMES)
        .fold(fragment.to_string(), |acc, (from, to)| acc.replace(from, to))
}
