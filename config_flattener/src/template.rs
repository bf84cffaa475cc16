//! Instance-key substitution into parameter name templates.
//!
//! A terminal path reached through prototyped arrays holds one doubled
//! separator per prototype level, e.g. `app.servers..host`. Each placeholder
//! is replaced, left to right, by `separator + key + separator`.

/// Doubled separator marking an instance key position.
#[must_use]
pub fn placeholder(separator: &str) -> String {
    separator.repeat(2)
}

/// Count the non-overlapping placeholders in `template`.
///
/// # Examples
///
/// ```
/// use config_flattener::template::count_placeholders;
/// assert_eq!(count_placeholders("a..b..c", "."), 2);
/// assert_eq!(count_placeholders("a.b", "."), 0);
/// ```
#[must_use]
pub fn count_placeholders(template: &str, separator: &str) -> usize {
    if separator.is_empty() {
        return 0;
    }
    template.matches(placeholder(separator).as_str()).count()
}

/// Substitute `keys` into the placeholders of `template`, in order.
///
/// Substitution stops when either the keys or the placeholders run out;
/// unused placeholders are left in place and unused keys are ignored.
/// Keys are never rescanned, so a key containing the separator cannot be
/// mistaken for a placeholder.
///
/// # Examples
///
/// ```
/// use config_flattener::template::substitute;
/// let keys = ["a".to_owned(), "x".to_owned()];
/// assert_eq!(substitute("items..tags..name", ".", &keys), "items.a.tags.x.name");
/// ```
#[must_use]
pub fn substitute(template: &str, separator: &str, keys: &[String]) -> String {
    if separator.is_empty() || keys.is_empty() {
        return template.to_owned();
    }
    let search = placeholder(separator);
    let mut pieces = template.splitn(keys.len().saturating_add(1), search.as_str());
    let mut name = pieces.next().unwrap_or_default().to_owned();
    for (piece, key) in pieces.zip(keys) {
        name.push_str(separator);
        name.push_str(key);
        name.push_str(separator);
        name.push_str(piece);
    }
    name
}
