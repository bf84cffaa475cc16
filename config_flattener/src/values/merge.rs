//! Key-by-key overlay of fragment values.

use serde_json::Value;
use serde_json::map::Entry;
use tracing::trace;

use super::FragmentSource;

/// Overlay `layer` onto `target` in place.
///
/// Mappings meet key by key; anything else in `layer` replaces what `target`
/// held, so sequences are never concatenated and `null` clears a subtree.
///
/// # Examples
///
/// ```rust
/// use config_flattener::values::merge_value;
/// use serde_json::json;
///
/// let mut servers = json!({"primary": {"host": "a", "port": 80}});
/// merge_value(&mut servers, json!({"primary": {"host": "b"}, "backup": {"host": "c"}}));
/// assert_eq!(
///     servers,
///     json!({"primary": {"host": "b", "port": 80}, "backup": {"host": "c"}})
/// );
/// ```
pub fn merge_value(target: &mut Value, layer: Value) {
    overlay(target, layer, &FragmentSource::Inline, &mut Vec::new());
}

/// Overlay one fragment's value, tracing each replaced value with the key
/// path it sat at and the fragment that replaced it.
pub(super) fn overlay(
    target: &mut Value,
    layer: Value,
    source: &FragmentSource,
    trail: &mut Vec<String>,
) {
    match (target, layer) {
        (Value::Object(base), Value::Object(incoming)) => {
            for (key, value) in incoming {
                match base.entry(key) {
                    Entry::Vacant(slot) => {
                        slot.insert(value);
                    }
                    Entry::Occupied(mut slot) => {
                        trail.push(slot.key().clone());
                        overlay(slot.get_mut(), value, source, trail);
                        trail.pop();
                    }
                }
            }
        }
        (slot, replacement) => {
            if !trail.is_empty() && *slot != replacement {
                trace!(key = %trail.join("."), %source, "fragment replaces value");
            }
            *slot = replacement;
        }
    }
}
