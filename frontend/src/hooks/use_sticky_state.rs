//! State that persists to localStorage across visits.

use serde::{de::DeserializeOwned, Serialize};
use yew::prelude::*;

/// Return value from the use_sticky_state hook.
pub struct UseStickyState<T: Clone + PartialEq + 'static> {
    /// Current value
    pub value: T,
    /// Set a new value (persisted automatically)
    pub set: Callback<T>,
}

fn read_slot(key: &str) -> Option<String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(key).ok().flatten())
}

fn write_slot(key: &str, json: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(key, json);
    }
}

/// Decode a raw storage slot, falling back to the supplied default when
/// the slot is absent or holds something unparseable.
fn decode_slot<T: DeserializeOwned>(raw: Option<String>, default: T) -> T {
    raw.and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or(default)
}

/// Hook for state that survives page reloads.
///
/// Works like `use_state`, except the value is restored from localStorage
/// under `key` on first render (falling back to `default`) and every value
/// change is serialized back to the same key. Last write wins; there is no
/// versioning or conflict handling. Each call site must use a distinct
/// key.
///
/// Not safe where localStorage is unavailable (e.g. a non-browser render
/// context): the value then behaves as ordinary non-persisted state.
///
/// # Example
/// ```ignore
/// let color = use_sticky_state("blue".to_string(), "persisted-color");
/// color.set.emit("red".to_string());
/// ```
#[hook]
pub fn use_sticky_state<T>(default: T, key: &'static str) -> UseStickyState<T>
where
    T: Clone + PartialEq + Serialize + DeserializeOwned + 'static,
{
    let state = use_state(|| decode_slot(read_slot(key), default));

    // Written on every value change, including the initial one.
    {
        let value = (*state).clone();
        use_effect_with(value, move |value| {
            if let Ok(json) = serde_json::to_string(value) {
                write_slot(key, &json);
            }
            || ()
        });
    }

    let set = {
        let state = state.clone();
        Callback::from(move |new_value: T| state.set(new_value))
    };

    UseStickyState {
        value: (*state).clone(),
        set,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_json_decodes() {
        let decoded = decode_slot(Some("\"blue\"".to_string()), "red".to_string());
        assert_eq!(decoded, "blue");
    }

    #[test]
    fn absent_slot_falls_back_to_default() {
        let decoded = decode_slot(None, 42u32);
        assert_eq!(decoded, 42);
    }

    #[test]
    fn malformed_slot_falls_back_to_default() {
        let decoded = decode_slot(Some("not json".to_string()), 7u32);
        assert_eq!(decoded, 7);
    }
}
