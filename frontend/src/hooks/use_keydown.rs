//! Run a callback whenever a specific key is pressed anywhere on the page.

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

/// Hook that listens for window keydown events and fires `callback` when
/// the pressed key's code equals `key` (a `KeyboardEvent.code` value such
/// as `"Escape"` or `"KeyA"`).
///
/// The listener is re-registered when `key` or the callback identity
/// changes, and removed on unmount.
#[hook]
pub fn use_keydown(key: &'static str, callback: Callback<()>) {
    use_effect_with((key, callback), move |(key, callback)| {
        let key = *key;
        let callback = callback.clone();
        let listener = EventListener::new(&gloo::utils::window(), "keydown", move |event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                if event.code() == key {
                    callback.emit(());
                }
            }
        });
        move || drop(listener)
    });
}
