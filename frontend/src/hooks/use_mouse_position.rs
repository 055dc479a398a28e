//! Track the pointer position for the component's mount lifetime.
//!
//! Republishes every mousemove without throttling, so each movement
//! re-renders the consumer. Keep this in small leaf components rather than
//! near the top of the tree.

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

/// Latest pointer coordinates. Both fields are `None` until the first
/// mousemove event arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MousePosition {
    pub x: Option<i32>,
    pub y: Option<i32>,
}

/// Hook that subscribes to window mousemove events and returns the latest
/// client coordinates. The listener is removed when the component
/// unmounts.
#[hook]
pub fn use_mouse_position() -> MousePosition {
    let position = use_state(|| MousePosition { x: None, y: None });

    {
        let position = position.clone();
        use_effect_with((), move |_| {
            let listener = EventListener::new(&gloo::utils::window(), "mousemove", move |event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    position.set(MousePosition {
                        x: Some(event.client_x()),
                        y: Some(event.client_y()),
                    });
                }
            });
            move || drop(listener)
        });
    }

    *position
}
