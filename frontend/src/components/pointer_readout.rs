//! Leaf component showing the live pointer position.

use yew::prelude::*;

use crate::hooks::use_mouse_position;

#[function_component(PointerReadout)]
pub fn pointer_readout() -> Html {
    let position = use_mouse_position();

    let text = match (position.x, position.y) {
        (Some(x), Some(y)) => format!("Pointer at ({x}, {y})"),
        _ => "Pointer has not moved yet".to_string(),
    };

    html! {
        <section class="demo">{ text }</section>
    }
}
