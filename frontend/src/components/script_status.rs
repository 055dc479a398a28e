//! Poll-until-resolved demo: wait for an externally loaded script to show
//! up as a window global.

use js_sys::Reflect;
use yew::prelude::*;

use crate::hooks::use_retry_until_resolved;

/// Window global the probe waits for.
const SCRIPT_GLOBAL: &str = "specialThing";

#[function_component(ScriptStatus)]
pub fn script_status() -> Html {
    let probe = Callback::from(|_| {
        let window = gloo::utils::window();
        Reflect::get(&window, &SCRIPT_GLOBAL.into())
            .map(|value| !value.is_undefined())
            .unwrap_or(false)
    });
    let resolved = use_retry_until_resolved(probe, None);

    html! {
        <section class="demo">
            { "Third-party library status: " }
            { if resolved { "Loaded" } else { "Not loaded" } }
        </section>
    }
}
