//! Timeout demo: a 5-second fuse that can be defused by switching the
//! delay to the disabled sentinel before it fires.

use yew::prelude::*;

use crate::hooks::use_timeout;

const FUSE_MS: u32 = 5_000;

#[function_component(DefuseDemo)]
pub fn defuse_demo() -> Html {
    let aborted = use_state(|| false);
    let exploded = use_state(|| false);

    let boom = {
        let exploded = exploded.clone();
        Callback::from(move |_| exploded.set(true))
    };
    use_timeout(boom, (!*aborted).then_some(FUSE_MS));

    let on_defuse = {
        let aborted = aborted.clone();
        Callback::from(move |_: MouseEvent| aborted.set(true))
    };

    let status = if *exploded {
        "Boom!"
    } else if *aborted {
        "Defused."
    } else {
        "The timer is running..."
    };

    html! {
        <section class="demo">
            { status }
            <button onclick={on_defuse} disabled={*exploded || *aborted}>
                { "Defuse bomb" }
            </button>
        </section>
    }
}
