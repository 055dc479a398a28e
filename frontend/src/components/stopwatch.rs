//! Stopwatch demo for use_interval and use_settable_toggle.

use yew::prelude::*;

use crate::hooks::{use_interval, use_settable_toggle};

#[function_component(Stopwatch)]
pub fn stopwatch() -> Html {
    let elapsed = use_state(|| 0u32);
    let running = use_settable_toggle(false);

    let tick = {
        let elapsed = elapsed.clone();
        Callback::from(move |_| elapsed.set(*elapsed + 1))
    };
    // Stopping switches the delay to the disabled sentinel.
    use_interval(tick, running.value.then_some(1_000));

    let on_toggle = {
        let elapsed = elapsed.clone();
        let toggle = running.toggle.clone();
        Callback::from(move |_: MouseEvent| {
            elapsed.set(0);
            toggle.emit(None);
        })
    };

    html! {
        <section class="demo">
            { format!("Time elapsed: {} second(s)", *elapsed) }
            <button onclick={on_toggle}>
                { if running.value { "Stop" } else { "Start" } }
            </button>
        </section>
    }
}
