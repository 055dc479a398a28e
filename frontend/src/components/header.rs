//! Page header with the button that raises the data provider's request
//! gate.

use yew::prelude::*;

use crate::components::DataContext;

#[function_component(Header)]
pub fn header() -> Html {
    let data = use_context::<DataContext>().expect("Header must be inside DataProvider");

    let on_invoke = {
        let set_api_requested = data.set_api_requested.clone();
        let set_request_handled = data.set_request_handled.clone();
        Callback::from(move |_: MouseEvent| {
            log::debug!("handling click");
            set_api_requested.emit(true);
            set_request_handled.emit(false);
        })
    };

    html! {
        <>
            <header class="header header-success">
                <h1>{ "Hooks Playground" }</h1>
            </header>
            <span>
                { "Invisible" }
                <span class="invisible-placeholder">{ "PLACEHOLDER" }</span>
                { "placeholder" }
                <span class="invisible-placeholder">{ "DEMO" }</span>
                { "Demo" }
            </span>
            <button class="invoke-button" onclick={on_invoke}>
                { "Invoke API (see console)" }
            </button>
            <span>{ format!("Random data context item: {}", data.random_item) }</span>
        </>
    }
}
