mod components;
pub mod hooks;
pub mod utils;

use components::{
    DataContextUser, DataProvider, DefuseDemo, Header, PointerReadout, ScriptStatus, ShiftBy,
    Stopwatch,
};
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <DataProvider>
            <div class="wrapper">
                <Header />
                <DataContextUser />
                <ShiftBy x={-3}>
                    <h2>{ "Hook demos" }</h2>
                </ShiftBy>
                <Stopwatch />
                <DefuseDemo />
                <ScriptStatus />
                <PointerReadout />
            </div>
        </DataProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
