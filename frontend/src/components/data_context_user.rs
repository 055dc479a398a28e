//! Demo consumer of the data context: a form that creates items, a list
//! that clears them, and an Escape binding that dismisses everything.

use shared::ItemVariant;
use uuid::Uuid;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::DataContext;
use crate::hooks::{use_keydown, use_sticky_state};

#[function_component(DataContextUser)]
pub fn data_context_user() -> Html {
    let data = use_context::<DataContext>().expect("DataContextUser must be inside DataProvider");

    // The name survives page reloads.
    let name = use_sticky_state(String::new(), "playground-name");

    let on_submit = {
        let create_item = data.create_item.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            create_item.emit(("Content Submitted.".to_string(), ItemVariant::Success));
        })
    };

    let on_name_input = {
        let set_name = name.set.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                set_name.emit(input.value());
            }
        })
    };

    let dismiss_all = {
        let clear_item = data.clear_item.clone();
        let ids: Vec<Uuid> = data.items.iter().map(|item| item.id).collect();
        Callback::from(move |_| {
            for id in &ids {
                clear_item.emit(*id);
            }
        })
    };
    use_keydown("Escape", dismiss_all);

    html! {
        <main>
            <form onsubmit={on_submit}>
                <label for="name">{ "Name:" }</label>
                <input
                    id="name"
                    required={true}
                    value={name.value.clone()}
                    oninput={on_name_input}
                />

                <label for="message">{ "Message:" }</label>
                <textarea id="message"></textarea>

                <button>{ "Submit" }</button>
            </form>
            <ol class="item-list">
                { for data.items.iter().map(|item| {
                    let on_dismiss = {
                        let clear_item = data.clear_item.clone();
                        let id = item.id;
                        Callback::from(move |_: MouseEvent| clear_item.emit(id))
                    };
                    html! {
                        <li key={item.id.to_string()} class={format!("item item-{}", item.variant)}>
                            { &item.content }
                            <button onclick={on_dismiss}>{ "Dismiss" }</button>
                        </li>
                    }
                }) }
            </ol>
        </main>
    }
}
