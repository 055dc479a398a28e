//! Context-backed state container shared with every descendant component.
//!
//! Holds the item collection and the two flags gating the demo's one
//! outbound request. For usage, see the DataContextUser component.

use std::rc::Rc;

use gloo_net::http::Request;
use shared::{ApiPayload, Item, ItemVariant};
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::utils;

/// Value provided to descendants of [`DataProvider`].
#[derive(Clone, PartialEq)]
pub struct DataContext {
    /// Items in insertion order
    pub items: Vec<Item>,
    /// Append a freshly minted item: (content, variant)
    pub create_item: Callback<(String, ItemVariant)>,
    /// Remove one item by id
    pub clear_item: Callback<Uuid>,
    /// Raise or lower the "a request was asked for" flag
    pub set_api_requested: Callback<bool>,
    /// Raise or lower the "the request was serviced" flag
    pub set_request_handled: Callback<bool>,
    /// Static demo value carried straight through the context
    pub random_item: &'static str,
}

/// Pure transition: append a new item.
fn push_item(items: &[Item], content: String, variant: ItemVariant) -> Vec<Item> {
    let mut next = items.to_vec();
    next.push(Item::new(content, variant));
    next
}

/// Pure transition: drop the item with the given id, keeping order.
fn remove_item(items: &[Item], id: Uuid) -> Vec<Item> {
    items
        .iter()
        .filter(|item| item.id != id)
        .cloned()
        .collect()
}

#[derive(Default, PartialEq)]
struct ItemList {
    items: Vec<Item>,
}

enum ItemsAction {
    Create { content: String, variant: ItemVariant },
    Clear { id: Uuid },
}

impl Reducible for ItemList {
    type Action = ItemsAction;

    fn reduce(self: Rc<Self>, action: ItemsAction) -> Rc<Self> {
        let items = match action {
            ItemsAction::Create { content, variant } => push_item(&self.items, content, variant),
            ItemsAction::Clear { id } => remove_item(&self.items, id),
        };
        Rc::new(ItemList { items })
    }
}

/// Fire the fixed PUT request and hand back the parsed response body.
async fn put_payload() -> Result<serde_json::Value, gloo_net::Error> {
    let response = Request::put(utils::api_endpoint())
        .header("x-api-key", utils::api_key())
        .json(&ApiPayload::default())?
        .send()
        .await?;
    response.json().await
}

#[derive(Properties, PartialEq)]
pub struct DataProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Provider component. The side effect runs once per
/// requested-and-not-yet-handled edge: the flags reset as soon as the
/// request is spawned, so nothing stops a later trigger while an earlier
/// call is still in flight.
#[function_component(DataProvider)]
pub fn data_provider(props: &DataProviderProps) -> Html {
    let items = use_reducer(ItemList::default);
    let api_requested = use_state(|| false);
    let request_handled = use_state(|| false);

    {
        let api_requested = api_requested.clone();
        let request_handled = request_handled.clone();
        use_effect_with(
            (*api_requested, *request_handled),
            move |(requested, handled)| {
                log::debug!("api_requested: {requested} && request_handled: {handled}");
                if *requested && !*handled {
                    log::info!("API was requested: {}", utils::api_endpoint());
                    spawn_local(async move {
                        match put_payload().await {
                            Ok(body) => log::info!("API response: {body}"),
                            Err(e) => log::error!("API call failed: {e:?}"),
                        }
                    });
                    api_requested.set(false);
                    request_handled.set(true);
                }
                || ()
            },
        );
    }

    let create_item = {
        let items = items.clone();
        Callback::from(move |(content, variant): (String, ItemVariant)| {
            items.dispatch(ItemsAction::Create { content, variant });
        })
    };

    let clear_item = {
        let items = items.clone();
        Callback::from(move |id: Uuid| {
            items.dispatch(ItemsAction::Clear { id });
        })
    };

    let set_api_requested = {
        let api_requested = api_requested.clone();
        Callback::from(move |value: bool| api_requested.set(value))
    };

    let set_request_handled = {
        let request_handled = request_handled.clone();
        Callback::from(move |value: bool| request_handled.set(value))
    };

    let context = DataContext {
        items: items.items.clone(),
        create_item,
        clear_item,
        set_api_requested,
        set_request_handled,
        random_item: "random item",
    };

    html! {
        <ContextProvider<DataContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<DataContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(state: Rc<ItemList>, content: &str, variant: ItemVariant) -> Rc<ItemList> {
        state.reduce(ItemsAction::Create {
            content: content.to_string(),
            variant,
        })
    }

    #[test]
    fn creates_append_in_insertion_order() {
        let mut state = Rc::new(ItemList::default());
        state = create(state, "first", ItemVariant::Notice);
        state = create(state, "second", ItemVariant::Error);

        let contents: Vec<&str> = state.items.iter().map(|i| i.content.as_str()).collect();
        assert_eq!(contents, ["first", "second"]);
    }

    #[test]
    fn clear_removes_exactly_the_matching_id() {
        let mut state = Rc::new(ItemList::default());
        state = create(state, "a", ItemVariant::Notice);
        state = create(state, "b", ItemVariant::Warning);
        state = create(state, "c", ItemVariant::Error);

        let middle = state.items[1].id;
        state = state.reduce(ItemsAction::Clear { id: middle });

        let contents: Vec<&str> = state.items.iter().map(|i| i.content.as_str()).collect();
        assert_eq!(contents, ["a", "c"]);
    }

    #[test]
    fn clear_with_unknown_id_is_a_no_op() {
        let mut state = Rc::new(ItemList::default());
        state = create(state, "only", ItemVariant::Success);
        state = state.reduce(ItemsAction::Clear { id: Uuid::new_v4() });

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].content, "only");
    }

    #[test]
    fn create_then_clear_returns_to_empty() {
        let mut state = Rc::new(ItemList::default());
        state = create(state, "hi", ItemVariant::Success);

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].content, "hi");
        assert_eq!(state.items[0].variant, ItemVariant::Success);

        let id = state.items[0].id;
        state = state.reduce(ItemsAction::Clear { id });
        assert!(state.items.is_empty());
    }
}
