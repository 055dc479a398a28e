//! Boolean state whose setter can either force a value or flip the
//! current one.

use std::rc::Rc;

use yew::prelude::*;

/// Return value from the use_settable_toggle hook.
pub struct UseSettableToggle {
    /// Current value
    pub value: bool,
    /// `Some(v)` force-sets `v`; `None` flips the current value.
    pub toggle: Callback<Option<bool>>,
}

/// Transition applied by the toggle callback.
fn next_value(current: bool, requested: Option<bool>) -> bool {
    match requested {
        Some(explicit) => explicit,
        None => !current,
    }
}

#[derive(PartialEq)]
struct ToggleState(bool);

impl Reducible for ToggleState {
    type Action = Option<bool>;

    fn reduce(self: Rc<Self>, action: Option<bool>) -> Rc<Self> {
        Rc::new(ToggleState(next_value(self.0, action)))
    }
}

/// Hook for a boolean that can be toggled or set outright.
///
/// Flips are applied against the value at dispatch time, so several
/// emissions within one event all land.
#[hook]
pub fn use_settable_toggle(initial: bool) -> UseSettableToggle {
    use_settable_toggle_with(move || initial)
}

/// [`use_settable_toggle`] with a lazy initializer, for when computing the
/// initial value is not free.
#[hook]
pub fn use_settable_toggle_with<F>(init: F) -> UseSettableToggle
where
    F: FnOnce() -> bool,
{
    let state = use_reducer(move || ToggleState(init()));

    let toggle = {
        let state = state.clone();
        Callback::from(move |requested: Option<bool>| state.dispatch(requested))
    };

    UseSettableToggle {
        value: state.0,
        toggle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_set_wins() {
        assert!(next_value(false, Some(true)));
        assert!(next_value(true, Some(true)));
        assert!(!next_value(true, Some(false)));
        assert!(!next_value(false, Some(false)));
    }

    #[test]
    fn no_argument_flips() {
        assert!(next_value(false, None));
        assert!(!next_value(true, None));
    }

    #[test]
    fn set_true_then_false_yields_false() {
        let mut value = true;
        value = next_value(value, Some(true));
        value = next_value(value, Some(false));
        assert!(!value);
    }
}
