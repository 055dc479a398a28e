//! One-shot timer hook, the single-firing sibling of use_interval.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use yew::prelude::*;

/// Return value from the use_timeout hook.
pub struct UseTimeout {
    /// Cancel the pending timeout imperatively. Escape hatch; the
    /// declarative way to cancel is passing `None` as the delay.
    pub cancel: Callback<()>,
}

/// Hook that fires a callback once after `delay` milliseconds.
///
/// Same staleness avoidance as [`use_interval`](super::use_interval): the
/// firing always invokes the most recently supplied callback, and the
/// timer is only re-armed when the delay value changes. Passing `None`
/// cancels a pending firing; unmounting does too.
#[hook]
pub fn use_timeout(callback: Callback<()>, delay: Option<u32>) -> UseTimeout {
    let saved = use_mut_ref(|| callback.clone());
    *saved.borrow_mut() = callback;

    let handle: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    {
        let saved = saved.clone();
        let handle = handle.clone();
        use_effect_with(delay, move |delay| {
            if let Some(ms) = *delay {
                let saved = saved.clone();
                let timeout = Timeout::new(ms, move || {
                    let current = saved.borrow().clone();
                    current.emit(());
                });
                *handle.borrow_mut() = Some(timeout);
            }
            let handle = handle.clone();
            move || {
                handle.borrow_mut().take();
            }
        });
    }

    let cancel = Callback::from(move |_| {
        handle.borrow_mut().take();
    });

    UseTimeout { cancel }
}
