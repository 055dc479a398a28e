//! Repeating-timer hook with a delay that can change without restarting ticks.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Interval;
use yew::prelude::*;

/// Return value from the use_interval hook.
pub struct UseInterval {
    /// Cancel the running interval imperatively. This is an escape hatch:
    /// the declarative way to stop is passing `None` as the delay.
    pub cancel: Callback<()>,
}

/// Hook that runs a callback on a repeating timer.
///
/// A naive interval captures the closure it was created with and keeps
/// invoking that same closure for its whole lifetime, even though the
/// component has re-rendered with fresher state. This hook stores the
/// latest callback in a cell that is refreshed on every render, so a
/// long-lived interval always invokes the most recent closure. The
/// underlying timer is only torn down and re-created when the delay value
/// itself changes.
///
/// `delay` is a millisecond period, or `None` to disable ticking entirely.
///
/// # Example
/// ```ignore
/// let tick = Callback::from(move |_| elapsed.set(*elapsed + 1));
/// use_interval(tick, running.then_some(1_000));
/// ```
#[hook]
pub fn use_interval(callback: Callback<()>, delay: Option<u32>) -> UseInterval {
    // Refreshed every render so ticks never see a stale closure.
    let saved = use_mut_ref(|| callback.clone());
    *saved.borrow_mut() = callback;

    let handle: Rc<RefCell<Option<Interval>>> = use_mut_ref(|| None);

    {
        let saved = saved.clone();
        let handle = handle.clone();
        use_effect_with(delay, move |delay| {
            if let Some(ms) = *delay {
                let saved = saved.clone();
                let interval = Interval::new(ms, move || {
                    // Clone out of the cell before emitting so a re-render
                    // triggered by the callback can refresh it.
                    let current = saved.borrow().clone();
                    current.emit(());
                });
                *handle.borrow_mut() = Some(interval);
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

    UseInterval { cancel }
}
