//! Poll a predicate until it returns true, then stop for good.

use yew::prelude::*;

use super::use_interval;

/// Polling period used when the caller does not supply one.
const DEFAULT_INTERVAL_MS: u32 = 100;

/// Hook that invokes `predicate` on a repeating timer until it returns
/// `true`, then reports `true` forever after.
///
/// The transition is one-way: once resolved, the inner interval's delay is
/// switched to the disabled sentinel and the predicate is never invoked
/// again. `interval` overrides the 100 ms default period.
///
/// Polling is a last resort. Prefer a future or an event listener when the
/// thing being awaited offers one; this exists for externally loaded
/// scripts that offer neither.
///
/// # Example
/// ```ignore
/// let loaded = use_retry_until_resolved(probe_for_global, None);
/// ```
#[hook]
pub fn use_retry_until_resolved(predicate: Callback<(), bool>, interval: Option<u32>) -> bool {
    let resolved = use_state(|| false);

    let tick = {
        let resolved = resolved.clone();
        Callback::from(move |_| {
            if predicate.emit(()) {
                resolved.set(true);
            }
        })
    };

    let delay = if *resolved {
        None
    } else {
        Some(interval.unwrap_or(DEFAULT_INTERVAL_MS))
    };
    use_interval(tick, delay);

    *resolved
}
