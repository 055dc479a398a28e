//! Reusable view-layer hooks.
//!
//! Each hook is an independent utility a component may or may not use;
//! the only internal dependency is use_retry_until_resolved building on
//! use_interval.

mod use_interval;
mod use_keydown;
mod use_mouse_position;
mod use_retry_until_resolved;
mod use_settable_toggle;
mod use_sticky_state;
mod use_timeout;

pub use use_interval::{use_interval, UseInterval};
pub use use_keydown::use_keydown;
pub use use_mouse_position::{use_mouse_position, MousePosition};
pub use use_retry_until_resolved::use_retry_until_resolved;
pub use use_settable_toggle::{use_settable_toggle, use_settable_toggle_with, UseSettableToggle};
pub use use_sticky_state::{use_sticky_state, UseStickyState};
pub use use_timeout::{use_timeout, UseTimeout};
