//! Event handling for the demo host.
//!
//! Keyboard events are mapped to [`Action`]s describing user intent; the
//! host loop applies them to the dialog and its own state.

mod action;
mod keyboard;

pub use action::Action;
pub use keyboard::handle_key_event;
