//! UI components for the TUI.
//!
//! - `picker_dialog` - the modal picker overlay: backdrop, card, wheel and
//!   buttons

mod picker_dialog;

pub use picker_dialog::render_picker_dialog;
