//! Action enum for decoupling input handling from state changes.

/// User intents dispatched from event handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // === Application ===
    /// Quit the demo
    Quit,
    /// Present the picker dialog
    OpenPicker,

    // === Wheel ===
    /// Move the wheel highlight one row up
    ScrollUp,
    /// Move the wheel highlight one row down
    ScrollDown,

    // === Buttons ===
    /// Focus the Cancel button
    FocusCancel,
    /// Focus the Done button
    FocusDone,
    /// Flip focus between the two buttons
    ToggleFocus,
    /// Tap the focused button
    Activate,
    /// Dismiss without a result
    Cancel,

    /// Nothing to do
    None,
}
