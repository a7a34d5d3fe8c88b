//! Domain error types for pickerdialog
//!
//! Failure cases that are tempting to panic on (missing host window, Done
//! on an empty wheel) are explicit preconditions with typed errors instead.

use thiserror::Error;

/// Top-level error type for pickerdialog
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("No host window available to present the dialog")]
    NoHostWindow,

    #[error("Cannot confirm a selection from an empty option list")]
    EmptyOptions,

    #[error("A dialog is already presented (state: {0})")]
    AlreadyPresented(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Result type alias for PickerError
pub type Result<T> = std::result::Result<T, PickerError>;
