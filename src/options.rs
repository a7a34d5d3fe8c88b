//! Picker option list.
//!
//! An option pairs the label shown on the wheel with the opaque value handed
//! back to the caller on Done. Order of the list defines wheel row order.

use serde::Deserialize;

/// One row of the wheel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PickerOption {
    /// Label shown to the user
    pub display: String,
    /// Opaque identifier returned on selection
    pub value: String,
}

impl PickerOption {
    pub fn new(display: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            value: value.into(),
        }
    }
}

/// Find the row index of the first option whose value matches.
///
/// Values are assumed unique but not enforced; first match wins.
pub fn find_index_for_value(options: &[PickerOption], value: &str) -> Option<usize> {
    options.iter().position(|option| option.value == value)
}
