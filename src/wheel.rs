//! Wheel selection model.
//!
//! The single-column selector behind the dialog: an ordered row list and the
//! currently highlighted row. Scrolling only moves the highlight; it never
//! confirms a selection or closes anything.

use crate::options::{PickerOption, find_index_for_value};

/// The wheel's rows and highlighted index.
#[derive(Debug, Default)]
pub struct Wheel {
    rows: Vec<PickerOption>,
    selected: usize,
}

impl Wheel {
    pub fn new(rows: Vec<PickerOption>) -> Self {
        Self { rows, selected: 0 }
    }

    pub fn rows(&self) -> &[PickerOption] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The highlighted option, if the wheel has any rows.
    pub fn selected_option(&self) -> Option<&PickerOption> {
        self.rows.get(self.selected)
    }

    /// Move the highlight one row down. A wheel stops at the last row, it
    /// does not wrap.
    pub fn select_next(&mut self) {
        if !self.is_empty() {
            self.selected = (self.selected + 1).min(self.len() - 1);
        }
    }

    /// Move the highlight one row up, stopping at the first row.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Highlight the first row whose value matches. No match (or an empty
    /// wheel) leaves the highlight on row 0.
    pub fn select_value(&mut self, value: &str) {
        self.selected = find_index_for_value(&self.rows, value).unwrap_or(0);
    }

    /// Drop all rows and reset the highlight. Used on teardown.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.selected = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wheel() -> Wheel {
        Wheel::new(vec![
            PickerOption::new("Red", "R"),
            PickerOption::new("Blue", "B"),
            PickerOption::new("Green", "G"),
        ])
    }

    #[test]
    fn test_select_next_clamps_at_end() {
        let mut w = wheel();
        w.select_next();
        w.select_next();
        w.select_next();
        assert_eq!(w.selected_index(), 2);
    }

    #[test]
    fn test_select_prev_clamps_at_start() {
        let mut w = wheel();
        w.select_prev();
        assert_eq!(w.selected_index(), 0);
    }

    #[test]
    fn test_select_value_matches() {
        let mut w = wheel();
        w.select_value("G");
        assert_eq!(w.selected_index(), 2);
        assert_eq!(w.selected_option().unwrap().display, "Green");
    }

    #[test]
    fn test_select_value_missing_falls_back_to_zero() {
        let mut w = wheel();
        w.select_next();
        w.select_value("X");
        assert_eq!(w.selected_index(), 0);
    }

    #[test]
    fn test_empty_wheel_is_inert() {
        let mut w = Wheel::default();
        w.select_next();
        w.select_prev();
        assert_eq!(w.selected_index(), 0);
        assert!(w.selected_option().is_none());
    }
}
