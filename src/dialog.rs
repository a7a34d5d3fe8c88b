//! The modal picker dialog.
//!
//! One `PickerDialog` manages the full lifecycle of a single modal
//! presentation: `show`, live selection tracking while the user scrolls the
//! wheel, Cancel/Done handling, and animated teardown. The result is
//! delivered through a one-shot callback, invoked at most once and only on
//! Done.

use std::rc::Rc;
use std::time::Duration;

use ratatui::style::Style;

use crate::animation::{Transition, VisualState};
use crate::error::{PickerError, Result};
use crate::host::{OrientationGuard, OrientationSource, SharedWindow, WindowProvider};
use crate::log;
use crate::options::PickerOption;
use crate::wheel::Wheel;

/// One-shot result callback: receives the selected option's value.
pub type PickerCallback = Box<dyn FnOnce(String)>;

/// Lifecycle of a single presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    Closed,
    Opening,
    Open,
    Closing,
}

impl DialogState {
    fn name(&self) -> &'static str {
        match self {
            DialogState::Closed => "closed",
            DialogState::Opening => "opening",
            DialogState::Open => "open",
            DialogState::Closing => "closing",
        }
    }
}

/// The two action buttons at the bottom of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Cancel,
    Done,
}

/// Everything `show` needs besides the callback.
#[derive(Debug, Clone)]
pub struct ShowRequest {
    pub title: String,
    pub done_label: String,
    pub cancel_label: String,
    pub options: Vec<PickerOption>,
    pub selected: Option<String>,
}

impl ShowRequest {
    pub fn new(title: impl Into<String>, options: Vec<PickerOption>) -> Self {
        Self {
            title: title.into(),
            done_label: "Done".to_string(),
            cancel_label: "Cancel".to_string(),
            options,
            selected: None,
        }
    }

    pub fn done_label(mut self, label: impl Into<String>) -> Self {
        self.done_label = label.into();
        self
    }

    pub fn cancel_label(mut self, label: impl Into<String>) -> Self {
        self.cancel_label = label.into();
        self
    }

    /// Pre-select the first option with this value. No match falls back to
    /// row 0.
    pub fn selected(mut self, value: impl Into<String>) -> Self {
        self.selected = Some(value.into());
        self
    }
}

/// The modal picker dialog.
pub struct PickerDialog {
    provider: Box<dyn WindowProvider>,
    orientation: Rc<dyn OrientationSource>,

    state: DialogState,
    title: String,
    done_label: String,
    cancel_label: String,
    wheel: Wheel,
    callback: Option<PickerCallback>,

    // Held only while presented
    window: Option<SharedWindow>,
    subscription: Option<OrientationGuard>,
    transition: Option<Transition>,

    focused: Button,
    row_style: Option<Style>,
}

impl PickerDialog {
    pub fn new(provider: Box<dyn WindowProvider>, orientation: Rc<dyn OrientationSource>) -> Self {
        Self {
            provider,
            orientation,
            state: DialogState::Closed,
            title: String::new(),
            done_label: String::new(),
            cancel_label: String::new(),
            wheel: Wheel::default(),
            callback: None,
            window: None,
            subscription: None,
            transition: None,
            focused: Button::Done,
            row_style: None,
        }
    }

    /// Override the style used for wheel row labels.
    pub fn with_row_style(mut self, style: Style) -> Self {
        self.row_style = Some(style);
        self
    }

    /// Present the dialog over the host's key window.
    ///
    /// Fails with [`PickerError::AlreadyPresented`] if a presentation is in
    /// flight, and with [`PickerError::NoHostWindow`] if the host has no
    /// window to attach to. An empty option list is accepted; the wheel just
    /// has zero rows.
    pub fn show(&mut self, request: ShowRequest, callback: PickerCallback) -> Result<()> {
        if self.state != DialogState::Closed {
            return Err(PickerError::AlreadyPresented(self.state.name()));
        }

        let window = self.provider.key_window().ok_or(PickerError::NoHostWindow)?;

        self.title = request.title;
        self.done_label = request.done_label;
        self.cancel_label = request.cancel_label;
        self.wheel = Wheel::new(request.options);
        if let Some(value) = &request.selected {
            self.wheel.select_value(value);
        }
        self.callback = Some(callback);
        self.focused = Button::Done;

        {
            let mut window = window.borrow_mut();
            window.attach_overlay();
            window.end_editing();
        }
        self.subscription = Some(self.orientation.subscribe());
        self.window = Some(window);

        self.state = DialogState::Opening;
        self.transition = Some(Transition::opening());

        log::log_event(&format!(
            "show '{}' with {} rows, initial row {}",
            self.title,
            self.wheel.len(),
            self.wheel.selected_index()
        ));

        Ok(())
    }

    /// Advance the running transition. The host render loop calls this every
    /// tick; completion flips `Opening` to `Open` and finishes teardown for
    /// `Closing`.
    pub fn tick(&mut self, dt: Duration) {
        let Some(transition) = self.transition.as_mut() else {
            return;
        };
        if transition.advance(dt) {
            match self.state {
                DialogState::Opening => {
                    self.state = DialogState::Open;
                    self.transition = None;
                }
                DialogState::Closing => self.teardown(),
                _ => self.transition = None,
            }
        }
    }

    /// Handle a tap on one of the two action buttons.
    ///
    /// Done reads the highlighted row, fires the callback exactly once with
    /// its value, and starts closing. Cancel just closes. Done on an empty
    /// wheel is refused with [`PickerError::EmptyOptions`] and leaves the
    /// dialog up, so the user can still cancel.
    pub fn button_tapped(&mut self, button: Button) -> Result<()> {
        if !matches!(self.state, DialogState::Opening | DialogState::Open) {
            return Ok(());
        }

        if button == Button::Done {
            let value = self
                .wheel
                .selected_option()
                .map(|option| option.value.clone())
                .ok_or(PickerError::EmptyOptions)?;
            if let Some(callback) = self.callback.take() {
                callback(value.clone());
            }
            log::log_event(&format!("done with value '{}'", value));
        } else {
            log::log_event("cancelled");
        }

        self.close();
        Ok(())
    }

    /// Convenience for keyboard hosts: tap whichever button has focus.
    pub fn activate_focused(&mut self) -> Result<()> {
        self.button_tapped(self.focused)
    }

    /// The device rotated. No relayout is attempted; the dialog closes as if
    /// cancelled.
    pub fn device_orientation_changed(&mut self) {
        if matches!(self.state, DialogState::Opening | DialogState::Open) {
            log::log_event("orientation changed, closing");
            self.close();
        }
    }

    /// Start the closing animation. The orientation observer is released
    /// here, before anything else, so every exit path drops it; views detach
    /// when the transition completes.
    fn close(&mut self) {
        self.subscription = None;

        let current = self.visual_state();
        self.state = DialogState::Closing;
        self.transition = Some(Transition::closing(current));
    }

    /// Remove children and detach from the window. Runs from the closing
    /// transition's completion.
    fn teardown(&mut self) {
        self.transition = None;
        if let Some(window) = self.window.take() {
            window.borrow_mut().detach_overlay();
        }
        self.wheel.clear();
        self.title.clear();
        self.callback = None;
        self.state = DialogState::Closed;
        log::log_event("teardown complete");
    }

    // --- selection ---

    /// Scroll the wheel one row down. Selection tracking only; nothing fires
    /// and nothing closes.
    pub fn select_next(&mut self) {
        if matches!(self.state, DialogState::Opening | DialogState::Open) {
            self.wheel.select_next();
        }
    }

    /// Scroll the wheel one row up.
    pub fn select_prev(&mut self) {
        if matches!(self.state, DialogState::Opening | DialogState::Open) {
            self.wheel.select_prev();
        }
    }

    // --- button focus (presentation state for keyboard hosts) ---

    pub fn focused_button(&self) -> Button {
        self.focused
    }

    pub fn focus_button(&mut self, button: Button) {
        self.focused = button;
    }

    pub fn toggle_focus(&mut self) {
        self.focused = match self.focused {
            Button::Cancel => Button::Done,
            Button::Done => Button::Cancel,
        };
    }

    // --- read-only queries for the presentation layer ---

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn is_presented(&self) -> bool {
        self.state != DialogState::Closed
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn done_label(&self) -> &str {
        &self.done_label
    }

    pub fn cancel_label(&self) -> &str {
        &self.cancel_label
    }

    pub fn wheel(&self) -> &Wheel {
        &self.wheel
    }

    pub fn row_style(&self) -> Option<Style> {
        self.row_style
    }

    /// The window the dialog is currently attached to.
    pub fn window(&self) -> Option<&SharedWindow> {
        self.window.as_ref()
    }

    /// What the presentation layer should draw right now.
    pub fn visual_state(&self) -> VisualState {
        if let Some(transition) = &self.transition {
            transition.value()
        } else {
            match self.state {
                DialogState::Open => VisualState::presented(),
                _ => VisualState::hidden(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use crate::animation::TRANSITION_DURATION;
    use crate::host::{FixedWindow, HostWindow, OrientationBus, Size, SingleWindowProvider};

    struct Fixture {
        dialog: PickerDialog,
        window: Rc<RefCell<FixedWindow>>,
        bus: Rc<OrientationBus>,
        results: Rc<RefCell<Vec<String>>>,
    }

    impl Fixture {
        fn new() -> Self {
            let window = Rc::new(RefCell::new(FixedWindow::new(Size::new(375.0, 667.0))));
            let shared: SharedWindow = window.clone();
            let bus = Rc::new(OrientationBus::new());
            let dialog = PickerDialog::new(
                Box::new(SingleWindowProvider::new(shared)),
                bus.clone(),
            );
            Self {
                dialog,
                window,
                bus,
                results: Rc::new(RefCell::new(vec![])),
            }
        }

        fn callback(&self) -> PickerCallback {
            let results = self.results.clone();
            Box::new(move |value| results.borrow_mut().push(value))
        }

        fn show(&mut self, request: ShowRequest) {
            let callback = self.callback();
            self.dialog.show(request, callback).unwrap();
        }

        /// Run the current transition to completion.
        fn settle(&mut self) {
            self.dialog.tick(TRANSITION_DURATION);
        }
    }

    fn colors() -> Vec<PickerOption> {
        vec![
            PickerOption::new("Red", "R"),
            PickerOption::new("Blue", "B"),
        ]
    }

    #[test]
    fn test_show_without_window_fails() {
        let bus = Rc::new(OrientationBus::new());
        let mut dialog =
            PickerDialog::new(Box::new(SingleWindowProvider::empty()), bus.clone());

        let result = dialog.show(ShowRequest::new("Pick", colors()), Box::new(|_| {}));
        assert!(matches!(result, Err(PickerError::NoHostWindow)));
        assert_eq!(dialog.state(), DialogState::Closed);
        assert_eq!(bus.observer_count(), 0);
    }

    #[test]
    fn test_show_rejects_double_presentation() {
        let mut fx = Fixture::new();
        fx.show(ShowRequest::new("Pick", colors()));

        let again = fx
            .dialog
            .show(ShowRequest::new("Pick", colors()), Box::new(|_| {}));
        assert!(matches!(again, Err(PickerError::AlreadyPresented("opening"))));

        // Still rejected once fully open
        fx.settle();
        let again = fx
            .dialog
            .show(ShowRequest::new("Pick", colors()), Box::new(|_| {}));
        assert!(matches!(again, Err(PickerError::AlreadyPresented("open"))));
    }

    #[test]
    fn test_show_initializes_selected_row() {
        let mut fx = Fixture::new();
        fx.show(ShowRequest::new("Pick", colors()).selected("B"));
        assert_eq!(fx.dialog.wheel().selected_index(), 1);
    }

    #[test]
    fn test_unmatched_selected_falls_back_to_row_zero() {
        let mut fx = Fixture::new();
        fx.show(ShowRequest::new("Pick", colors()).selected("X"));
        assert_eq!(fx.dialog.wheel().selected_index(), 0);
    }

    #[test]
    fn test_omitted_selected_starts_at_row_zero() {
        let mut fx = Fixture::new();
        fx.show(ShowRequest::new("Pick", colors()));
        assert_eq!(fx.dialog.wheel().selected_index(), 0);
    }

    #[test]
    fn test_show_attaches_and_dismisses_editing() {
        let mut fx = Fixture::new();
        fx.window.borrow_mut().begin_editing();
        fx.show(ShowRequest::new("Pick", colors()));

        assert_eq!(fx.window.borrow().overlay_count(), 1);
        assert!(!fx.window.borrow().is_editing());
        assert_eq!(fx.bus.observer_count(), 1);
        assert_eq!(fx.dialog.state(), DialogState::Opening);
    }

    #[test]
    fn test_opening_transition_settles_to_open() {
        let mut fx = Fixture::new();
        fx.show(ShowRequest::new("Pick", colors()));

        fx.dialog.tick(Duration::from_millis(100));
        assert_eq!(fx.dialog.state(), DialogState::Opening);

        fx.dialog.tick(Duration::from_millis(100));
        assert_eq!(fx.dialog.state(), DialogState::Open);
        assert_eq!(fx.dialog.visual_state(), VisualState::presented());
    }

    #[test]
    fn test_done_invokes_callback_exactly_once() {
        let mut fx = Fixture::new();
        fx.show(ShowRequest::new("Pick", colors()).selected("B"));
        fx.settle();

        fx.dialog.button_tapped(Button::Done).unwrap();
        assert_eq!(*fx.results.borrow(), vec!["B".to_string()]);
        assert_eq!(fx.dialog.state(), DialogState::Closing);

        // Further taps while closing are inert
        fx.dialog.button_tapped(Button::Done).unwrap();
        fx.settle();
        assert_eq!(*fx.results.borrow(), vec!["B".to_string()]);
    }

    #[test]
    fn test_scrolling_tracks_selection_without_firing() {
        let mut fx = Fixture::new();
        fx.show(ShowRequest::new("Pick", colors()));
        fx.settle();

        fx.dialog.select_next();
        assert_eq!(fx.dialog.wheel().selected_index(), 1);
        assert_eq!(fx.dialog.state(), DialogState::Open);
        assert!(fx.results.borrow().is_empty());

        fx.dialog.button_tapped(Button::Done).unwrap();
        assert_eq!(*fx.results.borrow(), vec!["B".to_string()]);
    }

    #[test]
    fn test_cancel_never_invokes_callback() {
        let mut fx = Fixture::new();
        fx.show(ShowRequest::new("Pick", colors()));
        fx.settle();

        fx.dialog.button_tapped(Button::Cancel).unwrap();
        fx.settle();

        assert!(fx.results.borrow().is_empty());
        assert_eq!(fx.dialog.state(), DialogState::Closed);
    }

    #[test]
    fn test_orientation_change_closes_without_callback() {
        let mut fx = Fixture::new();
        fx.show(ShowRequest::new("Pick", colors()));
        fx.settle();

        fx.dialog.device_orientation_changed();
        assert_eq!(fx.dialog.state(), DialogState::Closing);
        // Observer released at the start of close, not at teardown
        assert_eq!(fx.bus.observer_count(), 0);

        fx.settle();
        assert!(fx.results.borrow().is_empty());
        assert_eq!(fx.dialog.state(), DialogState::Closed);
    }

    #[test]
    fn test_teardown_leaves_no_attachments() {
        let mut fx = Fixture::new();
        fx.show(ShowRequest::new("Pick", colors()));
        fx.settle();
        fx.dialog.button_tapped(Button::Cancel).unwrap();
        fx.settle();

        assert_eq!(fx.window.borrow().overlay_count(), 0);
        assert_eq!(fx.bus.observer_count(), 0);
        assert!(fx.dialog.wheel().is_empty());
        assert!(fx.dialog.window().is_none());
    }

    #[test]
    fn test_orientation_change_mid_opening_still_closes() {
        let mut fx = Fixture::new();
        fx.show(ShowRequest::new("Pick", colors()));
        fx.dialog.tick(Duration::from_millis(50));

        fx.dialog.device_orientation_changed();
        fx.settle();

        assert_eq!(fx.dialog.state(), DialogState::Closed);
        assert_eq!(fx.window.borrow().overlay_count(), 0);
        assert!(fx.results.borrow().is_empty());
    }

    #[test]
    fn test_done_on_empty_wheel_is_refused() {
        let mut fx = Fixture::new();
        fx.show(ShowRequest::new("Pick", vec![]));
        fx.settle();

        let result = fx.dialog.button_tapped(Button::Done);
        assert!(matches!(result, Err(PickerError::EmptyOptions)));
        assert_eq!(fx.dialog.state(), DialogState::Open);
        assert!(fx.results.borrow().is_empty());

        // Cancel still works
        fx.dialog.button_tapped(Button::Cancel).unwrap();
        fx.settle();
        assert_eq!(fx.dialog.state(), DialogState::Closed);
    }

    #[test]
    fn test_show_again_after_close_succeeds() {
        let mut fx = Fixture::new();
        fx.show(ShowRequest::new("Pick", colors()));
        fx.settle();
        fx.dialog.button_tapped(Button::Cancel).unwrap();
        fx.settle();

        fx.show(ShowRequest::new("Pick again", colors()).selected("B"));
        assert_eq!(fx.dialog.state(), DialogState::Opening);
        assert_eq!(fx.dialog.wheel().selected_index(), 1);
        assert_eq!(fx.bus.observer_count(), 1);
    }

    #[test]
    fn test_focus_defaults_to_done_and_toggles() {
        let mut fx = Fixture::new();
        fx.show(ShowRequest::new("Pick", colors()));
        assert_eq!(fx.dialog.focused_button(), Button::Done);

        fx.dialog.toggle_focus();
        assert_eq!(fx.dialog.focused_button(), Button::Cancel);

        fx.settle();
        fx.dialog.activate_focused().unwrap();
        fx.settle();
        assert!(fx.results.borrow().is_empty());
        assert_eq!(fx.dialog.state(), DialogState::Closed);
    }

    #[test]
    fn test_scenario_red_blue_selected_blue() {
        // options = [Red/R, Blue/B], selected = "B": initial row 1,
        // selection untouched, Done fires once with "B".
        let mut fx = Fixture::new();
        fx.show(
            ShowRequest::new("Colour", colors())
                .done_label("OK")
                .selected("B"),
        );
        fx.settle();

        assert_eq!(fx.dialog.wheel().selected_index(), 1);
        fx.dialog.button_tapped(Button::Done).unwrap();
        fx.settle();

        assert_eq!(*fx.results.borrow(), vec!["B".to_string()]);
    }

    #[test]
    fn test_scenario_single_option_cancelled() {
        // options = [Red/R], no selection: initial row 0, Cancel never
        // fires the callback and the widget detaches.
        let mut fx = Fixture::new();
        fx.show(ShowRequest::new(
            "Colour",
            vec![PickerOption::new("Red", "R")],
        ));
        fx.settle();

        assert_eq!(fx.dialog.wheel().selected_index(), 0);
        fx.dialog.button_tapped(Button::Cancel).unwrap();
        fx.settle();

        assert!(fx.results.borrow().is_empty());
        assert_eq!(fx.window.borrow().overlay_count(), 0);
        assert_eq!(fx.bus.observer_count(), 0);
    }
}
