//! Host surface seams.
//!
//! The key window, the screen bounds and the orientation notification bus
//! are injected rather than read from process-wide globals, so the dialog
//! can be driven against a fake surface in tests and against the terminal
//! in the demo binary.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Screen or window dimensions in abstract display units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A top-level window the dialog can present over.
pub trait HostWindow {
    /// Window dimensions, which the dialog centers itself on.
    fn size(&self) -> Size;

    /// Dismiss any active text-input focus in the window.
    fn end_editing(&mut self);

    /// Record the dialog overlay as attached.
    fn attach_overlay(&mut self);

    /// Record the dialog overlay as removed.
    fn detach_overlay(&mut self);

    /// Number of overlays currently attached.
    fn overlay_count(&self) -> usize;
}

/// Shared handle to a host window. The dialog and the host loop both touch
/// the window; everything runs on one thread, so `Rc<RefCell<_>>` is enough.
pub type SharedWindow = Rc<RefCell<dyn HostWindow>>;

/// Supplies the current top-level window, if one exists.
pub trait WindowProvider {
    fn key_window(&self) -> Option<SharedWindow>;
}

/// Source of device-orientation-change notifications.
///
/// Subscription lifetime is the contract here: the guard unsubscribes on
/// drop, so every exit path releases the registration. Event delivery is the
/// host loop's job.
pub trait OrientationSource {
    fn subscribe(&self) -> OrientationGuard;

    /// Live registrations, for leak accounting.
    fn observer_count(&self) -> usize;
}

/// Disposable subscription handle. Dropping it unsubscribes.
#[derive(Debug)]
pub struct OrientationGuard {
    observers: Rc<Cell<usize>>,
}

impl Drop for OrientationGuard {
    fn drop(&mut self) {
        self.observers.set(self.observers.get().saturating_sub(1));
    }
}

/// In-process orientation notification source.
///
/// The demo maps terminal resize events onto this; tests fire it directly.
#[derive(Debug, Default)]
pub struct OrientationBus {
    observers: Rc<Cell<usize>>,
}

impl OrientationBus {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrientationSource for OrientationBus {
    fn subscribe(&self) -> OrientationGuard {
        self.observers.set(self.observers.get() + 1);
        OrientationGuard {
            observers: Rc::clone(&self.observers),
        }
    }

    fn observer_count(&self) -> usize {
        self.observers.get()
    }
}

/// A plain window over a fixed-size surface.
///
/// The demo uses one with a virtual point-space screen; tests use it as the
/// fake host.
#[derive(Debug)]
pub struct FixedWindow {
    size: Size,
    overlays: usize,
    editing: bool,
}

impl FixedWindow {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            overlays: 0,
            editing: false,
        }
    }

    /// Mark the window as having active text-input focus.
    pub fn begin_editing(&mut self) {
        self.editing = true;
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }
}

impl HostWindow for FixedWindow {
    fn size(&self) -> Size {
        self.size
    }

    fn end_editing(&mut self) {
        self.editing = false;
    }

    fn attach_overlay(&mut self) {
        self.overlays += 1;
    }

    fn detach_overlay(&mut self) {
        self.overlays = self.overlays.saturating_sub(1);
    }

    fn overlay_count(&self) -> usize {
        self.overlays
    }
}

/// Provider over a single shared window. `None` inside models the
/// no-host-window failure case.
pub struct SingleWindowProvider {
    window: Option<SharedWindow>,
}

impl SingleWindowProvider {
    pub fn new(window: SharedWindow) -> Self {
        Self {
            window: Some(window),
        }
    }

    /// A provider with no window at all.
    pub fn empty() -> Self {
        Self { window: None }
    }
}

impl WindowProvider for SingleWindowProvider {
    fn key_window(&self) -> Option<SharedWindow> {
        self.window.clone()
    }
}
