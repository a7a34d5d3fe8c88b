//! A modal picker dialog for terminal UIs.
//!
//! [`PickerDialog`] presents a wheel-style selector over the host surface
//! with Cancel/Done actions and delivers the result through a one-shot
//! callback. The host window, screen geometry and orientation notifications
//! are injected through the traits in [`host`], so the lifecycle contract is
//! testable without a terminal; the [`tui`] module renders the dialog with
//! ratatui.
//!
//! ```no_run
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use pickerdialog::host::{FixedWindow, OrientationBus, Size, SingleWindowProvider};
//! use pickerdialog::{PickerDialog, PickerOption, ShowRequest};
//!
//! let window = Rc::new(RefCell::new(FixedWindow::new(Size::new(375.0, 667.0))));
//! let mut dialog = PickerDialog::new(
//!     Box::new(SingleWindowProvider::new(window)),
//!     Rc::new(OrientationBus::new()),
//! );
//!
//! let options = vec![
//!     PickerOption::new("Red", "R"),
//!     PickerOption::new("Blue", "B"),
//! ];
//! dialog.show(
//!     ShowRequest::new("Pick a colour", options).selected("B"),
//!     Box::new(|value| println!("picked {value}")),
//! )?;
//! # Ok::<(), pickerdialog::PickerError>(())
//! ```

pub mod animation;
pub mod config;
pub mod dialog;
pub mod error;
pub mod events;
pub mod host;
pub mod layout;
pub mod log;
pub mod options;
pub mod tui;
pub mod wheel;

pub use dialog::{Button, DialogState, PickerCallback, PickerDialog, ShowRequest};
pub use error::{PickerError, Result};
pub use options::PickerOption;
