use std::cell::RefCell;
use std::io::stdout;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::prelude::*;

use pickerdialog::config::Config;
use pickerdialog::events::{Action, handle_key_event};
use pickerdialog::host::{FixedWindow, OrientationBus, Size, SingleWindowProvider};
use pickerdialog::tui::ui;
use pickerdialog::{Button, PickerDialog, log};

/// Point-space screen the card geometry is computed against; the renderer
/// maps it onto whatever cell grid the terminal provides.
const VIRTUAL_SCREEN: Size = Size {
    width: 375.0,
    height: 667.0,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    let config = Config::load();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, config).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    config: Config,
) -> Result<()> {
    let window = Rc::new(RefCell::new(FixedWindow::new(VIRTUAL_SCREEN)));
    let mut dialog = PickerDialog::new(
        Box::new(SingleWindowProvider::new(window)),
        Rc::new(OrientationBus::new()),
    );

    let last_result: Rc<RefCell<Option<String>>> = Rc::new(RefCell::new(None));

    let mut events = EventStream::new();
    let mut interval = tokio::time::interval(Duration::from_millis(config.tick_ms.max(1)));
    let mut last_tick = Instant::now();
    let mut should_quit = false;

    while !should_quit {
        terminal.draw(|frame| ui::render(frame, &dialog, last_result.borrow().as_deref()))?;

        tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        let action = handle_key_event(dialog.is_presented(), key);
                        apply_action(action, &mut dialog, &config, &last_result, &mut should_quit);
                    }
                    // Terminal resize is the orientation-change analog
                    Some(Ok(Event::Resize(_, _))) => {
                        dialog.device_orientation_changed();
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => should_quit = true,
                }
            }
            _ = interval.tick() => {
                let now = Instant::now();
                dialog.tick(now - last_tick);
                last_tick = now;
            }
        }
    }

    Ok(())
}

fn apply_action(
    action: Action,
    dialog: &mut PickerDialog,
    config: &Config,
    last_result: &Rc<RefCell<Option<String>>>,
    should_quit: &mut bool,
) {
    match action {
        Action::Quit => *should_quit = true,
        Action::OpenPicker => {
            let slot = last_result.clone();
            let outcome = dialog.show(
                config.to_request(),
                Box::new(move |value| *slot.borrow_mut() = Some(value)),
            );
            if let Err(e) = outcome {
                log::log_event(&format!("show refused: {}", e));
            }
        }
        Action::ScrollUp => dialog.select_prev(),
        Action::ScrollDown => dialog.select_next(),
        Action::FocusCancel => dialog.focus_button(Button::Cancel),
        Action::FocusDone => dialog.focus_button(Button::Done),
        Action::ToggleFocus => dialog.toggle_focus(),
        Action::Activate => {
            if let Err(e) = dialog.activate_focused() {
                log::log_event(&format!("done refused: {}", e));
            }
        }
        Action::Cancel => {
            // Cancel never fails and never reports a value
            let _ = dialog.button_tapped(Button::Cancel);
        }
        Action::None => {}
    }
}
