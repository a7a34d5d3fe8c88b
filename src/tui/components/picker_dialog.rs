//! Picker dialog overlay component.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::animation::BACKDROP_ALPHA;
use crate::dialog::{Button, PickerDialog};
use crate::layout::{
    cancel_frame, dialog_frame, divider_frame, done_frame, scaled, title_frame, to_cells,
    wheel_frame,
};
use crate::tui::theme::*;

/// Render the dialog over `area`: backdrop, card, title, wheel, divider and
/// the two buttons. Geometry comes from the unit-space layout mapped onto
/// terminal cells; the current transition's visual state drives scale and
/// the dimmed look at the edges of open/close.
pub fn render_picker_dialog(frame: &mut Frame, area: Rect, dialog: &PickerDialog) {
    if !dialog.is_presented() {
        return;
    }
    let Some(window) = dialog.window() else {
        return;
    };
    let screen = window.borrow().size();
    let visual = dialog.visual_state();

    // Backdrop fades toward 40% black; past half strength it reads as "on"
    if visual.backdrop_alpha >= BACKDROP_ALPHA / 2.0 {
        frame.render_widget(Block::default().style(Style::new().bg(BACKDROP)), area);
    }

    if visual.card_opacity <= 0.05 {
        return;
    }

    let card_unit = scaled(dialog_frame(screen), visual.card_scale);
    let card = to_cells(card_unit, screen, area);
    if card.width < 8 || card.height < 6 {
        return;
    }

    // Approximate sub-unit opacity with a dimmed palette
    let dim = visual.card_opacity < 0.75;
    let card_style = if dim {
        Style::new().bg(CARD_BG_EDGE).fg(ROW_DIM)
    } else {
        Style::new().bg(CARD_BG).fg(ROW_TEXT)
    };

    frame.render_widget(Clear, card);
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::new().fg(CARD_BORDER).bg(CARD_BG))
            .style(card_style),
        card,
    );

    let title_area = to_cells(title_frame(card_unit), screen, area);
    frame.render_widget(
        Paragraph::new(Line::styled(
            dialog.title().to_string(),
            Style::new().fg(TITLE_TEXT).bold(),
        ))
        .alignment(Alignment::Center),
        title_area,
    );

    render_wheel(frame, to_cells(wheel_frame(card_unit), screen, area), dialog, dim);

    let divider = to_cells(divider_frame(card_unit), screen, area);
    frame.render_widget(Block::default().style(Style::new().bg(CARD_BORDER)), divider);

    render_button(
        frame,
        to_cells(cancel_frame(card_unit), screen, area),
        dialog.cancel_label(),
        dialog.focused_button() == Button::Cancel,
    );
    render_button(
        frame,
        to_cells(done_frame(card_unit), screen, area),
        dialog.done_label(),
        dialog.focused_button() == Button::Done,
    );
}

/// Draw the wheel rows with the highlighted one centered between its dim
/// neighbours.
fn render_wheel(frame: &mut Frame, area: Rect, dialog: &PickerDialog, dim: bool) {
    let wheel = dialog.wheel();
    if wheel.is_empty() || area.height == 0 {
        return;
    }

    let center = area.height as isize / 2;
    let selected = wheel.selected_index() as isize;

    let mut lines: Vec<Line> = Vec::with_capacity(area.height as usize);
    for slot in 0..area.height as isize {
        let row = selected + slot - center;
        if row < 0 || row as usize >= wheel.len() {
            lines.push(Line::raw(""));
            continue;
        }

        let option = &wheel.rows()[row as usize];
        let is_selected = row == selected;

        let base = dialog
            .row_style()
            .unwrap_or_else(|| Style::new().fg(ROW_TEXT));
        let style = if is_selected && !dim {
            base.bold()
        } else {
            Style::new().fg(ROW_DIM)
        };

        let text = if is_selected {
            format!("▸ {} ◂", option.display)
        } else {
            option.display.clone()
        };
        lines.push(Line::styled(text, style));
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// One of the two bottom buttons, label vertically centered, focused button
/// inverted in the tint color.
fn render_button(frame: &mut Frame, area: Rect, label: &str, focused: bool) {
    if area.height == 0 {
        return;
    }

    let style = if focused {
        Style::new().fg(TEXT_WHITE).bg(BUTTON_TINT).bold()
    } else {
        Style::new().fg(BUTTON_TINT).bg(CARD_BG)
    };

    let mut lines: Vec<Line> = Vec::with_capacity(area.height as usize);
    for _ in 0..area.height / 2 {
        lines.push(Line::raw(""));
    }
    lines.push(Line::styled(label.to_string(), style));

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).style(style),
        area,
    );
}
