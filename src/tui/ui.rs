use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::dialog::PickerDialog;
use super::components::render_picker_dialog;
use super::theme::*;

/// Render the demo screen with the dialog overlay on top when presented.
pub fn render(frame: &mut Frame, dialog: &PickerDialog, last_result: Option<&str>) {
    let area = frame.area();

    let main_layout = Layout::vertical([
        Constraint::Length(2), // Header
        Constraint::Min(0),    // Content
        Constraint::Length(1), // Hotkeys
    ])
    .split(area);

    frame.render_widget(
        Paragraph::new(Line::styled(
            "pickerdialog",
            Style::new().fg(TEXT_WHITE).bold(),
        ))
        .alignment(Alignment::Center),
        main_layout[0],
    );

    let mut content: Vec<Line> = vec![Line::raw("")];
    match last_result {
        Some(value) => {
            content.push(Line::from(vec![
                Span::styled("Last pick: ", Style::new().fg(TEXT_DIM)),
                Span::styled(value.to_string(), Style::new().fg(TEXT_WHITE).bold()),
            ]));
        }
        None => {
            content.push(Line::styled(
                "No selection made yet.",
                Style::new().fg(TEXT_DIM),
            ));
        }
    }
    frame.render_widget(
        Paragraph::new(content).alignment(Alignment::Center),
        main_layout[1],
    );

    let hotkeys = if dialog.is_presented() {
        Line::from(vec![
            Span::styled("[↑/↓]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" scroll · ", Style::new().fg(TEXT_DIM)),
            Span::styled("[←/→/Tab]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" focus · ", Style::new().fg(TEXT_DIM)),
            Span::styled("[Enter]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" tap · ", Style::new().fg(TEXT_DIM)),
            Span::styled("[Esc]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" cancel", Style::new().fg(TEXT_DIM)),
        ])
    } else {
        Line::from(vec![
            Span::styled("[p]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" open picker · ", Style::new().fg(TEXT_DIM)),
            Span::styled("[q]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" quit", Style::new().fg(TEXT_DIM)),
        ])
    };
    frame.render_widget(
        Paragraph::new(hotkeys).alignment(Alignment::Center),
        main_layout[2],
    );

    render_picker_dialog(frame, area, dialog);
}
