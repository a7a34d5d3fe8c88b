//! Fixed card geometry.
//!
//! The dialog card has a fixed, unit-space layout: 300 wide, 230 of content
//! above a 1-unit divider and a 50-unit button row, centered on the host
//! window. The presentation layer maps these unit-space frames onto terminal
//! cells proportionally.

use ratatui::layout::Rect;

use crate::host::Size;

pub const DIALOG_WIDTH: f32 = 300.0;
pub const CONTENT_HEIGHT: f32 = 230.0;
pub const BUTTON_HEIGHT: f32 = 50.0;
pub const DIVIDER_HEIGHT: f32 = 1.0;
pub const CORNER_RADIUS: f32 = 7.0;

pub const TITLE_HEIGHT: f32 = 30.0;
pub const TITLE_INSET: f32 = 10.0;

/// Total card height: content plus divider plus button row.
pub const DIALOG_HEIGHT: f32 = CONTENT_HEIGHT + BUTTON_HEIGHT + DIVIDER_HEIGHT;

/// An axis-aligned rectangle in unit space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl UnitRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// The card's frame, centered on the screen.
pub fn dialog_frame(screen: Size) -> UnitRect {
    UnitRect::new(
        (screen.width - DIALOG_WIDTH) / 2.0,
        (screen.height - DIALOG_HEIGHT) / 2.0,
        DIALOG_WIDTH,
        DIALOG_HEIGHT,
    )
}

/// Title strip across the top of the card, inset on both sides.
pub fn title_frame(card: UnitRect) -> UnitRect {
    UnitRect::new(
        card.x + TITLE_INSET,
        card.y + TITLE_INSET,
        card.width - 2.0 * TITLE_INSET,
        TITLE_HEIGHT,
    )
}

/// Wheel area: everything between the title strip and the divider.
pub fn wheel_frame(card: UnitRect) -> UnitRect {
    let top = TITLE_INSET + TITLE_HEIGHT;
    UnitRect::new(
        card.x,
        card.y + top,
        card.width,
        CONTENT_HEIGHT - top,
    )
}

/// The 1-unit line separating the wheel from the buttons.
pub fn divider_frame(card: UnitRect) -> UnitRect {
    UnitRect::new(
        card.x,
        card.y + card.height - BUTTON_HEIGHT - DIVIDER_HEIGHT,
        card.width,
        DIVIDER_HEIGHT,
    )
}

/// Cancel sits in the left half of the button row.
pub fn cancel_frame(card: UnitRect) -> UnitRect {
    UnitRect::new(
        card.x,
        card.y + card.height - BUTTON_HEIGHT,
        card.width / 2.0,
        BUTTON_HEIGHT,
    )
}

/// Done sits in the right half of the button row.
pub fn done_frame(card: UnitRect) -> UnitRect {
    UnitRect::new(
        card.x + card.width / 2.0,
        card.y + card.height - BUTTON_HEIGHT,
        card.width / 2.0,
        BUTTON_HEIGHT,
    )
}

/// Scale a rect around its own center, for the card's grow/shrink
/// transitions.
pub fn scaled(rect: UnitRect, factor: f32) -> UnitRect {
    let width = rect.width * factor;
    let height = rect.height * factor;
    UnitRect::new(
        rect.x + (rect.width - width) / 2.0,
        rect.y + (rect.height - height) / 2.0,
        width,
        height,
    )
}

/// Map a unit-space rect onto terminal cells, proportionally to how `area`
/// covers the unit-space screen.
pub fn to_cells(rect: UnitRect, screen: Size, area: Rect) -> Rect {
    if screen.width <= 0.0 || screen.height <= 0.0 {
        return Rect::new(area.x, area.y, 0, 0);
    }

    let sx = area.width as f32 / screen.width;
    let sy = area.height as f32 / screen.height;

    let x = area.x + (rect.x * sx).round() as u16;
    let y = area.y + (rect.y * sy).round() as u16;
    let width = (rect.width * sx).round().max(1.0) as u16;
    let height = (rect.height * sy).round().max(1.0) as u16;

    // Clamp to the drawable area
    let x = x.min(area.right().saturating_sub(1));
    let y = y.min(area.bottom().saturating_sub(1));
    let width = width.min(area.right() - x);
    let height = height.min(area.bottom() - y);

    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_height_total() {
        assert_eq!(DIALOG_HEIGHT, 281.0);
    }

    #[test]
    fn test_card_is_centered() {
        let frame = dialog_frame(Size::new(375.0, 667.0));
        assert_eq!(frame.x, (375.0 - 300.0) / 2.0);
        assert_eq!(frame.y, (667.0 - 281.0) / 2.0);
        assert_eq!(frame.width, 300.0);
        assert_eq!(frame.height, 281.0);
    }

    #[test]
    fn test_buttons_split_card_evenly() {
        let card = dialog_frame(Size::new(375.0, 667.0));
        let cancel = cancel_frame(card);
        let done = done_frame(card);

        assert_eq!(cancel.width, 150.0);
        assert_eq!(done.width, 150.0);
        assert_eq!(cancel.x + cancel.width, done.x);
        assert_eq!(cancel.y, done.y);
        assert_eq!(cancel.y + BUTTON_HEIGHT, card.y + card.height);
    }

    #[test]
    fn test_divider_sits_above_buttons() {
        let card = dialog_frame(Size::new(375.0, 667.0));
        let divider = divider_frame(card);
        let cancel = cancel_frame(card);

        assert_eq!(divider.height, 1.0);
        assert_eq!(divider.y + divider.height, cancel.y);
        assert_eq!(divider.width, card.width);
    }

    #[test]
    fn test_wheel_fills_content_between_title_and_divider() {
        let card = dialog_frame(Size::new(375.0, 667.0));
        let wheel = wheel_frame(card);
        let divider = divider_frame(card);

        assert_eq!(wheel.y, card.y + TITLE_INSET + TITLE_HEIGHT);
        assert_eq!(wheel.y + wheel.height, divider.y);
    }

    #[test]
    fn test_scaled_keeps_center() {
        let rect = UnitRect::new(100.0, 100.0, 200.0, 100.0);
        let grown = scaled(rect, 1.5);

        assert_eq!(grown.width, 300.0);
        assert_eq!(grown.height, 150.0);
        // Center is unchanged
        assert_eq!(grown.x + grown.width / 2.0, rect.x + rect.width / 2.0);
        assert_eq!(grown.y + grown.height / 2.0, rect.y + rect.height / 2.0);
    }

    #[test]
    fn test_to_cells_scales_proportionally() {
        let screen = Size::new(300.0, 200.0);
        let area = Rect::new(0, 0, 150, 50);
        let cells = to_cells(UnitRect::new(100.0, 100.0, 100.0, 50.0), screen, area);

        assert_eq!(cells.x, 50);
        assert_eq!(cells.y, 25);
        assert_eq!(cells.width, 50);
        assert_eq!(cells.height, 13);
    }

    #[test]
    fn test_to_cells_clamps_to_area() {
        let screen = Size::new(100.0, 100.0);
        let area = Rect::new(0, 0, 20, 20);
        let cells = to_cells(UnitRect::new(90.0, 90.0, 50.0, 50.0), screen, area);

        assert!(cells.right() <= area.right());
        assert!(cells.bottom() <= area.bottom());
    }
}
