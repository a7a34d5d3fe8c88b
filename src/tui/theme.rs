use ratatui::style::Color;

// Alert-style card palette
pub const CARD_BG: Color = Color::Rgb(233, 233, 233); // #E9E9E9
pub const CARD_BG_EDGE: Color = Color::Rgb(218, 218, 218); // gradient edges #DADADA
pub const CARD_BORDER: Color = Color::Rgb(198, 198, 198); // #C6C6C6
pub const TITLE_TEXT: Color = Color::Rgb(51, 51, 51); // #333333

// Wheel rows
pub const ROW_TEXT: Color = Color::Rgb(51, 51, 51);
pub const ROW_DIM: Color = Color::Rgb(136, 136, 136); // #888888

// Buttons
pub const BUTTON_TINT: Color = Color::Rgb(22, 131, 251); // #1683FB

// Backdrop behind the card
pub const BACKDROP: Color = Color::Rgb(25, 25, 25);

// Demo screen
pub const TEXT_WHITE: Color = Color::Rgb(255, 255, 255);
pub const TEXT_DIM: Color = Color::Rgb(136, 136, 136);
