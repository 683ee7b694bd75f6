use ratatui::style::Color;
use ratatui::symbols::border;

/// Board width in board units (30 grid cells).
pub const BOARD_WIDTH: i32 = 600;

/// Board height in board units (20 grid cells).
pub const BOARD_HEIGHT: i32 = 400;

/// Fixed tick interval in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 125;

/// Upper bound on how long one input poll blocks the loop.
pub const INPUT_POLL_MS: u64 = 16;

/// Score awarded per segment grown beyond the starting two.
pub const POINTS_PER_SEGMENT: u32 = 10;

/// Colors applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub snake: Color,
    pub food: Color,
    /// Background color for empty play-area cells.
    pub play_bg: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub hud_score: Color,
    pub overlay_text: Color,
    pub overlay_hint: Color,
}

/// Green snake, red food, light overlay text.
pub const THEME: Theme = Theme {
    snake: Color::Rgb(0x21, 0xa9, 0x21),
    food: Color::Rgb(0xdb, 0x37, 0x37),
    play_bg: Color::Black,
    border_fg: Color::White,
    border_bg: Color::DarkGray,
    hud_score: Color::White,
    overlay_text: Color::Rgb(0xd9, 0xd9, 0xd9),
    overlay_hint: Color::DarkGray,
};

/// Half-block border set: solid side faces the play area.
///
/// - Top row + top corners: `▄` (solid bottom -> play area below)
/// - Bottom row + bottom corners: `▀` (solid top -> play area above)
/// - Left and right columns: `█`
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

/// Upper half-block glyph: foreground paints the upper grid row, background
/// the lower one.
pub const GLYPH_HALF_UPPER: &str = "▀";
