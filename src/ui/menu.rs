use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;

/// Draws the pause screen as a centered popup.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let hints = ["[P] Resume", "[Q] Quit"];
    render_popup(frame, area, "PAUSED", &[], &hints, theme);
}

/// Draws the game-over screen with the final score.
pub fn render_game_over_menu(frame: &mut Frame<'_>, area: Rect, score: u32, theme: &Theme) {
    let score_text = format!("Score: {score}");
    let hints = ["[R] Play Again", "[Q] Quit"];
    render_popup(frame, area, "GAME OVER", &[score_text.as_str()], &hints, theme);
}

fn render_popup(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    body: &[&str],
    hints: &[&str],
    theme: &Theme,
) {
    let mut lines = vec![Line::styled(
        title.to_owned(),
        Style::new()
            .fg(theme.overlay_text)
            .add_modifier(Modifier::BOLD),
    )];
    lines.extend(
        body.iter()
            .map(|text| Line::styled((*text).to_owned(), Style::new().fg(theme.overlay_text))),
    );
    lines.push(Line::from(""));
    lines.extend(
        hints
            .iter()
            .map(|text| Line::styled((*text).to_owned(), Style::new().fg(theme.overlay_hint))),
    );

    let (width, height) = popup_size(title, body, hints);
    let popup = centered_popup(area, width, height);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered()),
        popup,
    );
}

/// Popup size in terminal cells: widest line plus padding, one row per line
/// plus the spacer and borders.
fn popup_size(title: &str, body: &[&str], hints: &[&str]) -> (u16, u16) {
    let widest = std::iter::once(title)
        .chain(body.iter().copied())
        .chain(hints.iter().copied())
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or(0);
    let rows = 1 + body.len() + 1 + hints.len();

    (
        u16::try_from(widest + 4).unwrap_or(u16::MAX),
        u16::try_from(rows + 2).unwrap_or(u16::MAX),
    )
}

fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let [mid] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);

    let [center] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(mid);

    center
}
