use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Theme;

const CONTROLS_HINT: &str = "WASD/arrows  P pause  R reset  Q quit";

/// Renders the score line under the board.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, score: u32, theme: &Theme) {
    frame.render_widget(
        Paragraph::new(score_line(score, usize::from(area.width), theme))
            .alignment(Alignment::Left),
        area,
    );
}

/// Builds `Score: N`, followed by the controls hint when it fits.
fn score_line(score: u32, available_width: usize, theme: &Theme) -> Line<'static> {
    let score_text = format!("Score: {score}");
    let mut spans = vec![Span::styled(
        score_text.clone(),
        Style::new().fg(theme.hud_score).add_modifier(Modifier::BOLD),
    )];

    let used = score_text.len() + 2 + CONTROLS_HINT.len();
    if used <= available_width {
        let gap = available_width - used + 2;
        spans.push(Span::raw(" ".repeat(gap)));
        spans.push(Span::styled(CONTROLS_HINT, Style::new().fg(theme.overlay_hint)));
    }

    Line::from(spans)
}
