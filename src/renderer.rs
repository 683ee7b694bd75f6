use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Block;

use crate::config::{BORDER_HALF_BLOCK, GLYPH_HALF_UPPER, THEME, Theme};
use crate::game::{GameState, GameStatus};
use crate::grid::GRID_UNIT;
use crate::surface::{Paint, Surface};
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_pause_menu};

/// Grid-cell raster that entity squares are painted into.
///
/// Each requested square is mapped back to the grid cell containing its
/// top-left corner; squares outside the board are dropped.
#[derive(Debug, Clone)]
pub struct TerminalSurface {
    columns: usize,
    rows: usize,
    cells: Vec<Option<Paint>>,
}

impl TerminalSurface {
    /// Creates an empty raster for a `width x height` board.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        let columns = usize::try_from(width / GRID_UNIT).unwrap_or(0);
        let rows = usize::try_from(height / GRID_UNIT).unwrap_or(0);

        Self {
            columns,
            rows,
            cells: vec![None; columns * rows],
        }
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns what was painted at grid `(column, row)`.
    #[must_use]
    pub fn paint_at(&self, column: usize, row: usize) -> Option<Paint> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.cells[row * self.columns + column]
    }

    /// Terminal rows needed when two grid rows share one terminal row.
    #[must_use]
    pub fn terminal_rows(&self) -> usize {
        self.rows.div_ceil(2)
    }
}

impl Surface for TerminalSurface {
    fn fill_square(&mut self, x: i32, y: i32, _size: i32, paint: Paint) {
        let (Ok(column), Ok(row)) = (
            usize::try_from(x.div_euclid(GRID_UNIT)),
            usize::try_from(y.div_euclid(GRID_UNIT)),
        ) else {
            return;
        };

        if column < self.columns && row < self.rows {
            self.cells[row * self.columns + column] = Some(paint);
        }
    }
}

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState) {
    let (width, height) = state.bounds();
    let mut surface = TerminalSurface::new(width, height);
    state.draw(&mut surface);

    let board_width = u16::try_from(surface.columns() + 2).unwrap_or(u16::MAX);
    let board_height = u16::try_from(surface.terminal_rows() + 2).unwrap_or(u16::MAX);

    let [board_area, hud_area] = Layout::vertical([
        Constraint::Length(board_height),
        Constraint::Length(1),
    ])
    .flex(Flex::Center)
    .areas(frame.area());
    let [board_area] = Layout::horizontal([Constraint::Length(board_width)])
        .flex(Flex::Center)
        .areas(board_area);
    let [hud_area] = Layout::horizontal([Constraint::Length(board_width)])
        .flex(Flex::Center)
        .areas(hud_area);

    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(THEME.border_fg).bg(THEME.border_bg));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    render_board(frame, inner, &surface, &THEME);
    render_hud(frame, hud_area, state.current_score(), &THEME);

    match state.status {
        GameStatus::Paused => render_pause_menu(frame, board_area, &THEME),
        GameStatus::Ended => render_game_over_menu(frame, board_area, state.current_score(), &THEME),
        GameStatus::Running => {}
    }
}

fn render_board(frame: &mut Frame<'_>, inner: Rect, surface: &TerminalSurface, theme: &Theme) {
    let buffer = frame.buffer_mut();

    for terminal_row in 0..surface.terminal_rows() {
        let Ok(y_offset) = u16::try_from(terminal_row) else {
            break;
        };
        let y = inner.y.saturating_add(y_offset);
        if y >= inner.bottom() {
            break;
        }

        for column in 0..surface.columns() {
            let Ok(x_offset) = u16::try_from(column) else {
                break;
            };
            let x = inner.x.saturating_add(x_offset);
            if x >= inner.right() {
                break;
            }

            let upper = surface.paint_at(column, terminal_row * 2);
            let lower = surface.paint_at(column, terminal_row * 2 + 1);
            let style = Style::new()
                .fg(paint_color(upper, theme))
                .bg(paint_color(lower, theme));
            buffer.set_string(x, y, GLYPH_HALF_UPPER, style);
        }
    }
}

fn paint_color(paint: Option<Paint>, theme: &Theme) -> Color {
    match paint {
        Some(Paint::Snake) => theme.snake,
        Some(Paint::Food) => theme.food,
        None => theme.play_bg,
    }
}
