use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{CELL_WIDTH, GLYPH_CELL, Theme};
use crate::game::Round;
use crate::grid::{Cell, Grid};
use crate::snake::Snake;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_start_menu};

/// Per-frame presentation inputs that are not part of the round itself.
#[derive(Debug, Clone, Copy)]
pub struct ViewInfo<'a> {
    pub theme: &'a Theme,
    pub show_start_screen: bool,
}

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, round: &Round, view: ViewInfo<'_>) {
    let grid = round.grid();
    let state = round.state();
    let theme = view.theme;

    let board_area = board_rect(frame.area(), grid);
    let play_area = render_hud(frame, board_area, round, theme);

    let block = Block::bordered()
        .border_style(Style::new().fg(theme.border_fg))
        .style(Style::new().bg(theme.play_bg));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_cell(frame, inner, grid, state.food, Style::new().fg(theme.food));
    render_snake(frame, inner, grid, &state.user, theme.user_head, theme.user_body);
    render_snake(frame, inner, grid, &state.ai, theme.ai_head, theme.ai_body);

    if view.show_start_screen {
        render_start_menu(frame, play_area, theme);
        return;
    }

    if state.is_over() {
        render_game_over_menu(frame, play_area, state, theme);
    }
}

/// Centers the bordered board plus its HUD row inside `area`.
fn board_rect(area: Rect, grid: Grid) -> Rect {
    let width = grid.size().saturating_mul(CELL_WIDTH).saturating_add(2);
    let height = grid.size().saturating_add(3);

    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [board] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);

    board
}

fn render_snake(
    frame: &mut Frame<'_>,
    inner: Rect,
    grid: Grid,
    snake: &Snake,
    head_color: Color,
    body_color: Color,
) {
    let head = snake.head();
    for segment in snake.segments() {
        let style = if *segment == head {
            Style::new().fg(head_color).add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(body_color)
        };
        render_cell(frame, inner, grid, *segment, style);
    }
}

fn render_cell(frame: &mut Frame<'_>, inner: Rect, grid: Grid, cell: Cell, style: Style) {
    let Some((x, y)) = logical_to_terminal(inner, grid, cell) else {
        return;
    };

    frame.buffer_mut().set_string(x, y, GLYPH_CELL, style);
}

/// Maps a grid cell to the terminal column/row of its left half, or `None`
/// when the cell would fall outside the drawable area.
fn logical_to_terminal(inner: Rect, grid: Grid, cell: Cell) -> Option<(u16, u16)> {
    if !grid.in_bounds(cell) {
        return None;
    }

    let x_offset = u16::try_from(cell.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(cell.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
