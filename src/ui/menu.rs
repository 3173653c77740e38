use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::game::{GameState, Side};
use crate::snake::DeathReason;

/// Draws the start screen as a centered popup.
pub fn render_start_menu(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::from("DUEL SNAKE").style(
            Style::default()
                .fg(theme.overlay_title)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from("You (green) vs. the pathfinder (cyan)"),
        Line::from(""),
        Line::from("[Enter]/[Space] Start"),
        Line::from("[Q]/[Esc] Quit"),
        Line::from(""),
        Line::from("Arrows/WASD to steer").style(Style::default().fg(theme.overlay_footer)),
    ];

    render_popup(frame, area, lines, " start ");
}

/// Draws the game-over screen with final scores and each side's cause of death.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &GameState,
    theme: &Theme,
) {
    let mut lines = vec![
        Line::from("Game Over").style(
            Style::default()
                .fg(theme.overlay_title)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!(
            "User: {}   AI: {}",
            state.score(Side::User),
            state.score(Side::Ai)
        )),
        Line::from(""),
    ];

    for side in [Side::User, Side::Ai] {
        if let Some(reason) = state.death(side) {
            lines.push(Line::from(death_text(side, reason)));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from("[Enter]/[R] Play Again"));
    lines.push(Line::from("[Q]/[Esc] Quit").style(Style::default().fg(theme.overlay_footer)));

    render_popup(frame, area, lines, " game over ");
}

fn death_text(side: Side, reason: DeathReason) -> String {
    let who = match side {
        Side::User => "You",
        Side::Ai => "AI",
    };
    let cause = match reason {
        DeathReason::Wall => "hit the wall",
        DeathReason::SelfCollision => "ran into itself",
        DeathReason::OpponentCollision => "ran into the other snake",
    };
    format!("{who} {cause}")
}

fn render_popup(frame: &mut Frame<'_>, area: Rect, lines: Vec<Line<'_>>, title: &str) {
    let popup = centered_popup(area, &lines);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(title)),
        popup,
    );
}

/// Sizes the popup to its widest line (by display width) plus border and
/// padding, clamped to `area`.
fn centered_popup(area: Rect, lines: &[Line<'_>]) -> Rect {
    let content_width = lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref().width())
                .sum::<usize>()
        })
        .max()
        .unwrap_or(0);
    let width = u16::try_from(content_width + 4).unwrap_or(u16::MAX);
    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);

    let [_, mid, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(area.height)),
        Constraint::Fill(1),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width.min(area.width)),
        Constraint::Fill(1),
    ])
    .areas(mid);

    center
}
