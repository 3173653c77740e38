use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::game::{Round, Side};

/// Renders the score row above the board and returns the remaining area.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, round: &Round, theme: &Theme) -> Rect {
    let [hud_area, play_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    let state = round.state();
    let scores = score_line(state.score(Side::User), state.score(Side::Ai), theme);
    let status = status_text(state.tick_count, state.ai_distance_to_food(round.grid()));

    let scores_width = u16::try_from(scores.width()).unwrap_or(u16::MAX);
    let [left, right] =
        Layout::horizontal([Constraint::Length(scores_width), Constraint::Min(0)]).areas(hud_area);

    frame.render_widget(Paragraph::new(scores), left);
    if usize::from(right.width) > status.width() {
        frame.render_widget(
            Paragraph::new(Line::from(status).right_aligned())
                .style(Style::default().fg(theme.hud_label)),
            right,
        );
    }

    play_area
}

fn score_line(user: u32, ai: u32, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        label("User: ", theme.hud_label),
        value(user, theme.user_head),
        Span::raw("  "),
        label("AI: ", theme.hud_label),
        value(ai, theme.ai_head),
    ])
}

fn label(text: &'static str, color: Color) -> Span<'static> {
    Span::styled(text, Style::default().fg(color))
}

fn value(score: u32, color: Color) -> Span<'static> {
    Span::styled(
        score.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

/// Tick counter plus the opponent's current path length to the food.
fn status_text(tick: u64, ai_distance: Option<usize>) -> String {
    let distance = ai_distance.map_or_else(|| "-".to_owned(), |steps| steps.to_string());
    format!("t {tick} · path {distance}")
}
