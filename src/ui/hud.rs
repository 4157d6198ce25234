use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Theme;
use crate::engine::Snapshot;

/// Renders the one-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, snapshot: &Snapshot, theme: &Theme) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let line = Line::from(vec![
        Span::styled(
            format!(" score {}", snapshot.score),
            Style::new()
                .fg(theme.hud_fg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("  length {}", snapshot.snake.len())),
        Span::raw(format!("  tick {} ms", snapshot.tick_interval.as_millis())),
        Span::raw(format!("  grid {0}x{0}", snapshot.tile_count)),
    ]);

    frame.render_widget(
        Paragraph::new(line)
            .alignment(Alignment::Left)
            .style(Style::new().fg(theme.hud_fg)),
        hud_area,
    );

    play_area
}
