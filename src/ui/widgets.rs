//! Reusable UI widget helpers

use crate::state::Stat;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListState, Paragraph},
    Frame,
};

use super::components::trend_span;

/// Render a scrollable list that automatically keeps the selected item visible.
///
/// Wraps `render_stateful_widget` with a `ListState` so the list scrolls to
/// keep the selected item in view.
pub fn render_scrollable_list(frame: &mut Frame, area: Rect, list: List, selected_index: usize) {
    let mut list_state = ListState::default().with_selected(Some(selected_index));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Bold heading line used between sections of a page
pub fn section_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Row of stat cards, each a bordered box with value and optional change
pub fn render_stat_cards(frame: &mut Frame, area: Rect, stats: &[Stat]) {
    if stats.is_empty() {
        return;
    }
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(stats.iter().map(|_| Constraint::Ratio(1, stats.len() as u32)))
        .split(area);

    for (stat, card) in stats.iter().zip(cards.iter()) {
        let mut value_line = vec![Span::styled(
            stat.value.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )];
        if let Some(change) = &stat.change {
            value_line.push(Span::raw(" "));
            value_line.push(trend_span(change, stat.trend));
        }
        let block = Block::default()
            .title(format!(" {} ", stat.label))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        frame.render_widget(Paragraph::new(Line::from(value_line)).block(block), *card);
    }
}

/// Pad or cut `text` to exactly `width` columns
pub fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if width == 0 {
        String::new()
    } else if count > width {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    } else {
        format!("{text:<width$}")
    }
}
