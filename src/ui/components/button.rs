//! Button component for TUI

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a generic button with border
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_selected: bool,
    is_enabled: bool,
) {
    render_colored_button(frame, area, content, Color::Cyan, is_selected, is_enabled);
}

/// Button drawn in an accent color when selected (Continue, Submit)
pub fn render_colored_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    accent: Color,
    is_selected: bool,
    is_enabled: bool,
) {
    let (border_style, text_style) = if !is_enabled {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray),
        )
    } else if is_selected {
        (
            Style::default().fg(accent),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )
    } else {
        (Style::default().fg(Color::Gray), Style::default())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let paragraph = Paragraph::new(format!(" {content} "))
        .style(text_style)
        .centered();

    frame.render_widget(paragraph.block(block), area);
}

/// Stack of menu buttons, top-aligned. Falls back to a plain column of
/// labels when the area is too short for boxed buttons.
pub fn render_menu_buttons(frame: &mut Frame, area: Rect, labels: &[&str], selected: usize) {
    let needed = BUTTON_HEIGHT * labels.len() as u16;
    if area.height < needed {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(labels.iter().map(|_| Constraint::Length(1)))
            .split(area);
        for (idx, (label, row)) in labels.iter().zip(rows.iter()).enumerate() {
            let style = if idx == selected {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let marker = if idx == selected { "▸ " } else { "  " };
            frame.render_widget(Paragraph::new(format!("{marker}{label}")).style(style), *row);
        }
        return;
    }

    let mut constraints: Vec<Constraint> = labels
        .iter()
        .map(|_| Constraint::Length(BUTTON_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (idx, label) in labels.iter().enumerate() {
        render_button(frame, rows[idx], label, idx == selected, true);
    }
}
