//! Form field rendering

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CURSOR: &str = "▌";

fn border_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Rows a field needs, borders included
pub fn field_height(is_multiline: bool) -> u16 {
    if is_multiline {
        5
    } else {
        3
    }
}

/// Draw a text field with a cursor when focused and a placeholder when empty
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    placeholder: &str,
    is_active: bool,
) {
    let cursor = Span::styled(CURSOR, Style::default().fg(Color::Cyan));
    let mut lines: Vec<Line> = if value.is_empty() {
        if is_active {
            vec![Line::default()]
        } else {
            vec![Line::from(Span::styled(
                placeholder.to_string(),
                Style::default().fg(Color::DarkGray),
            ))]
        }
    } else {
        value.split('\n').map(|l| Line::from(l.to_string())).collect()
    };
    if is_active {
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
    }

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style(is_active));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}

/// Draw a choice field as `◀ option ▶` with every option listed after it
pub fn draw_choice_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    options: &[&str],
    selected: Option<usize>,
    is_active: bool,
) {
    let mut spans = vec![Span::styled("◀ ", border_style(is_active))];
    for (idx, option) in options.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if Some(idx) == selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {option} "), style));
    }
    spans.push(Span::styled(" ▶", border_style(is_active)));

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style(is_active));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
