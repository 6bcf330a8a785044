//! Modal dialog overlay

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const DIALOG_MAX_WIDTH: u16 = 60;
/// Two columns of padding on each side of the message
const DIALOG_PADDING: u16 = 4;

/// Render the error dialog centered over the current view
pub fn render_error_dialog(frame: &mut Frame, message: &str) {
    let key = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let hint = Line::from(vec![
        Span::raw("Press "),
        Span::styled("Enter", key),
        Span::raw(" or "),
        Span::styled("Esc", key),
        Span::raw(" to dismiss"),
    ]);

    let wrapped = wrap_text(message, (DIALOG_MAX_WIDTH - DIALOG_PADDING - 2) as usize);
    let widest = wrapped
        .iter()
        .map(|l| l.chars().count())
        .chain([hint.width()])
        .max()
        .unwrap_or(0) as u16;
    // title + blank + message + blank + hint + borders
    let height = wrapped.len() as u16 + 6;
    let area = centered_rect(frame.area(), widest + DIALOG_PADDING + 2, height);

    let mut lines = vec![
        Line::from(Span::styled(
            "Error",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(wrapped.into_iter().map(Line::from));
    lines.push(Line::from(""));
    lines.push(hint);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).centered().block(block), area);
}

/// Rect of at most `width` x `height` centered in `area`
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width).min(DIALOG_MAX_WIDTH);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Greedy word wrap; explicit newlines start a new paragraph
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let needed = current.chars().count() + word.chars().count() + 1;
            if !current.is_empty() && needed > max_width {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_breaks_on_word_boundaries() {
        let lines = wrap_text("equipment EQ-777 not found in catalog", 16);
        assert_eq!(lines, vec!["equipment EQ-777", "not found in", "catalog"]);
    }

    #[test]
    fn test_wrap_keeps_blank_paragraphs() {
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn test_centered_rect_is_clamped() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = centered_rect(area, 100, 20);
        assert_eq!(rect, Rect::new(0, 0, 40, 10));

        let rect = centered_rect(Rect::new(0, 0, 80, 24), 20, 6);
        assert_eq!(rect, Rect::new(30, 9, 20, 6));
    }
}
