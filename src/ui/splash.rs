//! Splash screen rendering with ASCII art logo

use crate::state::SplashState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const LOGO: [&str; 6] = [
    "███╗   ██╗███████╗██╗  ██╗██╗   ██╗███████╗",
    "████╗  ██║██╔════╝╚██╗██╔╝██║   ██║██╔════╝",
    "██╔██╗ ██║█████╗   ╚███╔╝ ██║   ██║███████╗",
    "██║╚██╗██║██╔══╝   ██╔██╗ ██║   ██║╚════██║",
    "██║ ╚████║███████╗██╔╝ ██╗╚██████╔╝███████║",
    "╚═╝  ╚═══╝╚══════╝╚═╝  ╚═╝ ╚═════╝ ╚══════╝",
];

const TAGLINE: &str = "Oil & Gas Equipment Rental Across Africa";

fn logo_lines() -> Vec<Line<'static>> {
    let style = Style::default().fg(Color::Yellow);
    let mut lines: Vec<Line> = LOGO
        .iter()
        .map(|row| Line::from(Span::styled(*row, style)))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        TAGLINE,
        Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
    )));
    lines
}

/// Draw the splash screen
pub fn draw(frame: &mut Frame, area: Rect, splash_state: &SplashState) {
    let lines = logo_lines();
    let logo_height = lines.len() as u16;
    let logo_width = TAGLINE.len().max(LOGO[0].chars().count()) as u16;

    // Logo moves up by the scroll offset and may leave the top of the screen
    let base_y = area.y as i32 + area.height.saturating_sub(logo_height) as i32 / 2;
    let y_pos = base_y - splash_state.scroll_offset as i32;
    let lines_off_top = if y_pos < 0 { (-y_pos) as usize } else { 0 };
    if lines_off_top >= lines.len() {
        return;
    }

    let visible: Vec<Line> = lines.into_iter().skip(lines_off_top).collect();
    let logo_area = Rect {
        x: area.x + area.width.saturating_sub(logo_width) / 2,
        y: y_pos.max(area.y as i32) as u16,
        width: logo_width.min(area.width),
        height: (visible.len() as u16).min(area.height),
    };
    frame.render_widget(Paragraph::new(visible).centered(), logo_area);

    if splash_state.scroll_offset < 1.0 && area.height > 2 {
        let hint = "Press any key to skip";
        let hint_area = Rect {
            x: area.x + area.width.saturating_sub(hint.len() as u16) / 2,
            y: area.y + area.height - 2,
            width: (hint.len() as u16).min(area.width),
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray))),
            hint_area,
        );
    }
}
