//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::{BACK_SHORTCUT, CONTINUE_SHORTCUT};
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the brand header with the current page title
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(
            " NEXUS ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            app.state.current_view.title(),
            Style::default().fg(Color::White),
        ),
    ];

    if matches!(
        app.state.current_view,
        View::EquipmentDetails | View::RentalWorkflow
    ) {
        spans.push(Span::styled(
            format!("  {}", app.state.current_equipment_id()),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {}", view_hints(app)),
        Style::default().fg(Color::Gray),
    )];

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: status_area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray)),
        quit_area,
    );
}

/// Keyboard hints for the current view
pub fn view_hints(app: &App) -> String {
    match app.state.current_view {
        View::Splash => "Press any key to skip".to_string(),
        View::Landing => "j/k:category  Enter:browse  e:all equipment  c/v/a:dashboards  q:quit"
            .to_string(),
        View::EquipmentListing if app.state.search_active => {
            "type to search  Enter/Esc:done".to_string()
        }
        View::EquipmentListing => {
            "j/k:nav  Enter:view  /:search  c:category  l:location  p:price  s:sort  r:reset  Esc:back"
                .to_string()
        }
        View::EquipmentDetails => {
            "h/l:photo  j/k:scroll  Enter:request rental  Esc:back".to_string()
        }
        View::RentalWorkflow => format!(
            "Tab:next field  ←/→:choose  Enter:press  {CONTINUE_SHORTCUT}:continue  {BACK_SHORTCUT}:previous  Esc:back to equipment"
        ),
        View::ClientDashboard => "Tab:menu  j/k:scroll  e:browse equipment  Esc:back".to_string(),
        View::VendorDashboard | View::AdminDashboard => {
            "Tab:menu  j/k:scroll  Esc:back".to_string()
        }
    }
}
