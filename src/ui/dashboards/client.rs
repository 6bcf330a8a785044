//! Client dashboard

use super::{draw_dashboard, loading, placeholder, table_header, table_row};
use crate::app::App;
use crate::state::{ClientDashboardData, ClientMenu, DashboardMenu};
use crate::ui::components::badge;
use crate::ui::widgets::section_title;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(data) = &app.state.client_dashboard else {
        loading(frame, area);
        return;
    };
    let menu = app.state.client_menu;

    let body = match menu {
        ClientMenu::Dashboard => {
            let mut lines = request_lines(data);
            lines.push(Line::from(""));
            lines.extend(notification_lines(data));
            lines
        }
        ClientMenu::Rentals | ClientMenu::Requests => request_lines(data),
        other => placeholder(other.label()),
    };
    let stats = (menu == ClientMenu::Dashboard).then_some(data.stats.as_slice());
    draw_dashboard(frame, area, app, menu, stats, body);
}

fn request_lines(data: &ClientDashboardData) -> Vec<Line<'static>> {
    let mut lines = vec![
        section_title("Recent Rental Requests"),
        table_header(&[
            ("ID", 8),
            ("Equipment", 34),
            ("Vendor", 14),
            ("Date", 10),
            ("Amount", 11),
            ("Status", 10),
        ]),
    ];
    lines.extend(data.requests.iter().map(|r| {
        table_row(
            &[
                (r.id.clone(), 8),
                (r.equipment.clone(), 34),
                (r.vendor.clone(), 14),
                (r.date.clone(), 10),
                (r.amount.clone(), 11),
            ],
            vec![badge(&r.status)],
        )
    }));
    lines
}

fn notification_lines(data: &ClientDashboardData) -> Vec<Line<'static>> {
    let mut lines = vec![section_title(&format!(
        "Notifications ({} unread)",
        data.unread_count()
    ))];
    lines.extend(data.notifications.iter().map(|n| {
        let (dot, style) = if n.unread {
            ("● ", Style::default().add_modifier(Modifier::BOLD))
        } else {
            ("  ", Style::default().fg(Color::Gray))
        };
        Line::from(vec![
            Span::styled(dot, Style::default().fg(Color::Cyan)),
            Span::styled(n.message.clone(), style),
            Span::styled(format!("  {}", n.time), Style::default().fg(Color::DarkGray)),
        ])
    }));
    lines
}
