//! Vendor dashboard

use super::{draw_dashboard, loading, placeholder, table_header, table_row};
use crate::app::App;
use crate::state::wizard::format_money;
use crate::state::{DashboardMenu, VendorDashboardData, VendorMenu};
use crate::ui::components::badge;
use crate::ui::widgets::section_title;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(data) = &app.state.vendor_dashboard else {
        loading(frame, area);
        return;
    };
    let menu = app.state.vendor_menu;
    let currency = app.currency();

    let body = match menu {
        VendorMenu::Dashboard => {
            let mut lines = inventory_lines(data, currency);
            lines.push(Line::from(""));
            lines.extend(request_lines(data));
            lines
        }
        VendorMenu::Inventory => inventory_lines(data, currency),
        VendorMenu::Requests => request_lines(data),
        VendorMenu::Earnings => earnings_lines(data, currency),
        other => placeholder(other.label()),
    };
    let stats = (menu == VendorMenu::Dashboard).then_some(data.stats.as_slice());
    draw_dashboard(frame, area, app, menu, stats, body);
}

fn inventory_lines(data: &VendorDashboardData, currency: &str) -> Vec<Line<'static>> {
    let mut lines = vec![
        section_title("Equipment Inventory"),
        table_header(&[
            ("ID", 8),
            ("Name", 34),
            ("Per Day", 9),
            ("Per Week", 9),
            ("Rentals", 7),
            ("Status", 12),
        ]),
    ];
    lines.extend(data.inventory.iter().map(|item| {
        table_row(
            &[
                (item.id.clone(), 8),
                (item.name.clone(), 34),
                (format_money(currency, item.rate_per_day), 9),
                (format_money(currency, item.rate_per_week), 9),
                (item.total_rentals.to_string(), 7),
            ],
            vec![badge(&item.availability)],
        )
    }));
    lines
}

fn request_lines(data: &VendorDashboardData) -> Vec<Line<'static>> {
    let mut lines = vec![
        section_title("Incoming Requests"),
        table_header(&[
            ("ID", 8),
            ("Client", 16),
            ("Equipment", 22),
            ("Date", 10),
            ("Status", 10),
        ]),
    ];
    lines.extend(data.requests.iter().map(|r| {
        table_row(
            &[
                (r.id.clone(), 8),
                (r.client.clone(), 16),
                (r.equipment.clone(), 22),
                (r.date.clone(), 10),
            ],
            vec![badge(&r.status)],
        )
    }));
    lines
}

fn earnings_lines(data: &VendorDashboardData, currency: &str) -> Vec<Line<'static>> {
    let earnings = &data.earnings;
    let row = |label: &str, amount| {
        Line::from(vec![
            Span::styled(format!("{label:<14}"), Style::default().fg(Color::Gray)),
            Span::styled(
                format_money(currency, amount),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    };
    vec![
        section_title("Earnings"),
        row("This month", earnings.this_month),
        row("Last month", earnings.last_month),
        row("This year", earnings.this_year),
        row("Pending", earnings.pending),
    ]
}
