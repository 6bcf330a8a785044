//! Admin dashboard

use super::{draw_dashboard, loading, placeholder, table_header, table_row};
use crate::app::App;
use crate::state::wizard::format_money;
use crate::state::{AdminDashboardData, AdminMenu, DashboardMenu};
use crate::ui::components::badge;
use crate::ui::widgets::section_title;
use ratatui::{layout::Rect, text::Line, Frame};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(data) = &app.state.admin_dashboard else {
        loading(frame, area);
        return;
    };
    let menu = app.state.admin_menu;

    let body = match menu {
        AdminMenu::Dashboard => {
            let mut lines = verification_lines(data);
            lines.push(Line::from(""));
            lines.extend(vendor_lines(data));
            lines.push(Line::from(""));
            lines.extend(rental_lines(data, app.currency()));
            lines
        }
        AdminMenu::Vendors => vendor_lines(data),
        AdminMenu::Rentals => rental_lines(data, app.currency()),
        AdminMenu::Verification => verification_lines(data),
        other => placeholder(other.label()),
    };
    let stats = (menu == AdminMenu::Dashboard).then_some(data.stats.as_slice());
    draw_dashboard(frame, area, app, menu, stats, body);
}

fn verification_lines(data: &AdminDashboardData) -> Vec<Line<'static>> {
    let mut lines = vec![
        section_title("Pending Verifications"),
        table_header(&[
            ("ID", 8),
            ("Vendor", 24),
            ("Document", 22),
            ("Submitted", 10),
            ("Priority", 8),
        ]),
    ];
    lines.extend(data.verifications_by_priority().into_iter().map(|v| {
        table_row(
            &[
                (v.id.clone(), 8),
                (v.vendor_name.clone(), 24),
                (v.document.clone(), 22),
                (v.submitted.clone(), 10),
            ],
            vec![badge(&v.priority)],
        )
    }));
    lines
}

fn vendor_lines(data: &AdminDashboardData) -> Vec<Line<'static>> {
    let mut lines = vec![
        section_title("Vendor Applications"),
        table_header(&[
            ("ID", 6),
            ("Vendor", 22),
            ("Joined", 10),
            ("Items", 5),
            ("Revenue", 8),
            ("Status", 20),
        ]),
    ];
    lines.extend(data.vendors.iter().map(|v| {
        table_row(
            &[
                (v.id.clone(), 6),
                (v.name.clone(), 22),
                (v.date_joined.clone(), 10),
                (v.equipment.to_string(), 5),
                (v.revenue.clone(), 8),
            ],
            vec![badge(&v.status)],
        )
    }));
    lines
}

fn rental_lines(data: &AdminDashboardData, currency: &str) -> Vec<Line<'static>> {
    let mut lines = vec![
        section_title("Recent Rentals"),
        table_header(&[
            ("ID", 8),
            ("Equipment", 26),
            ("Client", 14),
            ("Vendor", 13),
            ("Value", 8),
            ("Start", 10),
            ("Status", 9),
        ]),
    ];
    lines.extend(data.rentals.iter().map(|r| {
        table_row(
            &[
                (r.id.clone(), 8),
                (r.equipment.clone(), 26),
                (r.client.clone(), 14),
                (r.vendor.clone(), 13),
                (format_money(currency, r.value), 8),
                (r.start_date.clone(), 10),
            ],
            vec![badge(&r.status)],
        )
    }));
    lines
}
