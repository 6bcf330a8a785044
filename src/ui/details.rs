//! Equipment details page

use super::components::{badge, render_colored_button, BUTTON_HEIGHT};
use super::widgets::section_title;
use crate::app::App;
use crate::state::wizard::format_money;
use crate::state::{Availability, EquipmentDetail};
use chrono::{Datelike, Duration, Local, NaiveDate};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Days shown in the availability strip
const CALENDAR_DAYS: usize = 14;

/// Draw the equipment details page
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(detail) = &app.state.equipment_detail else {
        let message = format!(
            "No details for {}.\nPress Esc to go back.",
            app.state.current_equipment_id()
        );
        frame.render_widget(
            Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().borders(Borders::ALL)),
            area,
        );
        return;
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(36)])
        .split(area);

    draw_body(frame, columns[0], app, detail);
    draw_sidebar(frame, columns[1], app, detail);
}

fn draw_body(frame: &mut Frame, area: Rect, app: &App, detail: &EquipmentDetail) {
    let gray = Style::default().fg(Color::Gray);
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                detail.name.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            badge(&detail.availability),
        ]),
        Line::from(Span::styled(
            format!("{} · {}", detail.category, detail.location),
            gray,
        )),
        Line::from(""),
    ];

    let image_count = detail.images.len();
    if image_count > 0 {
        let index = app.state.selected_image.min(image_count - 1);
        let dots: String = (0..image_count)
            .map(|i| if i == index { '●' } else { '○' })
            .collect();
        lines.push(Line::from(vec![
            Span::styled(format!("Photo {}/{} ", index + 1, image_count), gray),
            Span::styled(dots, Style::default().fg(Color::Cyan)),
        ]));
        lines.push(Line::from(Span::styled(
            detail.images[index].clone(),
            Style::default().fg(Color::Blue),
        )));
        lines.push(Line::from(""));
    }

    lines.push(section_title("Description"));
    lines.push(Line::from(detail.description.clone()));
    lines.push(Line::from(""));

    lines.push(section_title("Specifications"));
    let label_width = detail
        .specifications
        .iter()
        .map(|s| s.label.chars().count())
        .max()
        .unwrap_or(0);
    for spec in &detail.specifications {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<label_width$}  ", spec.label), gray),
            Span::raw(spec.value.clone()),
        ]));
    }
    lines.push(Line::from(""));

    lines.push(section_title("Features"));
    for feature in &detail.features {
        lines.push(Line::from(vec![
            Span::styled("✓ ", Style::default().fg(Color::Green)),
            Span::raw(feature.clone()),
        ]));
    }
    lines.push(Line::from(""));

    lines.push(section_title("Availability"));
    lines.extend(calendar_lines(Local::now().date_naive(), detail.availability));

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.state.scroll_offset as u16, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(body, area);
}

fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App, detail: &EquipmentDetail) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),             // Pricing
            Constraint::Length(BUTTON_HEIGHT), // Request button
            Constraint::Min(0),                // Vendor
        ])
        .split(area);

    let currency = app.currency();
    let price_line = |label: &str, amount| {
        Line::from(vec![
            Span::styled(format!("{label:<10}"), Style::default().fg(Color::Gray)),
            Span::styled(
                format_money(currency, amount),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    };
    let pricing = Paragraph::new(vec![
        price_line("Per day", detail.price_per_day),
        price_line("Per week", detail.price_per_week),
        price_line("Per month", detail.price_per_month),
        Line::from(""),
        Line::from(Span::styled(
            "Delivery and insurance added at checkout",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(" Pricing ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(pricing, rows[0]);

    render_colored_button(frame, rows[1], "Request Rental  [Enter]", Color::Green, true, true);

    let vendor = &detail.vendor;
    let verified = if vendor.verified {
        Span::styled("✓ Verified", Style::default().fg(Color::Green))
    } else {
        Span::styled("Unverified", Style::default().fg(Color::DarkGray))
    };
    let vendor_info = Paragraph::new(vec![
        Line::from(Span::styled(
            vendor.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(verified),
        Line::from(format!("★ {:.1} ({} reviews)", vendor.rating, vendor.reviews)),
        Line::from(format!("{} years in business", vendor.years_in_business)),
        Line::from(format!("{} equipment listed", vendor.total_equipment)),
    ])
    .block(
        Block::default()
            .title(" Vendor ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(vendor_info, rows[2]);
}

/// Consecutive dates starting at `start`
fn calendar_days(start: NaiveDate, count: usize) -> Vec<NaiveDate> {
    (0..count as i64).map(|i| start + Duration::days(i)).collect()
}

/// Two-row strip: weekday initials over day numbers, colored by availability
fn calendar_lines(today: NaiveDate, availability: Availability) -> Vec<Line<'static>> {
    let color = match availability {
        Availability::Available => Color::Green,
        Availability::Rented => Color::Yellow,
        Availability::Maintenance => Color::Red,
    };
    let days = calendar_days(today, CALENDAR_DAYS);
    let weekdays: Vec<Span> = days
        .iter()
        .map(|d| {
            let name = d.weekday().to_string();
            Span::styled(format!("{:>3}", &name[..2]), Style::default().fg(Color::DarkGray))
        })
        .collect();
    let numbers: Vec<Span> = days
        .iter()
        .map(|d| Span::styled(format!("{:>3}", d.day()), Style::default().fg(color)))
        .collect();
    vec![
        Line::from(weekdays),
        Line::from(numbers),
        Line::from(Span::styled(
            format!("{} from {}", availability.label(), today.format("%b %-d")),
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_days_cross_month_end() {
        let start = NaiveDate::from_ymd_opt(2024, 11, 29).unwrap();
        let days: Vec<u32> = calendar_days(start, 4).iter().map(|d| d.day()).collect();
        assert_eq!(days, vec![29, 30, 1, 2]);
    }

    #[test]
    fn test_calendar_lines_shape() {
        let today = NaiveDate::from_ymd_opt(2024, 11, 4).unwrap();
        let lines = calendar_lines(today, Availability::Available);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].spans.len(), CALENDAR_DAYS);
        // 2024-11-04 is a Monday
        assert_eq!(lines[0].spans[0].content, " Mo");
        assert_eq!(lines[1].spans[0].content, "  4");
        assert_eq!(lines[2].spans[0].content, "Available from Nov 4");
    }
}
