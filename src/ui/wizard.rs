//! Rental request wizard view

use super::components::{
    draw_choice_field, draw_text_field, field_height, render_button, render_colored_button,
    BUTTON_HEIGHT,
};
use super::widgets::section_title;
use crate::app::App;
use crate::state::wizard::{
    format_money, rental_days, step_fields, DocumentKind, RentalPeriod, RentalWizard,
    WizardButton, WizardField, WizardSession, WizardStep, PAYMENT_METHODS,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Where a step sits relative to the current one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StepStatus {
    Done,
    Current,
    Upcoming,
}

fn step_status(step: WizardStep, current: WizardStep) -> StepStatus {
    match step.number().cmp(&current.number()) {
        std::cmp::Ordering::Less => StepStatus::Done,
        std::cmp::Ordering::Equal => StepStatus::Current,
        std::cmp::Ordering::Greater => StepStatus::Upcoming,
    }
}

/// Draw the rental wizard
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = &app.state.wizard else {
        frame.render_widget(
            Paragraph::new("No rental request in progress. Press Esc to go back.")
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().borders(Borders::ALL)),
            area,
        );
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Progress
            Constraint::Min(0),                // Step content
            Constraint::Length(BUTTON_HEIGHT), // Buttons
        ])
        .split(area);

    draw_progress(frame, rows[0], session.step());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(34)])
        .split(rows[1]);
    draw_step(frame, columns[0], session, app.currency());
    draw_summary(frame, columns[1], &session.wizard, app.currency());

    draw_buttons(frame, rows[2], session);
}

fn draw_progress(frame: &mut Frame, area: Rect, current: WizardStep) {
    let mut spans = vec![Span::styled(
        "← Esc  ",
        Style::default().fg(Color::DarkGray),
    )];
    for (idx, step) in WizardStep::ALL.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" ── ", Style::default().fg(Color::DarkGray)));
        }
        let (marker, style) = match step_status(*step, current) {
            StepStatus::Done => ("✓", Style::default().fg(Color::Green)),
            StepStatus::Current => (
                "●",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            StepStatus::Upcoming => ("○", Style::default().fg(Color::DarkGray)),
        };
        spans.push(Span::styled(
            format!("{marker} {} {}", step.number(), step.title()),
            style,
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM)),
        area,
    );
}

fn draw_step(frame: &mut Frame, area: Rect, session: &WizardSession, currency: &str) {
    let step = session.step();
    let block = Block::default()
        .title(format!(" Step {}: {} ", step.number(), step.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields = step_fields(step);
    let mut constraints: Vec<Constraint> = fields
        .iter()
        .map(|f| Constraint::Length(field_height(f.is_multiline())))
        .collect();
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (idx, field) in fields.iter().enumerate() {
        let is_active = session.active_field == idx;
        draw_wizard_field(frame, rows[idx], &session.wizard, *field, is_active);
    }

    let notes = step_notes(&session.wizard, currency);
    frame.render_widget(
        Paragraph::new(notes).wrap(Wrap { trim: false }),
        rows[fields.len()],
    );
}

fn draw_wizard_field(
    frame: &mut Frame,
    area: Rect,
    wizard: &RentalWizard,
    field: WizardField,
    is_active: bool,
) {
    let form = wizard.form();
    match field {
        WizardField::RentalPeriod => {
            let labels: Vec<&str> = RentalPeriod::ALL.iter().map(|p| p.label()).collect();
            let selected = RentalPeriod::ALL
                .iter()
                .position(|p| *p == form.rental_period);
            draw_choice_field(frame, area, field.label(), &labels, selected, is_active);
        }
        WizardField::PaymentMethod => {
            let selected = PAYMENT_METHODS
                .iter()
                .position(|m| *m == form.payment_method);
            draw_choice_field(frame, area, field.label(), &PAYMENT_METHODS, selected, is_active);
        }
        WizardField::StartDate | WizardField::EndDate => {
            draw_text_field(frame, area, field.label(), form.text(field), "YYYY-MM-DD", is_active)
        }
        WizardField::DeliveryAddress => draw_text_field(
            frame,
            area,
            field.label(),
            form.text(field),
            "Site address, city, country",
            is_active,
        ),
        WizardField::Document(kind) => draw_text_field(
            frame,
            area,
            &document_label(kind),
            form.text(field),
            "File name or document reference",
            is_active,
        ),
    }
}

fn document_label(kind: DocumentKind) -> String {
    if kind.is_optional() {
        format!("{} (Optional)", kind.label())
    } else {
        kind.label().to_string()
    }
}

/// Text shown below the fields of each step
fn step_notes(wizard: &RentalWizard, currency: &str) -> Vec<Line<'static>> {
    let offer = wizard.offer();
    let gray = Style::default().fg(Color::Gray);
    let money = |amount| format_money(currency, amount);
    match wizard.step() {
        WizardStep::SelectEquipment => vec![
            Line::from(Span::styled(
                offer.name.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(format!("Vendor: {}", offer.vendor), gray)),
            Line::from(Span::styled(
                format!("Equipment ID: {}", wizard.equipment_id().unwrap_or("-")),
                gray,
            )),
            Line::from(""),
            section_title("Rates"),
            Line::from(format!("{}/day", money(offer.price_per_day))),
            Line::from(format!("{}/week", money(offer.price_per_week))),
            Line::from(format!("{}/month", money(offer.price_per_month))),
        ],
        WizardStep::ChooseDates => {
            let period = wizard.form().rental_period;
            let mut lines = vec![Line::from(Span::styled(
                format!(
                    "{}/{} {}",
                    money(offer.rate(period)),
                    period.unit(),
                    period.savings_hint().unwrap_or("")
                ),
                gray,
            ))];
            if wizard.shows_estimate() {
                let days = match (wizard.form().start(), wizard.form().end()) {
                    (Some(start), Some(end)) => format!(" ({} days)", rental_days(start, end)),
                    _ => String::new(),
                };
                lines.push(Line::from(vec![
                    Span::raw("Estimated Total: "),
                    Span::styled(
                        money(wizard.compute_total()),
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(days, gray),
                ]));
            }
            lines
        }
        WizardStep::UploadDocuments => vec![Line::from(Span::styled(
            "Enter a file name or reference for each document. Files are attached when the vendor approves the request.",
            gray,
        ))],
        WizardStep::Confirm => {
            let form = wizard.form();
            let value_or_dash = |v: &str| {
                if v.is_empty() {
                    "-".to_string()
                } else {
                    v.replace('\n', ", ")
                }
            };
            vec![
                section_title("Rental Summary"),
                Line::from(format!("Equipment: {}", offer.name)),
                Line::from(format!(
                    "Dates: {} → {}",
                    value_or_dash(&form.start_date),
                    value_or_dash(&form.end_date)
                )),
                Line::from(format!("Period: {}", form.rental_period.label())),
                Line::from(format!("Delivery: {}", value_or_dash(&form.delivery_address))),
                Line::from(format!("Documents: {} attached", form.documents.len())),
            ]
        }
    }
}

fn draw_summary(frame: &mut Frame, area: Rect, wizard: &RentalWizard, currency: &str) {
    let breakdown = wizard.breakdown();
    let row = |label: &str, amount| {
        Line::from(vec![
            Span::styled(format!("{label:<16}"), Style::default().fg(Color::Gray)),
            Span::raw(format_money(currency, amount)),
        ])
    };

    let mut lines = vec![
        row("Rental cost", breakdown.rental_cost),
        row("Delivery fee", breakdown.delivery_fee),
        row("Insurance", breakdown.insurance_fee),
        Line::from(Span::styled(
            "─".repeat(28),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(vec![
            Span::styled(
                format!("{:<16}", "Grand Total"),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format_money(currency, breakdown.grand_total()),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    if wizard.step() != WizardStep::Confirm {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Final amount confirmed on the last step",
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(" Price Breakdown ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        area,
    );
}

fn draw_buttons(frame: &mut Frame, area: Rect, session: &WizardSession) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14),
            Constraint::Min(0),
            Constraint::Length(22),
        ])
        .split(area);

    let on_buttons = session.is_buttons_row_active();
    let step = session.step();
    render_button(
        frame,
        columns[0],
        "Back",
        on_buttons && session.selected_button == WizardButton::Back,
        !step.is_first(),
    );
    let label = if step.is_last() {
        "Submit Request"
    } else {
        "Continue"
    };
    render_colored_button(
        frame,
        columns[2],
        label,
        Color::Green,
        on_buttons && session.selected_button == WizardButton::Continue,
        true,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::wizard::EquipmentOffer;

    fn wizard() -> RentalWizard {
        RentalWizard::new(
            EquipmentOffer {
                equipment_id: "EQ-001".to_string(),
                name: "Wireline Tools - T-Series Complete Kit".to_string(),
                vendor: "Schlumberger".to_string(),
                price_per_day: 1250,
                price_per_week: 7500,
                price_per_month: 28000,
            },
            Some("EQ-001".to_string()),
            RentalPeriod::Daily,
        )
    }

    fn text(lines: &[Line]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_only_insurance_is_marked_optional() {
        let labels: Vec<String> = DocumentKind::ALL.into_iter().map(document_label).collect();
        assert_eq!(
            labels,
            vec![
                "Company Registration Certificate",
                "Tax Identification Number (TIN)",
                "Insurance Certificate (Optional)",
            ]
        );
    }

    #[test]
    fn test_step_status() {
        let current = WizardStep::UploadDocuments;
        assert_eq!(step_status(WizardStep::SelectEquipment, current), StepStatus::Done);
        assert_eq!(step_status(WizardStep::UploadDocuments, current), StepStatus::Current);
        assert_eq!(step_status(WizardStep::Confirm, current), StepStatus::Upcoming);
    }

    #[test]
    fn test_estimate_hidden_until_both_dates_entered() {
        let mut wizard = wizard();
        wizard.advance();
        wizard.set_field(WizardField::StartDate, "2024-11-01");
        let lines = text(&step_notes(&wizard, "$"));
        assert!(!lines.iter().any(|l| l.starts_with("Estimated Total")));

        wizard.set_field(WizardField::EndDate, "2024-11-06");
        let lines = text(&step_notes(&wizard, "$"));
        assert!(lines.contains(&"Estimated Total: $6,250 (5 days)".to_string()));
    }

    #[test]
    fn test_first_step_shows_rates() {
        let lines = text(&step_notes(&wizard(), "$"));
        assert!(lines.contains(&"Equipment ID: EQ-001".to_string()));
        assert!(lines.contains(&"$28,000/month".to_string()));
    }
}
