//! Equipment listing with filters

use super::components::badge;
use super::widgets::render_scrollable_list;
use crate::app::App;
use crate::state::wizard::format_money;
use crate::state::EquipmentSummary;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draw the equipment listing
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Filter bar
            Constraint::Length(1), // Result count
            Constraint::Min(0),    // Results
        ])
        .split(area);

    draw_filter_bar(frame, chunks[0], app);

    let results = app.state.filtered_equipment();
    let filters = &app.state.listing_filters;
    let count = format!(
        " {} of {} results{}",
        results.len(),
        app.state.equipment.len(),
        if filters.is_filtered() { " (filtered)" } else { "" }
    );
    frame.render_widget(
        Paragraph::new(Span::styled(count, Style::default().fg(Color::DarkGray))),
        chunks[1],
    );

    let block = Block::default()
        .title(" Equipment ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if results.is_empty() {
        let message = if filters.is_filtered() {
            "No equipment matches these filters.\nPress 'r' to reset."
        } else {
            "No equipment listed."
        };
        frame.render_widget(
            Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            chunks[2],
        );
        return;
    }

    let items: Vec<ListItem> = results
        .iter()
        .map(|item| equipment_item(item, app.currency()))
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▸ ");
    render_scrollable_list(frame, chunks[2], list, app.state.selected_index);
}

fn draw_filter_bar(frame: &mut Frame, area: Rect, app: &App) {
    let filters = &app.state.listing_filters;
    let key = Style::default().fg(Color::Cyan);
    let value = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let search = if app.state.search_active {
        format!("{}▌", filters.search)
    } else if filters.search.is_empty() {
        "-".to_string()
    } else {
        filters.search.clone()
    };

    let line = Line::from(vec![
        Span::styled("[c]", key),
        Span::raw(" Category: "),
        Span::styled(filters.category.clone(), value),
        Span::styled("  [l]", key),
        Span::raw(" Location: "),
        Span::styled(filters.location.clone(), value),
        Span::styled("  [p]", key),
        Span::raw(" Price: "),
        Span::styled(filters.price_band.label(), value),
        Span::styled("  [s]", key),
        Span::raw(" Sort: "),
        Span::styled(filters.sort.label(), value),
        Span::styled("  [/]", key),
        Span::raw(" Search: "),
        Span::styled(search, value),
    ]);

    let border = if app.state.search_active {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    frame.render_widget(
        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        ),
        area,
    );
}

fn equipment_item(item: &EquipmentSummary, currency: &str) -> ListItem<'static> {
    let price = if item.show_price {
        Span::styled(
            format!("{}/day", format_money(currency, item.price_per_day)),
            Style::default().fg(Color::Green),
        )
    } else {
        Span::styled("Request Quote", Style::default().fg(Color::Yellow))
    };

    ListItem::new(vec![
        Line::from(vec![
            Span::styled(
                item.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            badge(&item.availability),
        ]),
        Line::from(vec![
            Span::styled(
                format!(
                    "  {} · {} · {} · ★ {:.1} ({}) · ",
                    item.category, item.vendor, item.location, item.rating, item.reviews
                ),
                Style::default().fg(Color::Gray),
            ),
            price,
        ]),
    ])
}
