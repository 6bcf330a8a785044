//! Landing page: categories, featured vendors and marketplace highlights

use super::widgets::{render_scrollable_list, section_title};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Draw the landing page
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(landing) = &app.state.landing else {
        let empty = Paragraph::new("Loading marketplace…")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Hero
            Constraint::Min(6),    // Categories + vendors
            Constraint::Length(5), // Features
        ])
        .split(area);

    let hero = Paragraph::new(vec![
        Line::from(Span::styled(
            "Rent Oil & Gas Equipment Across Africa",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Verified vendors, certified equipment, delivered to your site.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(vec![
            Span::styled("[e]", Style::default().fg(Color::Cyan)),
            Span::raw(" Browse equipment   "),
            Span::styled("[c]", Style::default().fg(Color::Cyan)),
            Span::raw(" Client   "),
            Span::styled("[v]", Style::default().fg(Color::Cyan)),
            Span::raw(" Vendor   "),
            Span::styled("[a]", Style::default().fg(Color::Cyan)),
            Span::raw(" Admin"),
        ]),
    ])
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(hero, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);

    let items: Vec<ListItem> = landing
        .categories
        .iter()
        .map(|category| {
            ListItem::new(Line::from(vec![
                Span::raw(category.name.clone()),
                Span::styled(
                    format!("  {} items", category.count),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .title(" Categories ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▸ ");
    render_scrollable_list(frame, columns[0], list, app.state.selected_index);

    let vendors: Vec<Line> = landing
        .vendors
        .iter()
        .map(|v| Line::from(format!("• {v}")))
        .collect();
    let vendors = Paragraph::new(vendors).block(
        Block::default()
            .title(" Featured Vendors ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(vendors, columns[1]);

    let feature_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            landing
                .features
                .iter()
                .map(|_| Constraint::Ratio(1, landing.features.len().max(1) as u32)),
        )
        .split(rows[2]);
    for (feature, col) in landing.features.iter().zip(feature_cols.iter()) {
        let body = Paragraph::new(vec![
            section_title(&feature.title),
            Line::from(Span::styled(
                feature.description.clone(),
                Style::default().fg(Color::Gray),
            )),
        ])
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::DarkGray)));
        frame.render_widget(body, *col);
    }
}
