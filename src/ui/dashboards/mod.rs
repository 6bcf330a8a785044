//! Client, vendor and admin dashboards
//!
//! Each dashboard is a menu column on the left and a scrollable page on the
//! right. The page is built as lines so one scroll offset covers it.

mod admin;
mod client;
mod vendor;

pub use admin::draw as draw_admin;
pub use client::draw as draw_client;
pub use vendor::draw as draw_vendor;

use super::components::render_menu_buttons;
use super::widgets::{fit, render_stat_cards};
use crate::app::App;
use crate::state::{DashboardMenu, Stat};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const MENU_WIDTH: u16 = 20;
const STATS_HEIGHT: u16 = 3;

/// Shared frame: menu, stat cards on the Dashboard tab, and the page body
fn draw_dashboard<M: DashboardMenu>(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    selected: M,
    stats: Option<&[Stat]>,
    body: Vec<Line<'static>>,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(MENU_WIDTH), Constraint::Min(0)])
        .split(area);

    let labels: Vec<&str> = M::ITEMS.iter().map(|m| m.label()).collect();
    render_menu_buttons(frame, columns[0], &labels, selected.index());

    let body_area = match stats {
        Some(stats) if !stats.is_empty() => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(STATS_HEIGHT), Constraint::Min(0)])
                .split(columns[1]);
            render_stat_cards(frame, rows[0], stats);
            rows[1]
        }
        _ => columns[1],
    };

    let page = Paragraph::new(body)
        .scroll((app.state.scroll_offset as u16, 0))
        .block(
            Block::default()
                .title(format!(" {} ", selected.label()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(page, body_area);
}

fn loading(frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new("Loading dashboard…")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL)),
        area,
    );
}

/// Fixed-width header row for a table
fn table_header(columns: &[(&str, usize)]) -> Line<'static> {
    let text = columns
        .iter()
        .map(|(title, width)| fit(title, *width))
        .collect::<Vec<_>>()
        .join(" ");
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Fixed-width cells followed by trailing spans (usually a badge)
fn table_row(cells: &[(String, usize)], trailing: Vec<Span<'static>>) -> Line<'static> {
    let mut spans: Vec<Span> = cells
        .iter()
        .map(|(text, width)| Span::raw(format!("{} ", fit(text, *width))))
        .collect();
    spans.extend(trailing);
    Line::from(spans)
}

fn placeholder(label: &str) -> Vec<Line<'static>> {
    vec![Line::from(Span::styled(
        format!("Nothing to show under {label} yet."),
        Style::default().fg(Color::DarkGray),
    ))]
}
