//! Status badges and their colors

use crate::state::{Availability, Priority, RentalStatus, RequestStatus, Trend, VendorStatus};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

/// Something with a label and a badge color
pub trait Badge {
    fn badge_label(&self) -> &'static str;
    fn badge_color(&self) -> Color;
}

impl Badge for Availability {
    fn badge_label(&self) -> &'static str {
        self.label()
    }

    fn badge_color(&self) -> Color {
        match self {
            Availability::Available => Color::Green,
            Availability::Rented => Color::Yellow,
            Availability::Maintenance => Color::Red,
        }
    }
}

impl Badge for RequestStatus {
    fn badge_label(&self) -> &'static str {
        self.label()
    }

    fn badge_color(&self) -> Color {
        match self {
            RequestStatus::Pending => Color::Yellow,
            RequestStatus::Approved => Color::Green,
            RequestStatus::InTransit => Color::Blue,
            RequestStatus::Completed => Color::Gray,
        }
    }
}

impl Badge for VendorStatus {
    fn badge_label(&self) -> &'static str {
        self.label()
    }

    fn badge_color(&self) -> Color {
        match self {
            VendorStatus::Verified => Color::Green,
            VendorStatus::PendingVerification => Color::Yellow,
            VendorStatus::UnderReview => Color::Blue,
        }
    }
}

impl Badge for RentalStatus {
    fn badge_label(&self) -> &'static str {
        self.label()
    }

    fn badge_color(&self) -> Color {
        match self {
            RentalStatus::Active => Color::Green,
            RentalStatus::Completed => Color::Gray,
        }
    }
}

impl Badge for Priority {
    fn badge_label(&self) -> &'static str {
        self.label()
    }

    fn badge_color(&self) -> Color {
        match self {
            Priority::High => Color::Red,
            Priority::Medium => Color::Yellow,
            Priority::Low => Color::Gray,
        }
    }
}

/// `[Label]` in the badge's color
pub fn badge(item: &impl Badge) -> Span<'static> {
    Span::styled(
        format!("[{}]", item.badge_label()),
        Style::default()
            .fg(item.badge_color())
            .add_modifier(Modifier::BOLD),
    )
}

/// Arrow and color for a stat's change
pub fn trend_span(change: &str, trend: Option<Trend>) -> Span<'static> {
    let (arrow, color) = match trend {
        Some(Trend::Up) => ("↑", Color::Green),
        Some(Trend::Down) => ("↓", Color::Red),
        None => ("", Color::Gray),
    };
    Span::styled(format!("{arrow}{change}"), Style::default().fg(color))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_text() {
        let span = badge(&RequestStatus::InTransit);
        assert_eq!(span.content, "[In Transit]");
        assert_eq!(span.style.fg, Some(Color::Blue));
    }

    #[test]
    fn test_trend_span() {
        assert_eq!(trend_span("+12%", Some(Trend::Up)).content, "↑+12%");
        assert_eq!(trend_span("-5%", Some(Trend::Down)).style.fg, Some(Color::Red));
        assert_eq!(trend_span("", None).content, "");
    }
}
