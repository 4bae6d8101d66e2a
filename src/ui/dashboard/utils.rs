//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::FeedSource;
use crate::risks::Severity;
use ratatui::layout::Rect;
use ratatui::prelude::Color;

/// Get a ratatui color for a feed source
pub fn get_source_color(source: &FeedSource) -> Color {
    match source {
        FeedSource::Commits => Color::Green,
        FeedSource::PullRequests => Color::Cyan,
        FeedSource::Tickets => Color::Yellow,
        FeedSource::Assistant => Color::Magenta,
        FeedSource::Reports => Color::LightBlue,
    }
}

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Critical => Color::Red,
        Severity::High => Color::Yellow,
        Severity::Medium => Color::Cyan,
        Severity::Low => Color::DarkGray,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            // Extract MM-DD from date and HH:MM from time
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(hour_min) = time_part.get(0..5) {
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// A fixed-width text progress bar, e.g. "███████░░░" for 70%.
pub fn text_bar(percent: u32, width: usize) -> String {
    let filled = (percent.min(100) as usize * width) / 100;
    let mut bar = String::with_capacity(width);
    for i in 0..width {
        bar.push(if i < filled { '█' } else { '░' });
    }
    bar
}

/// A centered sub-rectangle taking the given percentage of the area.
pub fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_timestamp_trims_year_and_seconds() {
        assert_eq!(format_compact_timestamp("2026-08-06 14:32:10"), "08-06 14:32");
    }

    #[test]
    fn compact_timestamp_falls_back_on_garbage() {
        assert_eq!(format_compact_timestamp("just now"), "just now");
    }

    #[test]
    fn text_bar_fills_proportionally() {
        assert_eq!(text_bar(0, 10), "░░░░░░░░░░");
        assert_eq!(text_bar(50, 10), "█████░░░░░");
        assert_eq!(text_bar(100, 10), "██████████");
        // Over-capacity clamps at full.
        assert_eq!(text_bar(112, 10), "██████████");
    }
}
