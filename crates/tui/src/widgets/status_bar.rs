//! Status bar widget.
//!
//! Key hints on the left; refresh progress or the last refresh time on the
//! right.

use chrono::{DateTime, Utc};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};

const HINTS: &str = " ←↑↓→ move  Enter open  r refresh  i layout  ? help";

/// Renders the status bar into a single-row `area`.
///
/// When both sides do not fit, the refresh status wins.
///
/// # Examples
///
/// ```
/// use ratatui::{buffer::Buffer, layout::Rect};
/// use gridline_tui::widgets::render_status_bar;
///
/// let area = Rect::new(0, 0, 80, 1);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar(true, None, area, &mut buf);
/// ```
pub fn render_status_bar(
    refreshing: bool,
    refreshed_at: Option<DateTime<Utc>>,
    area: Rect,
    buf: &mut Buffer,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let background = Style::default().bg(Color::Black);
    buf.set_style(area, background);

    let (status, status_style) = if refreshing {
        (
            "⟳ Refreshing… ".to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else if let Some(at) = refreshed_at {
        (
            format!("Updated {} UTC ", at.format("%H:%M:%S")),
            Style::default().fg(Color::Green),
        )
    } else {
        (String::new(), Style::default())
    };

    let status_width = status.chars().count() as u16;
    let status_x = area.right().saturating_sub(status_width).max(area.x);
    let hint_room = status_x.saturating_sub(area.x).saturating_sub(1);

    buf.set_stringn(
        area.x,
        area.y,
        HINTS,
        usize::from(hint_room),
        Style::default().fg(Color::DarkGray),
    );
    buf.set_stringn(
        status_x,
        area.y,
        &status,
        usize::from(area.width),
        status_style,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use chrono::TimeZone;

    fn render(refreshing: bool, at: Option<DateTime<Utc>>, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        render_status_bar(refreshing, at, area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn idle_shows_hints_only() {
        let content = render(false, None, 80);
        assert_eq!(content.trim_end(), HINTS.trim_end());
    }

    #[test]
    fn refreshing_is_right_aligned() {
        let content = render(true, None, 80);
        assert!(content.contains("? help"));
        assert!(content.trim_end().ends_with("⟳ Refreshing…"));
    }

    #[test]
    fn shows_last_refresh_time() {
        let at = Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 5).unwrap();
        let content = render(false, Some(at), 80);
        assert!(content.contains("Updated 10:30:05 UTC"));
    }

    #[test]
    fn status_wins_when_narrow() {
        let content = render(true, None, 16);
        assert_eq!(content, "  ⟳ Refreshing…\n");
    }

    #[test]
    fn both_sides_fit() {
        let at = Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap();
        assert_eq!(
            render(false, Some(at), 73),
            format!("{HINTS} Updated 09:00:00 UTC\n")
        );
    }
}
