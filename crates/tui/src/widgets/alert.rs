//! Modal alert dialog.

use gridline_protocol::Alert;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::centered_rect;

const MIN_WIDTH: u16 = 24;
const MAX_WIDTH: u16 = 48;
const HINT: &str = "Enter/Esc to close";

/// Renders `alert` as a dialog centered in `area`.
///
/// The dialog is sized to its body, between 24 and 48 cells wide.
///
/// # Examples
///
/// ```
/// use ratatui::{buffer::Buffer, layout::Rect};
/// use gridline_protocol::Alert;
/// use gridline_tui::widgets::render_alert;
///
/// let area = Rect::new(0, 0, 60, 20);
/// let mut buf = Buffer::empty(area);
///
/// render_alert(&Alert::menu(), area, &mut buf);
/// ```
pub fn render_alert(alert: &Alert, area: Rect, buf: &mut Buffer) {
    let body_width = alert
        .body
        .chars()
        .count()
        .max(alert.title.chars().count() + 2)
        .max(HINT.len());
    let width = u16::try_from(body_width)
        .unwrap_or(MAX_WIDTH)
        .saturating_add(4)
        .clamp(MIN_WIDTH, MAX_WIDTH);
    let popup_area = centered_rect(width, 6, area);

    Clear.render(popup_area, buf);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", alert.title),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            alert.body.clone(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            HINT,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    ];

    Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .render(popup_area, buf);
}
