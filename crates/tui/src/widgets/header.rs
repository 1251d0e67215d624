//! Dashboard header: title, greeting and the three header buttons.

use gridline_protocol::PENDING_NOTIFICATIONS;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Widget},
};

use super::truncate;

const MENU: &str = "[≡]";
const PROFILE: &str = "[☺]";
const TITLE: &str = "Dashboard";

/// Where the header buttons were drawn, for mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderButtons {
    /// Menu button, left of the title.
    pub menu: Rect,
    /// Notification bell with its unread count.
    pub notifications: Rect,
    /// Profile button, rightmost.
    pub profile: Rect,
}

/// Renders the header into `area` and returns the button positions.
///
/// # Layout
///
/// ```text
/// ╭────────────────────────────────────────╮
/// │[≡] Dashboard                 [✉ 3] [☺]│
/// │    Welcome back, mobile user!          │
/// ╰────────────────────────────────────────╯
/// ```
///
/// Buttons that do not fit get an empty rectangle.
///
/// # Examples
///
/// ```
/// use ratatui::{buffer::Buffer, layout::Rect};
/// use gridline_tui::widgets::render_header;
///
/// let area = Rect::new(0, 0, 40, 4);
/// let mut buf = Buffer::empty(area);
///
/// let buttons = render_header("Welcome back!", area, &mut buf);
/// assert_eq!(buttons.menu, Rect::new(1, 1, 3, 2));
/// assert!(buttons.profile.x > buttons.notifications.x);
/// ```
pub fn render_header(subtitle: &str, area: Rect, buf: &mut Buffer) -> HeaderButtons {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);
    block.render(area, buf);

    if inner.width == 0 || inner.height == 0 {
        return HeaderButtons::default();
    }

    let button_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let notifications_label = format!("[✉ {PENDING_NOTIFICATIONS}]");
    let notifications_width = notifications_label.chars().count() as u16;
    let menu_width = MENU.chars().count() as u16;
    let profile_width = PROFILE.chars().count() as u16;

    let mut buttons = HeaderButtons::default();
    let button = |x: u16, width: u16| Rect::new(x, inner.y, width, inner.height);

    if inner.width >= menu_width {
        buf.set_string(inner.x, inner.y, MENU, button_style);
        buttons.menu = button(inner.x, menu_width);
    }

    // Right-hand buttons need room beside the title.
    let right_width = notifications_width + 1 + profile_width;
    let text_x = inner.x + menu_width + 1;
    let text_room = if inner.width >= menu_width + 1 + TITLE.len() as u16 + 1 + right_width {
        let profile_x = inner.right() - profile_width;
        let notifications_x = profile_x - 1 - notifications_width;
        buf.set_string(profile_x, inner.y, PROFILE, button_style);
        buf.set_string(notifications_x, inner.y, &notifications_label, button_style);
        buttons.profile = button(profile_x, profile_width);
        buttons.notifications = button(notifications_x, notifications_width);
        notifications_x.saturating_sub(text_x + 1)
    } else {
        inner.right().saturating_sub(text_x)
    };

    if text_room > 0 {
        buf.set_stringn(
            text_x,
            inner.y,
            TITLE,
            usize::from(text_room),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
    }
    if inner.height > 1 {
        let room = inner.right().saturating_sub(text_x);
        buf.set_string(
            text_x,
            inner.y + 1,
            truncate(subtitle, usize::from(room)),
            Style::default().fg(Color::Gray),
        );
    }

    buttons
}
