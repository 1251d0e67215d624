//! Quick-action tile widget.

use gridline_protocol::QuickAction;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::{accent_color, truncate};

/// Renders a quick-action tile: the icon above a centered title.
///
/// # Examples
///
/// ```
/// use ratatui::{buffer::Buffer, layout::Rect};
/// use gridline_protocol::dummy::sample_quick_actions;
/// use gridline_tui::widgets::render_quick_action;
///
/// let actions = sample_quick_actions();
/// let area = Rect::new(0, 0, 16, 4);
/// let mut buf = Buffer::empty(area);
///
/// render_quick_action(&actions[1], true, area, &mut buf);
/// ```
pub fn render_quick_action(action: &QuickAction, is_selected: bool, area: Rect, buf: &mut Buffer) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    let accent = accent_color(action.accent);
    let (border_style, title_style) = if is_selected {
        (
            Style::default().fg(accent),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::White),
        )
    };

    let inner_width = usize::from(area.width.saturating_sub(2));
    let content = vec![
        Line::from(Span::styled(action.icon.glyph(), Style::default().fg(accent))),
        Line::from(Span::styled(truncate(&action.title, inner_width), title_style)),
    ];

    Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style),
        )
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use gridline_protocol::{Accent, Icon};

    #[test]
    fn tile_centers_icon_and_title() {
        let action = QuickAction::new("Settings", Icon::Settings, Accent::Neutral);
        let area = Rect::new(0, 0, 14, 4);
        let mut buf = Buffer::empty(area);

        render_quick_action(&action, false, area, &mut buf);

        insta::assert_snapshot!(buffer_to_string(&buf), @r"
        ╭────────────╮
        │      ⚙     │
        │  Settings  │
        ╰────────────╯
        ");
    }

    #[test]
    fn long_title_is_truncated() {
        let action = QuickAction::new("View Reports", Icon::Assessment, Accent::Secondary);
        let area = Rect::new(0, 0, 8, 4);
        let mut buf = Buffer::empty(area);

        render_quick_action(&action, false, area, &mut buf);

        assert!(buffer_to_string(&buf).contains("View …"));
    }

    #[test]
    fn selected_tile_highlights_border() {
        let action = QuickAction::new("Add Product", Icon::AddBox, Accent::Primary);
        let area = Rect::new(0, 0, 16, 4);
        let mut buf = Buffer::empty(area);

        render_quick_action(&action, true, area, &mut buf);

        assert_eq!(buf.cell((0, 0)).unwrap().fg, Color::Blue);
    }
}
