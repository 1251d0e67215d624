//! Statistic card widget.

use gridline_protocol::Statistic;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Widget},
};

use super::{accent_color, trend_color, truncate};

/// Renders a statistic card.
///
/// Selected cards get a bright border in the card's accent colour.
/// Cards smaller than 4×3 cells are skipped.
///
/// # Layout
///
/// ```text
/// ╭──────────────────╮
/// │↗           ▲ +12%│
/// │$24.5K            │
/// │Total Sales       │
/// │This month        │
/// ╰──────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::{buffer::Buffer, layout::Rect};
/// use gridline_protocol::dummy::sample_statistics;
/// use gridline_tui::widgets::render_stat_card;
///
/// let stats = sample_statistics();
/// let area = Rect::new(0, 0, 20, 6);
/// let mut buf = Buffer::empty(area);
///
/// render_stat_card(&stats[0], false, area, &mut buf);
/// ```
pub fn render_stat_card(stat: &Statistic, is_selected: bool, area: Rect, buf: &mut Buffer) {
    if area.width < 4 || area.height < 3 {
        return;
    }

    let accent = accent_color(stat.accent);
    let border_style = if is_selected {
        Style::default().fg(accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if is_selected {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(border_style);
    let inner = block.inner(area);
    block.render(area, buf);

    let width = usize::from(inner.width);
    let mut y = inner.y;
    let bottom = inner.bottom();

    // Icon on the left, trend on the right.
    if y < bottom {
        buf.set_stringn(inner.x, y, stat.icon.glyph(), width, Style::default().fg(accent));
        let trend = format!("{} {}", stat.trend.arrow(), stat.trend_value);
        let trend_width = trend.chars().count();
        if trend_width + 2 <= width {
            let x = inner.right() - trend_width as u16;
            buf.set_string(x, y, &trend, Style::default().fg(trend_color(stat.trend)));
        }
        y += 1;
    }

    let lines = [
        (
            stat.value.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        (stat.title.as_str(), Style::default().fg(Color::Gray)),
        (stat.subtitle.as_str(), Style::default().fg(Color::DarkGray)),
    ];
    for (text, style) in lines {
        if y >= bottom {
            break;
        }
        buf.set_string(inner.x, y, truncate(text, width), style);
        y += 1;
    }
}
