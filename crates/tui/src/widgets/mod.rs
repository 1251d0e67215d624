//! Widget components for the gridline TUI.
//!
//! Each widget is a function that renders state into a [`Buffer`]; widgets
//! that need to be clicked return the rectangles they drew.
//!
//! # Modules
//!
//! - [`header`]: Title, greeting and header buttons
//! - [`dashboard`]: The scrollable dashboard content
//! - [`grid`]: Lays out grid rows into cell rectangles
//! - [`stat_card`]: Statistic cards
//! - [`quick_action`]: Quick-action tiles
//! - [`status_bar`]: Key hints and refresh status
//! - [`help`], [`inspector`], [`alert`]: Overlays
//!
//! # Accent Colours
//!
//! | Accent | Color |
//! |--------|-------|
//! | `Primary` | `Color::Blue` |
//! | `Secondary` | `Color::Magenta` |
//! | `Highlight` | `Color::Yellow` |
//! | `Success` | `Color::Green` |
//! | `Warning` | `Color::Red` |
//! | `Neutral` | `Color::Gray` |

use gridline_protocol::{Accent, Trend};
use ratatui::{buffer::Buffer, layout::Rect, style::Color};

pub mod alert;
pub mod dashboard;
pub mod grid;
pub mod header;
pub mod help;
pub mod inspector;
pub mod quick_action;
pub mod stat_card;
pub mod status_bar;

// Re-export primary rendering functions for convenience
pub use alert::render_alert;
pub use dashboard::{ContentMetrics, DashboardCanvas, blit, render_dashboard};
pub use grid::{grid_height, render_grid};
pub use header::{HeaderButtons, render_header};
pub use help::render_help_overlay;
pub use inspector::render_inspector;
pub use quick_action::render_quick_action;
pub use stat_card::render_stat_card;
pub use status_bar::render_status_bar;

/// Returns the terminal colour for an accent role.
///
/// # Examples
///
/// ```
/// use gridline_protocol::Accent;
/// use gridline_tui::widgets::accent_color;
/// use ratatui::style::Color;
///
/// assert_eq!(accent_color(Accent::Success), Color::Green);
/// ```
#[must_use]
pub const fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Primary => Color::Blue,
        Accent::Secondary => Color::Magenta,
        Accent::Highlight => Color::Yellow,
        Accent::Success => Color::Green,
        Accent::Warning => Color::Red,
        Accent::Neutral => Color::Gray,
    }
}

/// Returns the colour of a trend indicator.
#[must_use]
pub const fn trend_color(trend: Trend) -> Color {
    match trend {
        Trend::Up => Color::Green,
        Trend::Down => Color::Red,
    }
}

/// Creates a centered rectangle within `area`, clamped to fit.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    Rect::new(x, y, popup_width, popup_height)
}

/// Truncates `text` to `max_width` characters, marking the cut with `…`.
pub(crate) fn truncate(text: &str, max_width: usize) -> String {
    if text.chars().count() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut truncated: String = text.chars().take(max_width - 1).collect();
    truncated.push('…');
    truncated
}

/// Blanks `area` in `buf`, keeping it inside the buffer.
pub(crate) fn clear_area(area: Rect, buf: &mut Buffer) {
    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.reset();
            }
        }
    }
}
