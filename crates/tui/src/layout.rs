//! Centralized layout measurements for the TUI.
//!
//! Row heights are fixed in terminal cells. Horizontal insets and gaps come
//! from the layout resolver in logical pixels and are converted to cells
//! with [`px_to_cells`].

/// Height of the header bar in rows.
///
/// Rounded border plus the title and subtitle lines.
pub const HEADER_HEIGHT: u16 = 4;

/// Height of the status bar in rows.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of a statistic card in rows.
///
/// Border (2 rows), icon and trend, value, title, subtitle.
pub const STAT_CARD_HEIGHT: u16 = 6;

/// Height of a quick-action tile in rows.
pub const QUICK_ACTION_HEIGHT: u16 = 4;

/// Number of columns in the quick-actions grid, whatever the device class.
pub const QUICK_ACTION_COLUMNS: usize = 4;

/// Blank rows above the first statistic row and below the last panel.
pub const CONTENT_MARGIN: u16 = 1;

/// Minimum terminal height for useful rendering.
///
/// Header, status bar and one statistic card.
pub const MIN_HEIGHT: u16 = HEADER_HEIGHT + STATUS_BAR_HEIGHT + STAT_CARD_HEIGHT;

/// Minimum terminal width for useful rendering.
///
/// Two statistic cards side by side need at least 14 cells each.
pub const MIN_WIDTH: u16 = 30;

/// Converts a length in logical pixels to whole terminal cells, rounding
/// to the nearest cell.
///
/// A zero cell size yields zero cells.
///
/// # Examples
///
/// ```
/// use gridline_tui::layout::px_to_cells;
///
/// assert_eq!(px_to_cells(38, 8), 5);
/// assert_eq!(px_to_cells(3, 8), 0);
/// assert_eq!(px_to_cells(4, 8), 1);
/// ```
#[must_use]
pub fn px_to_cells(px: u32, cell_px: u16) -> u16 {
    if cell_px == 0 {
        return 0;
    }
    let cell_px = u32::from(cell_px);
    let cells = px.saturating_add(cell_px / 2) / cell_px;
    u16::try_from(cells).unwrap_or(u16::MAX)
}
