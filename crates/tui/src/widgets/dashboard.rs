//! The scrollable dashboard content.
//!
//! The full content is drawn into an off-screen buffer as tall as it needs
//! to be, then the visible slice is copied to the frame with [`blit`].
//!
//! # Layout
//!
//! ```text
//!   ╭────────╮ ╭────────╮      statistics grid
//!   │ stat 1 │ │ stat 2 │      (resolver column count)
//!   ╰────────╯ ╰────────╯
//!
//!   ╭ Quick Actions ──────╮
//!   │ ╭──╮ ╭──╮ ╭──╮ ╭──╮ │    fixed four columns
//!   │ ╰──╯ ╰──╯ ╰──╯ ╰──╯ │
//!   ╰─────────────────────╯
//! ```

use gridline_layout::partition_rows;
use gridline_protocol::DashboardData;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Padding, Widget},
};

use super::{grid_height, render_grid, render_quick_action, render_stat_card};
use crate::{
    layout::{CONTENT_MARGIN, QUICK_ACTION_COLUMNS, QUICK_ACTION_HEIGHT, STAT_CARD_HEIGHT},
    state::Tile,
};

/// Responsive measurements of the content, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentMetrics {
    /// Columns of the statistics grid.
    pub stat_columns: usize,
    /// Horizontal inset on each side.
    pub inset: u16,
    /// Gap between grid columns.
    pub gap: u16,
}

/// Rendered dashboard content.
///
/// The default canvas is empty: no rows and no tiles.
#[derive(Debug, Clone, Default)]
pub struct DashboardCanvas {
    /// The full content; its area starts at the origin.
    pub buffer: Buffer,
    /// Where each tile was drawn, in content coordinates.
    pub hits: Vec<(Rect, Tile)>,
}

impl DashboardCanvas {
    /// Returns the content height in rows.
    #[must_use]
    pub fn height(&self) -> u16 {
        self.buffer.area.height
    }

    /// Returns the tile drawn at content position `(x, y)`.
    #[must_use]
    pub fn tile_at(&self, x: u16, y: u16) -> Option<Tile> {
        self.hits
            .iter()
            .find(|(rect, _)| rect.contains((x, y).into()))
            .map(|(_, tile)| *tile)
    }

    /// Returns the rectangle a tile was drawn in.
    #[must_use]
    pub fn tile_rect(&self, tile: Tile) -> Option<Rect> {
        self.hits
            .iter()
            .find(|(_, t)| *t == tile)
            .map(|(rect, _)| *rect)
    }
}

fn quick_actions_panel_height(data: &DashboardData, gap: u16) -> u16 {
    if data.quick_actions.is_empty() {
        return 0;
    }
    let rows = data.quick_actions.len().div_ceil(QUICK_ACTION_COLUMNS);
    grid_height(rows, QUICK_ACTION_HEIGHT, gap).saturating_add(2)
}

/// Renders the dashboard content `width` cells wide.
///
/// # Examples
///
/// ```
/// use gridline_protocol::dummy::sample_dashboard;
/// use gridline_tui::widgets::{ContentMetrics, render_dashboard};
///
/// let metrics = ContentMetrics { stat_columns: 2, inset: 2, gap: 1 };
/// let canvas = render_dashboard(&sample_dashboard(), &metrics, None, 60);
///
/// assert_eq!(canvas.hits.len(), 8);
/// assert_eq!(canvas.height(), 22);
/// ```
#[must_use]
pub fn render_dashboard(
    data: &DashboardData,
    metrics: &ContentMetrics,
    selected: Option<Tile>,
    width: u16,
) -> DashboardCanvas {
    let stat_rows = partition_rows(&data.statistics, metrics.stat_columns);
    let stats_height = grid_height(stat_rows.len(), STAT_CARD_HEIGHT, metrics.gap);
    let panel_height = quick_actions_panel_height(data, metrics.gap);
    let separator = u16::from(stats_height > 0 && panel_height > 0);

    let height = CONTENT_MARGIN
        .saturating_add(stats_height)
        .saturating_add(separator)
        .saturating_add(panel_height)
        .saturating_add(CONTENT_MARGIN);
    let mut buffer = Buffer::empty(Rect::new(0, 0, width, height));
    let mut hits = Vec::with_capacity(data.tile_count());

    let inset = metrics.inset.min(width / 4);
    let inner_width = width.saturating_sub(inset * 2);

    let stats_area = Rect::new(inset, CONTENT_MARGIN, inner_width, stats_height);
    let placed = render_grid(
        &stat_rows,
        STAT_CARD_HEIGHT,
        metrics.gap,
        stats_area,
        &mut buffer,
        |stat, rect, buf| {
            let index = data.statistics.iter().position(|s| std::ptr::eq(s, stat));
            let is_selected = index.is_some_and(|i| selected == Some(Tile::Statistic(i)));
            render_stat_card(stat, is_selected, rect, buf);
        },
    );
    hits.extend(placed.into_iter().map(|(i, rect)| (rect, Tile::Statistic(i))));

    if panel_height > 0 {
        let panel_area = Rect::new(
            inset,
            stats_area.bottom() + separator,
            inner_width,
            panel_height,
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1))
            .title(Span::styled(
                " Quick Actions ",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));
        let grid_area = block.inner(panel_area);
        block.render(panel_area, &mut buffer);

        let action_rows = partition_rows(&data.quick_actions, QUICK_ACTION_COLUMNS);
        let placed = render_grid(
            &action_rows,
            QUICK_ACTION_HEIGHT,
            metrics.gap,
            grid_area,
            &mut buffer,
            |action, rect, buf| {
                let index = data
                    .quick_actions
                    .iter()
                    .position(|a| std::ptr::eq(a, action));
                let is_selected = index.is_some_and(|i| selected == Some(Tile::QuickAction(i)));
                render_quick_action(action, is_selected, rect, buf);
            },
        );
        hits.extend(
            placed
                .into_iter()
                .map(|(i, rect)| (rect, Tile::QuickAction(i))),
        );
    }

    DashboardCanvas { buffer, hits }
}

/// Copies the rows of `content` starting at `scroll` into `area` of `buf`.
///
/// Rows past the end of the content are left untouched.
pub fn blit(content: &Buffer, scroll: u16, area: Rect, buf: &mut Buffer) {
    let width = area.width.min(content.area.width);
    for dy in 0..area.height {
        let source_y = scroll.saturating_add(dy);
        if source_y >= content.area.height {
            break;
        }
        for dx in 0..width {
            let (Some(source), Some(target)) = (
                content.cell((dx, source_y)),
                buf.cell_mut((area.x + dx, area.y + dy)),
            ) else {
                continue;
            };
            *target = source.clone();
        }
    }
}
