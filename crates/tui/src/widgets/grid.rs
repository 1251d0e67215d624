//! Grid layout for partitioned rows.
//!
//! Turns the rows produced by [`gridline_layout::partition_rows`] into cell
//! rectangles: equal-width columns separated by `gap` cells, with one blank
//! row between grid rows when the gap is non-zero.

use gridline_layout::GridRow;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
};

/// Returns the height in rows of a grid with `rows` rows.
///
/// # Examples
///
/// ```
/// use gridline_tui::widgets::grid_height;
///
/// assert_eq!(grid_height(2, 6, 1), 13);
/// assert_eq!(grid_height(2, 6, 0), 12);
/// assert_eq!(grid_height(0, 6, 1), 0);
/// ```
#[must_use]
pub fn grid_height(rows: usize, row_height: u16, gap: u16) -> u16 {
    let Ok(rows) = u16::try_from(rows) else {
        return u16::MAX;
    };
    if rows == 0 {
        return 0;
    }
    let row_gap = u16::from(gap > 0);
    rows.saturating_mul(row_height)
        .saturating_add((rows - 1).saturating_mul(row_gap))
}

/// Renders grid rows into `area`, calling `render_item` for every
/// non-placeholder cell.
///
/// Rows that do not fit in `area` are skipped. Returns each rendered
/// item's position in the input sequence with the rectangle it was drawn
/// in.
///
/// # Examples
///
/// ```
/// use gridline_layout::partition_rows;
/// use ratatui::{buffer::Buffer, layout::Rect};
/// use gridline_tui::widgets::render_grid;
///
/// let items = ["a", "b", "c"];
/// let rows = partition_rows(&items, 2);
/// let area = Rect::new(0, 0, 21, 5);
/// let mut buf = Buffer::empty(area);
///
/// let placed = render_grid(&rows, 2, 1, area, &mut buf, |item, rect, buf| {
///     buf.set_string(rect.x, rect.y, *item, ratatui::style::Style::default());
/// });
///
/// assert_eq!(placed[0], (0, Rect::new(0, 0, 10, 2)));
/// assert_eq!(placed[1], (1, Rect::new(11, 0, 10, 2)));
/// assert_eq!(placed[2], (2, Rect::new(0, 3, 10, 2)));
/// ```
pub fn render_grid<'a, T, F>(
    rows: &[GridRow<'a, T>],
    row_height: u16,
    gap: u16,
    area: Rect,
    buf: &mut Buffer,
    mut render_item: F,
) -> Vec<(usize, Rect)>
where
    F: FnMut(&'a T, Rect, &mut Buffer),
{
    let row_gap = u16::from(gap > 0);
    let mut placed = Vec::new();
    let mut y = area.y;

    for row in rows {
        if y.saturating_add(row_height) > area.bottom() {
            break;
        }
        let row_area = Rect::new(area.x, y, area.width, row_height);
        let columns = Layout::horizontal(vec![Constraint::Fill(1); row.cells.len()])
            .spacing(gap)
            .split(row_area);

        for (cell, rect) in row.cells.iter().zip(columns.iter()) {
            if let Some(item) = cell.item() {
                render_item(item, *rect, buf);
                placed.push((cell.index(), *rect));
            }
        }
        y = y.saturating_add(row_height + row_gap);
    }

    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridline_layout::partition_rows;

    #[test]
    fn placeholder_cells_keep_column_width() {
        let items = [1u8, 2, 3];
        let rows = partition_rows(&items, 4);
        let area = Rect::new(2, 1, 40, 4);
        let mut buf = Buffer::empty(Rect::new(0, 0, 44, 6));

        let placed = render_grid(&rows, 4, 0, area, &mut buf, |_, _, _| {});

        assert_eq!(placed.len(), 3);
        assert!(placed.iter().all(|(_, rect)| rect.width == 10));
        assert_eq!(placed[2].1.x, 22);
    }

    #[test]
    fn rows_that_do_not_fit_are_skipped() {
        let items = [1u8, 2, 3, 4];
        let rows = partition_rows(&items, 2);
        let area = Rect::new(0, 0, 20, 7);
        let mut buf = Buffer::empty(area);

        let placed = render_grid(&rows, 6, 2, area, &mut buf, |_, _, _| {});

        let indices: Vec<usize> = placed.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn height_saturates() {
        assert_eq!(grid_height(usize::MAX, 6, 1), u16::MAX);
        assert_eq!(grid_height(20_000, 6, 1), u16::MAX);
    }
}
