//! Row partitioning for responsive grids.
//!
//! Items are laid out eagerly in row-major order; the final row is padded
//! with placeholders so every row spans the full column count. This is
//! meant for small, bounded collections such as dashboard tiles.

/// Items that may carry their own identity in a grid.
///
/// Cells of items without an identifier are keyed by position.
pub trait GridItem {
    /// Stable identifier of this item, if it has one.
    fn grid_id(&self) -> Option<u64> {
        None
    }
}

/// Identity of a grid cell across re-renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKey {
    /// The item's own identifier.
    Id(u64),
    /// The cell's position in the flattened grid.
    Index(usize),
}

/// One cell of a grid row.
#[derive(Debug, PartialEq)]
pub enum GridCell<'a, T> {
    /// A cell holding an item.
    Item {
        /// Position of the item in the input sequence.
        index: usize,
        /// The item.
        item: &'a T,
    },
    /// Blank space filling out an incomplete last row.
    Placeholder {
        /// Position this cell would have in the input sequence.
        index: usize,
    },
}

// Manual impls: `T` itself need not be `Clone`.
impl<T> Clone for GridCell<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for GridCell<'_, T> {}

impl<'a, T> GridCell<'a, T> {
    /// Returns the item, or `None` for a placeholder.
    #[must_use]
    pub fn item(&self) -> Option<&'a T> {
        match self {
            Self::Item { item, .. } => Some(*item),
            Self::Placeholder { .. } => None,
        }
    }

    /// Returns the flattened position of this cell.
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Self::Item { index, .. } | Self::Placeholder { index } => *index,
        }
    }

    /// Returns `true` for placeholder cells.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }
}

impl<T: GridItem> GridCell<'_, T> {
    /// Returns the cell's key: the item's identifier if present, else its
    /// position.
    #[must_use]
    pub fn key(&self) -> CellKey {
        match self {
            Self::Item { index, item } => item
                .grid_id()
                .map_or(CellKey::Index(*index), CellKey::Id),
            Self::Placeholder { index } => CellKey::Index(*index),
        }
    }
}

/// A full-width row of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct GridRow<'a, T> {
    /// Row position, also used as the row key.
    pub index: usize,
    /// Exactly `columns` cells.
    pub cells: Vec<GridCell<'a, T>>,
}

impl<T> GridRow<'_, T> {
    /// Returns the row key, which is its position.
    #[must_use]
    pub fn key(&self) -> usize {
        self.index
    }

    /// Returns the number of non-placeholder cells.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_placeholder()).count()
    }
}

/// Splits `items` into rows of `columns` cells.
///
/// A column count of zero is treated as one.
///
/// # Examples
///
/// ```
/// use gridline_layout::partition_rows;
///
/// let items: Vec<u32> = (0..10).collect();
/// let rows = partition_rows(&items, 4);
///
/// assert_eq!(rows.len(), 3);
/// assert_eq!(rows[2].item_count(), 2);
/// assert!(rows[2].cells[3].is_placeholder());
/// ```
#[must_use]
pub fn partition_rows<T>(items: &[T], columns: usize) -> Vec<GridRow<'_, T>> {
    let columns = columns.max(1);
    items
        .chunks(columns)
        .enumerate()
        .map(|(row, chunk)| {
            let start = row * columns;
            let mut cells: Vec<GridCell<'_, T>> = chunk
                .iter()
                .enumerate()
                .map(|(offset, item)| GridCell::Item {
                    index: start + offset,
                    item,
                })
                .collect();
            cells.extend(
                (chunk.len()..columns).map(|offset| GridCell::Placeholder {
                    index: start + offset,
                }),
            );
            GridRow { index: row, cells }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    struct Tile {
        id: Option<u64>,
    }

    impl GridItem for Tile {
        fn grid_id(&self) -> Option<u64> {
            self.id
        }
    }

    fn describe(rows: &[GridRow<'_, u32>]) -> String {
        rows.iter()
            .map(|row| {
                let cells: Vec<String> = row
                    .cells
                    .iter()
                    .map(|cell| cell.item().map_or("_".to_string(), u32::to_string))
                    .collect();
                format!("[{}]", cells.join(" "))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn ten_items_in_four_columns() {
        let items: Vec<u32> = (0..10).collect();
        let rows = partition_rows(&items, 4);

        insta::assert_snapshot!(describe(&rows), @r"
        [0 1 2 3]
        [4 5 6 7]
        [8 9 _ _]
        ");
    }

    #[test]
    fn exact_multiple_has_no_placeholders() {
        let items: Vec<u32> = (0..6).collect();
        let rows = partition_rows(&items, 3);

        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.item_count() == 3));
    }

    #[test]
    fn empty_input_has_no_rows() {
        let items: Vec<u32> = Vec::new();
        assert!(partition_rows(&items, 4).is_empty());
    }

    #[test]
    fn zero_columns_acts_as_one() {
        let items = [7u32, 8];
        let rows = partition_rows(&items, 0);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].cells.len(), 1);
        assert_eq!(rows[1].cells[0].item(), Some(&8));
    }

    #[test]
    fn keys_prefer_item_identifier() {
        let items = [Tile { id: Some(42) }, Tile { id: None }];
        let rows = partition_rows(&items, 3);
        let keys: Vec<CellKey> = rows[0].cells.iter().map(GridCell::key).collect();

        assert_eq!(
            keys,
            vec![CellKey::Id(42), CellKey::Index(1), CellKey::Index(2)]
        );
    }

    #[test]
    fn row_indices_are_sequential() {
        let items: Vec<u32> = (0..7).collect();
        let rows = partition_rows(&items, 2);
        let indices: Vec<usize> = rows.iter().map(GridRow::key).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    proptest! {
        #[test]
        fn partition_preserves_order_and_shape(len in 0usize..64, columns in 1usize..8) {
            let items: Vec<usize> = (0..len).collect();
            let rows = partition_rows(&items, columns);

            prop_assert_eq!(rows.len(), len.div_ceil(columns));
            prop_assert!(rows.iter().all(|row| row.cells.len() == columns));

            let flattened: Vec<usize> = rows
                .iter()
                .flat_map(|row| row.cells.iter().filter_map(|cell| cell.item().copied()))
                .collect();
            prop_assert_eq!(&flattened, &items);

            let placeholders: usize = rows
                .iter()
                .map(|row| columns - row.item_count())
                .sum();
            prop_assert!(placeholders < columns);
        }
    }
}
