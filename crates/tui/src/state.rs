//! Application state management.
//!
//! This module defines the dashboard state: the data being shown, which
//! tile is selected, scroll position, and which overlay (if any) is open.

use gridline_layout::{Orientation, partition_rows};
use gridline_protocol::{Alert, DashboardData};

use crate::layout::QUICK_ACTION_COLUMNS;

/// A selectable tile on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    /// Statistic card, by position in [`DashboardData::statistics`].
    Statistic(usize),
    /// Quick-action tile, by position in [`DashboardData::quick_actions`].
    QuickAction(usize),
}

/// The overlay drawn on top of the dashboard, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Overlay {
    /// Nothing on top.
    #[default]
    None,
    /// Key binding help.
    Help,
    /// Resolved layout values.
    Inspector,
    /// A modal alert.
    Alert(Alert),
}

/// The dashboard state.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// Data being displayed.
    pub data: DashboardData,
    /// Selected tile, if any.
    pub selected: Option<Tile>,
    /// First content row shown.
    pub scroll: u16,
    /// Whether a refresh is in flight.
    pub refreshing: bool,
    /// Open overlay.
    pub overlay: Overlay,
    /// Last orientation reported by the resolver.
    pub orientation: Orientation,
}

impl DashboardState {
    /// Creates a state showing `data`, with nothing selected.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridline_protocol::dummy::sample_dashboard;
    /// use gridline_tui::DashboardState;
    ///
    /// let state = DashboardState::new(sample_dashboard());
    /// assert!(state.selected.is_none());
    /// assert!(!state.refreshing);
    /// ```
    #[must_use]
    pub fn new(data: DashboardData) -> Self {
        Self {
            data,
            selected: None,
            scroll: 0,
            refreshing: false,
            overlay: Overlay::None,
            orientation: Orientation::default(),
        }
    }

    /// Returns `true` if an overlay is open.
    #[must_use]
    pub fn has_overlay(&self) -> bool {
        self.overlay != Overlay::None
    }

    /// Toggles the help overlay, replacing any other overlay.
    pub fn toggle_help(&mut self) {
        self.overlay = if self.overlay == Overlay::Help {
            Overlay::None
        } else {
            Overlay::Help
        };
    }

    /// Toggles the layout inspector, replacing any other overlay.
    pub fn toggle_inspector(&mut self) {
        self.overlay = if self.overlay == Overlay::Inspector {
            Overlay::None
        } else {
            Overlay::Inspector
        };
    }

    /// Closes the open overlay.
    ///
    /// Returns `true` if an overlay was open.
    pub fn dismiss_overlay(&mut self) -> bool {
        std::mem::take(&mut self.overlay) != Overlay::None
    }

    /// Opens an alert.
    pub fn show_alert(&mut self, alert: Alert) {
        self.overlay = Overlay::Alert(alert);
    }

    /// Returns the alert for pressing `tile`, or `None` if it does not
    /// exist.
    #[must_use]
    pub fn alert_for(&self, tile: Tile) -> Option<Alert> {
        match tile {
            Tile::Statistic(i) => self.data.statistics.get(i).map(Alert::for_statistic),
            Tile::QuickAction(i) => self.data.quick_actions.get(i).map(Alert::for_quick_action),
        }
    }

    /// Clears the tile selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Moves the selection to the previous tile in reading order.
    ///
    /// Selects the first tile if nothing is selected; stops at the first.
    pub fn navigate_left(&mut self) {
        let tiles = self.tiles();
        self.selected = match self.selected.and_then(|t| position(&tiles, t)) {
            Some(i) => tiles.get(i.saturating_sub(1)).copied(),
            None => tiles.first().copied(),
        };
    }

    /// Moves the selection to the next tile in reading order.
    ///
    /// Selects the first tile if nothing is selected; stops at the last.
    pub fn navigate_right(&mut self) {
        let tiles = self.tiles();
        self.selected = match self.selected.and_then(|t| position(&tiles, t)) {
            Some(i) => tiles.get((i + 1).min(tiles.len() - 1)).copied(),
            None => tiles.first().copied(),
        };
    }

    /// Moves the selection one visual row up.
    ///
    /// `stat_columns` is the statistics grid's current column count. The
    /// column is kept where the row above is wide enough.
    pub fn navigate_up(&mut self, stat_columns: usize) {
        self.navigate_rows(stat_columns, -1);
    }

    /// Moves the selection one visual row down. See
    /// [`navigate_up`](Self::navigate_up).
    pub fn navigate_down(&mut self, stat_columns: usize) {
        self.navigate_rows(stat_columns, 1);
    }

    fn navigate_rows(&mut self, stat_columns: usize, delta: isize) {
        let rows = self.tile_rows(stat_columns);
        let Some(current) = self.selected else {
            self.selected = rows.first().and_then(|row| row.first()).copied();
            return;
        };
        let Some((row, column)) = rows
            .iter()
            .enumerate()
            .find_map(|(r, tiles)| tiles.iter().position(|t| *t == current).map(|c| (r, c)))
        else {
            self.selected = rows.first().and_then(|row| row.first()).copied();
            return;
        };
        let Some(target) = row.checked_add_signed(delta).and_then(|r| rows.get(r)) else {
            return;
        };
        self.selected = target.get(column.min(target.len() - 1)).copied();
    }

    /// Returns all tiles in reading order: statistics, then quick actions.
    #[must_use]
    pub fn tiles(&self) -> Vec<Tile> {
        (0..self.data.statistics.len())
            .map(Tile::Statistic)
            .chain((0..self.data.quick_actions.len()).map(Tile::QuickAction))
            .collect()
    }

    /// Returns the tiles grouped by visual row, without placeholders.
    ///
    /// Rows never mix statistics and quick actions.
    #[must_use]
    pub fn tile_rows(&self, stat_columns: usize) -> Vec<Vec<Tile>> {
        let stats = partition_rows(&self.data.statistics, stat_columns)
            .into_iter()
            .map(|row| {
                row.cells
                    .iter()
                    .filter(|cell| !cell.is_placeholder())
                    .map(|cell| Tile::Statistic(cell.index()))
                    .collect::<Vec<_>>()
            });
        let actions = partition_rows(&self.data.quick_actions, QUICK_ACTION_COLUMNS)
            .into_iter()
            .map(|row| {
                row.cells
                    .iter()
                    .filter(|cell| !cell.is_placeholder())
                    .map(|cell| Tile::QuickAction(cell.index()))
                    .collect::<Vec<_>>()
            });
        stats.chain(actions).collect()
    }

    /// Scrolls down one row, up to `max`.
    pub fn scroll_down(&mut self, max: u16) {
        self.scroll = self.scroll.saturating_add(1).min(max);
    }

    /// Scrolls up one row.
    ///
    /// Returns `false` if already at the top, which is the pull-to-refresh
    /// gesture.
    pub fn scroll_up(&mut self) -> bool {
        if self.scroll == 0 {
            return false;
        }
        self.scroll -= 1;
        true
    }

    /// Clamps the scroll offset to `max`.
    pub fn clamp_scroll(&mut self, max: u16) {
        self.scroll = self.scroll.min(max);
    }

    /// Adjusts the scroll offset so rows `top..bottom` are visible in a
    /// viewport `visible` rows tall.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridline_protocol::DashboardData;
    /// use gridline_tui::DashboardState;
    ///
    /// let mut state = DashboardState::new(DashboardData::new());
    /// state.scroll_into_view(20, 26, 10);
    /// assert_eq!(state.scroll, 16);
    ///
    /// state.scroll_into_view(2, 8, 10);
    /// assert_eq!(state.scroll, 2);
    /// ```
    pub fn scroll_into_view(&mut self, top: u16, bottom: u16, visible: u16) {
        if top < self.scroll {
            self.scroll = top;
        } else if bottom > self.scroll.saturating_add(visible) {
            self.scroll = bottom.saturating_sub(visible).min(top);
        }
    }
}

fn position(tiles: &[Tile], tile: Tile) -> Option<usize> {
    tiles.iter().position(|t| *t == tile)
}
