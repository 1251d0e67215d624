//! Dashboard data model.
//!
//! This module defines the statistics and quick actions shown on the
//! dashboard screen, along with the presentation hints (icons and accent
//! roles) that renderers map to their own glyphs and colours.

use chrono::{DateTime, Utc};
use gridline_layout::GridItem;
use serde::{Deserialize, Serialize};

/// Identifier of the statistic updated by a refresh.
pub const REFRESHED_STATISTIC_ID: u64 = 1;

/// Value that statistic takes after a refresh.
pub const REFRESHED_VALUE: &str = "$25.2K";

/// Icons available to dashboard tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    /// Upward trend chart.
    TrendingUp,
    /// A group of people.
    People,
    /// A shopping cart.
    ShoppingCart,
    /// A money sign.
    AttachMoney,
    /// A box with a plus.
    AddBox,
    /// A report chart.
    Assessment,
    /// A user group.
    Group,
    /// A gear.
    Settings,
    /// A lightning bolt.
    FlashOn,
}

impl Icon {
    /// Returns a single-cell glyph for terminal rendering.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridline_protocol::Icon;
    ///
    /// assert_eq!(Icon::Settings.glyph(), "⚙");
    /// ```
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::TrendingUp => "↗",
            Self::People => "☺",
            Self::ShoppingCart => "⊞",
            Self::AttachMoney => "$",
            Self::AddBox => "+",
            Self::Assessment => "≡",
            Self::Group => "♟",
            Self::Settings => "⚙",
            Self::FlashOn => "⚡",
        }
    }
}

/// Colour role of a tile, resolved to concrete colours by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    /// Primary brand colour.
    Primary,
    /// Secondary brand colour.
    Secondary,
    /// Highlight colour.
    Highlight,
    /// Positive outcome.
    Success,
    /// Needs attention.
    Warning,
    /// Neutral gray.
    Neutral,
}

/// Direction of a statistic's recent change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    /// The value went up.
    Up,
    /// The value went down.
    Down,
}

impl Trend {
    /// Returns an arrow for the trend direction.
    #[must_use]
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Up => "▲",
            Self::Down => "▼",
        }
    }
}

/// A statistic card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistic {
    /// Stable identifier.
    pub id: u64,
    /// Card title, e.g. "Total Sales".
    pub title: String,
    /// Display value, already formatted.
    pub value: String,
    /// Period the value covers, e.g. "This month".
    pub subtitle: String,
    /// Card icon.
    pub icon: Icon,
    /// Icon colour role.
    pub accent: Accent,
    /// Direction of change.
    pub trend: Trend,
    /// Formatted change, e.g. "+12%".
    pub trend_value: String,
}

impl GridItem for Statistic {
    fn grid_id(&self) -> Option<u64> {
        Some(self.id)
    }
}

/// A quick-action tile.
///
/// Quick actions have no identifier; grids key them by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickAction {
    /// Tile label.
    pub title: String,
    /// Tile icon.
    pub icon: Icon,
    /// Icon colour role.
    pub accent: Accent,
}

impl QuickAction {
    /// Creates a quick action.
    #[must_use]
    pub fn new(title: impl Into<String>, icon: Icon, accent: Accent) -> Self {
        Self {
            title: title.into(),
            icon,
            accent,
        }
    }
}

impl GridItem for QuickAction {}

/// Everything the dashboard screen displays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardData {
    /// Statistic cards, in display order.
    pub statistics: Vec<Statistic>,
    /// Quick-action tiles, in display order.
    pub quick_actions: Vec<QuickAction>,
    /// When the data was last refreshed, if ever.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refreshed_at: Option<DateTime<Utc>>,
}

impl DashboardData {
    /// Creates an empty dashboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the statistic with the given identifier.
    #[must_use]
    pub fn statistic(&self, id: u64) -> Option<&Statistic> {
        self.statistics.iter().find(|stat| stat.id == id)
    }

    /// Returns the total number of selectable tiles.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.statistics.len() + self.quick_actions.len()
    }

    /// Applies the result of a refresh completed at `now`.
    ///
    /// Only the statistic with [`REFRESHED_STATISTIC_ID`] changes value;
    /// the rest are carried over untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Utc;
    /// use gridline_protocol::dummy::sample_dashboard;
    ///
    /// let mut data = sample_dashboard();
    /// data.apply_refresh(Utc::now());
    ///
    /// assert_eq!(data.statistic(1).unwrap().value, "$25.2K");
    /// assert_eq!(data.statistic(2).unwrap().value, "1,234");
    /// assert!(data.refreshed_at.is_some());
    /// ```
    pub fn apply_refresh(&mut self, now: DateTime<Utc>) {
        for stat in &mut self.statistics {
            if stat.id == REFRESHED_STATISTIC_ID {
                stat.value = REFRESHED_VALUE.to_string();
            }
        }
        self.refreshed_at = Some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use gridline_layout::{CellKey, partition_rows};

    fn stat(id: u64, value: &str) -> Statistic {
        Statistic {
            id,
            title: format!("Stat {id}"),
            value: value.to_string(),
            subtitle: "Today".to_string(),
            icon: Icon::TrendingUp,
            accent: Accent::Primary,
            trend: Trend::Up,
            trend_value: "+1%".to_string(),
        }
    }

    #[test]
    fn refresh_only_touches_first_statistic() {
        let mut data = DashboardData {
            statistics: vec![stat(1, "$1"), stat(2, "$2")],
            ..Default::default()
        };
        let now = Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap();

        data.apply_refresh(now);

        assert_eq!(data.statistics[0].value, REFRESHED_VALUE);
        assert_eq!(data.statistics[1].value, "$2");
        assert_eq!(data.refreshed_at, Some(now));
    }

    #[test]
    fn refresh_without_target_statistic_only_stamps_time() {
        let mut data = DashboardData {
            statistics: vec![stat(7, "$7")],
            ..Default::default()
        };
        data.apply_refresh(Utc::now());

        assert_eq!(data.statistics[0].value, "$7");
        assert!(data.refreshed_at.is_some());
    }

    #[test]
    fn statistics_keyed_by_id_actions_by_position() {
        let stats = vec![stat(10, "a"), stat(20, "b")];
        let actions = vec![QuickAction::new("Go", Icon::AddBox, Accent::Primary)];

        let stat_rows = partition_rows(&stats, 2);
        let action_rows = partition_rows(&actions, 4);

        assert_eq!(stat_rows[0].cells[1].key(), CellKey::Id(20));
        assert_eq!(action_rows[0].cells[0].key(), CellKey::Index(0));
    }

    #[test]
    fn statistic_lookup() {
        let data = DashboardData {
            statistics: vec![stat(1, "x"), stat(2, "y")],
            ..Default::default()
        };
        assert_eq!(data.statistic(2).map(|s| s.value.as_str()), Some("y"));
        assert!(data.statistic(3).is_none());
        assert_eq!(data.tile_count(), 2);
    }

    #[test]
    fn refreshed_at_skipped_when_unset() {
        let json = serde_json::to_string(&DashboardData::new()).unwrap();
        assert!(!json.contains("refreshed_at"));
    }
}
