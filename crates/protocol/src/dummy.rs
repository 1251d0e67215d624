//! Sample data for demonstration and tests.
//!
//! # Examples
//!
//! ```
//! use gridline_protocol::dummy::sample_dashboard;
//!
//! let data = sample_dashboard();
//! assert_eq!(data.statistics.len(), 4);
//! assert_eq!(data.quick_actions.len(), 4);
//! ```

use crate::dashboard::{Accent, DashboardData, Icon, QuickAction, Statistic, Trend};

/// Compact constructor for sample statistics.
struct StatBuilder {
    stat: Statistic,
}

impl StatBuilder {
    fn new(id: u64, title: &str, value: &str, subtitle: &str) -> Self {
        Self {
            stat: Statistic {
                id,
                title: title.to_string(),
                value: value.to_string(),
                subtitle: subtitle.to_string(),
                icon: Icon::TrendingUp,
                accent: Accent::Primary,
                trend: Trend::Up,
                trend_value: String::new(),
            },
        }
    }

    fn icon(mut self, icon: Icon, accent: Accent) -> Self {
        self.stat.icon = icon;
        self.stat.accent = accent;
        self
    }

    fn trend(mut self, trend: Trend, value: &str) -> Self {
        self.stat.trend = trend;
        self.stat.trend_value = value.to_string();
        self
    }

    fn build(self) -> Statistic {
        self.stat
    }
}

/// Returns the sample statistics.
#[must_use]
pub fn sample_statistics() -> Vec<Statistic> {
    vec![
        StatBuilder::new(1, "Total Sales", "$24.5K", "This month")
            .icon(Icon::TrendingUp, Accent::Success)
            .trend(Trend::Up, "+12%")
            .build(),
        StatBuilder::new(2, "New Users", "1,234", "This week")
            .icon(Icon::People, Accent::Primary)
            .trend(Trend::Up, "+8%")
            .build(),
        StatBuilder::new(3, "Orders", "456", "Today")
            .icon(Icon::ShoppingCart, Accent::Secondary)
            .trend(Trend::Down, "-3%")
            .build(),
        StatBuilder::new(4, "Revenue", "$12.3K", "This week")
            .icon(Icon::AttachMoney, Accent::Highlight)
            .trend(Trend::Up, "+15%")
            .build(),
    ]
}

/// Returns the sample quick actions.
#[must_use]
pub fn sample_quick_actions() -> Vec<QuickAction> {
    vec![
        QuickAction::new("Add Product", Icon::AddBox, Accent::Primary),
        QuickAction::new("View Reports", Icon::Assessment, Accent::Secondary),
        QuickAction::new("Manage Users", Icon::Group, Accent::Highlight),
        QuickAction::new("Settings", Icon::Settings, Accent::Neutral),
    ]
}

/// Returns a dashboard populated with sample data, never refreshed.
#[must_use]
pub fn sample_dashboard() -> DashboardData {
    DashboardData {
        statistics: sample_statistics(),
        quick_actions: sample_quick_actions(),
        refreshed_at: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_statistic_ids_are_unique() {
        let stats = sample_statistics();
        let mut ids: Vec<u64> = stats.iter().map(|s| s.id).collect();
        ids.dedup();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn orders_trend_down() {
        let data = sample_dashboard();
        let orders = data.statistic(3).unwrap();
        assert_eq!(orders.title, "Orders");
        assert_eq!(orders.trend, Trend::Down);
        assert_eq!(orders.trend_value, "-3%");
    }

    #[test]
    fn sample_quick_action_titles() {
        let titles: Vec<String> = sample_quick_actions()
            .into_iter()
            .map(|a| a.title)
            .collect();
        assert_eq!(
            titles,
            vec!["Add Product", "View Reports", "Manage Users", "Settings"]
        );
    }
}
