//! Alert dialogs raised by dashboard interactions.

use serde::{Deserialize, Serialize};

use crate::dashboard::{QuickAction, Statistic};

/// Number of unread notifications reported by the header bell.
pub const PENDING_NOTIFICATIONS: usize = 3;

/// A modal message with a title and body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Dialog title.
    pub title: String,
    /// Dialog body.
    pub body: String,
}

impl Alert {
    /// Creates an alert.
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Alert shown when a statistic card is pressed.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridline_protocol::{Alert, dummy::sample_dashboard};
    ///
    /// let data = sample_dashboard();
    /// let alert = Alert::for_statistic(&data.statistics[0]);
    /// assert_eq!(alert.title, "Total Sales");
    /// assert_eq!(alert.body, "Detailed view for Total Sales");
    /// ```
    #[must_use]
    pub fn for_statistic(stat: &Statistic) -> Self {
        Self::new(&stat.title, format!("Detailed view for {}", stat.title))
    }

    /// Alert shown when a quick action is pressed.
    #[must_use]
    pub fn for_quick_action(action: &QuickAction) -> Self {
        Self::new(&action.title, format!("{} pressed", action.title))
    }

    /// Alert shown by the header menu button.
    #[must_use]
    pub fn menu() -> Self {
        Self::new("Menu", "Menu opened")
    }

    /// Alert shown by the header notification button.
    #[must_use]
    pub fn notifications() -> Self {
        Self::new(
            "Notifications",
            format!("You have {PENDING_NOTIFICATIONS} notifications"),
        )
    }

    /// Alert shown by the header profile button.
    #[must_use]
    pub fn profile() -> Self {
        Self::new("Profile", "Profile opened")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{Accent, Icon};

    #[test]
    fn quick_action_alert_text() {
        let action = QuickAction::new("Add Product", Icon::AddBox, Accent::Primary);
        let alert = Alert::for_quick_action(&action);
        assert_eq!(alert.title, "Add Product");
        assert_eq!(alert.body, "Add Product pressed");
    }

    #[test]
    fn header_alerts() {
        assert_eq!(Alert::menu().body, "Menu opened");
        assert_eq!(Alert::notifications().body, "You have 3 notifications");
        assert_eq!(Alert::profile().title, "Profile");
    }
}
