//! Shared protocol types for the gridline application.
//!
//! This crate defines the types passed between gridline components: the
//! dashboard data model, alert dialogs, and the message enum that drives
//! the TUI.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`dashboard`]: Statistics, quick actions, and the refresh rule
//! - [`alert`]: Alert dialogs raised by tile and header presses
//! - [`message`]: TUI event messages
//! - [`dummy`]: Sample dashboard data
//!
//! # Examples
//!
//! ```
//! use chrono::Utc;
//! use gridline_protocol::{Alert, dummy::sample_dashboard};
//!
//! let mut data = sample_dashboard();
//! let alert = Alert::for_statistic(&data.statistics[0]);
//! assert_eq!(alert.body, "Detailed view for Total Sales");
//!
//! data.apply_refresh(Utc::now());
//! assert_eq!(data.statistics[0].value, "$25.2K");
//! ```

pub mod alert;
pub mod dashboard;
pub mod dummy;
pub mod message;

// Re-export primary types at crate root for convenience
pub use alert::{Alert, PENDING_NOTIFICATIONS};
pub use dashboard::{
    Accent, DashboardData, Icon, QuickAction, REFRESHED_STATISTIC_ID, REFRESHED_VALUE, Statistic,
    Trend,
};
pub use message::Message;
