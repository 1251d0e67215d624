//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the input handler, background tasks, and the application state.

use gridline_layout::Orientation;
use serde::{Deserialize, Serialize};

/// Messages that drive dashboard state changes.
///
/// Most are produced by the input handler; `RefreshComplete` and
/// `OrientationChanged` arrive from deferred work and viewport
/// subscriptions.
///
/// # Examples
///
/// ```
/// use gridline_protocol::Message;
///
/// let msg = Message::NavigateRight;
/// assert!(matches!(msg, Message::NavigateRight));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move the tile selection left.
    NavigateLeft,
    /// Move the tile selection right.
    NavigateRight,
    /// Move the tile selection up one row.
    NavigateUp,
    /// Move the tile selection down one row.
    NavigateDown,
    /// Press the selected tile.
    Select,
    /// Escape: close an overlay or clear the selection (contextual).
    Escape,
    /// Quit the application.
    Quit,
    /// Pull to refresh.
    Refresh,
    /// A scheduled refresh has finished.
    RefreshComplete,
    /// Scroll the content up one row.
    ScrollUp,
    /// Scroll the content down one row.
    ScrollDown,
    /// Toggle the help overlay.
    ToggleHelp,
    /// Toggle the layout inspector overlay.
    ToggleInspector,
    /// Header menu button.
    OpenMenu,
    /// Header notification button.
    OpenNotifications,
    /// Header profile button.
    OpenProfile,
    /// Mouse click at coordinates (column, row).
    ClickAt {
        /// Column (x coordinate) of the click.
        column: u16,
        /// Row (y coordinate) of the click.
        row: u16,
    },
    /// The terminal was resized.
    Resize {
        /// New width in cells.
        columns: u16,
        /// New height in cells.
        rows: u16,
    },
    /// The viewport subscription reported a new orientation.
    OrientationChanged {
        /// Orientation after the change.
        orientation: Orientation,
    },
}

impl Message {
    /// Returns `true` if this message moves the tile selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridline_protocol::Message;
    ///
    /// assert!(Message::NavigateLeft.is_navigation());
    /// assert!(!Message::ScrollDown.is_navigation());
    /// ```
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::NavigateLeft | Self::NavigateRight | Self::NavigateUp | Self::NavigateDown
        )
    }

    /// Returns `true` if this message should terminate the application.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridline_protocol::Message;
    ///
    /// assert!(Message::Quit.is_terminating());
    /// assert!(!Message::Escape.is_terminating());
    /// ```
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }

    /// Returns `true` for messages that do not come from user input.
    ///
    /// These must never be swallowed by overlays.
    #[must_use]
    pub fn is_system(&self) -> bool {
        matches!(
            self,
            Self::RefreshComplete | Self::Resize { .. } | Self::OrientationChanged { .. }
        )
    }
}
