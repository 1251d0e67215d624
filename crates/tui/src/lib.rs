//! Terminal UI for the gridline dashboard.
//!
//! This crate provides a Ratatui-based dashboard whose grid, insets and
//! greeting follow the layout resolver: the terminal's size in cells is
//! converted to a viewport in logical pixels, and every frame is laid out
//! from the resolver's answer for that viewport.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct and run loop
//! - [`state`]: Dashboard state: selection, scrolling, overlays
//! - [`layout`]: Fixed row heights and pixel-to-cell conversion
//! - [`refresh`]: Deferred completion of pull-to-refresh
//! - [`terminal`]: Terminal setup, teardown, cell measurement and panic handling
//! - [`event`]: Event handling and key mappings
//! - [`widgets`]: Rendering functions
//!
//! # Example
//!
//! ```no_run
//! use gridline_config::Config;
//! use gridline_protocol::dummy::sample_dashboard;
//! use gridline_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let mut app = App::new(sample_dashboard(), Config::default());
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod event;
pub mod layout;
pub mod refresh;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use state::{DashboardState, Overlay, Tile};
