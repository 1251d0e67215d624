//! Terminal setup, teardown and viewport measurement.
//!
//! This module provides functions for initializing and restoring the terminal
//! state, installing a panic hook that restores the terminal on panic, and
//! translating the terminal's cell grid into a logical-pixel [`Viewport`].

use std::io::{self, Stdout};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, WindowSize, disable_raw_mode,
        enable_raw_mode, window_size,
    },
};
use gridline_layout::Viewport;
use ratatui::{Terminal, backend::CrosstermBackend};

/// The terminal type used by the application.
pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Error type for terminal operations.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    /// Failed to initialize the terminal.
    #[error("failed to setup terminal: {0}")]
    Setup(#[source] io::Error),

    /// Failed to restore the terminal.
    #[error("failed to restore terminal: {0}")]
    Restore(#[source] io::Error),
}

/// Enters raw mode and the alternate screen with mouse capture enabled.
///
/// Mouse capture is needed for tile clicks and wheel scrolling.
///
/// # Errors
///
/// Returns an error if any terminal operation fails.
pub fn setup_terminal() -> Result<AppTerminal, TerminalError> {
    enable_raw_mode().map_err(TerminalError::Setup)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(TerminalError::Setup)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(TerminalError::Setup)
}

/// Undoes [`setup_terminal`] and shows the cursor again.
///
/// # Errors
///
/// Returns an error if any terminal operation fails.
///
/// # Examples
///
/// ```no_run
/// use gridline_tui::terminal;
///
/// # fn main() -> Result<(), terminal::TerminalError> {
/// let mut terminal = terminal::setup_terminal()?;
/// terminal::restore_terminal(&mut terminal)?;
/// # Ok(())
/// # }
/// ```
pub fn restore_terminal(terminal: &mut AppTerminal) -> Result<(), TerminalError> {
    disable_raw_mode().map_err(TerminalError::Restore)?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )
    .map_err(TerminalError::Restore)?;
    terminal.show_cursor().map_err(TerminalError::Restore)?;
    Ok(())
}

/// Size of one terminal cell in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSize {
    /// Cell width.
    pub width: f64,
    /// Cell height.
    pub height: f64,
}

impl CellSize {
    /// Creates a cell size from whole pixel dimensions.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width: f64::from(width),
            height: f64::from(height),
        }
    }

    /// Derives the cell size from a reported window size.
    ///
    /// Terminals report physical pixels, so they are divided by
    /// `pixel_ratio`. Returns `None` when the terminal does not report a
    /// pixel size (many report zero) or the ratio is unusable.
    ///
    /// # Examples
    ///
    /// ```
    /// use crossterm::terminal::WindowSize;
    /// use gridline_tui::terminal::CellSize;
    ///
    /// let size = WindowSize { rows: 50, columns: 100, width: 1600, height: 1600 };
    /// let cell = CellSize::from_window(&size, 2.0).unwrap();
    /// assert_eq!(cell, CellSize { width: 8.0, height: 16.0 });
    ///
    /// let hidden = WindowSize { rows: 50, columns: 100, width: 0, height: 0 };
    /// assert!(CellSize::from_window(&hidden, 1.0).is_none());
    /// ```
    #[must_use]
    pub fn from_window(size: &WindowSize, pixel_ratio: f64) -> Option<Self> {
        if size.width == 0 || size.height == 0 || size.columns == 0 || size.rows == 0 {
            return None;
        }
        if !(pixel_ratio.is_finite() && pixel_ratio > 0.0) {
            return None;
        }
        Some(Self {
            width: f64::from(size.width) / f64::from(size.columns) / pixel_ratio,
            height: f64::from(size.height) / f64::from(size.rows) / pixel_ratio,
        })
    }

    /// Whole-pixel cell width, used to convert resolver lengths to cells.
    #[must_use]
    pub fn width_px(&self) -> u16 {
        // Saturating float-to-int cast; at least one pixel.
        (self.width.round() as u16).max(1)
    }

    /// Returns the viewport covered by a grid of cells.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridline_tui::terminal::CellSize;
    ///
    /// let viewport = CellSize::new(8, 16).viewport(80, 24);
    /// assert_eq!((viewport.width, viewport.height), (640.0, 384.0));
    /// ```
    #[must_use]
    pub fn viewport(&self, columns: u16, rows: u16) -> Viewport {
        Viewport::new(
            f64::from(columns) * self.width,
            f64::from(rows) * self.height,
        )
    }
}

/// Measures the cell size of the attached terminal.
///
/// Falls back to `fallback` when the terminal does not report its pixel
/// dimensions.
#[must_use]
pub fn measure_cell_size(fallback: CellSize, pixel_ratio: f64) -> CellSize {
    match window_size() {
        Ok(size) => CellSize::from_window(&size, pixel_ratio).unwrap_or_else(|| {
            tracing::debug!("terminal does not report pixel size, using configured cell size");
            fallback
        }),
        Err(err) => {
            tracing::debug!(%err, "could not query terminal window size");
            fallback
        }
    }
}

/// Installs a panic hook that restores the terminal before the original
/// hook prints the panic.
///
/// Call once at startup, before [`setup_terminal`]. The hook captured at
/// the time of the call runs after restoration.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_size_from_window_divides_evenly() {
        let size = WindowSize {
            rows: 24,
            columns: 80,
            width: 720,
            height: 432,
        };
        let cell = CellSize::from_window(&size, 1.0).unwrap();
        assert_eq!(cell.width, 9.0);
        assert_eq!(cell.height, 18.0);
        assert_eq!(cell.width_px(), 9);
    }

    #[test]
    fn unusable_pixel_ratio_is_rejected() {
        let size = WindowSize {
            rows: 24,
            columns: 80,
            width: 640,
            height: 384,
        };
        assert!(CellSize::from_window(&size, 0.0).is_none());
        assert!(CellSize::from_window(&size, f64::NAN).is_none());
    }

    #[test]
    fn viewport_of_empty_grid_is_degenerate() {
        let viewport = CellSize::new(8, 16).viewport(0, 24);
        assert!(viewport.is_degenerate());
    }

    #[test]
    fn tiny_cells_round_to_one_pixel() {
        let cell = CellSize {
            width: 0.2,
            height: 0.4,
        };
        assert_eq!(cell.width_px(), 1);
    }
}
