//! Main application struct and run loop.
//!
//! This module provides the `App` struct which owns the dashboard state and
//! the layout resolver, turns messages into state changes, and renders the
//! dashboard for the current terminal size.

use chrono::Utc;
use gridline_config::Config;
use gridline_layout::{SpacingSize, Subscription, ViewportResolver};
use gridline_protocol::{Alert, DashboardData, Message};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
};
use tokio::{
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
};

use crate::{
    DashboardState, Overlay,
    event::{event_to_message, poll_event},
    layout::{HEADER_HEIGHT, MIN_HEIGHT, MIN_WIDTH, STATUS_BAR_HEIGHT, px_to_cells},
    refresh::schedule_refresh,
    terminal::{AppTerminal, CellSize, measure_cell_size},
    widgets::{
        ContentMetrics, DashboardCanvas, HeaderButtons, blit, render_alert, render_dashboard, render_header,
        render_help_overlay, render_inspector, render_status_bar,
    },
};

/// Terminal size assumed until the first resize or draw.
const INITIAL_COLUMNS: u16 = 80;
const INITIAL_ROWS: u16 = 24;

/// The main application struct.
///
/// Manages the dashboard state and provides the main event loop.
#[derive(Debug)]
pub struct App {
    state: DashboardState,
    resolver: ViewportResolver,
    config: Config,
    cell: CellSize,
    /// Keeps the orientation handler registered while the app runs.
    subscription: Option<Subscription>,
    tx: UnboundedSender<Message>,
    rx: UnboundedReceiver<Message>,
    should_quit: bool,
    /// Last known terminal area; a change triggers a resize.
    last_area: Rect,
    /// Where the content was drawn, for click hit-testing.
    content_area: Rect,
    /// Content from the last render, for scrolling and hit-testing.
    canvas: DashboardCanvas,
    header_buttons: HeaderButtons,
    refresh_task: Option<JoinHandle<()>>,
}

impl App {
    /// Creates a new application showing `data`.
    ///
    /// The resolver starts from an 80×24 terminal using the configured cell
    /// size and display metrics, and is corrected on the first resize.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridline_config::Config;
    /// use gridline_protocol::dummy::sample_dashboard;
    /// use gridline_tui::App;
    ///
    /// let app = App::new(sample_dashboard(), Config::default());
    /// assert_eq!(app.resolver().grid_columns(), 4);
    /// ```
    #[must_use]
    pub fn new(data: DashboardData, config: Config) -> Self {
        let cell = CellSize::new(config.display.cell_width, config.display.cell_height);
        let resolver = ViewportResolver::new(
            cell.viewport(INITIAL_COLUMNS, INITIAL_ROWS),
            config.display.metrics(),
        );
        let (tx, rx) = mpsc::unbounded_channel();

        let notify = tx.clone();
        let subscription = resolver.subscribe(move |change| {
            let msg = Message::OrientationChanged {
                orientation: change.orientation,
            };
            if notify.send(msg).is_err() {
                tracing::debug!("orientation change after the app shut down");
            }
        });

        let mut state = DashboardState::new(data);
        state.orientation = resolver.orientation();

        Self {
            state,
            resolver,
            config,
            cell,
            subscription: Some(subscription),
            tx,
            rx,
            should_quit: false,
            last_area: Rect::default(),
            content_area: Rect::default(),
            canvas: DashboardCanvas::default(),
            header_buttons: HeaderButtons::default(),
            refresh_task: None,
        }
    }

    /// Returns a reference to the dashboard state.
    #[must_use]
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Returns a reference to the application configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the layout resolver.
    #[must_use]
    pub fn resolver(&self) -> &ViewportResolver {
        &self.resolver
    }

    /// Returns `true` once the user has asked to quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Updates the application state based on a message.
    ///
    /// System messages (refresh completion, resizes, orientation changes)
    /// are always handled. While an overlay is open, `?` and `i` switch
    /// overlays, scrolling is ignored, and any other input closes it.
    /// `Quit` always works.
    ///
    /// Starting a refresh spawns a timer, so `Refresh` and `ScrollUp` at the
    /// top must be sent from within a tokio runtime.
    pub fn update(&mut self, msg: Message) {
        if msg.is_system() {
            self.handle_system(msg);
            return;
        }
        if msg.is_terminating() {
            self.should_quit = true;
            return;
        }

        if self.state.has_overlay() {
            match msg {
                Message::ToggleHelp => self.state.toggle_help(),
                Message::ToggleInspector => self.state.toggle_inspector(),
                Message::ScrollUp | Message::ScrollDown => {}
                _ => {
                    self.state.dismiss_overlay();
                }
            }
            return;
        }

        if msg.is_navigation() {
            self.navigate(&msg);
            self.reveal_selection();
            return;
        }

        match msg {
            Message::Select => {
                if let Some(alert) = self.state.selected.and_then(|t| self.state.alert_for(t)) {
                    self.state.show_alert(alert);
                }
            }
            Message::Escape => self.state.clear_selection(),
            Message::Refresh => self.start_refresh(),
            Message::ScrollUp => {
                if !self.state.scroll_up() {
                    // Pulling past the top refreshes.
                    self.start_refresh();
                }
            }
            Message::ScrollDown => self.state.scroll_down(self.max_scroll()),
            Message::ToggleHelp => self.state.toggle_help(),
            Message::ToggleInspector => self.state.toggle_inspector(),
            Message::OpenMenu => self.state.show_alert(Alert::menu()),
            Message::OpenNotifications => self.state.show_alert(Alert::notifications()),
            Message::OpenProfile => self.state.show_alert(Alert::profile()),
            Message::ClickAt { column, row } => self.handle_click(column, row),
            _ => {}
        }
    }

    fn handle_system(&mut self, msg: Message) {
        match msg {
            Message::RefreshComplete => {
                self.state.data.apply_refresh(Utc::now());
                self.state.refreshing = false;
                self.refresh_task = None;
                tracing::info!("dashboard refreshed");
            }
            Message::Resize { columns, rows } => self.resize(columns, rows),
            Message::OrientationChanged { orientation } => {
                if orientation != self.state.orientation {
                    tracing::info!(from = %self.state.orientation, to = %orientation, "orientation changed");
                    self.state.orientation = orientation;
                }
            }
            _ => {}
        }
    }

    /// Feeds a new terminal size to the resolver.
    fn resize(&mut self, columns: u16, rows: u16) {
        self.last_area = Rect::new(0, 0, columns, rows);
        self.resolver.update(self.cell.viewport(columns, rows));
        tracing::debug!(
            columns,
            rows,
            device = %self.resolver.device_class(),
            grid_columns = self.resolver.grid_columns(),
            "viewport updated"
        );
    }

    fn start_refresh(&mut self) {
        if self.state.refreshing {
            tracing::debug!("refresh already in progress");
            return;
        }
        self.state.refreshing = true;
        self.refresh_task = Some(schedule_refresh(
            self.config.refresh.delay(),
            self.tx.clone(),
        ));
    }

    fn max_scroll(&self) -> u16 {
        self.canvas.height().saturating_sub(self.content_area.height)
    }

    /// Moves the selection; rows hold as many tiles as the grid has columns.
    fn navigate(&mut self, msg: &Message) {
        let columns = self.resolver.grid_columns();
        match msg {
            Message::NavigateLeft => self.state.navigate_left(),
            Message::NavigateRight => self.state.navigate_right(),
            Message::NavigateUp => self.state.navigate_up(columns),
            Message::NavigateDown => self.state.navigate_down(columns),
            _ => {}
        }
    }

    /// Scrolls the selected tile into view, using the last render.
    fn reveal_selection(&mut self) {
        let Some(tile) = self.state.selected else {
            return;
        };
        if let Some(rect) = self.canvas.tile_rect(tile) {
            self.state
                .scroll_into_view(rect.y, rect.bottom(), self.content_area.height);
        }
    }

    /// Handles a mouse click at the given coordinates.
    ///
    /// Header buttons open their alerts; a click on a tile selects it and
    /// presses it.
    fn handle_click(&mut self, column: u16, row: u16) {
        let position = (column, row).into();
        let buttons = self.header_buttons;
        if buttons.menu.contains(position) {
            self.state.show_alert(Alert::menu());
            return;
        }
        if buttons.notifications.contains(position) {
            self.state.show_alert(Alert::notifications());
            return;
        }
        if buttons.profile.contains(position) {
            self.state.show_alert(Alert::profile());
            return;
        }

        if !self.content_area.contains(position) {
            return;
        }
        let x = column - self.content_area.x;
        let y = (row - self.content_area.y).saturating_add(self.state.scroll);
        let Some(tile) = self.canvas.tile_at(x, y) else {
            return;
        };
        self.state.selected = Some(tile);
        if let Some(alert) = self.state.alert_for(tile) {
            self.state.show_alert(alert);
        }
    }

    /// Renders the application UI to the given frame.
    ///
    /// A size change since the last frame is fed to the resolver first, so
    /// every frame is laid out for the size it is drawn at. Terminals below
    /// the minimum size get a "terminal too small" message.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        if (area.width, area.height) != (self.last_area.width, self.last_area.height) {
            self.resize(area.width, area.height);
        }
        self.last_area = area;

        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.header_buttons = HeaderButtons::default();
            self.content_area = Rect::default();
            self.canvas = DashboardCanvas::default();
            render_terminal_too_small(frame, area);
            return;
        }

        let [header_area, content_area, status_area] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(area);

        let layout = self.resolver.snapshot();
        let cell_px = self.cell.width_px();
        let metrics = ContentMetrics {
            stat_columns: layout.grid_columns,
            inset: px_to_cells(layout.adaptive_padding, cell_px),
            gap: px_to_cells(layout.spacing.get(SpacingSize::Small), cell_px),
        };
        let subtitle = if layout.is_tablet {
            "Welcome back, tablet user!"
        } else {
            "Welcome back, mobile user!"
        };

        let canvas = render_dashboard(
            &self.state.data,
            &metrics,
            self.state.selected,
            content_area.width,
        );
        self.content_area = content_area;
        self.canvas = canvas;
        self.state.clamp_scroll(self.max_scroll());

        let buf = frame.buffer_mut();
        self.header_buttons = render_header(subtitle, header_area, buf);
        blit(&self.canvas.buffer, self.state.scroll, content_area, buf);
        render_status_bar(
            self.state.refreshing,
            self.state.data.refreshed_at,
            status_area,
            buf,
        );

        match &self.state.overlay {
            Overlay::None => {}
            Overlay::Help => render_help_overlay(area, buf),
            Overlay::Inspector => render_inspector(&layout, self.resolver.metrics(), area, buf),
            Overlay::Alert(alert) => render_alert(alert, area, buf),
        }
    }

    /// Runs the main application loop.
    ///
    /// This function blocks until the user quits the application.
    /// It polls for events, drains completions from background tasks,
    /// updates state, and renders the UI.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use gridline_config::Config;
    /// use gridline_protocol::dummy::sample_dashboard;
    /// use gridline_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(sample_dashboard(), Config::default());
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        let result = self.event_loop(terminal);
        self.finish(result)
    }

    fn event_loop(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        let fallback = CellSize::new(
            self.config.display.cell_width,
            self.config.display.cell_height,
        );
        self.cell = measure_cell_size(fallback, self.config.display.pixel_ratio);
        let size = terminal.size()?;
        self.update(Message::Resize {
            columns: size.width,
            rows: size.height,
        });
        tracing::info!(cell = ?self.cell, "dashboard started");

        loop {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(event) = poll_event()? {
                if let Some(msg) = event_to_message(&event) {
                    self.update(msg);
                }
            }

            while let Ok(msg) = self.rx.try_recv() {
                self.update(msg);
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    /// Shuts down whether or not the loop failed, then hands back its result.
    fn finish(&mut self, result: anyhow::Result<()>) -> anyhow::Result<()> {
        self.shutdown();
        result
    }

    /// Unsubscribes from the resolver and cancels any pending refresh.
    fn shutdown(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
        if let Some(task) = self.refresh_task.take() {
            task.abort();
        }
        tracing::info!("dashboard stopped");
    }
}

/// Renders a message indicating the terminal is too small.
fn render_terminal_too_small(frame: &mut Frame, area: Rect) {
    let message = format!(
        "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
        area.width, area.height, MIN_WIDTH, MIN_HEIGHT
    );

    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .wrap(ratatui::widgets::Wrap { trim: false });

    let vertical_offset = area.height.saturating_sub(2) / 2;
    let centered_area = Rect {
        x: area.x,
        y: area.y + vertical_offset,
        width: area.width,
        height: area.height.saturating_sub(vertical_offset),
    };

    frame.render_widget(paragraph, centered_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Tile, test_utils::buffer_to_string};
    use gridline_config::{DisplayConfig, RefreshConfig};
    use gridline_layout::Orientation;
    use gridline_protocol::dummy::sample_dashboard;
    use ratatui::{Terminal, backend::TestBackend};

    fn sample_app() -> App {
        App::new(sample_dashboard(), Config::default())
    }

    fn draw(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| app.view(frame)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    /// Position on screen of a tile from the last render.
    fn screen_position(app: &App, tile: Tile) -> (u16, u16) {
        let rect = app.canvas.tile_rect(tile).unwrap();
        (
            app.content_area.x + rect.x + 1,
            app.content_area.y + rect.y + 1 - app.state.scroll,
        )
    }

    #[test]
    fn app_new_starts_idle() {
        let app = sample_app();

        assert!(!app.should_quit());
        assert!(app.state().selected.is_none());
        assert!(!app.state().has_overlay());
        assert_eq!(app.resolver().subscriber_count(), 1);
        assert_eq!(app.state().orientation, Orientation::Landscape);
    }

    #[test]
    fn app_quit_works_with_overlay() {
        let mut app = sample_app();
        app.update(Message::ToggleHelp);
        app.update(Message::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn app_resize_updates_resolver_and_notifies() {
        let mut app = sample_app();

        // 40×40 cells of 8×16 px is a 320×640 portrait phone.
        app.update(Message::Resize {
            columns: 40,
            rows: 40,
        });
        assert_eq!(app.resolver().orientation(), Orientation::Portrait);
        assert_eq!(app.resolver().grid_columns(), 2);

        let msg = app.rx.try_recv().unwrap();
        assert_eq!(
            msg,
            Message::OrientationChanged {
                orientation: Orientation::Portrait
            }
        );
        app.update(msg);
        assert_eq!(app.state().orientation, Orientation::Portrait);
    }

    #[test]
    fn app_resize_is_handled_under_overlay() {
        let mut app = sample_app();
        app.update(Message::ToggleInspector);
        app.update(Message::Resize {
            columns: 40,
            rows: 40,
        });

        assert_eq!(app.resolver().grid_columns(), 2);
        assert_eq!(app.state().overlay, Overlay::Inspector);
    }

    #[test]
    fn app_navigation_follows_resolver_columns() {
        let mut app = sample_app();
        app.update(Message::NavigateDown);
        app.update(Message::NavigateDown);
        // Four columns: the statistics fit on one row.
        assert_eq!(app.state().selected, Some(Tile::QuickAction(0)));

        let mut app = sample_app();
        app.update(Message::Resize {
            columns: 40,
            rows: 40,
        });
        app.update(Message::NavigateDown);
        app.update(Message::NavigateDown);
        assert_eq!(app.state().selected, Some(Tile::Statistic(2)));
    }

    #[test]
    fn app_select_opens_alert_and_any_key_dismisses() {
        let mut app = sample_app();
        app.update(Message::Select);
        assert!(!app.state().has_overlay());

        app.update(Message::NavigateRight);
        app.update(Message::NavigateRight);
        app.update(Message::Select);
        assert_eq!(
            app.state().overlay,
            Overlay::Alert(Alert::new("New Users", "Detailed view for New Users"))
        );

        app.update(Message::NavigateRight);
        assert!(!app.state().has_overlay());
        assert_eq!(app.state().selected, Some(Tile::Statistic(1)));
    }

    #[test]
    fn app_overlay_ignores_scroll() {
        let mut app = sample_app();
        app.update(Message::OpenMenu);
        app.update(Message::ScrollDown);
        app.update(Message::ScrollUp);
        assert_eq!(app.state().overlay, Overlay::Alert(Alert::menu()));
        assert!(!app.state().refreshing);
    }

    #[test]
    fn app_help_switches_to_inspector() {
        let mut app = sample_app();
        app.update(Message::ToggleHelp);
        app.update(Message::ToggleInspector);
        assert_eq!(app.state().overlay, Overlay::Inspector);

        app.update(Message::ToggleInspector);
        assert!(!app.state().has_overlay());
    }

    #[test]
    fn app_escape_clears_selection() {
        let mut app = sample_app();
        app.update(Message::NavigateRight);
        app.update(Message::Escape);
        assert!(app.state().selected.is_none());
    }

    #[test]
    fn app_header_messages_open_alerts() {
        let mut app = sample_app();
        app.update(Message::OpenNotifications);
        assert_eq!(app.state().overlay, Overlay::Alert(Alert::notifications()));

        app.update(Message::Escape);
        app.update(Message::OpenProfile);
        assert_eq!(app.state().overlay, Overlay::Alert(Alert::profile()));
    }

    #[test]
    fn app_click_on_tile_selects_and_presses() {
        let mut app = sample_app();
        draw(&mut app, 80, 40);

        let (column, row) = screen_position(&app, Tile::Statistic(1));
        app.update(Message::ClickAt { column, row });

        assert_eq!(app.state().selected, Some(Tile::Statistic(1)));
        assert_eq!(
            app.state().overlay,
            Overlay::Alert(Alert::new("New Users", "Detailed view for New Users"))
        );
    }

    #[test]
    fn app_click_on_quick_action() {
        let mut app = sample_app();
        draw(&mut app, 80, 40);

        let (column, row) = screen_position(&app, Tile::QuickAction(3));
        app.update(Message::ClickAt { column, row });

        assert_eq!(
            app.state().overlay,
            Overlay::Alert(Alert::new("Settings", "Settings pressed"))
        );
    }

    #[test]
    fn app_click_on_header_buttons() {
        let mut app = sample_app();
        draw(&mut app, 80, 40);

        let bell = app.header_buttons.notifications;
        app.update(Message::ClickAt {
            column: bell.x,
            row: bell.y,
        });
        assert_eq!(app.state().overlay, Overlay::Alert(Alert::notifications()));

        app.update(Message::Escape);
        let menu = app.header_buttons.menu;
        app.update(Message::ClickAt {
            column: menu.x + 1,
            row: menu.y,
        });
        assert_eq!(app.state().overlay, Overlay::Alert(Alert::menu()));
    }

    #[test]
    fn app_click_outside_tiles_does_nothing() {
        let mut app = sample_app();
        draw(&mut app, 80, 40);

        app.update(Message::ClickAt { column: 0, row: 39 });
        app.update(Message::ClickAt { column: 0, row: 5 });

        assert!(app.state().selected.is_none());
        assert!(!app.state().has_overlay());
    }

    #[test]
    fn app_view_shows_too_small_message() {
        let mut app = sample_app();

        let content = draw(&mut app, 80, MIN_HEIGHT - 1);
        assert!(content.contains("Terminal too small"));

        let content = draw(&mut app, MIN_WIDTH - 1, 24);
        assert!(content.contains("Terminal too"));
        assert!(app.canvas.hits.is_empty());
    }

    #[test]
    fn app_view_renders_dashboard() {
        let mut app = sample_app();
        let content = draw(&mut app, 80, 40);

        assert!(content.contains("Dashboard"));
        assert!(content.contains("Welcome back, mobile user!"));
        assert!(content.contains("Total Sales"));
        assert!(content.contains("Quick Actions"));
        assert!(content.contains("? help"));
        assert_eq!(app.canvas.hits.len(), 8);
    }

    #[test]
    fn app_view_greets_tablet_users() {
        let config = Config {
            display: DisplayConfig {
                cell_width: 16,
                cell_height: 32,
                ..Default::default()
            },
            ..Default::default()
        };
        let mut app = App::new(sample_dashboard(), config);

        // 80×40 cells of 16×32 px is 1280×1280.
        let content = draw(&mut app, 80, 40);
        assert!(app.resolver().is_tablet());
        assert!(content.contains("Welcome back, tablet user!"));
    }

    #[test]
    fn app_view_tracks_terminal_size() {
        let mut app = sample_app();
        draw(&mut app, 40, 40);
        assert_eq!(app.resolver().grid_columns(), 2);

        draw(&mut app, 100, 30);
        assert_eq!(app.resolver().grid_columns(), 4);
        assert_eq!(app.resolver().viewport().width, 800.0);
    }

    #[test]
    fn app_view_renders_overlays() {
        let mut app = sample_app();
        app.update(Message::ToggleInspector);
        let content = draw(&mut app, 80, 30);
        assert!(content.contains("Layout"));
        assert!(content.contains("Typography"));

        app.update(Message::ToggleHelp);
        let content = draw(&mut app, 80, 30);
        assert!(content.contains("Press any key to close"));
    }

    #[test]
    fn app_scroll_clamped_to_content() {
        let mut app = sample_app();
        // 11 content rows for 15 rows of content.
        draw(&mut app, 80, 16);

        for _ in 0..10 {
            app.update(Message::ScrollDown);
        }
        assert_eq!(app.state().scroll, 4);

        // A taller terminal shows everything.
        draw(&mut app, 80, 40);
        assert_eq!(app.state().scroll, 0);
    }

    #[test]
    fn app_navigation_scrolls_selection_into_view() {
        let mut app = sample_app();
        draw(&mut app, 80, 16);

        app.update(Message::NavigateDown);
        app.update(Message::NavigateDown);
        assert_eq!(app.state().selected, Some(Tile::QuickAction(0)));
        // Quick actions start at content row 9 and are 4 rows tall.
        assert_eq!(app.state().scroll, 2);

        app.update(Message::NavigateUp);
        assert_eq!(app.state().scroll, 1);
    }

    fn quick_refresh_config() -> Config {
        Config {
            refresh: RefreshConfig::with_delay_ms(100),
            ..Default::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn app_refresh_completes_through_channel() {
        let mut app = App::new(sample_dashboard(), quick_refresh_config());

        app.update(Message::Refresh);
        assert!(app.state().refreshing);

        let msg = app.rx.recv().await.unwrap();
        assert_eq!(msg, Message::RefreshComplete);
        app.update(msg);

        assert!(!app.state().refreshing);
        assert_eq!(app.state().data.statistic(1).unwrap().value, "$25.2K");
        assert_eq!(app.state().data.statistic(2).unwrap().value, "1,234");
        assert!(app.state().data.refreshed_at.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn app_pull_at_top_refreshes() {
        let mut app = App::new(sample_dashboard(), quick_refresh_config());

        app.update(Message::ScrollUp);
        assert!(app.state().refreshing);
        assert_eq!(app.rx.recv().await, Some(Message::RefreshComplete));
    }

    #[tokio::test(start_paused = true)]
    async fn app_refresh_while_refreshing_is_ignored() {
        let mut app = App::new(sample_dashboard(), quick_refresh_config());

        app.update(Message::Refresh);
        app.update(Message::Refresh);
        assert_eq!(app.rx.recv().await, Some(Message::RefreshComplete));

        tokio::time::sleep(std::time::Duration::from_secs(1)).await;
        assert!(app.rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn app_shutdown_cancels_refresh_and_unsubscribes() {
        let mut app = App::new(sample_dashboard(), quick_refresh_config());

        app.update(Message::Refresh);
        app.shutdown();
        assert_eq!(app.resolver().subscriber_count(), 0);

        tokio::time::sleep(std::time::Duration::from_secs(1)).await;
        assert!(app.rx.try_recv().is_err());

        app.update(Message::Resize {
            columns: 40,
            rows: 40,
        });
        assert!(app.rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn app_failed_loop_still_shuts_down() {
        let mut app = App::new(sample_dashboard(), quick_refresh_config());
        app.update(Message::Refresh);

        let result = app.finish(Err(anyhow::anyhow!("terminal went away")));

        assert_eq!(result.unwrap_err().to_string(), "terminal went away");
        assert_eq!(app.resolver().subscriber_count(), 0);
        tokio::time::sleep(std::time::Duration::from_secs(1)).await;
        assert!(app.rx.try_recv().is_err());
    }
}
