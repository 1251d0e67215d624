//! Layout inspector overlay.
//!
//! Shows every value the resolver derived for the current viewport, so the
//! effect of resizing the terminal or changing the display configuration
//! can be checked by eye.

use gridline_layout::{DisplayMetrics, ResolvedLayout};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::centered_rect;

const INSPECTOR_WIDTH: u16 = 46;
const INSPECTOR_HEIGHT: u16 = 18;

/// Renders the layout inspector centered in `area`.
///
/// # Examples
///
/// ```
/// use ratatui::{buffer::Buffer, layout::Rect};
/// use gridline_layout::{DisplayMetrics, ResolvedLayout, Viewport};
/// use gridline_tui::widgets::render_inspector;
///
/// let metrics = DisplayMetrics::default();
/// let layout = ResolvedLayout::compute(Viewport::new(640.0, 384.0), &metrics);
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_inspector(&layout, &metrics, area, &mut buf);
/// ```
pub fn render_inspector(
    layout: &ResolvedLayout,
    metrics: &DisplayMetrics,
    area: Rect,
    buf: &mut Buffer,
) {
    let popup_area = centered_rect(INSPECTOR_WIDTH, INSPECTOR_HEIGHT, area);
    Clear.render(popup_area, buf);

    let block = Block::default()
        .title(Span::styled(
            " Layout ",
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightMagenta));

    Paragraph::new(build_lines(layout, metrics))
        .block(block)
        .alignment(Alignment::Left)
        .render(popup_area, buf);
}

fn build_lines(layout: &ResolvedLayout, metrics: &DisplayMetrics) -> Vec<Line<'static>> {
    let label_style = Style::default().fg(Color::DarkGray);
    let value_style = Style::default().fg(Color::White);
    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let row = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!(" {label:<12}"), label_style),
            Span::styled(value, value_style),
        ])
    };

    let mut lines = vec![
        row("Device", layout.device_class.to_string()),
        row("Orientation", layout.orientation.to_string()),
        row(
            "Tablet",
            if layout.is_tablet { "yes" } else { "no" }.to_string(),
        ),
        row(
            "Viewport",
            format!(
                "{:.0}×{:.0} px",
                layout.viewport.width, layout.viewport.height
            ),
        ),
        row("Columns", layout.grid_columns.to_string()),
        row("Padding", format!("{} px", layout.adaptive_padding)),
        row(
            "Display",
            format!(
                "{} font×{:.2} ratio×{:.2}",
                metrics.platform,
                metrics.font_scale(),
                metrics.pixel_ratio()
            ),
        ),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!(" {:<20}", "Spacing"), header_style),
            Span::styled("Typography", header_style),
        ]),
    ];

    let spacing: Vec<String> = layout
        .spacing
        .iter()
        .map(|(size, px)| format!("{:<8}{px:>4} px", size.token()))
        .collect();
    let typography: Vec<String> = layout
        .typography
        .iter()
        .map(|(role, px)| format!("{:<8}{px:>4} px", role.token()))
        .collect();

    for i in 0..spacing.len().max(typography.len()) {
        let left = spacing.get(i).map_or("", String::as_str);
        let right = typography.get(i).map_or("", String::as_str);
        lines.push(Line::from(Span::styled(
            format!(" {left:<20}{right}"),
            value_style,
        )));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use gridline_layout::{Platform, Viewport};

    fn render(viewport: Viewport, metrics: DisplayMetrics) -> String {
        let layout = ResolvedLayout::compute(viewport, &metrics);
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        render_inspector(&layout, &metrics, area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn lines_fit_the_panel() {
        let metrics = DisplayMetrics::default();
        let layout = ResolvedLayout::compute(Viewport::new(375.0, 667.0), &metrics);
        assert_eq!(
            build_lines(&layout, &metrics).len() + 2,
            usize::from(INSPECTOR_HEIGHT)
        );
    }

    #[test]
    fn phone_portrait_values() {
        let content = render(Viewport::new(375.0, 667.0), DisplayMetrics::default());

        assert!(content.contains("Layout"));
        assert!(content.contains("medium"));
        assert!(content.contains("portrait"));
        assert!(content.contains("375×667 px"));
        assert!(content.contains("ios font×1.00 ratio×1.00"));
    }

    #[test]
    fn lists_every_token() {
        let content = render(Viewport::new(1024.0, 768.0), DisplayMetrics::default());

        for token in ["xs", "sm", "md", "lg", "xl", "h1", "h4", "body", "caption"] {
            assert!(content.contains(token), "missing {token}");
        }
        assert!(content.contains("landscape"));
    }

    #[test]
    fn shows_platform_overrides() {
        let metrics = DisplayMetrics::new(Platform::Android)
            .with_font_scale(1.3)
            .with_pixel_ratio(2.0);
        let content = render(Viewport::new(400.0, 800.0), metrics);

        assert!(content.contains("android font×1.30 ratio×2.00"));
        assert!(content.contains("large"));
    }
}
