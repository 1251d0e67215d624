//! Integration tests: configuration files drive the layout resolver and the
//! dashboard grid.

use std::cell::RefCell;
use std::fs;
use std::rc::Rc;

use gridline_config::Config;
use gridline_layout::{
    DeviceClass, Orientation, Platform, ResolvedLayout, SpacingSize, TextRole, Viewport,
    ViewportResolver, partition_rows,
};
use gridline_protocol::dummy::sample_dashboard;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("gridline.json5");
    fs::write(&path, contents).unwrap();
    path
}

#[tokio::test]
async fn json5_display_settings_reach_the_resolver() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
        {
            // Pixel 4a in portrait
            display: { platform: "android", pixel_ratio: 2.75 },
        }
        "#,
    );

    let config = Config::load_from(&path).unwrap();
    let metrics = config.display.metrics();
    let layout = ResolvedLayout::compute(Viewport::new(320.0, 568.0), &metrics);

    assert_eq!(metrics.platform, Platform::Android);
    assert_eq!(layout.device_class, DeviceClass::Small);
    assert_eq!(layout.orientation, Orientation::Portrait);
    assert_eq!(layout.grid_columns, 2);
    // Android text is drawn two pixels smaller than the reference platform.
    assert_eq!(layout.typography.get(TextRole::Body), 14);
    assert_eq!(layout.typography.get(TextRole::H1), 26);
}

#[test]
fn reference_platform_keeps_base_font_sizes() {
    let config = Config::default();
    let layout = ResolvedLayout::compute(Viewport::new(320.0, 568.0), &config.display.metrics());

    assert_eq!(layout.typography.get(TextRole::Body), 16);
    assert_eq!(layout.typography.get(TextRole::H1), 28);
}

#[test]
fn env_overrides_apply_on_top_of_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{ display: { platform: "web", font_scale: 2.0 } }"#);

    let config = Config::load_with(Some(path), |name| {
        (name == "GRIDLINE_FONT_SCALE").then(|| "1.0".to_string())
    })
    .unwrap();

    assert_eq!(config.display.platform, Platform::Web);
    assert_eq!(config.display.font_scale, 1.0);
}

#[test]
fn font_scale_shrinks_tablet_detection() {
    // 768×1024 has a 1280 px diagonal: a tablet at normal font scale, not
    // at 1.5×.
    let viewport = Viewport::new(768.0, 1024.0);
    let normal = Config::default();
    let large_text: Config =
        serde_json::from_str(r#"{"display": {"font_scale": 1.5}}"#).unwrap();

    let normal = ResolvedLayout::compute(viewport, &normal.display.metrics());
    let large_text = ResolvedLayout::compute(viewport, &large_text.display.metrics());

    assert!(normal.is_tablet);
    assert_eq!(normal.grid_columns, 4);
    assert!(!large_text.is_tablet);
    assert_eq!(large_text.device_class, DeviceClass::Large);
    assert_eq!(large_text.grid_columns, 2);
}

#[test]
fn rotation_regrids_the_dashboard() {
    let data = sample_dashboard();
    let mut resolver = ViewportResolver::new(
        Viewport::new(375.0, 667.0),
        Config::default().display.metrics(),
    );

    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&seen);
    let subscription = resolver.subscribe(move |change| log.borrow_mut().push(change.orientation));

    let portrait = partition_rows(&data.statistics, resolver.grid_columns());
    assert_eq!(portrait.len(), 2);
    assert_eq!(resolver.adaptive_padding(), 15);

    resolver.update(Viewport::new(667.0, 375.0));
    let landscape = partition_rows(&data.statistics, resolver.grid_columns());
    assert_eq!(landscape.len(), 1);
    assert_eq!(landscape[0].item_count(), 4);
    assert_eq!(resolver.spacing().get(SpacingSize::Medium), 27);

    subscription.unsubscribe();
    resolver.update(Viewport::new(375.0, 667.0));

    assert_eq!(*seen.borrow(), vec![Orientation::Landscape]);
}

#[test]
fn resolved_layout_serializes_for_inspection() {
    let layout = ResolvedLayout::compute(
        Viewport::new(375.0, 667.0),
        &Config::default().display.metrics(),
    );
    let json = serde_json::to_value(layout).unwrap();

    assert_eq!(json["device_class"], "medium");
    assert_eq!(json["orientation"], "portrait");
    assert_eq!(json["grid_columns"], 2);
    assert_eq!(json["adaptive_padding"], 15);
}
