// SPDX-License-Identifier: MPL-2.0
use iced_carousel::config::{self, CarouselConfig, LOAD_ERROR_WARNING};
use iced_carousel::domain::{CarouselTransition, IndicatorKind, IndicatorPosition, Item};
use iced_carousel::engine::{Carousel, CarouselOptions, Message};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

const SETTINGS: &str = r#"
items = [
    "mountains.jpg",
    { src = "lake.jpg", alt = "Lake at dawn" },
    { src = "forest.jpg" },
]

[navigation]
loop = false
initial_index = 1

[transition]
kind = "fade"
duration_ms = 300

[autoplay]
enabled = true
interval_ms = 2000
pause_on_hover = false

[gesture]
threshold_px = 80.0

[indicator]
kind = "fraction"
position = "left"

[arrows]
enabled = false
"#;

#[test]
fn settings_file_drives_the_carousel() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    fs::write(&path, SETTINGS).expect("Failed to write settings file");

    let config = config::load_from_path(&path).expect("Failed to load settings");
    assert_eq!(
        config.items(),
        vec![
            Item::new("mountains.jpg", "Item 1"),
            Item::new("lake.jpg", "Lake at dawn"),
            Item::new("forest.jpg", "Item 3"),
        ]
    );

    let options = CarouselOptions::from(&config);
    assert_eq!(options.transition, CarouselTransition::Fade);
    assert_eq!(options.transition_duration.millis(), 300);
    assert!(options.autoplay);
    assert_eq!(options.autoplay_interval.millis(), 2_000);
    assert!(!options.looping);
    assert!(!options.pause_on_hover);
    assert_eq!(options.drag_threshold.pixels(), 80.0);
    assert_eq!(options.drag_reference_width.pixels(), 300.0);
    assert!(!options.arrows);
    let indicator = options.indicator.expect("indicator enabled by default");
    assert_eq!(indicator.kind, IndicatorKind::Fraction);
    assert_eq!(indicator.position, IndicatorPosition::Left);

    let mut carousel = Carousel::new(config.items(), options);
    assert_eq!(carousel.current_index(), Some(1));
    carousel.update(Message::HoverEntered);
    carousel.update(Message::Tick(Duration::from_millis(2_000)));
    assert_eq!(carousel.current_index(), Some(2));

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn out_of_range_values_are_clamped() {
    let config: CarouselConfig = toml::from_str(
        r#"
[transition]
duration_ms = 0

[autoplay]
interval_ms = 1

[gesture]
threshold_px = -5.0
reference_width_px = 1000000.0
"#,
    )
    .expect("valid TOML");

    let options = CarouselOptions::from(&config);
    assert_eq!(options.transition_duration.millis(), 50);
    assert_eq!(options.autoplay_interval.millis(), 100);
    assert_eq!(options.drag_threshold.pixels(), 1.0);
    assert_eq!(options.drag_reference_width.pixels(), 10_000.0);
}

#[test]
fn initial_index_past_the_end_is_clamped() {
    let config: CarouselConfig = toml::from_str(
        r#"
items = ["a.png", "b.png"]

[navigation]
initial_index = 9
"#,
    )
    .expect("valid TOML");
    let carousel = Carousel::new(config.items(), CarouselOptions::from(&config));
    assert_eq!(carousel.current_index(), Some(1));
}

#[test]
fn saved_settings_load_back_unchanged() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let original: CarouselConfig = toml::from_str(SETTINGS).expect("valid TOML");

    config::save_with_override(&original, Some(dir.path().to_path_buf()))
        .expect("Failed to save settings");
    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert!(warning.is_none());
    assert_eq!(loaded, original);
}

#[test]
fn missing_file_yields_defaults_without_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (loaded, warning) = config::load_with_override(Some(dir.path().join("nowhere")));
    assert!(warning.is_none());
    assert_eq!(loaded, CarouselConfig::default());
    assert!(loaded.items().is_empty());
}

#[test]
fn broken_file_yields_defaults_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[transition\nkind = 3")
        .expect("Failed to write settings file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, CarouselConfig::default());
    assert_eq!(warning.as_deref(), Some(LOAD_ERROR_WARNING));
}
