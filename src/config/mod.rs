// SPDX-License-Identifier: MPL-2.0
//! This module handles the carousel configuration, including loading and saving
//! it to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `items` - Ordered item list (plain paths or `{ src, alt }` tables)
//! - `[navigation]` - Looping and initial position
//! - `[transition]` - Transition effect and duration
//! - `[autoplay]` - Automatic advance settings
//! - `[gesture]` - Drag commit threshold and slide reference width
//! - `[indicator]` - Position indicator variant and placement
//! - `[arrows]` - Previous/next buttons
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_CAROUSEL_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_carousel::config::{self, CarouselConfig};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.autoplay.enabled = Some(true);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::domain::item::{normalize, Item, ItemSpec};
use crate::domain::{
    AutoplayInterval, CarouselTransition, DragReferenceWidth, DragThreshold, IndicatorKind,
    IndicatorPosition, TransitionDuration,
};
use crate::engine::{CarouselOptions, IndicatorOptions};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key returned by [`load`] when an existing file could not be read.
pub const LOAD_ERROR_WARNING: &str = "config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// Navigation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavigationConfig {
    /// Wrap around at both ends.
    #[serde(
        rename = "loop",
        default = "default_loop",
        skip_serializing_if = "Option::is_none"
    )]
    pub loop_enabled: Option<bool>,

    /// Index shown on mount; clamped into range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_index: Option<usize>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            loop_enabled: default_loop(),
            initial_index: Some(0),
        }
    }
}

/// Transition settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransitionConfig {
    /// Carousel effect (`slide` or `fade`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<CarouselTransition>,

    /// Transition duration in milliseconds.
    #[serde(
        default = "default_transition_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration_ms: Option<u64>,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            kind: Some(CarouselTransition::default()),
            duration_ms: default_transition_ms(),
        }
    }
}

/// Autoplay settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AutoplayConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Delay between advances in milliseconds.
    #[serde(
        default = "default_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub interval_ms: Option<u64>,

    /// Pause while the pointer is over the carousel.
    #[serde(
        default = "default_pause_on_hover",
        skip_serializing_if = "Option::is_none"
    )]
    pub pause_on_hover: Option<bool>,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            enabled: Some(false),
            interval_ms: default_interval_ms(),
            pause_on_hover: default_pause_on_hover(),
        }
    }
}

/// Drag gesture settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GestureConfig {
    /// Minimum drag distance that commits a navigation.
    #[serde(
        default = "default_threshold_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub threshold_px: Option<f32>,

    /// Width used to convert drag pixels into track percent.
    #[serde(
        default = "default_reference_width_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub reference_width_px: Option<f32>,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            threshold_px: default_threshold_px(),
            reference_width_px: default_reference_width_px(),
        }
    }
}

/// Position indicator settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IndicatorConfig {
    #[serde(default = "default_enabled", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<IndicatorKind>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<IndicatorPosition>,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            kind: Some(IndicatorKind::default()),
            position: Some(IndicatorPosition::default()),
        }
    }
}

/// Previous/next arrow settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArrowsConfig {
    #[serde(default = "default_enabled", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl Default for ArrowsConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Carousel configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CarouselConfig {
    /// Items to display, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ItemSpec>,

    #[serde(default)]
    pub navigation: NavigationConfig,

    #[serde(default)]
    pub transition: TransitionConfig,

    #[serde(default)]
    pub autoplay: AutoplayConfig,

    #[serde(default)]
    pub gesture: GestureConfig,

    #[serde(default)]
    pub indicator: IndicatorConfig,

    #[serde(default)]
    pub arrows: ArrowsConfig,
}

impl CarouselConfig {
    /// Normalized items, in declaration order.
    #[must_use]
    pub fn items(&self) -> Vec<Item> {
        normalize(self.items.iter().cloned())
    }
}

impl From<&CarouselConfig> for CarouselOptions {
    fn from(config: &CarouselConfig) -> Self {
        let indicator = config
            .indicator
            .enabled
            .unwrap_or(true)
            .then(|| IndicatorOptions {
                kind: config.indicator.kind.unwrap_or_default(),
                position: config.indicator.position.unwrap_or_default(),
            });

        Self {
            transition: config.transition.kind.unwrap_or_default(),
            transition_duration: TransitionDuration::new(
                config
                    .transition
                    .duration_ms
                    .unwrap_or(DEFAULT_CAROUSEL_TRANSITION_MS),
            ),
            autoplay: config.autoplay.enabled.unwrap_or(false),
            autoplay_interval: AutoplayInterval::new(
                config
                    .autoplay
                    .interval_ms
                    .unwrap_or(DEFAULT_AUTOPLAY_INTERVAL_MS),
            ),
            looping: config.navigation.loop_enabled.unwrap_or(true),
            pause_on_hover: config.autoplay.pause_on_hover.unwrap_or(true),
            drag_threshold: DragThreshold::new(
                config
                    .gesture
                    .threshold_px
                    .unwrap_or(DEFAULT_DRAG_THRESHOLD_PX),
            ),
            drag_reference_width: DragReferenceWidth::new(
                config
                    .gesture
                    .reference_width_px
                    .unwrap_or(DEFAULT_DRAG_REFERENCE_WIDTH_PX),
            ),
            indicator,
            arrows: config.arrows.enabled.unwrap_or(true),
            initial_index: config.navigation.initial_index.unwrap_or(0),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_loop() -> Option<bool> {
    Some(true)
}

fn default_enabled() -> Option<bool> {
    Some(true)
}

fn default_pause_on_hover() -> Option<bool> {
    Some(true)
}

fn default_transition_ms() -> Option<u64> {
    Some(DEFAULT_CAROUSEL_TRANSITION_MS)
}

fn default_interval_ms() -> Option<u64> {
    Some(DEFAULT_AUTOPLAY_INTERVAL_MS)
}

fn default_threshold_px() -> Option<f32> {
    Some(DEFAULT_DRAG_THRESHOLD_PX)
}

fn default_reference_width_px() -> Option<f32> {
    Some(DEFAULT_DRAG_REFERENCE_WIDTH_PX)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (CarouselConfig, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (CarouselConfig, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "failed to load config");
                    return (
                        CarouselConfig::default(),
                        Some(LOAD_ERROR_WARNING.to_string()),
                    );
                }
            }
        }
    }
    (CarouselConfig::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<CarouselConfig> {
    let content = fs::read_to_string(path)?;
    let config: CarouselConfig = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &CarouselConfig) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &CarouselConfig, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &CarouselConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
