//! This module handles the toast layer's configuration, including loading and
//! saving display options to a `settings.toml` file.
//!
//! The configuration is an explicit value constructed once at startup and
//! handed to [`crate::ui::notifications::Manager`]; nothing in the crate
//! reads it through a global. Building a second manager from the same value
//! is idempotent.
//!
//! # Examples
//!
//! ```no_run
//! use iced_flash::config::{self, ToastConfig};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.language = Some("es".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedFlash";

/// Screen corner (or edge center) where the toast overlay stacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    #[default]
    TopRight,
    TopLeft,
    TopCenter,
    BottomRight,
    BottomLeft,
    BottomCenter,
}

/// Easing curve applied to fade transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Easing {
    /// Cosine ease-in-out.
    #[default]
    Swing,
    Linear,
}

impl Easing {
    /// Maps a linear progress value in `0.0..=1.0` onto the curve.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Swing => 0.5 - (t * std::f32::consts::PI).cos() / 2.0,
            Easing::Linear => t,
        }
    }
}

/// Display options for the toast layer.
///
/// Defaults match the widget's stock behavior: close button on, newest toast
/// stacked on top, progress bar shown, top-right placement, duplicate
/// suppression on, 300/1000/4000/1000 ms show/hide/dwell/extended timings,
/// swing fade-in and linear fade-out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    /// Locale override, e.g. `"es"`. `None` falls back to the OS locale.
    pub language: Option<String>,
    /// Render a dismiss button on each toast.
    pub close_button: bool,
    /// Log push/dismiss traffic at debug level.
    pub debug: bool,
    /// Stack new toasts above the ones already visible.
    pub newest_on_top: bool,
    /// Render a remaining-time bar at the bottom of each toast.
    pub progress_bar: bool,
    /// Where the overlay stacks on screen.
    pub position: Position,
    /// Drop a toast identical to one still visible or queued.
    pub prevent_duplicates: bool,
    /// Visible cap; further toasts queue until space frees up.
    pub max_visible: usize,
    /// Fade-in length in milliseconds.
    pub show_duration_ms: u64,
    /// Fade-out length in milliseconds.
    pub hide_duration_ms: u64,
    /// Dwell before auto-hide, in milliseconds. `0` means sticky.
    pub time_out_ms: u64,
    /// Dwell after the pointer leaves a hovered toast, in milliseconds.
    pub extended_time_out_ms: u64,
    pub show_easing: Easing,
    pub hide_easing: Easing,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            language: None,
            close_button: true,
            debug: false,
            newest_on_top: true,
            progress_bar: true,
            position: Position::TopRight,
            prevent_duplicates: true,
            max_visible: DEFAULT_MAX_VISIBLE,
            show_duration_ms: 300,
            hide_duration_ms: 1000,
            time_out_ms: 4000,
            extended_time_out_ms: 1000,
            show_easing: Easing::Swing,
            hide_easing: Easing::Linear,
        }
    }
}

pub const DEFAULT_MAX_VISIBLE: usize = 3;

impl ToastConfig {
    #[must_use]
    pub fn show_duration(&self) -> Duration {
        Duration::from_millis(self.show_duration_ms)
    }

    #[must_use]
    pub fn hide_duration(&self) -> Duration {
        Duration::from_millis(self.hide_duration_ms)
    }

    /// Dwell before a toast starts hiding. `None` means the toast is sticky
    /// and only a manual dismiss removes it.
    #[must_use]
    pub fn time_out(&self) -> Option<Duration> {
        (self.time_out_ms > 0).then(|| Duration::from_millis(self.time_out_ms))
    }

    #[must_use]
    pub fn extended_time_out(&self) -> Duration {
        Duration::from_millis(self.extended_time_out_ms)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<ToastConfig> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(ToastConfig::default())
}

pub fn save(config: &ToastConfig) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<ToastConfig> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &ToastConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_match_stock_widget_options() {
        let config = ToastConfig::default();
        assert!(config.close_button);
        assert!(!config.debug);
        assert!(config.newest_on_top);
        assert!(config.progress_bar);
        assert_eq!(config.position, Position::TopRight);
        assert!(config.prevent_duplicates);
        assert_eq!(config.show_duration_ms, 300);
        assert_eq!(config.hide_duration_ms, 1000);
        assert_eq!(config.time_out_ms, 4000);
        assert_eq!(config.extended_time_out_ms, 1000);
        assert_eq!(config.show_easing, Easing::Swing);
        assert_eq!(config.hide_easing, Easing::Linear);
    }

    #[test]
    fn save_and_load_round_trip_preserves_options() {
        let config = ToastConfig {
            language: Some("es".to_string()),
            position: Position::BottomLeft,
            time_out_ms: 2500,
            prevent_duplicates: false,
            ..ToastConfig::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, ToastConfig::default());
    }

    #[test]
    fn partial_file_fills_missing_fields_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "position = \"bottom-center\"\ntime_out_ms = 0\n")
            .expect("failed to write partial toml");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.position, Position::BottomCenter);
        assert_eq!(loaded.time_out(), None);
        assert!(loaded.close_button);
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");

        save_to_path(&ToastConfig::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn zero_time_out_means_sticky() {
        let config = ToastConfig {
            time_out_ms: 0,
            ..ToastConfig::default()
        };
        assert_eq!(config.time_out(), None);
    }

    #[test]
    fn easing_endpoints_are_fixed() {
        for easing in [Easing::Swing, Easing::Linear] {
            assert!(easing.apply(0.0).abs() < 1e-6);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6);
        }
        // Swing is slower than linear near the start
        assert!(Easing::Swing.apply(0.25) < Easing::Linear.apply(0.25));
    }
}
