//! Configuration types for the overlap visualization.

use std::fs;
use std::path::Path;

use eframe::egui::{self, Color32, Visuals};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Smallest accepted x-axis tick spacing.
pub const MIN_PIXELS_PER_UNIT: f64 = 1.0;

// ─────────────────────────────────────────────────────────────────────────────
// SceneConfig – geometry of the interval scene (YAML)
// ─────────────────────────────────────────────────────────────────────────────

/// Geometry and starting positions of the two-interval scene.
///
/// Every field is optional in YAML; missing ones take the defaults below.
///
/// ```yaml
/// width: 1024
/// pixels_per_unit: 100
/// endpoints: [105, 150, 205, 450]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Surface width in pixels.
    pub width: f32,
    /// Surface height in pixels.
    pub height: f32,
    /// Pointer hit-test radius in pixels.
    pub detection_radius: f64,
    /// Background fill as unmultiplied RGBA; `None` leaves the surface transparent.
    pub background: Option<[u8; 4]>,
    /// Pixels per display unit (x axis tick spacing).
    pub pixels_per_unit: f64,
    /// Half the height of an interval band.
    pub half_height: f32,
    /// Vertical centre of the first interval.
    pub first_row: f32,
    /// Vertical centre of the second interval.
    pub second_row: f32,
    /// Baseline of the first statistics label.
    pub text_start: f32,
    /// Distance between label baselines.
    pub line_height: f32,
    /// Initial x positions: first interval `[0], [1]`, second interval `[2], [3]`.
    pub endpoints: [f64; 4],
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 200.0,
            detection_radius: 20.0,
            background: None,
            pixels_per_unit: 100.0,
            half_height: 15.0,
            first_row: 30.0,
            second_row: 40.0,
            text_start: 100.0,
            line_height: 20.0,
            endpoints: [105.0, 150.0, 205.0, 450.0],
        }
    }
}

impl SceneConfig {
    pub fn background_color(&self) -> Option<Color32> {
        self.background
            .map(|[r, g, b, a]| Color32::from_rgba_unmultiplied(r, g, b, a))
    }

    /// Reject values no scene can be drawn with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite_size = self.width.is_finite() && self.height.is_finite();
        if !(finite_size && self.width > 0.0 && self.height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "surface size must be positive and finite, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.pixels_per_unit >= MIN_PIXELS_PER_UNIT) || !self.pixels_per_unit.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "pixels_per_unit must be finite and at least {MIN_PIXELS_PER_UNIT}, got {}",
                self.pixels_per_unit
            )));
        }
        if !(self.detection_radius >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "detection_radius must not be negative, got {}",
                self.detection_radius
            )));
        }
        if self.endpoints.iter().any(|x| !x.is_finite()) {
            return Err(ConfigError::Invalid("endpoints must be finite".to_string()));
        }
        Ok(())
    }

    pub fn from_yaml(s: &str) -> Result<Self, ConfigError> {
        let cfg: SceneConfig = serde_yaml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let s = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = Self::from_yaml(&s)?;
        tracing::info!(path = %path.display(), "loaded scene configuration");
        Ok(cfg)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let s = self.to_yaml()?;
        fs::write(path, s).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Theme
// ─────────────────────────────────────────────────────────────────────────────

/// egui visuals for the window. The scene draws in black, so light is the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn apply(&self, ctx: &egui::Context) {
        match self {
            Theme::Light => ctx.set_visuals(Visuals::light()),
            Theme::Dark => ctx.set_visuals(Visuals::dark()),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// OverlapConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration of the application window.
#[derive(Clone)]
pub struct OverlapConfig {
    /// Native window title.
    pub title: String,
    /// Scene geometry.
    pub scene: SceneConfig,
    /// Window theme.
    pub theme: Theme,
    /// Show the density plot below the surface on start.
    pub show_densities: bool,
    /// Optional eframe native-window options.
    #[cfg(not(target_arch = "wasm32"))]
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for OverlapConfig {
    fn default() -> Self {
        Self {
            title: "Confidence Interval Overlap".to_string(),
            scene: SceneConfig::default(),
            theme: Theme::default(),
            show_densities: true,
            #[cfg(not(target_arch = "wasm32"))]
            native_options: None,
        }
    }
}
