//! ci-overlap crate root: re-exports and module wiring.
//!
//! An interactive teaching tool built on egui/eframe. Two intervals are drawn
//! on a shared number line; dragging their endpoints continuously recomputes
//! how much they overlap, read both as uniform ranges and as 95 % Gaussian
//! confidence intervals.
//!
//! - `data::surface`: the generic draggable-point surface
//! - `data::input`: mouse/touch normalization into surface coordinates
//! - `data::overlap`: the overlap statistics (pure functions)
//! - `data::scene`: the two-interval scene composed onto a surface
//! - `panels`: egui widgets around the surface
//! - `app`: the eframe application and its native/browser entry points
//! - `config`: scene geometry (YAML) and window options

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod panels;

// Public re-exports for a compact external API
pub use app::OverlapApp;
#[cfg(not(target_arch = "wasm32"))]
pub use app::run_overlap;
pub use config::{OverlapConfig, SceneConfig, Theme};
pub use data::canvas::{Canvas, DrawCommand};
pub use data::input::{InputNormalizer, PointerEvent};
pub use data::overlap::{compute_overlap, Interval, OverlapStats};
pub use data::point::{Point, PointId, PointOptions, PointSet};
pub use data::scene::{IntervalScene, SceneSnapshot};
pub use data::surface::DragSurface;
pub use error::ConfigError;
