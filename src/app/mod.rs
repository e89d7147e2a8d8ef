//! Application wiring.
//!
//! | Sub-module        | Responsibility |
//! | ----------------- | -------------- |
//! | [`overlap_app`]   | [`OverlapApp`], the eframe application |
//! | [`run`]           | [`run_overlap()`] native entry point and icon loading |
//! | `web`             | `wasm32` entry point mounting on a page canvas |

mod overlap_app;
mod run;
#[cfg(target_arch = "wasm32")]
mod web;

pub use overlap_app::OverlapApp;
#[cfg(not(target_arch = "wasm32"))]
pub use run::run_overlap;
