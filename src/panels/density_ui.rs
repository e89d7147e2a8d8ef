//! Density plot of both intervals (uniform and Gaussian readings) on the unit axis.

use egui::{Color32, Ui};
use egui_phosphor::regular::CHART_LINE;
use egui_plot::{Legend, Line, Plot};

use super::panel_trait::{Panel, PanelState};
use crate::data::overlap::{GaussianEstimate, Interval};
use crate::data::scene::SceneSnapshot;

const SAMPLES: usize = 256;
const SD_SPAN: f64 = 4.0;
const COLORS: [Color32; 2] = [
    Color32::from_rgb(0x3b, 0x82, 0xf6),
    Color32::from_rgb(0xf5, 0x93, 0x00),
];

/// One plotted series.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityCurve {
    pub name: String,
    /// Index of the interval the curve belongs to (0 or 1).
    pub interval: usize,
    pub points: Vec<[f64; 2]>,
}

/// Curves for `snap`; zero-width intervals have no density and are skipped.
pub fn density_curves(snap: &SceneSnapshot) -> Vec<DensityCurve> {
    let ppu = snap.pixels_per_unit;
    let ests = [snap.stats.first, snap.stats.second];
    let (lo, hi) = plot_range(&ests);

    let mut curves = Vec::new();
    for (idx, (interval, est)) in [snap.first, snap.second].iter().zip(ests).enumerate() {
        if interval.length() > 0.0 {
            curves.push(DensityCurve {
                name: format!("Uniform {}", idx + 1),
                interval: idx,
                points: uniform_steps(interval, ppu),
            });
        }
        if est.sd > 0.0 {
            let step = (hi - lo) / (SAMPLES - 1) as f64;
            let points = (0..SAMPLES)
                .map(|i| {
                    let x = lo + step * i as f64;
                    [x, est.pdf(x)]
                })
                .collect();
            curves.push(DensityCurve {
                name: format!("Gaussian {}", idx + 1),
                interval: idx,
                points,
            });
        }
    }
    curves
}

fn plot_range(ests: &[GaussianEstimate; 2]) -> (f64, f64) {
    let lo = ests
        .iter()
        .map(|e| e.mean - SD_SPAN * e.sd)
        .fold(f64::INFINITY, f64::min);
    let hi = ests
        .iter()
        .map(|e| e.mean + SD_SPAN * e.sd)
        .fold(f64::NEG_INFINITY, f64::max);
    if hi > lo {
        (lo, hi)
    } else {
        (lo - 1.0, lo + 1.0)
    }
}

fn uniform_steps(interval: &Interval, pixels_per_unit: f64) -> Vec<[f64; 2]> {
    let l = interval.left / pixels_per_unit;
    let r = interval.right / pixels_per_unit;
    let h = 1.0 / (r - l);
    vec![[l, 0.0], [l, h], [r, h], [r, 0.0]]
}

pub struct DensityPanel {
    pub state: PanelState,
}

impl Default for DensityPanel {
    fn default() -> Self {
        Self {
            state: PanelState::new("Densities", CHART_LINE),
        }
    }
}

impl Panel for DensityPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, snapshot: Option<&SceneSnapshot>) {
        let curves = snapshot.map(density_curves).unwrap_or_default();
        Plot::new("density_plot")
            .legend(Legend::default())
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .show(ui, |plot_ui| {
                for curve in curves {
                    let color = COLORS[curve.interval % COLORS.len()];
                    plot_ui.line(Line::new(curve.name, curve.points).color(color));
                }
            });
    }
}
