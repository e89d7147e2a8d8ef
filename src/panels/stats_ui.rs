use egui::{Grid, RichText, Ui};
use egui_phosphor::regular::LIST_NUMBERS;

use super::panel_trait::{Panel, PanelState};
use crate::data::overlap::{format_stat, GaussianEstimate, OverlapStats};
use crate::data::scene::SceneSnapshot;

/// Side panel listing the statistics and both Gaussian estimates.
pub struct StatsPanel {
    pub state: PanelState,
}

impl Default for StatsPanel {
    fn default() -> Self {
        Self {
            state: PanelState::new("Statistics", LIST_NUMBERS),
        }
    }
}

impl Panel for StatsPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, snapshot: Option<&SceneSnapshot>) {
        ui.heading(self.state.title);
        let Some(snap) = snapshot else {
            ui.label("No intervals yet.");
            return;
        };
        let stats = &snap.stats;

        Grid::new("overlap_stats_grid")
            .num_columns(2)
            .striped(true)
            .show(ui, |ui| {
                let row = |ui: &mut Ui, name: &str, value: f64| {
                    ui.label(name);
                    ui.label(RichText::new(format_stat(value)).monospace());
                    ui.end_row();
                };
                row(ui, "Uniform overlap", stats.uniform_overlap);
                row(ui, "Gaussian overlap", stats.gaussian_overlap);
                row(ui, "log10 Gaussian overlap", stats.log10_gaussian_overlap());
                row(ui, "t² statistic", stats.t_stat_squared);
            });

        ui.separator();
        estimate_row(ui, "Interval 1", &stats.first);
        estimate_row(ui, "Interval 2", &stats.second);

        if let Some(warning) = degeneracy_warning(stats) {
            ui.separator();
            ui.colored_label(ui.visuals().warn_fg_color, warning);
        }
    }
}

fn estimate_row(ui: &mut Ui, name: &str, est: &GaussianEstimate) {
    ui.label(format!(
        "{name}: mean {} ± sd {}",
        format_stat(est.mean),
        format_stat(est.sd)
    ));
}

fn degeneracy_warning(stats: &OverlapStats) -> Option<&'static str> {
    if stats.is_finite() {
        None
    } else if stats.first.sd == 0.0 && stats.second.sd == 0.0 {
        Some("Both intervals have zero width: statistics are undefined.")
    } else {
        Some("Statistics are not finite.")
    }
}
