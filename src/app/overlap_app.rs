//! Standalone application wrapper.
//!
//! [`OverlapApp`] owns the draggable surface with the interval scene installed
//! and the read-only panels around it, and implements [`eframe::App`] so it can
//! run as a native window or inside a browser canvas.

use eframe::egui;

use crate::config::{OverlapConfig, Theme};
use crate::data::scene::IntervalScene;
use crate::data::surface::DragSurface;
use crate::panels::{DensityPanel, Panel, StatsPanel, SurfacePanel};

pub struct OverlapApp {
    surface_panel: SurfacePanel,
    scene: IntervalScene,
    stats_panel: StatsPanel,
    density_panel: DensityPanel,

    /// Theme to apply to the egui context. Applied once on the first frame.
    theme: Theme,
    theme_applied: bool,
}

impl OverlapApp {
    pub fn new(cfg: &OverlapConfig) -> Self {
        let (surface, scene) = IntervalScene::build(&cfg.scene);
        let mut density_panel = DensityPanel::default();
        density_panel.state.visible = cfg.show_densities;
        Self {
            surface_panel: SurfacePanel::new(surface),
            scene,
            stats_panel: StatsPanel::default(),
            density_panel,
            theme: cfg.theme,
            theme_applied: false,
        }
    }

    pub fn surface(&self) -> &DragSurface {
        self.surface_panel.surface()
    }
}

impl eframe::App for OverlapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            self.theme.apply(ctx);
            self.theme_applied = true;
        }

        egui::TopBottomPanel::top("overlap_top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.strong("Drag the interval endpoints");
                ui.separator();
                self.stats_panel.render_toggle(ui);
                self.density_panel.render_toggle(ui);
            });
        });

        // Side panels show the snapshot of the previous frame; a repaint is
        // requested below whenever the surface re-rendered.
        let snapshot = self.scene.snapshot();

        if self.stats_panel.state.visible {
            egui::SidePanel::right("overlap_stats")
                .resizable(true)
                .default_width(260.0)
                .show(ctx, |ui| {
                    self.stats_panel.render_panel(ui, snapshot.as_ref());
                });
        }

        if self.density_panel.state.visible {
            egui::TopBottomPanel::bottom("overlap_densities")
                .resizable(true)
                .default_height(240.0)
                .show(ctx, |ui| {
                    self.density_panel.render_panel(ui, snapshot.as_ref());
                });
        }

        let renders_before = self.surface().render_count();
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::horizontal().show(ui, |ui| {
                self.surface_panel.show(ui);
            });
        });
        if self.surface().render_count() != renders_before {
            ctx.request_repaint();
        }
    }
}
