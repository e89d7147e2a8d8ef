pub mod density_ui;
pub mod panel_trait;
pub mod stats_ui;
pub mod surface_ui;

pub use density_ui::DensityPanel;
pub use panel_trait::{Panel, PanelState};
pub use stats_ui::StatsPanel;
pub use surface_ui::SurfacePanel;
