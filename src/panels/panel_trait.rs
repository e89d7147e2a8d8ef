use egui::Ui;

use crate::data::scene::SceneSnapshot;

#[derive(Debug, Clone, Copy)]
pub struct PanelState {
    pub title: &'static str,
    pub icon: &'static str,
    pub visible: bool,
}

impl PanelState {
    pub fn new(title: &'static str, icon: &'static str) -> Self {
        Self {
            title,
            icon,
            visible: true,
        }
    }
}

/// A read-only view onto the scene, docked next to the surface.
pub trait Panel {
    fn state(&self) -> &PanelState;
    fn state_mut(&mut self) -> &mut PanelState;

    fn title(&self) -> &'static str {
        self.state().title
    }

    fn title_and_icon(&self) -> String {
        format!("{} {}", self.state().icon, self.state().title)
    }

    /// Top-bar toggle for the panel's visibility.
    fn render_toggle(&mut self, ui: &mut Ui) {
        let label = self.title_and_icon();
        let st = self.state_mut();
        if ui.selectable_label(st.visible, label).clicked() {
            st.visible = !st.visible;
        }
    }

    fn render_panel(&mut self, ui: &mut Ui, snapshot: Option<&SceneSnapshot>);
}
