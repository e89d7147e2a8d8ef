//! egui host for a [`DragSurface`].
//!
//! Each frame the panel allocates the surface's fixed size, feeds the frame's
//! raw pointer and touch events through an [`InputNormalizer`] (offset by the
//! allocated rectangle's corner) into the surface handlers, and paints the
//! resulting canvas.

use egui::{CursorIcon, Pos2, Rect, Response, Sense, Ui};

use crate::data::input::{to_local, InputNormalizer, PointerEvent};
use crate::data::surface::DragSurface;

pub struct SurfacePanel {
    surface: DragSurface,
    input: InputNormalizer,
}

impl SurfacePanel {
    pub fn new(surface: DragSurface) -> Self {
        Self {
            surface,
            input: InputNormalizer::new(),
        }
    }

    pub fn surface(&self) -> &DragSurface {
        &self.surface
    }

    pub fn show(&mut self, ui: &mut Ui) -> Response {
        let size = self.surface.canvas().size();
        let (rect, response) = ui.allocate_exact_size(size, Sense::click_and_drag());
        let visible = ui.clip_rect().intersect(rect);
        let hovered = response.contains_pointer() || response.is_pointer_button_down_on();

        let events = ui.input(|i| i.events.clone());
        for event in &events {
            let Some(pointer) = self.input.normalize(event, rect.min) else {
                continue;
            };
            // Presses elsewhere in the window belong to other widgets.
            if let PointerEvent::Down(pos) = pointer {
                if !accepts_press(visible, hovered, pos + rect.min.to_vec2()) {
                    continue;
                }
            }
            self.surface.handle_event(pointer);
        }

        if self.surface.selected().is_some() {
            ui.ctx().set_cursor_icon(CursorIcon::Grabbing);
        } else if let Some(hover) = response.hover_pos() {
            let local = to_local(hover, rect.min);
            if self
                .surface
                .find_nearest_point(local.x as f64, local.y as f64)
                .is_some()
            {
                ui.ctx().set_cursor_icon(CursorIcon::Grab);
            }
        }

        self.surface.canvas().paint(&ui.painter_at(rect), rect.min);
        response
    }
}

/// Whether a press at `screen_pos` starts a drag: it must land on the visible,
/// unclipped part of the surface while egui routes the pointer to it.
fn accepts_press(visible: Rect, hovered: bool, screen_pos: Pos2) -> bool {
    hovered && visible.contains(screen_pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_must_hit_visible_part_of_surface() {
        // Surface at (10, 10) sized 400x100, clipped at x = 200 by a side panel.
        let rect = Rect::from_min_size(Pos2::new(10.0, 10.0), egui::vec2(400.0, 100.0));
        let clip = Rect::from_min_max(Pos2::ZERO, Pos2::new(200.0, 500.0));
        let visible = clip.intersect(rect);

        assert!(accepts_press(visible, true, Pos2::new(50.0, 40.0)));
        // Inside the surface but under the panel.
        assert!(!accepts_press(visible, true, Pos2::new(300.0, 40.0)));
        // Outside the surface entirely.
        assert!(!accepts_press(visible, true, Pos2::new(50.0, 200.0)));
        // Pointer owned by another widget.
        assert!(!accepts_press(visible, false, Pos2::new(50.0, 40.0)));
    }
}
