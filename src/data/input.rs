//! Mouse and touch normalization.
//!
//! egui delivers raw [`egui::Event`]s in screen points. [`InputNormalizer`] turns
//! them into [`PointerEvent`]s in surface-local coordinates, mapping the first
//! active touch onto the same down/move/up path the mouse uses. Further touches
//! are ignored while one is active.

use egui::{Event, PointerButton, Pos2, TouchDeviceId, TouchId, TouchPhase};

/// A pointer event in surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Pos2),
    Move(Pos2),
    Up,
}

/// Translate a screen position into surface-local coordinates.
pub fn to_local(pos: Pos2, origin: Pos2) -> Pos2 {
    (pos - origin).to_pos2()
}

#[derive(Debug, Clone, Default)]
pub struct InputNormalizer {
    active_touch: Option<(TouchDeviceId, TouchId)>,
}

impl InputNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a touch currently drives the pointer path.
    pub fn touch_active(&self) -> bool {
        self.active_touch.is_some()
    }

    /// Map one raw event; `origin` is the surface's top-left corner on screen.
    pub fn normalize(&mut self, event: &Event, origin: Pos2) -> Option<PointerEvent> {
        match event {
            Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed,
                ..
            } => Some(if *pressed {
                PointerEvent::Down(to_local(*pos, origin))
            } else {
                PointerEvent::Up
            }),
            Event::PointerMoved(pos) => Some(PointerEvent::Move(to_local(*pos, origin))),
            Event::Touch {
                device_id,
                id,
                phase,
                pos,
                ..
            } => self.normalize_touch((*device_id, *id), *phase, to_local(*pos, origin)),
            _ => None,
        }
    }

    fn normalize_touch(
        &mut self,
        touch: (TouchDeviceId, TouchId),
        phase: TouchPhase,
        local: Pos2,
    ) -> Option<PointerEvent> {
        match phase {
            TouchPhase::Start => {
                if self.active_touch.is_some() {
                    return None;
                }
                self.active_touch = Some(touch);
                Some(PointerEvent::Down(local))
            }
            TouchPhase::Move => {
                (self.active_touch == Some(touch)).then_some(PointerEvent::Move(local))
            }
            TouchPhase::End | TouchPhase::Cancel => {
                if self.active_touch != Some(touch) {
                    return None;
                }
                self.active_touch = None;
                Some(PointerEvent::Up)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(id: u64, phase: TouchPhase, x: f32, y: f32) -> Event {
        Event::Touch {
            device_id: TouchDeviceId(0),
            id: TouchId(id),
            phase,
            pos: Pos2::new(x, y),
            force: None,
        }
    }

    #[test]
    fn mouse_positions_are_offset_by_origin() {
        let mut n = InputNormalizer::new();
        let origin = Pos2::new(10.0, 20.0);
        let down = Event::PointerButton {
            pos: Pos2::new(110.0, 50.0),
            button: PointerButton::Primary,
            pressed: true,
            modifiers: Default::default(),
        };
        assert_eq!(
            n.normalize(&down, origin),
            Some(PointerEvent::Down(Pos2::new(100.0, 30.0)))
        );
        assert_eq!(
            n.normalize(&Event::PointerMoved(Pos2::new(15.0, 25.0)), origin),
            Some(PointerEvent::Move(Pos2::new(5.0, 5.0)))
        );
    }

    #[test]
    fn secondary_button_is_ignored() {
        let mut n = InputNormalizer::new();
        let ev = Event::PointerButton {
            pos: Pos2::ZERO,
            button: PointerButton::Secondary,
            pressed: true,
            modifiers: Default::default(),
        };
        assert_eq!(n.normalize(&ev, Pos2::ZERO), None);
    }

    #[test]
    fn only_first_touch_is_followed() {
        let mut n = InputNormalizer::new();
        let o = Pos2::new(5.0, 5.0);
        assert_eq!(
            n.normalize(&touch(1, TouchPhase::Start, 15.0, 15.0), o),
            Some(PointerEvent::Down(Pos2::new(10.0, 10.0)))
        );
        assert_eq!(n.normalize(&touch(2, TouchPhase::Start, 50.0, 50.0), o), None);
        assert_eq!(n.normalize(&touch(2, TouchPhase::Move, 60.0, 50.0), o), None);
        assert_eq!(
            n.normalize(&touch(1, TouchPhase::Move, 25.0, 15.0), o),
            Some(PointerEvent::Move(Pos2::new(20.0, 10.0)))
        );
        assert_eq!(n.normalize(&touch(2, TouchPhase::End, 60.0, 50.0), o), None);
        assert_eq!(
            n.normalize(&touch(1, TouchPhase::End, 25.0, 15.0), o),
            Some(PointerEvent::Up)
        );
        assert!(!n.touch_active());
    }

    #[test]
    fn cancelled_touch_releases() {
        let mut n = InputNormalizer::new();
        n.normalize(&touch(3, TouchPhase::Start, 0.0, 0.0), Pos2::ZERO);
        assert_eq!(
            n.normalize(&touch(3, TouchPhase::Cancel, 0.0, 0.0), Pos2::ZERO),
            Some(PointerEvent::Up)
        );
    }
}
