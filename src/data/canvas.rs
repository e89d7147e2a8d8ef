//! Fixed-size drawing surface.
//!
//! [`Canvas`] records draw calls in surface-local coordinates. A render pass
//! rebuilds the recording from scratch; the UI layer replays it onto an
//! [`egui::Painter`] every frame with [`Canvas::paint`], translated to wherever
//! the surface sits on screen.

use egui::{Align2, Color32, CornerRadius, FontId, Painter, Pos2, Rect, Stroke, Vec2};

/// One recorded drawing operation (surface-local coordinates).
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color32,
    },
    FillCircle {
        center: Pos2,
        radius: f32,
        color: Color32,
    },
    Polyline {
        points: Vec<Pos2>,
        stroke: Stroke,
    },
    Text {
        pos: Pos2,
        anchor: Align2,
        text: String,
        size: f32,
        color: Color32,
    },
}

#[derive(Debug, Clone)]
pub struct Canvas {
    size: Vec2,
    commands: Vec<DrawCommand>,
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            commands: Vec::new(),
        }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Local rectangle covering the whole surface.
    pub fn bounds(&self) -> Rect {
        Rect::from_min_size(Pos2::ZERO, self.size)
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Fill the rectangle spanned by two corners; corners may come in any order.
    pub fn fill_rect(&mut self, a: Pos2, b: Pos2, color: Color32) {
        self.commands.push(DrawCommand::FillRect {
            rect: Rect::from_two_pos(a, b),
            color,
        });
    }

    pub fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    pub fn polyline(&mut self, points: Vec<Pos2>, stroke: Stroke) {
        if points.len() < 2 {
            return;
        }
        self.commands.push(DrawCommand::Polyline { points, stroke });
    }

    pub fn line(&mut self, a: Pos2, b: Pos2, stroke: Stroke) {
        self.polyline(vec![a, b], stroke);
    }

    /// Text with its baseline-left corner at `pos`, like a canvas `fillText`.
    pub fn text(&mut self, pos: Pos2, text: impl Into<String>, size: f32, color: Color32) {
        self.text_anchored(pos, Align2::LEFT_BOTTOM, text, size, color);
    }

    pub fn text_anchored(
        &mut self,
        pos: Pos2,
        anchor: Align2,
        text: impl Into<String>,
        size: f32,
        color: Color32,
    ) {
        self.commands.push(DrawCommand::Text {
            pos,
            anchor,
            text: text.into(),
            size,
            color,
        });
    }

    /// All recorded text, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Replay the recording onto `painter`, with the surface's top-left corner at `origin`.
    pub fn paint(&self, painter: &Painter, origin: Pos2) {
        let offset = origin.to_vec2();
        for cmd in &self.commands {
            match cmd {
                DrawCommand::FillRect { rect, color } => {
                    painter.rect_filled(rect.translate(offset), CornerRadius::ZERO, *color);
                }
                DrawCommand::FillCircle {
                    center,
                    radius,
                    color,
                } => {
                    painter.circle_filled(*center + offset, *radius, *color);
                }
                DrawCommand::Polyline { points, stroke } => {
                    let pts = points.iter().map(|p| *p + offset).collect();
                    painter.add(egui::Shape::line(pts, *stroke));
                }
                DrawCommand::Text {
                    pos,
                    anchor,
                    text,
                    size,
                    color,
                } => {
                    painter.text(
                        *pos + offset,
                        *anchor,
                        text,
                        FontId::proportional(*size),
                        *color,
                    );
                }
            }
        }
    }
}
