// src/draw/mod.rs
// Immediate-mode drawing routines for the canvas, plus the mapping
// between surface coordinates (top-left origin, y down — what the
// tracker stores) and nannou screen coordinates (center origin, y up).

pub mod cursor_draw;
pub mod grid_draw;
pub mod marker_draw;

use nannou::prelude::*;

use crate::models::Point;

#[derive(Debug, Clone)]
pub struct DrawParams {
    pub color: Rgba,
    pub stroke_weight: f32,
}

impl Default for DrawParams {
    fn default() -> Self {
        Self {
            color: rgba(0.4, 0.4, 0.4, 0.5),
            stroke_weight: 1.0,
        }
    }
}

/// Surface point to nannou screen point for the given window rect.
pub fn surface_to_screen(p: Point, rect: &Rect) -> Point2 {
    pt2(rect.left() + p.x, rect.top() - p.y)
}

/// Nannou screen point to surface point for the given window rect.
pub fn screen_to_surface(pos: Point2, rect: &Rect) -> Point {
    Point::new(pos.x - rect.left(), rect.top() - pos.y)
}
