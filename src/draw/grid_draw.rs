// src/draw/grid_draw.rs
// Background fill and the fixed-spacing reference grid.

use nannou::prelude::*;

use crate::draw::{surface_to_screen, DrawParams};
use crate::models::Point;

/// Line offsets along one axis: 0, spacing, 2*spacing, ... strictly
/// below the extent.
pub fn line_offsets(extent: f32, spacing: f32) -> Vec<f32> {
    (0..)
        .map(|i| i as f32 * spacing)
        .take_while(|offset| *offset < extent)
        .collect()
}

pub fn draw_background(draw: &Draw, color: Rgb) {
    draw.background().color(color);
}

/// Draws vertical and horizontal grid lines across the full rect.
pub fn draw_grid(draw: &Draw, rect: &Rect, spacing: f32, params: &DrawParams) {
    for x in line_offsets(rect.w(), spacing) {
        let top = surface_to_screen(Point::new(x, 0.0), rect);
        let bottom = surface_to_screen(Point::new(x, rect.h()), rect);
        draw.line()
            .points(top, bottom)
            .color(params.color)
            .stroke_weight(params.stroke_weight);
    }

    for y in line_offsets(rect.h(), spacing) {
        let left = surface_to_screen(Point::new(0.0, y), rect);
        let right = surface_to_screen(Point::new(rect.w(), y), rect);
        draw.line()
            .points(left, right)
            .color(params.color)
            .stroke_weight(params.stroke_weight);
    }
}
