// src/draw/cursor_draw.rs
// Crosshair and coordinate readout for the last known cursor position.

use nannou::prelude::*;

use crate::draw::{surface_to_screen, DrawParams};
use crate::models::Point;

/// Surface position of the "Mouse: (x, y)" readout, near the top-left corner.
const READOUT_POS: Point = Point { x: 10.0, y: 20.0 };

pub fn readout_label(cursor: Point) -> String {
    format!("Mouse: ({:.0}, {:.0})", cursor.x, cursor.y)
}

/// Full-width and full-height lines through the cursor position.
pub fn draw_crosshair(draw: &Draw, rect: &Rect, cursor: Point, params: &DrawParams) {
    let top = surface_to_screen(Point::new(cursor.x, 0.0), rect);
    let bottom = surface_to_screen(Point::new(cursor.x, rect.h()), rect);
    draw.line()
        .points(top, bottom)
        .color(params.color)
        .stroke_weight(params.stroke_weight);

    let left = surface_to_screen(Point::new(0.0, cursor.y), rect);
    let right = surface_to_screen(Point::new(rect.w(), cursor.y), rect);
    draw.line()
        .points(left, right)
        .color(params.color)
        .stroke_weight(params.stroke_weight);
}

pub fn draw_readout(draw: &Draw, rect: &Rect, cursor: Point, color: Rgb, font_size: u32) {
    let pos = surface_to_screen(READOUT_POS, rect);
    draw.text(&readout_label(cursor))
        .x_y(pos.x, pos.y)
        .left_justify()
        .color(color)
        .font_size(font_size);
}
