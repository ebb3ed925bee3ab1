// src/draw/marker_draw.rs
// Click markers: a filled circle with a center dot and a coordinate
// label, fading from oldest to newest across the history.

use nannou::prelude::*;

use crate::draw::surface_to_screen;
use crate::models::Point;

/// Surface-space offset of the coordinate label from its click point.
const LABEL_OFFSET: Point = Point { x: 18.0, y: 4.0 };

#[derive(Debug, Clone)]
pub struct MarkerStyle {
    pub circle_color: Rgb,
    pub circle_radius: f32,
    pub dot_color: Rgb,
    pub dot_radius: f32,
    pub label_color: Rgb,
    pub label_font_size: u32,
}

/// Opacity of the i-th of `len` markers, oldest first: ramps linearly
/// from just above 0.3 up to 1.0 for the newest click.
///
/// Callers must not evaluate this against an empty history.
pub fn marker_alpha(index: usize, len: usize) -> f32 {
    0.3 + 0.7 * (index + 1) as f32 / len as f32
}

pub fn marker_label(p: Point) -> String {
    format!("({:.0},{:.0})", p.x, p.y)
}

/// Draws every point in the history, oldest to newest so the newest
/// paints on top. Empty history draws nothing.
pub fn draw_markers(draw: &Draw, rect: &Rect, clicks: &[Point], style: &MarkerStyle) {
    let len = clicks.len();
    for (i, p) in clicks.iter().enumerate() {
        let alpha = marker_alpha(i, len);
        let center = surface_to_screen(*p, rect);

        draw.ellipse()
            .x_y(center.x, center.y)
            .radius(style.circle_radius)
            .color(with_alpha(style.circle_color, alpha));

        draw.ellipse()
            .x_y(center.x, center.y)
            .radius(style.dot_radius)
            .color(with_alpha(style.dot_color, alpha));

        let label_pos = surface_to_screen(
            Point::new(p.x + LABEL_OFFSET.x, p.y + LABEL_OFFSET.y),
            rect,
        );
        draw.text(&marker_label(*p))
            .x_y(label_pos.x, label_pos.y)
            .left_justify()
            .color(with_alpha(style.label_color, alpha))
            .font_size(style.label_font_size);
    }
}

fn with_alpha(color: Rgb, alpha: f32) -> Rgba {
    rgba(color.red, color.green, color.blue, alpha)
}
