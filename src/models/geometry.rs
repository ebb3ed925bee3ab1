// src/models/geometry.rs
// Surface-space geometry for the tracker core.
// Origin top-left, y grows downward, units are device pixels.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
