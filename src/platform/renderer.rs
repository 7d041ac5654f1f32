//! Abstract rendering interface.

use crate::core::types::{Color, Vec2};

pub trait Renderer {
    fn begin_frame(&mut self, width: i32, height: i32);
    fn end_frame(&mut self);

    // Primitives
    fn fill_rect(&self, x: f64, y: f64, w: f64, h: f64, color: Color);
    fn draw_line(&self, from: Vec2, to: Vec2, color: Color, line_width: f64);
    fn fill_circle(&self, cx: f64, cy: f64, radius: f64, color: Color);
    fn draw_text(&self, x: f64, y: f64, text: &str, size: f64, color: Color);
}
