//! Cairo-based renderer drawing onto an in-memory image surface.

use crate::core::error::RenderError;
use crate::core::types::{Color, Vec2};
use crate::platform::renderer::Renderer;
use cairo::{Context, Format, ImageSurface};
use std::f64::consts::PI;
use std::fs::File;

pub struct RendererCairo {
    surface: ImageSurface,
    cr: Context,
}

impl RendererCairo {
    pub fn new(width: i32, height: i32) -> Result<Self, RenderError> {
        let surface = ImageSurface::create(Format::ARgb32, width, height)?;
        let cr = Context::new(&surface)?;
        Ok(Self { surface, cr })
    }

    /// Write the current surface contents as a PNG file.
    pub fn write_png(&self, path: &str) -> Result<(), RenderError> {
        self.surface.flush();
        let mut file = File::create(path)?;
        self.surface.write_to_png(&mut file)?;
        log::info!("map written to {}", path);
        Ok(())
    }

    fn set_color(&self, color: Color) {
        self.cr.set_source_rgba(color.r, color.g, color.b, color.a);
    }
}

impl Renderer for RendererCairo {
    fn begin_frame(&mut self, _width: i32, _height: i32) {
        self.cr.save().ok();
    }

    fn end_frame(&mut self) {
        self.cr.restore().ok();
    }

    fn fill_rect(&self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        self.set_color(color);
        self.cr.rectangle(x, y, w, h);
        self.cr.fill().ok();
    }

    fn draw_line(&self, from: Vec2, to: Vec2, color: Color, line_width: f64) {
        self.set_color(color);
        self.cr.set_line_width(line_width);
        self.cr.new_path();
        self.cr.move_to(from.x, from.y);
        self.cr.line_to(to.x, to.y);
        self.cr.stroke().ok();
    }

    fn fill_circle(&self, cx: f64, cy: f64, radius: f64, color: Color) {
        self.set_color(color);
        self.cr.new_path();
        self.cr.arc(cx, cy, radius, 0.0, 2.0 * PI);
        self.cr.fill().ok();
    }

    fn draw_text(&self, x: f64, y: f64, text: &str, size: f64, color: Color) {
        self.set_color(color);
        self.cr
            .select_font_face("sans-serif", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
        self.cr.set_font_size(size);
        self.cr.move_to(x, y);
        self.cr.show_text(text).ok();
    }
}
