//! Canvas 2D implementation of the node field's drawing surface.

use crate::style::css_rgba;
use field_core::{DrawSurface, HostError, Rgba};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &web::HtmlCanvasElement, id: &str) -> Result<Self, HostError> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|obj| obj.dyn_into::<web::CanvasRenderingContext2d>().ok())
            .ok_or_else(|| HostError::No2dContext(id.to_string()))?;
        Ok(Self { ctx })
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self, extent: Vec2) {
        self.ctx
            .clear_rect(0.0, 0.0, extent.x as f64, extent.y as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.set_fill_style_str(&css_rgba(color));
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_str(&css_rgba(color));
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }
}
