//! Browser backend for `Surface` over a 2D canvas context

use std::collections::HashMap;

use glam::Vec2;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use super::{Fill, ImageId, Surface, TextStyle};
use crate::sim::Rect;

/// Canvas 2D context plus the images it can blit
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    images: HashMap<ImageId, HtmlImageElement>,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self {
            ctx,
            images: HashMap::new(),
        }
    }

    /// Register a (possibly still loading) image for `id`
    pub fn insert_image(&mut self, id: ImageId, image: HtmlImageElement) {
        self.images.insert(id, image);
    }

    fn ready_image(&self, id: ImageId) -> Option<&HtmlImageElement> {
        self.images
            .get(&id)
            .filter(|img| img.complete() && img.natural_width() > 0)
    }
}

/// Draw calls that fail (detached canvas, broken image) are skipped
fn trace_err(what: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::trace!("{} failed: {:?}", what, e);
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, offset: Vec2) {
        trace_err("translate", self.ctx.translate(offset.x as f64, offset.y as f64));
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
    }

    fn fill_rect(&mut self, rect: Rect, fill: Fill) {
        self.ctx.set_fill_style_str(&fill.to_css());
        self.ctx
            .fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
    }

    fn draw_image(&mut self, image: ImageId, dest: Rect) {
        let Some(img) = self.ready_image(image) else {
            return;
        };
        trace_err(
            "drawImage",
            self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                img,
                dest.x as f64,
                dest.y as f64,
                dest.w as f64,
                dest.h as f64,
            ),
        );
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, style: &TextStyle) {
        self.ctx.set_font(style.font);
        self.ctx.set_text_align(style.align.as_str());
        self.ctx.set_text_baseline(style.baseline.as_str());
        self.ctx.set_fill_style_str(&style.fill.to_css());
        trace_err("fillText", self.ctx.fill_text(text, pos.x as f64, pos.y as f64));
    }
}
