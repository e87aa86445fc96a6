//! 2D rendering module
//!
//! Scene drawing talks to a `Surface`, a thin immediate-mode interface over a
//! canvas-style context. The browser backend wraps `CanvasRenderingContext2d`;
//! tests record draw calls instead.

use std::borrow::Cow;

use glam::Vec2;

use crate::sim::Rect;

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use scene::draw_frame;

/// Pre-loaded bitmaps, referenced by role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageId {
    Character,
    Coin,
    Background,
    IntroBackground,
}

impl ImageId {
    pub const ALL: [ImageId; 4] = [
        ImageId::Character,
        ImageId::Coin,
        ImageId::Background,
        ImageId::IntroBackground,
    ];

    /// Asset path relative to the page
    pub fn src(self) -> &'static str {
        match self {
            ImageId::Character => "./dog.png",
            ImageId::Coin => "./bitcoin.webp",
            ImageId::Background => "./background.png",
            ImageId::IntroBackground => "./intro.png",
        }
    }
}

/// Fill style
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fill {
    /// Any CSS color string
    Css(&'static str),
    /// Fully saturated color at the given hue (degrees)
    Hue(f32),
}

impl Fill {
    pub fn to_css(&self) -> Cow<'static, str> {
        match self {
            Fill::Css(color) => Cow::Borrowed(color),
            Fill::Hue(hue) => Cow::Owned(format!("hsl({:.1}, 100%, 50%)", hue.rem_euclid(360.0))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    Alphabetic,
    Middle,
}

impl TextBaseline {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextBaseline::Alphabetic => "alphabetic",
            TextBaseline::Middle => "middle",
        }
    }
}

/// Everything needed to place a line of text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// CSS font shorthand
    pub font: &'static str,
    pub fill: Fill,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

/// A 2D drawing target with a fixed logical size
pub trait Surface {
    /// Clear the area from the origin to `(width, height)`
    fn clear(&mut self, width: f32, height: f32);
    /// Push transform and alpha state
    fn save(&mut self);
    /// Pop the state pushed by the matching `save`
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn set_alpha(&mut self, alpha: f32);
    fn fill_rect(&mut self, rect: Rect, fill: Fill);
    /// Blit an image scaled into `dest`. Images that are not loaded draw nothing.
    fn draw_image(&mut self, image: ImageId, dest: Rect);
    fn fill_text(&mut self, text: &str, pos: Vec2, style: &TextStyle);
}
