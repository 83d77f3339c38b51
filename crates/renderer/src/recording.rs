use crate::context::{DrawContext, ImageFit};
use crate::image::ImageSurface;
use tv_theme::Color;

/// One recorded [`DrawContext`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    RelLineTo { dx: f64, dy: f64 },
    Arc { xc: f64, yc: f64, radius: f64, angle1: f64, angle2: f64, negative: bool },
    ClosePath,
    Rectangle { x: f64, y: f64, width: f64, height: f64 },
    SetColor { color: Color, alpha: f64 },
    Fill,
    Clip,
    Save,
    Restore,
    Image { name: String, x: f64, y: f64, width: f64, height: f64, opacity: f64, fit: ImageFit },
}

/// A rectangle passed to `rectangle` and then filled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilledRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Context that draws nothing and remembers every call, in order.
#[derive(Debug, Default)]
pub struct RecordingContext {
    ops: Vec<DrawOp>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Rectangles that were filled, in fill order.  Only paths made of
    /// `rectangle` calls are reported.
    pub fn filled_rects(&self) -> Vec<FilledRect> {
        let mut pending = Vec::new();
        let mut out = Vec::new();
        for op in &self.ops {
            match *op {
                DrawOp::Rectangle { x, y, width, height } => {
                    pending.push(FilledRect { x, y, width, height });
                }
                DrawOp::Fill => out.append(&mut pending),
                DrawOp::Clip => pending.clear(),
                _ => {}
            }
        }
        out
    }

    /// `(name, x, width)` of every image draw, in order.
    pub fn image_spans(&self) -> Vec<(String, f64, f64)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Image { name, x, width, .. } => Some((name.clone(), *x, *width)),
                _ => None,
            })
            .collect()
    }
}

impl DrawContext for RecordingContext {
    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::LineTo { x, y });
    }

    fn rel_line_to(&mut self, dx: f64, dy: f64) {
        self.ops.push(DrawOp::RelLineTo { dx, dy });
    }

    fn arc(&mut self, xc: f64, yc: f64, radius: f64, angle1: f64, angle2: f64) {
        self.ops.push(DrawOp::Arc { xc, yc, radius, angle1, angle2, negative: false });
    }

    fn arc_negative(&mut self, xc: f64, yc: f64, radius: f64, angle1: f64, angle2: f64) {
        self.ops.push(DrawOp::Arc { xc, yc, radius, angle1, angle2, negative: true });
    }

    fn close_path(&mut self) {
        self.ops.push(DrawOp::ClosePath);
    }

    fn rectangle(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(DrawOp::Rectangle { x, y, width, height });
    }

    fn set_color(&mut self, color: Color, alpha: f64) {
        self.ops.push(DrawOp::SetColor { color, alpha });
    }

    fn fill(&mut self) {
        self.ops.push(DrawOp::Fill);
    }

    fn clip(&mut self) {
        self.ops.push(DrawOp::Clip);
    }

    fn save(&mut self) {
        self.ops.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(DrawOp::Restore);
    }

    fn draw_image(
        &mut self,
        image: &ImageSurface,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        opacity: f64,
        fit: ImageFit,
    ) {
        self.ops.push(DrawOp::Image {
            name: image.name().to_string(),
            x,
            y,
            width,
            height,
            opacity,
            fit,
        });
    }
}
