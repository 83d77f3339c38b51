use crate::context::{DrawContext, ImageFit};
use crate::image::ImageSurface;
use crate::path::arc_to_cubics;
use tiny_skia::{
    FillRule, FilterQuality, Mask, Paint, PathBuilder, Pattern, Pixmap, Rect, SpreadMode,
    Transform,
};
use tracing::warn;
use tv_core::{Result, TvError};
use tv_theme::Color;

#[derive(Clone)]
struct GraphicsState {
    color: tiny_skia::Color,
    clip: Option<Mask>,
}

/// [`DrawContext`] that rasterises into an RGBA pixmap.
///
/// Arcs are flattened to cubic Béziers; `clip` builds an anti-aliased mask
/// that every later fill and image draw honours until `restore`.
pub struct SkiaContext {
    pixmap: Pixmap,
    path: PathBuilder,
    current: Option<(f64, f64)>,
    subpath_start: Option<(f64, f64)>,
    state: GraphicsState,
    stack: Vec<GraphicsState>,
}

impl SkiaContext {
    /// A transparent canvas of `width` x `height` pixels.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height).ok_or_else(|| {
            TvError::Render(format!("cannot allocate a {width}x{height} canvas"))
        })?;
        Ok(Self {
            pixmap,
            path: PathBuilder::new(),
            current: None,
            subpath_start: None,
            state: GraphicsState {
                color: tiny_skia::Color::BLACK,
                clip: None,
            },
            stack: Vec::new(),
        })
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    /// Straight (non-premultiplied) RGBA bytes, row-major.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect()
    }

    fn take_path(&mut self) -> Option<tiny_skia::Path> {
        self.current = None;
        self.subpath_start = None;
        std::mem::replace(&mut self.path, PathBuilder::new()).finish()
    }

    fn push_arc(&mut self, xc: f64, yc: f64, radius: f64, angle1: f64, angle2: f64, negative: bool) {
        let start = (xc + radius * angle1.cos(), yc + radius * angle1.sin());
        if self.current.is_some() {
            self.line_to(start.0, start.1);
        } else {
            self.move_to(start.0, start.1);
        }
        for c in arc_to_cubics(xc, yc, radius, angle1, angle2, negative) {
            self.path.cubic_to(
                c.ctrl1.0 as f32,
                c.ctrl1.1 as f32,
                c.ctrl2.0 as f32,
                c.ctrl2.1 as f32,
                c.to.0 as f32,
                c.to.1 as f32,
            );
            self.current = Some(c.to);
        }
    }

    fn canvas_mask(&self) -> Option<Mask> {
        Mask::new(self.pixmap.width(), self.pixmap.height())
    }
}

impl DrawContext for SkiaContext {
    fn move_to(&mut self, x: f64, y: f64) {
        self.path.move_to(x as f32, y as f32);
        self.current = Some((x, y));
        self.subpath_start = Some((x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        if self.current.is_none() {
            self.move_to(x, y);
            return;
        }
        self.path.line_to(x as f32, y as f32);
        self.current = Some((x, y));
    }

    fn rel_line_to(&mut self, dx: f64, dy: f64) {
        match self.current {
            Some((x, y)) => self.line_to(x + dx, y + dy),
            None => warn!("rel_line_to without a current point; ignored"),
        }
    }

    fn arc(&mut self, xc: f64, yc: f64, radius: f64, angle1: f64, angle2: f64) {
        self.push_arc(xc, yc, radius, angle1, angle2, false);
    }

    fn arc_negative(&mut self, xc: f64, yc: f64, radius: f64, angle1: f64, angle2: f64) {
        self.push_arc(xc, yc, radius, angle1, angle2, true);
    }

    fn close_path(&mut self) {
        self.path.close();
        self.current = self.subpath_start;
    }

    fn rectangle(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.move_to(x, y);
        self.rel_line_to(width, 0.0);
        self.rel_line_to(0.0, height);
        self.rel_line_to(-width, 0.0);
        self.close_path();
    }

    fn set_color(&mut self, color: Color, alpha: f64) {
        self.state.color = color.with_alpha(color.a * alpha as f32).to_skia();
    }

    fn fill(&mut self) {
        let Some(path) = self.take_path() else {
            return;
        };
        let mut paint = Paint::default();
        paint.set_color(self.state.color);
        paint.anti_alias = true;
        self.pixmap.fill_path(
            &path,
            &paint,
            FillRule::Winding,
            Transform::identity(),
            self.state.clip.as_ref(),
        );
    }

    fn clip(&mut self) {
        let path = self.take_path();
        let mask = match (self.state.clip.take(), path) {
            (Some(mut mask), Some(path)) => {
                mask.intersect_path(&path, FillRule::Winding, true, Transform::identity());
                Some(mask)
            }
            (None, Some(path)) => self.canvas_mask().map(|mut mask| {
                mask.fill_path(&path, FillRule::Winding, true, Transform::identity());
                mask
            }),
            // Clipping to an empty path leaves nothing drawable.
            (_, None) => self.canvas_mask(),
        };
        self.state.clip = mask;
    }

    fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        match self.stack.pop() {
            Some(state) => self.state = state,
            None => warn!("restore without a matching save; ignored"),
        }
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
        let Some(rect) = Rect::from_xywh(x as f32, y as f32, width as f32, height as f32) else {
            return;
        };
        if image.width() == 0 || image.height() == 0 {
            return;
        }

        let (spread, quality, transform) = match fit {
            ImageFit::Tile => (
                SpreadMode::Repeat,
                FilterQuality::Nearest,
                Transform::from_translate(x as f32, y as f32),
            ),
            ImageFit::Stretch => (
                SpreadMode::Pad,
                FilterQuality::Bilinear,
                Transform::from_row(
                    (width / f64::from(image.width())) as f32,
                    0.0,
                    0.0,
                    (height / f64::from(image.height())) as f32,
                    x as f32,
                    y as f32,
                ),
            ),
        };

        let paint = Paint {
            shader: Pattern::new(
                image.pixmap().as_ref(),
                spread,
                quality,
                opacity.clamp(0.0, 1.0) as f32,
                transform,
            ),
            ..Paint::default()
        };
        self.pixmap
            .fill_rect(rect, &paint, Transform::identity(), self.state.clip.as_ref());
    }
}
