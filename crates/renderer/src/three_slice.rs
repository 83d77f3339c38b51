//! Horizontally resizable surfaces built from a left cap, a center and a
//! right cap.

use crate::context::{DrawContext, ImageFit};
use crate::image::{ImagePool, ImageSurface};
use std::sync::Arc;
use tv_core::{Result, TvError, VisualState};

/// How `ThreeSliceImage::draw` split a target width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceWidths {
    pub left: u32,
    pub center: u32,
    pub right: u32,
}

impl SliceWidths {
    pub fn total(&self) -> u32 {
        self.left + self.center + self.right
    }
}

/// Left, center and right images drawn to an arbitrary width.
///
/// The caps keep their natural width; the center covers whatever remains,
/// tiled by default.  A target narrower than the caps truncates them (left
/// first) instead of scaling.
///
/// ```no_run
/// # use tv_render::{ImagePool, ThreeSliceImage};
/// # fn demo(pool: &ImagePool) -> tv_core::Result<()> {
/// // images/timelinebar_left.png, _center.png and _right.png
/// let bar = ThreeSliceImage::from_basename(pool, "timelinebar")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ThreeSliceImage {
    left: Arc<ImageSurface>,
    center: Arc<ImageSurface>,
    right: Arc<ImageSurface>,
    height: u32,
    width: Option<u32>,
    center_fit: ImageFit,
}

impl ThreeSliceImage {
    /// Fails when the three images are not the same height.
    pub fn new(
        left: Arc<ImageSurface>,
        center: Arc<ImageSurface>,
        right: Arc<ImageSurface>,
    ) -> Result<Self> {
        let height = common_height(&left, &center, &right)?;
        Ok(Self {
            left,
            center,
            right,
            height,
            width: None,
            center_fit: ImageFit::Tile,
        })
    }

    /// Load `<basename>_left`, `<basename>_center` (or `_middle`) and
    /// `<basename>_right` from `pool`.
    pub fn from_basename(pool: &ImagePool, basename: &str) -> Result<Self> {
        Self::for_state(pool, basename, VisualState::Normal)
    }

    /// Like [`from_basename`](Self::from_basename) on the state's basename:
    /// pressed `btn` loads `btn_active_left`, `btn_active_center` and
    /// `btn_active_right`.
    pub fn for_state(pool: &ImagePool, basename: &str, state: VisualState) -> Result<Self> {
        let base = format!("{basename}{}", state.asset_suffix());
        let left = pool.get(&format!("{base}_left"))?;
        let center_name = format!("{base}_center");
        let middle_name = format!("{base}_middle");
        let center = pool.get_any(&[center_name.as_str(), middle_name.as_str()])?;
        let right = pool.get(&format!("{base}_right"))?;
        Self::new(left, center, right)
    }

    /// Replace all three images.  On a height mismatch nothing changes.
    pub fn set_images(
        &mut self,
        left: Arc<ImageSurface>,
        center: Arc<ImageSurface>,
        right: Arc<ImageSurface>,
    ) -> Result<()> {
        self.height = common_height(&left, &center, &right)?;
        self.left = left;
        self.center = center;
        self.right = right;
        Ok(())
    }

    #[must_use]
    pub fn with_center_fit(mut self, fit: ImageFit) -> Self {
        self.center_fit = fit;
        self
    }

    /// Fix a width, so the surface can be sized like a plain image.
    pub fn set_width(&mut self, width: u32) {
        self.width = Some(width);
    }

    /// `(width, height)`; width is `None` until [`set_width`](Self::set_width).
    pub fn size(&self) -> (Option<u32>, u32) {
        (self.width, self.height)
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width of both caps together; narrower targets truncate them.
    pub fn min_width(&self) -> u32 {
        self.left.width() + self.right.width()
    }

    pub fn slice_widths(&self, width: u32) -> SliceWidths {
        let left = self.left.width().min(width);
        let rest = width - left;
        let right = self.right.width().min(rest);
        SliceWidths {
            left,
            center: rest - right,
            right,
        }
    }

    pub fn draw(&self, ctx: &mut dyn DrawContext, x: f64, y: f64, width: u32, fraction: f64) {
        let widths = self.slice_widths(width);
        self.draw_slice(ctx, &self.left, ImageFit::Tile, x, y, widths.left, fraction);
        self.draw_right(ctx, x + f64::from(widths.left), y, width - widths.left, fraction);
    }

    /// Draw only the center and right images into `width`.
    pub fn draw_right(&self, ctx: &mut dyn DrawContext, x: f64, y: f64, width: u32, fraction: f64) {
        let right = self.right.width().min(width);
        let center = width - right;
        self.draw_slice(ctx, &self.center, self.center_fit, x, y, center, fraction);
        self.draw_slice(ctx, &self.right, ImageFit::Tile, x + f64::from(center), y, right, fraction);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_slice(
        &self,
        ctx: &mut dyn DrawContext,
        image: &ImageSurface,
        fit: ImageFit,
        x: f64,
        y: f64,
        width: u32,
        fraction: f64,
    ) {
        if width == 0 {
            return;
        }
        ctx.draw_image(image, x, y, f64::from(width), f64::from(self.height), fraction, fit);
    }
}

fn common_height(left: &ImageSurface, center: &ImageSurface, right: &ImageSurface) -> Result<u32> {
    if left.height() == center.height() && center.height() == right.height() {
        Ok(left.height())
    } else {
        Err(TvError::Geometry(format!(
            "slice heights differ: {} ({}), {} ({}), {} ({})",
            left.name(),
            left.height(),
            center.name(),
            center.height(),
            right.name(),
            right.height(),
        )))
    }
}

/// A block of text that a [`ThreeSliceTextSurface`] positions.
pub trait TextBox {
    /// `(width, height)` of the laid-out text.
    fn size(&self) -> (f64, f64);

    fn draw(&self, ctx: &mut dyn DrawContext, x: f64, y: f64, width: f64, height: f64);
}

/// Three images with a text label over the center.
///
/// Its natural width fits the caps, the label and the padding.  `draw` uses
/// whatever width the caller passes and never grows to fit the label.
pub struct ThreeSliceTextSurface<T> {
    textbox: T,
    left: Arc<ImageSurface>,
    middle: Arc<ImageSurface>,
    right: Arc<ImageSurface>,
    text_width: f64,
    text_height: f64,
    pad_left: f64,
    width: f64,
    height: f64,
}

impl<T: TextBox> ThreeSliceTextSurface<T> {
    pub fn new(
        textbox: T,
        left: Arc<ImageSurface>,
        middle: Arc<ImageSurface>,
        right: Arc<ImageSurface>,
        pad_left: f64,
        pad_right: f64,
    ) -> Result<Self> {
        let height = common_height(&left, &middle, &right)?;
        let (text_width, text_height) = textbox.size();
        let width = f64::from(left.width()) + text_width + f64::from(right.width()) + pad_left + pad_right;
        Ok(Self {
            textbox,
            left,
            middle,
            right,
            text_width,
            text_height,
            pad_left,
            width,
            height: f64::from(height),
        })
    }

    /// Build from the slices of an existing [`ThreeSliceImage`].
    pub fn from_image(textbox: T, image: &ThreeSliceImage, pad_left: f64, pad_right: f64) -> Result<Self> {
        Self::new(
            textbox,
            image.left.clone(),
            image.center.clone(),
            image.right.clone(),
            pad_left,
            pad_right,
        )
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn textbox(&self) -> &T {
        &self.textbox
    }

    /// Top-left of the label when the surface is drawn at `(x, y)` with
    /// height `height`: after the left cap and padding, vertically centred.
    pub fn label_origin(&self, x: f64, y: f64, height: f64) -> (f64, f64) {
        let text_x = x + f64::from(self.left.width()) + self.pad_left;
        let text_y = y + ((height - self.text_height) / 2.0).floor();
        (text_x, text_y)
    }

    pub fn draw(&self, ctx: &mut dyn DrawContext, x: f64, y: f64, width: f64, height: f64, fraction: f64) {
        let left_w = f64::from(self.left.width());
        let right_w = f64::from(self.right.width());

        self.left.draw(ctx, x, y, left_w, height, fraction);
        let middle_w = width - left_w - right_w;
        if middle_w > 0.0 {
            self.middle.draw(ctx, x + left_w, y, middle_w, height, fraction);
        }
        self.right.draw(ctx, x + width - right_w, y, right_w, height, fraction);

        let (text_x, text_y) = self.label_origin(x, y, height);
        self.textbox.draw(ctx, text_x, text_y, self.text_width, self.text_height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::RecordingContext;
    use proptest::prelude::*;
    use std::cell::Cell;
    use tv_theme::Color;

    fn slice(name: &str, w: u32, h: u32) -> Arc<ImageSurface> {
        Arc::new(ImageSurface::solid(name, w, h, Color::WHITE).unwrap())
    }

    fn bar(left: u32, right: u32) -> ThreeSliceImage {
        ThreeSliceImage::new(slice("l", left, 20), slice("c", 3, 20), slice("r", right, 20)).unwrap()
    }

    #[test]
    fn mismatched_heights_are_rejected() {
        let err = ThreeSliceImage::new(slice("l", 5, 20), slice("c", 5, 21), slice("r", 5, 20));
        assert!(matches!(err, Err(TvError::Geometry(_))));
    }

    #[test]
    fn failed_set_images_keeps_previous_slices() {
        let mut image = bar(5, 7);
        let res = image.set_images(slice("l2", 5, 10), slice("c2", 5, 10), slice("r2", 5, 11));
        assert!(res.is_err());
        assert_eq!(image.height(), 20);
        assert_eq!(image.min_width(), 12);
    }

    #[test]
    fn state_suffix_goes_before_the_slice_name() {
        let pool = ImagePool::new("/nonexistent");
        for name in ["btn_active_left", "btn_active_middle", "btn_active_right"] {
            pool.insert(ImageSurface::solid(name, 4, 12, Color::WHITE).unwrap());
        }
        let pressed = ThreeSliceImage::for_state(&pool, "btn", VisualState::Pressed).unwrap();
        let mut ctx = RecordingContext::new();
        pressed.draw(&mut ctx, 0.0, 0.0, 20, 1.0);
        let names: Vec<String> = ctx.image_spans().into_iter().map(|s| s.0).collect();
        assert_eq!(names, vec!["btn_active_left", "btn_active_middle", "btn_active_right"]);

        let disabled = ThreeSliceImage::for_state(&pool, "btn", VisualState::Disabled);
        assert!(matches!(disabled, Err(TvError::Asset(msg)) if msg.contains("btn_inactive_left")));
    }

    #[test]
    fn size_reports_fixed_width() {
        let mut image = bar(5, 7);
        assert_eq!(image.size(), (None, 20));
        image.set_width(90);
        assert_eq!(image.size(), (Some(90), 20));
    }

    #[test]
    fn narrow_target_draws_only_truncated_left_cap() {
        let image = bar(10, 6);
        let mut ctx = RecordingContext::new();
        image.draw(&mut ctx, 0.0, 0.0, 4, 1.0);
        assert_eq!(ctx.image_spans(), vec![("l".to_string(), 0.0, 4.0)]);
    }

    #[test]
    fn between_caps_truncates_right_cap() {
        let image = bar(10, 6);
        assert_eq!(
            image.slice_widths(13),
            SliceWidths { left: 10, center: 0, right: 3 }
        );
    }

    #[test]
    fn wide_target_places_slices_back_to_back() {
        let image = bar(10, 6).with_center_fit(ImageFit::Stretch);
        let mut ctx = RecordingContext::new();
        image.draw(&mut ctx, 5.0, 0.0, 100, 0.5);
        assert_eq!(
            ctx.image_spans(),
            vec![
                ("l".to_string(), 5.0, 10.0),
                ("c".to_string(), 15.0, 84.0),
                ("r".to_string(), 99.0, 6.0),
            ]
        );
        assert!(ctx.ops().iter().any(|op| matches!(
            op,
            crate::recording::DrawOp::Image { name, fit: ImageFit::Stretch, opacity, .. }
                if name == "c" && *opacity == 0.5
        )));
    }

    struct Label {
        size: (f64, f64),
        drawn_at: Cell<Option<(f64, f64)>>,
    }

    impl TextBox for Label {
        fn size(&self) -> (f64, f64) {
            self.size
        }
        fn draw(&self, _ctx: &mut dyn DrawContext, x: f64, y: f64, _w: f64, _h: f64) {
            self.drawn_at.set(Some((x, y)));
        }
    }

    #[test]
    fn text_surface_sizes_and_centres_label() {
        let label = Label { size: (40.0, 11.0), drawn_at: Cell::new(None) };
        let surface =
            ThreeSliceTextSurface::new(label, slice("l", 8, 24), slice("m", 2, 24), slice("r", 9, 24), 4.0, 6.0)
                .unwrap();
        assert_eq!(surface.size(), (8.0 + 40.0 + 9.0 + 4.0 + 6.0, 24.0));

        let mut ctx = RecordingContext::new();
        // Caller-supplied box, taller than the images.
        surface.draw(&mut ctx, 10.0, 100.0, 80.0, 30.0, 1.0);

        assert_eq!(
            ctx.image_spans(),
            vec![
                ("l".to_string(), 10.0, 8.0),
                ("m".to_string(), 18.0, 63.0),
                ("r".to_string(), 81.0, 9.0),
            ]
        );
        // (30 - 11) / 2 = 9.5, floored.
        assert_eq!(surface.textbox().drawn_at.get(), Some((22.0, 109.0)));
    }

    proptest! {
        #[test]
        fn widths_always_sum_to_target(left in 0u32..64, right in 0u32..64, width in 0u32..512) {
            let image = ThreeSliceImage::new(
                slice("l", left.max(1), 8),
                slice("c", 1, 8),
                slice("r", right.max(1), 8),
            ).unwrap();
            let w = image.slice_widths(width);
            prop_assert_eq!(w.total(), width);
            if width >= image.min_width() {
                prop_assert_eq!(w.left, left.max(1));
                prop_assert_eq!(w.right, right.max(1));
            }
            if width < left.max(1) {
                prop_assert_eq!(w.left, width);
                prop_assert_eq!(w.center + w.right, 0);
            }
        }
    }
}
