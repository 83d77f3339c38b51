use crate::image::ImageSurface;
use tv_theme::Color;

/// How an image is laid into a destination rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFit {
    /// Natural size, anchored at the rectangle origin and repeated to cover
    /// it.  A rectangle narrower than the image shows only its leading part.
    #[default]
    Tile,
    /// Scaled to exactly cover the rectangle.
    Stretch,
}

/// The drawing capabilities the composite renderer relies on.
///
/// Path calls build an implicit current path; `fill` and `clip` consume it.
/// Angles are radians, with positive angles turning from +x towards +y
/// (clockwise on screen).
pub trait DrawContext {
    fn move_to(&mut self, x: f64, y: f64);

    fn line_to(&mut self, x: f64, y: f64);

    /// Line relative to the current point.
    fn rel_line_to(&mut self, dx: f64, dy: f64);

    /// Arc of increasing angle from `angle1` to `angle2`.  If there is a
    /// current point, a line joins it to the arc start.
    fn arc(&mut self, xc: f64, yc: f64, radius: f64, angle1: f64, angle2: f64);

    /// Arc of decreasing angle from `angle1` to `angle2`.
    fn arc_negative(&mut self, xc: f64, yc: f64, radius: f64, angle1: f64, angle2: f64);

    fn close_path(&mut self);

    /// Add a closed axis-aligned rectangle sub-path.
    fn rectangle(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Source colour for subsequent fills; `alpha` multiplies the colour's own.
    fn set_color(&mut self, color: Color, alpha: f64);

    /// Fill and clear the current path.
    fn fill(&mut self);

    /// Intersect the clip region with the current path, then clear the path.
    fn clip(&mut self);

    /// Push colour and clip state.
    fn save(&mut self);

    /// Pop state pushed by the matching `save`.
    fn restore(&mut self);

    #[allow(clippy::too_many_arguments)]
    fn draw_image(
        &mut self,
        image: &ImageSurface,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        opacity: f64,
        fit: ImageFit,
    );
}
