use tv_render::{DrawContext, TextBox};

/// Average glyph advance as a fraction of the font size.
const AVG_ADVANCE: f64 = 0.6;
/// Line height as a fraction of the font size.
const LINE_HEIGHT: f64 = 1.3;

/// A label measured for layout; the glyphs themselves are drawn by iced on
/// top of the rasterised surface, at the origin the surface computes.
#[derive(Debug, Clone)]
pub struct LabelBox {
    pub text: String,
    pub font_size: f32,
}

impl LabelBox {
    pub fn new(text: impl Into<String>, font_size: f32) -> Self {
        Self { text: text.into(), font_size }
    }
}

impl TextBox for LabelBox {
    fn size(&self) -> (f64, f64) {
        let size = f64::from(self.font_size);
        let chars = self.text.chars().count() as f64;
        ((chars * size * AVG_ADVANCE).ceil(), (size * LINE_HEIGHT).ceil())
    }

    // Glyphs are drawn by the iced text widget stacked over the surface.
    fn draw(&self, _ctx: &mut dyn DrawContext, _x: f64, _y: f64, _width: f64, _height: f64) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_scales_with_glyph_count_and_font() {
        assert_eq!(LabelBox::new("Play", 10.0).size(), (24.0, 13.0));
        assert_eq!(LabelBox::new("", 13.0).size(), (0.0, 17.0));
        // Counted in chars, not bytes.
        assert_eq!(LabelBox::new("éé", 10.0).size().0, 12.0);
    }

    #[test]
    fn drawing_leaves_the_surface_untouched() {
        let mut ctx = tv_render::RecordingContext::new();
        LabelBox::new("Play", 13.0).draw(&mut ctx, 4.0, 2.0, 24.0, 17.0);
        assert!(ctx.ops().is_empty());
    }
}
