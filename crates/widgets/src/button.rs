use crate::label::LabelBox;
use crate::surface::RenderedSurface;
use iced::{
    widget::{container, mouse_area, stack, text},
    Element, Padding,
};
use std::collections::HashMap;
use tracing::{debug, warn};
use tv_core::{Message, Result, VisualState};
use tv_render::{circular_rect, DrawContext, ImagePool, TextBox, ThreeSliceImage, ThreeSliceTextSurface};
use tv_theme::Theme;

/// Height of the capsule used when no slice images are available.
const FALLBACK_HEIGHT: u32 = 24;

/// How the button background is drawn.
#[derive(Debug, Clone)]
enum Skin {
    /// One three-slice image set per visual state.
    Sliced(HashMap<VisualState, ThreeSliceImage>),
    /// A flat capsule, tinted per state.
    Capsule,
}

/// Toolbar button drawn from `<basename>_left/_center/_right` images, with a
/// label laid over the center.
#[derive(Debug, Clone)]
pub struct ChromeButton {
    label: String,
    skin: Skin,
}

impl ChromeButton {
    /// Load every visual state's slices from `pool`.  States whose assets are
    /// missing reuse the normal images; without normal images the button
    /// falls back to a plain capsule.
    pub fn load(pool: &ImagePool, basename: &str, label: impl Into<String>) -> Self {
        let label = label.into();
        let normal = match ThreeSliceImage::for_state(pool, basename, VisualState::Normal) {
            Ok(image) => image,
            Err(e) => {
                warn!("Button '{basename}' has no usable images ({e}); drawing a capsule");
                return Self { label, skin: Skin::Capsule };
            }
        };

        let mut images = HashMap::new();
        for state in [VisualState::Pressed, VisualState::Disabled] {
            match ThreeSliceImage::for_state(pool, basename, state) {
                Ok(image) => {
                    images.insert(state, image);
                }
                Err(e) => debug!("Button '{basename}' {state:?} images unavailable: {e}"),
            }
        }
        images.insert(VisualState::Normal, normal);

        Self { label, skin: Skin::Sliced(images) }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Natural `(width, height)` for `state`.
    pub fn size(&self, state: VisualState, theme: &Theme) -> (u32, u32) {
        let label = LabelBox::new(&self.label, theme.font_size);
        match self.slices(state) {
            Some(image) => {
                match ThreeSliceTextSurface::from_image(
                    label,
                    image,
                    f64::from(theme.label_pad_left),
                    f64::from(theme.label_pad_right),
                ) {
                    Ok(surface) => {
                        let (w, h) = surface.size();
                        (w.ceil() as u32, h as u32)
                    }
                    Err(_) => (image.min_width(), image.height()),
                }
            }
            None => {
                let (text_w, _) = label.size();
                let pad = f64::from(theme.label_pad_left + theme.label_pad_right);
                ((text_w + pad) as u32 + FALLBACK_HEIGHT, FALLBACK_HEIGHT)
            }
        }
    }

    fn slices(&self, state: VisualState) -> Option<&ThreeSliceImage> {
        match &self.skin {
            Skin::Sliced(images) => images.get(&state).or_else(|| images.get(&VisualState::Normal)),
            Skin::Capsule => None,
        }
    }

    /// Draw the background for `state` at `(0, 0)`, `width` wide.  Returns
    /// the label origin.
    pub fn draw(
        &self,
        ctx: &mut dyn DrawContext,
        state: VisualState,
        width: u32,
        theme: &Theme,
    ) -> Result<(f64, f64)> {
        let label = LabelBox::new(&self.label, theme.font_size);
        let opacity = if state == VisualState::Disabled { 0.5 } else { 1.0 };

        match self.slices(state) {
            Some(image) => {
                let surface = ThreeSliceTextSurface::from_image(
                    label,
                    image,
                    f64::from(theme.label_pad_left),
                    f64::from(theme.label_pad_right),
                )?;
                let height = f64::from(image.height());
                surface.draw(ctx, 0.0, 0.0, f64::from(width), height, opacity);
                Ok(surface.label_origin(0.0, 0.0, height))
            }
            None => {
                let height = f64::from(FALLBACK_HEIGHT);
                let fill = match state {
                    VisualState::Normal => theme.accent.with_alpha(0.35),
                    VisualState::Pressed => theme.accent.with_alpha(0.7),
                    VisualState::Disabled => theme.foreground.with_alpha(0.15),
                };
                circular_rect(ctx, 0.0, 0.0, f64::from(width), height);
                ctx.set_color(fill, opacity);
                ctx.fill();

                let (_, text_h) = label.size();
                let text_x = height / 2.0 + f64::from(theme.label_pad_left);
                Ok((text_x, ((height - text_h) / 2.0).floor()))
            }
        }
    }

    pub fn view<'a>(&self, state: VisualState, theme: &Theme) -> Element<'a, Message> {
        let (width, height) = self.size(state, theme);
        let mut origin = (0.0, 0.0);
        let rendered = RenderedSurface::render(width, height, |ctx| {
            match self.draw(ctx, state, width, theme) {
                Ok(o) => origin = o,
                Err(e) => warn!("Button '{}' failed to draw: {e}", self.label),
            }
        });

        let color = match state {
            VisualState::Disabled => theme.foreground.with_alpha(0.4),
            _ => theme.foreground,
        };
        let label = container(text(self.label.clone()).size(theme.font_size).color(color.to_iced()))
            .padding(Padding {
                top: origin.1.max(0.0) as f32,
                left: origin.0.max(0.0) as f32,
                right: 0.0,
                bottom: 0.0,
            });

        let content: Element<'a, Message> = match rendered {
            Ok(surface) => stack![surface.view(), label].into(),
            Err(e) => {
                warn!("Button '{}' could not be rasterised: {e}", self.label);
                label.into()
            }
        };

        if state == VisualState::Disabled {
            return content;
        }
        mouse_area(content)
            .on_press(Message::ButtonPressed(true))
            .on_release(Message::ButtonPressed(false))
            .into()
    }
}
