use iced::widget::image;
use tv_core::Result;
use tv_render::{DrawContext, SkiaContext};

/// Pixels produced by drawing into a fresh canvas, ready for an iced image.
#[derive(Debug, Clone)]
pub struct RenderedSurface {
    pub width: u32,
    pub height: u32,
    handle: image::Handle,
}

impl RenderedSurface {
    /// Rasterise `draw` onto a transparent `width` x `height` canvas.
    pub fn render(width: u32, height: u32, draw: impl FnOnce(&mut dyn DrawContext)) -> Result<Self> {
        let mut ctx = SkiaContext::new(width, height)?;
        draw(&mut ctx);
        Ok(Self {
            width,
            height,
            handle: image::Handle::from_rgba(width, height, ctx.to_rgba8()),
        })
    }

    pub fn handle(&self) -> image::Handle {
        self.handle.clone()
    }

    pub fn view<'a, M: 'a>(&self) -> iced::Element<'a, M> {
        image(self.handle())
            .width(iced::Length::Fixed(self.width as f32))
            .height(iced::Length::Fixed(self.height as f32))
            .into()
    }
}
