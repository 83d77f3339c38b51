use crate::surface::RenderedSurface;
use iced::Element;
use std::sync::Arc;
use tracing::warn;
use tv_core::{ItemInfo, Message};
use tv_render::{draw_rounded_icon, round_rect, DrawContext, ImagePool, ImageSurface};
use tv_theme::Theme;

/// Placeholder icon edge, in pixels, for items without a thumbnail asset.
const PLACEHOLDER_SIZE: u32 = 16;
const PLACEHOLDER_NAME: &str = "__placeholder_thumbnail";

/// An item's icon centred in a square box with rounded corners.
#[derive(Debug, Clone)]
pub struct Thumbnail {
    icon: Option<Arc<ImageSurface>>,
}

impl Thumbnail {
    /// Resolve `item.thumbnail` through `pool`; a missing or unset asset
    /// gives a small placeholder square.
    pub fn for_item(pool: &ImagePool, item: &ItemInfo, theme: &Theme) -> Self {
        let icon = item
            .thumbnail
            .as_deref()
            .and_then(|name| match pool.get(name) {
                Ok(icon) => Some(icon),
                Err(e) => {
                    warn!("Thumbnail for '{}' unavailable: {e}", item.id);
                    None
                }
            })
            .or_else(|| placeholder(pool, theme));
        Self { icon }
    }

    pub fn draw(&self, ctx: &mut dyn DrawContext, theme: &Theme, fraction: f64) {
        let size = theme.thumbnail_size;
        match &self.icon {
            Some(icon) => draw_rounded_icon(
                ctx,
                icon,
                0.0,
                0.0,
                size,
                size,
                0.0,
                theme.corner_radius,
                fraction,
                theme.icon_fill,
            ),
            None => {
                let edge = f64::from(size);
                round_rect(ctx, 0.0, 0.0, edge, edge, theme.corner_radius);
                ctx.set_color(theme.icon_fill, fraction);
                ctx.fill();
            }
        }
    }

    /// `dimmed` draws at reduced opacity, for hidden items.
    pub fn view<'a>(&self, theme: &Theme, dimmed: bool) -> Element<'a, Message> {
        let size = theme.thumbnail_size;
        let fraction = if dimmed { 0.35 } else { 1.0 };
        match RenderedSurface::render(size, size, |ctx| self.draw(ctx, theme, fraction)) {
            Ok(surface) => surface.view(),
            Err(e) => {
                warn!("Thumbnail could not be rasterised: {e}");
                iced::widget::text("").into()
            }
        }
    }
}

fn placeholder(pool: &ImagePool, theme: &Theme) -> Option<Arc<ImageSurface>> {
    if let Ok(hit) = pool.get(PLACEHOLDER_NAME) {
        return Some(hit);
    }
    ImageSurface::solid(PLACEHOLDER_NAME, PLACEHOLDER_SIZE, PLACEHOLDER_SIZE, theme.accent)
        .map(|s| pool.insert(s))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tv_render::{DrawOp, RecordingContext};

    #[test]
    fn unset_thumbnail_uses_shared_placeholder() {
        let pool = ImagePool::new("/nonexistent");
        let theme = Theme::default();
        let a = Thumbnail::for_item(&pool, &ItemInfo::new("a", "A"), &theme);
        Thumbnail::for_item(&pool, &ItemInfo::new("b", "B"), &theme);
        assert_eq!(pool.len(), 1);

        let mut ctx = RecordingContext::new();
        a.draw(&mut ctx, &theme, 1.0);
        // 16px icon in a 48px box: four margin strips, then the icon.
        assert_eq!(ctx.filled_rects().len(), 4);
        assert_eq!(
            ctx.image_spans(),
            vec![(PLACEHOLDER_NAME.to_string(), 16.0, 16.0)]
        );
        assert!(ctx.ops().contains(&DrawOp::Clip));
    }

    #[test]
    fn missing_asset_falls_back() {
        let pool = ImagePool::new("/nonexistent");
        let mut item = ItemInfo::new("a", "A");
        item.thumbnail = Some("does_not_exist".into());
        let thumb = Thumbnail::for_item(&pool, &item, &Theme::default());
        assert_eq!(thumb.icon.as_ref().map(|i| i.name().to_string()), Some(PLACEHOLDER_NAME.into()));
    }
}
