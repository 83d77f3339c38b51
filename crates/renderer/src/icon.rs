use crate::context::DrawContext;
use crate::image::ImageSurface;
use crate::path::round_rect;
use tv_theme::Color;

/// Draw `icon` centred in the box `(x, y, width, height)`.
///
/// When the icon is smaller than the box the margins are painted with
/// `fill` at opacity `fraction`: left and right strips first, then top and
/// bottom strips across the full width, so corner areas are painted twice.
/// An icon the exact size of the box is drawn as is.
#[allow(clippy::too_many_arguments)]
pub fn draw_icon_in_rect(
    ctx: &mut dyn DrawContext,
    icon: &ImageSurface,
    x: f64,
    y: f64,
    width: u32,
    height: u32,
    fraction: f64,
    fill: Color,
) {
    let (icon_w, icon_h) = (i64::from(icon.width()), i64::from(icon.height()));
    let (box_w, box_h) = (i64::from(width), i64::from(height));

    let (icon_x, icon_y) = if icon_w != box_w || icon_h != box_h {
        ctx.set_color(fill, fraction);
        let icon_x = (box_w - icon_w).div_euclid(2);
        let icon_y = (box_h - icon_h).div_euclid(2);

        if icon_x > 0 {
            fill_rect(ctx, x, y, icon_x, box_h);
            fill_rect(ctx, x + (icon_x + icon_w) as f64, y, box_w - (icon_x + icon_w), box_h);
        }
        if icon_y > 0 {
            fill_rect(ctx, x, y, box_w, icon_y);
            fill_rect(ctx, x, y + (icon_y + icon_h) as f64, box_w, box_h - (icon_y + icon_h));
        }
        (icon_x, icon_y)
    } else {
        (0, 0)
    };

    icon.draw(
        ctx,
        x + icon_x as f64,
        y + icon_y as f64,
        icon_w as f64,
        icon_h as f64,
        fraction,
    );
}

fn fill_rect(ctx: &mut dyn DrawContext, x: f64, y: f64, width: i64, height: i64) {
    ctx.rectangle(x, y, width as f64, height as f64);
    ctx.fill();
}

/// [`draw_icon_in_rect`] clipped to a rounded rectangle inset by `inset`
/// from the box.
#[allow(clippy::too_many_arguments)]
pub fn draw_rounded_icon(
    ctx: &mut dyn DrawContext,
    icon: &ImageSurface,
    x: f64,
    y: f64,
    width: u32,
    height: u32,
    inset: f64,
    radius: f64,
    fraction: f64,
    fill: Color,
) {
    ctx.save();
    round_rect(
        ctx,
        x + inset,
        y + inset,
        f64::from(width) - inset * 2.0,
        f64::from(height) - inset * 2.0,
        radius,
    );
    ctx.clip();
    draw_icon_in_rect(ctx, icon, x, y, width, height, fraction, fill);
    ctx.restore();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{DrawOp, FilledRect, RecordingContext};
    use proptest::prelude::*;

    fn icon(w: u32, h: u32) -> ImageSurface {
        ImageSurface::solid("icon", w, h, Color::WHITE).unwrap()
    }

    #[test]
    fn exact_fit_issues_no_fill() {
        let mut ctx = RecordingContext::new();
        draw_icon_in_rect(&mut ctx, &icon(32, 24), 0.0, 0.0, 32, 24, 1.0, Color::BLACK);
        assert!(ctx.filled_rects().is_empty());
        assert!(!ctx.ops().iter().any(|op| matches!(op, DrawOp::SetColor { .. })));
        assert_eq!(ctx.image_spans(), vec![("icon".to_string(), 0.0, 32.0)]);
    }

    #[test]
    fn odd_margin_goes_to_the_far_side() {
        let mut ctx = RecordingContext::new();
        draw_icon_in_rect(&mut ctx, &icon(10, 10), 100.0, 50.0, 15, 10, 0.5, Color::BLACK);
        assert_eq!(
            ctx.filled_rects(),
            vec![
                FilledRect { x: 100.0, y: 50.0, width: 2.0, height: 10.0 },
                FilledRect { x: 112.0, y: 50.0, width: 3.0, height: 10.0 },
            ]
        );
        assert!(ctx.ops().contains(&DrawOp::SetColor { color: Color::BLACK, alpha: 0.5 }));
    }

    #[test]
    fn horizontal_strips_precede_vertical_strips() {
        let mut ctx = RecordingContext::new();
        draw_icon_in_rect(&mut ctx, &icon(4, 4), 0.0, 0.0, 10, 10, 1.0, Color::BLACK);
        let fills = ctx.filled_rects();
        assert_eq!(fills.len(), 4);
        // Left/right strips span the full height; top/bottom the full width.
        assert_eq!((fills[0].height, fills[1].height), (10.0, 10.0));
        assert_eq!((fills[2].width, fills[3].width), (10.0, 10.0));
        // The top-left corner pixel lies in both the left and the top strip.
        let covering = fills
            .iter()
            .filter(|r| r.x <= 0.0 && r.y <= 0.0 && r.x + r.width > 0.0 && r.y + r.height > 0.0)
            .count();
        assert_eq!(covering, 2);
    }

    #[test]
    fn rounded_icon_clips_inside_saved_state() {
        let mut ctx = RecordingContext::new();
        draw_rounded_icon(&mut ctx, &icon(8, 8), 0.0, 0.0, 8, 8, 1.0, 3.0, 1.0, Color::BLACK);
        let ops = ctx.ops();
        assert_eq!(ops.first(), Some(&DrawOp::Save));
        assert_eq!(ops.last(), Some(&DrawOp::Restore));
        assert_eq!(ops[1], DrawOp::MoveTo { x: 4.0, y: 1.0 });
        assert!(ops.contains(&DrawOp::Clip));
    }

    proptest! {
        #[test]
        fn margins_and_icon_tile_the_box(
            icon_w in 1u32..40,
            icon_h in 1u32..40,
            extra_w in 2u32..40,
            extra_h in 2u32..40,
        ) {
            let (box_w, box_h) = (icon_w + extra_w, icon_h + extra_h);
            let mut ctx = RecordingContext::new();
            draw_icon_in_rect(&mut ctx, &icon(icon_w, icon_h), 0.0, 0.0, box_w, box_h, 1.0, Color::BLACK);

            let fills = ctx.filled_rects();
            let icon_x = ((box_w - icon_w) / 2) as f64;
            let icon_y = ((box_h - icon_h) / 2) as f64;
            prop_assert_eq!(fills.len(), 4);

            // Every pixel centre is covered by a fill or the icon; only the
            // four corner blocks are covered twice.
            for py in 0..box_h {
                for px in 0..box_w {
                    let (cx, cy) = (px as f64 + 0.5, py as f64 + 0.5);
                    let in_icon = cx > icon_x && cx < icon_x + icon_w as f64
                        && cy > icon_y && cy < icon_y + icon_h as f64;
                    let fill_hits = fills
                        .iter()
                        .filter(|r| cx > r.x && cx < r.x + r.width && cy > r.y && cy < r.y + r.height)
                        .count();
                    let in_column = cx > icon_x && cx < icon_x + icon_w as f64;
                    let in_row = cy > icon_y && cy < icon_y + icon_h as f64;
                    let corner = !in_column && !in_row;
                    prop_assert_eq!(fill_hits, if in_icon { 0 } else if corner { 2 } else { 1 });
                }
            }
        }
    }
}
