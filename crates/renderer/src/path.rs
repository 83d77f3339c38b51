//! Rounded-rectangle and capsule paths.
//!
//! Every function here only extends the current path of a [`DrawContext`];
//! filling, clipping or stroking is left to the caller.

use crate::context::DrawContext;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Geometry of a rectangle with four equal rounded corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub radius: f64,
}

impl RoundedRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64, radius: f64) -> Self {
        Self { x, y, width, height, radius }
    }

    /// Corner radius actually used: never more than half the shorter side,
    /// so opposite arcs cannot overlap.
    pub fn clamped_radius(&self) -> f64 {
        self.radius.min(self.width.min(self.height) / 2.0).max(0.0)
    }

    /// Trace the outline clockwise.
    pub fn trace(&self, ctx: &mut dyn DrawContext) {
        let r = self.clamped_radius();
        let c = Corners::new(self, r);

        ctx.move_to(self.x + r, self.y);
        ctx.rel_line_to(c.inner_width, 0.0);
        ctx.arc(c.x2, c.y1, r, -FRAC_PI_2, 0.0);
        ctx.rel_line_to(0.0, c.inner_height);
        ctx.arc(c.x2, c.y2, r, 0.0, FRAC_PI_2);
        ctx.rel_line_to(-c.inner_width, 0.0);
        ctx.arc(c.x1, c.y2, r, FRAC_PI_2, PI);
        ctx.rel_line_to(0.0, -c.inner_height);
        ctx.arc(c.x1, c.y1, r, PI, PI * 3.0 / 2.0);
    }

    /// Trace the same outline counter-clockwise, for cutting it out of an
    /// enclosing path.
    pub fn trace_reverse(&self, ctx: &mut dyn DrawContext) {
        let r = self.clamped_radius();
        let c = Corners::new(self, r);

        ctx.move_to(self.x + r, self.y);
        ctx.arc_negative(c.x1, c.y1, r, PI * 3.0 / 2.0, PI);
        ctx.rel_line_to(0.0, c.inner_height);
        ctx.arc_negative(c.x1, c.y2, r, PI, FRAC_PI_2);
        ctx.rel_line_to(c.inner_width, 0.0);
        ctx.arc_negative(c.x2, c.y2, r, FRAC_PI_2, 0.0);
        ctx.rel_line_to(0.0, -c.inner_height);
        ctx.arc_negative(c.x2, c.y1, r, 0.0, -FRAC_PI_2);
        ctx.rel_line_to(-c.inner_width, 0.0);
    }
}

/// Arc centres and straight-edge lengths for a given radius.
struct Corners {
    inner_width: f64,
    inner_height: f64,
    x1: f64,
    x2: f64,
    y1: f64,
    y2: f64,
}

impl Corners {
    fn new(rect: &RoundedRect, r: f64) -> Self {
        Self {
            inner_width:  rect.width - r * 2.0,
            inner_height: rect.height - r * 2.0,
            x1: rect.x + r,
            x2: rect.x + rect.width - r,
            y1: rect.y + r,
            y2: rect.y + rect.height - r,
        }
    }
}

pub fn round_rect(ctx: &mut dyn DrawContext, x: f64, y: f64, width: f64, height: f64, radius: f64) {
    RoundedRect::new(x, y, width, height, radius).trace(ctx);
}

pub fn round_rect_reverse(
    ctx: &mut dyn DrawContext,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    radius: f64,
) {
    RoundedRect::new(x, y, width, height, radius).trace_reverse(ctx);
}

/// Pill shape: the left and right sides are semicircles of radius
/// `height / 2`.
pub fn circular_rect(ctx: &mut dyn DrawContext, x: f64, y: f64, width: f64, height: f64) {
    let radius = height / 2.0;
    let inner_width = width - height;
    let inner_y = y + radius;
    let inner_x1 = x + radius;
    let inner_x2 = inner_x1 + inner_width;

    ctx.move_to(inner_x1, y);
    ctx.rel_line_to(inner_width, 0.0);
    ctx.arc(inner_x2, inner_y, radius, -FRAC_PI_2, FRAC_PI_2);
    ctx.rel_line_to(-inner_width, 0.0);
    ctx.arc(inner_x1, inner_y, radius, FRAC_PI_2, -FRAC_PI_2);
}

/// [`circular_rect`] traced counter-clockwise.
pub fn circular_rect_negative(ctx: &mut dyn DrawContext, x: f64, y: f64, width: f64, height: f64) {
    let radius = height / 2.0;
    let inner_width = width - height;
    let inner_y = y + radius;
    let inner_x1 = x + radius;
    let inner_x2 = inner_x1 + inner_width;

    ctx.move_to(inner_x1, y);
    ctx.arc_negative(inner_x1, inner_y, radius, -FRAC_PI_2, FRAC_PI_2);
    ctx.rel_line_to(inner_width, 0.0);
    ctx.arc_negative(inner_x2, inner_y, radius, FRAC_PI_2, -FRAC_PI_2);
    ctx.rel_line_to(-inner_width, 0.0);
}

/// Signed sweep of an arc after normalising `angle2` the way `arc` /
/// `arc_negative` do: positive arcs always sweep forward, negative arcs
/// always backward, never by more than one full turn.
pub fn arc_sweep(angle1: f64, angle2: f64, negative: bool) -> f64 {
    let mut end = angle2;
    if negative {
        while end > angle1 {
            end -= TAU;
        }
        while end < angle1 - TAU {
            end += TAU;
        }
    } else {
        while end < angle1 {
            end += TAU;
        }
        while end > angle1 + TAU {
            end -= TAU;
        }
    }
    end - angle1
}

/// One cubic Bézier piece: start, two control points, end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cubic {
    pub from: (f64, f64),
    pub ctrl1: (f64, f64),
    pub ctrl2: (f64, f64),
    pub to: (f64, f64),
}

/// Approximate a circular arc with cubic Béziers of at most a quarter turn
/// each.  A zero sweep yields no segments.
pub fn arc_to_cubics(
    xc: f64,
    yc: f64,
    radius: f64,
    angle1: f64,
    angle2: f64,
    negative: bool,
) -> Vec<Cubic> {
    let sweep = arc_sweep(angle1, angle2, negative);
    if sweep == 0.0 || radius <= 0.0 {
        return Vec::new();
    }

    let count = (sweep.abs() / FRAC_PI_2).ceil().max(1.0) as usize;
    let step = sweep / count as f64;
    let k = 4.0 / 3.0 * (step / 4.0).tan();
    let point = |a: f64| (xc + radius * a.cos(), yc + radius * a.sin());

    (0..count)
        .map(|i| {
            let a = angle1 + step * i as f64;
            let b = a + step;
            let from = point(a);
            let to = point(b);
            Cubic {
                from,
                ctrl1: (from.0 - k * radius * a.sin(), from.1 + k * radius * a.cos()),
                ctrl2: (to.0 + k * radius * b.sin(), to.1 - k * radius * b.cos()),
                to,
            }
        })
        .collect()
}
