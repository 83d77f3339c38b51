//! Composite-surface drawing for `tv` chrome.
//!
//! - [`path`]: rounded-rectangle and capsule outlines, in both windings
//! - [`three_slice`]: left/center/right image bars, optionally with a label
//! - [`icon`]: icons centred in a larger box, optionally with rounded corners
//! - [`image`]: decoded bitmaps and the load-once [`ImagePool`]
//!
//! Everything draws through the [`DrawContext`] trait.  [`SkiaContext`]
//! rasterises into a pixmap; [`RecordingContext`] only records calls.

pub mod context;
pub mod icon;
pub mod image;
pub mod path;
pub mod recording;
pub mod skia;
pub mod three_slice;

pub use context::{DrawContext, ImageFit};
pub use icon::{draw_icon_in_rect, draw_rounded_icon};
pub use image::{ImagePool, ImageSurface};
pub use path::{circular_rect, circular_rect_negative, round_rect, round_rect_reverse, RoundedRect};
pub use recording::{DrawOp, RecordingContext};
pub use skia::SkiaContext;
pub use three_slice::{SliceWidths, TextBox, ThreeSliceImage, ThreeSliceTextSurface};
