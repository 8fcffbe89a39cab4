//! Border expansion for pixel-grid images.
//!
//! Grows an image by adding solid-color borders. Each edge takes its own
//! amount, so callers decide the placement policy; [`crate::align`] uses
//! this with left/top-only amounts.
//!
//! # Example
//!
//! ```rust
//! use imgnode_core::{Channels, FillColor, PixelImage};
//! use imgnode_transform::expand;
//!
//! let src = PixelImage::filled(4, 4, Channels::Rgb, &[0, 0, 0]);
//! let dst = expand(&src, 2, 1, 0, 0, &FillColor::default());
//! assert_eq!(dst.dimensions(), (6, 5));
//! assert_eq!(dst.pixel(0, 0), &[255, 255, 255]); // border
//! assert_eq!(dst.pixel(2, 1), &[0, 0, 0]); // original top-left
//! ```

use imgnode_core::{FillColor, PixelImage};

/// Expands an image with a solid border on each edge.
///
/// The source pixels land at offset `(left, top)` in the result; every
/// pixel outside that region takes `fill`, rendered for the source's
/// channel layout (Rec.709 gray for single-channel images).
///
/// # Arguments
///
/// * `src` - Source image
/// * `left`, `top`, `right`, `bottom` - Border widths in pixels
/// * `fill` - Border color
pub fn expand(
    src: &PixelImage,
    left: u32,
    top: u32,
    right: u32,
    bottom: u32,
    fill: &FillColor,
) -> PixelImage {
    let channels = src.channels();
    let new_w = src.width() + left + right;
    let new_h = src.height() + top + bottom;

    let mut dst = PixelImage::filled(new_w, new_h, channels, &fill.pixel(channels));

    // Copy source rows into the border-offset region
    let n = channels.count();
    let src_stride = src.width() as usize * n;
    let dst_stride = new_w as usize * n;
    let dst_data = dst.data_mut();
    for y in 0..src.height() {
        let src_row = src.row(y);
        let dst_start = (y + top) as usize * dst_stride + left as usize * n;
        dst_data[dst_start..dst_start + src_stride].copy_from_slice(src_row);
    }

    dst
}
