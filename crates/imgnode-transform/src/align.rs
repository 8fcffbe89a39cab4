//! Size alignment: pad an image up to the next multiple of a modulus.
//!
//! Workflow graphs that feed images into tiling or block-based stages
//! (latent encoders, DCT codecs, tiled upscalers) need dimensions that
//! divide evenly by a block size. [`size_align`] grows an image to the
//! next multiple of the requested modulus by prepending solid-color
//! pixels on the left and top edges, and reports the resulting geometry.
//!
//! # Padding placement
//!
//! All padding goes on the left and top edges; the right and bottom edges
//! are never extended. This keeps the original pixels anchored at the
//! bottom-right corner and is a fixed policy, not configurable.
//!
//! # Example
//!
//! ```rust
//! use imgnode_core::ImageTensor;
//! use imgnode_transform::size_align;
//!
//! let image = ImageTensor::from_nhwc(10, 10, 3, vec![0.5; 300]).unwrap();
//! let result = size_align(&image, 8, "#ffffff").unwrap();
//!
//! assert_eq!((result.padded_width, result.padded_height), (16, 16));
//! assert_eq!((result.padding_width, result.padding_height), (6, 6));
//! assert_eq!(result.image.shape(), &[1, 16, 16, 3]);
//! ```

use imgnode_core::{pixels_to_tensor, tensor_to_pixels, FillColor, ImageTensor, Result};
use tracing::{debug, trace};

use crate::expand::expand;

/// Returns the padding needed to grow `size` to the next multiple of
/// `modulus`.
///
/// Sizes already on a multiple need no padding, so the result is always
/// in `[0, modulus)`. A modulus of zero means "no alignment" and yields
/// zero rather than dividing by zero.
///
/// # Example
///
/// ```rust
/// use imgnode_transform::alignment_padding;
///
/// assert_eq!(alignment_padding(10, 8), 6);
/// assert_eq!(alignment_padding(16, 8), 0);
/// assert_eq!(alignment_padding(10, 0), 0);
/// ```
#[inline]
pub const fn alignment_padding(size: u32, modulus: u32) -> u32 {
    if modulus == 0 {
        return 0;
    }
    (modulus - size % modulus) % modulus
}

/// Result of a [`size_align`] call: the padded image plus its geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeAlignment {
    /// Padded image in array form, `[1, padded_height, padded_width, C]`.
    pub image: ImageTensor,
    /// Width of the input image in pixels.
    pub original_width: u32,
    /// Height of the input image in pixels.
    pub original_height: u32,
    /// Width after padding, a multiple of the modulus.
    pub padded_width: u32,
    /// Height after padding, a multiple of the modulus.
    pub padded_height: u32,
    /// Pixels added on the left edge.
    pub padding_width: u32,
    /// Pixels added on the top edge.
    pub padding_height: u32,
}

/// Pads an image so both dimensions are multiples of `modulus`.
///
/// The image is unwrapped from array form, extended on the left and top
/// with `padding_color`, and re-wrapped. A modulus of zero disables
/// alignment and returns the image unchanged (modulo the 8-bit round
/// trip).
///
/// # Errors
///
/// - [`imgnode_core::Error::Rank`] if the array is not rank 4.
/// - [`imgnode_core::Error::ChannelCount`] if the channel count is not
///   1, 3, or 4.
/// - [`imgnode_core::Error::BatchSize`] if the batch holds more than one
///   image.
/// - [`imgnode_core::Error::Color`] if `padding_color` parses as neither
///   a hex code nor a CSS3 color name.
pub fn size_align(image: &ImageTensor, modulus: u32, padding_color: &str) -> Result<SizeAlignment> {
    trace!(modulus, padding_color, "size_align");

    let pixels = tensor_to_pixels(image)?;
    let (original_width, original_height) = pixels.dimensions();

    let padding_width = alignment_padding(original_width, modulus);
    let padding_height = alignment_padding(original_height, modulus);
    debug!(
        original_width,
        original_height, padding_width, padding_height, "Aligning image size"
    );

    let fill = FillColor::parse(padding_color)?;
    let padded = expand(&pixels, padding_width, padding_height, 0, 0, &fill);

    Ok(SizeAlignment {
        image: pixels_to_tensor(&padded),
        original_width,
        original_height,
        padded_width: original_width + padding_width,
        padded_height: original_height + padding_height,
        padding_width,
        padding_height,
    })
}
