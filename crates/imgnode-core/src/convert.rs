//! Conversions between workflow tensors and pixel images.
//!
//! Workflow hosts exchange images as rank-4 float arrays in `[batch,
//! height, width, channels]` layout with values in `[0, 1]`. Pixel
//! operations want a flat 8-bit grid. The two functions here cross that
//! boundary and enforce the shape contract on the way in.
//!
//! # Validation
//!
//! [`tensor_to_pixels`] rejects, in order:
//!
//! 1. arrays that are not rank 4 ([`Error::Rank`]),
//! 2. channel counts other than 1, 3, or 4 ([`Error::ChannelCount`]),
//! 3. batches holding more than one image ([`Error::BatchSize`]).
//!
//! # Value mapping
//!
//! Float to 8-bit clamps to `[0, 1]` then scales and rounds; 8-bit to
//! float divides by 255. A round trip through both directions moves any
//! in-range value by at most `1/255`.
//!
//! # Usage
//!
//! ```rust
//! use imgnode_core::{tensor_to_pixels, pixels_to_tensor, ImageTensor};
//!
//! let t = ImageTensor::from_nhwc(2, 2, 3, vec![0.5; 12]).unwrap();
//! let img = tensor_to_pixels(&t).unwrap();
//! assert_eq!(img.dimensions(), (2, 2));
//!
//! let back = pixels_to_tensor(&img);
//! assert_eq!(back.shape(), &[1, 2, 2, 3]);
//! ```

use crate::image::{Channels, PixelImage};
use crate::tensor::ImageTensor;
use crate::{Error, Result};

/// Converts a rank-4 `[1, H, W, C]` float tensor into an 8-bit pixel image.
///
/// Values are clamped to `[0, 1]`, scaled to `[0, 255]`, and rounded to
/// nearest.
///
/// # Errors
///
/// - [`Error::Rank`] if the array is not rank 4.
/// - [`Error::ChannelCount`] if the last dimension is not 1, 3, or 4.
/// - [`Error::BatchSize`] if the first dimension is not 1.
pub fn tensor_to_pixels(tensor: &ImageTensor) -> Result<PixelImage> {
    let shape = tensor.shape();
    if shape.len() != 4 {
        return Err(Error::rank(shape.len()));
    }
    let channels = Channels::from_count(shape[3])?;
    if shape[0] != 1 {
        return Err(Error::batch_size(shape[0]));
    }

    let data = tensor
        .data()
        .iter()
        .map(|&v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
        .collect();

    Ok(PixelImage {
        width: shape[2] as u32,
        height: shape[1] as u32,
        channels,
        data,
    })
}

/// Converts an 8-bit pixel image back into a rank-4 `[1, H, W, C]` tensor.
///
/// Values are scaled to `[0, 1]`. The batch dimension is always 1, so
/// this direction cannot fail.
pub fn pixels_to_tensor(image: &PixelImage) -> ImageTensor {
    let (width, height) = image.dimensions();
    let data = image.data().iter().map(|&v| v as f32 / 255.0).collect();

    ImageTensor {
        shape: vec![
            1,
            height as usize,
            width as usize,
            image.channels().count(),
        ],
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn gradient_tensor(height: usize, width: usize, channels: usize) -> ImageTensor {
        let len = height * width * channels;
        let data = (0..len).map(|i| i as f32 / len as f32).collect();
        ImageTensor::from_nhwc(height, width, channels, data).unwrap()
    }

    #[test]
    fn test_rejects_rank_3() {
        let t = ImageTensor::new(vec![4, 4, 3], vec![0.0; 48]).unwrap();
        assert!(matches!(tensor_to_pixels(&t), Err(Error::Rank { got: 3 })));
    }

    #[test]
    fn test_rejects_rank_5() {
        let t = ImageTensor::new(vec![1, 1, 4, 4, 3], vec![0.0; 48]).unwrap();
        assert!(matches!(tensor_to_pixels(&t), Err(Error::Rank { got: 5 })));
    }

    #[test]
    fn test_rejects_two_channels() {
        let t = ImageTensor::new(vec![1, 4, 4, 2], vec![0.0; 32]).unwrap();
        assert!(matches!(
            tensor_to_pixels(&t),
            Err(Error::ChannelCount { got: 2 })
        ));
    }

    #[test]
    fn test_rejects_multi_image_batch() {
        let t = ImageTensor::new(vec![2, 4, 4, 3], vec![0.0; 96]).unwrap();
        assert!(matches!(
            tensor_to_pixels(&t),
            Err(Error::BatchSize { got: 2 })
        ));
    }

    #[test]
    fn test_channel_check_precedes_batch_check() {
        // Both the batch and the channel count are wrong; the channel
        // error wins.
        let t = ImageTensor::new(vec![2, 4, 4, 2], vec![0.0; 64]).unwrap();
        assert!(matches!(
            tensor_to_pixels(&t),
            Err(Error::ChannelCount { got: 2 })
        ));
    }

    #[test]
    fn test_dimensions_and_layout() {
        let t = gradient_tensor(3, 5, 3);
        let img = tensor_to_pixels(&t).unwrap();
        assert_eq!(img.dimensions(), (5, 3));
        assert_eq!(img.channels(), Channels::Rgb);
        assert_eq!(img.data().len(), 3 * 5 * 3);
    }

    #[test]
    fn test_grayscale_path() {
        let t = ImageTensor::from_nhwc(2, 2, 1, vec![0.0, 0.25, 0.5, 1.0]).unwrap();
        let img = tensor_to_pixels(&t).unwrap();
        assert_eq!(img.channels(), Channels::Gray);
        assert_eq!(img.data(), &[0, 64, 128, 255]);
    }

    #[test]
    fn test_out_of_range_values_clamp() {
        let t = ImageTensor::from_nhwc(1, 2, 1, vec![-0.5, 1.5]).unwrap();
        let img = tensor_to_pixels(&t).unwrap();
        assert_eq!(img.data(), &[0, 255]);
    }

    #[test]
    fn test_value_rounding() {
        // 0.5 * 255 = 127.5, rounds away from zero to 128.
        let t = ImageTensor::from_nhwc(1, 1, 1, vec![0.5]).unwrap();
        assert_eq!(tensor_to_pixels(&t).unwrap().data(), &[128]);
    }

    #[test]
    fn test_pixels_to_tensor_shape() {
        let img = PixelImage::new(7, 3, Channels::Rgba);
        let t = pixels_to_tensor(&img);
        assert_eq!(t.shape(), &[1, 3, 7, 4]);
        assert_eq!(t.len(), 3 * 7 * 4);
    }

    #[test]
    fn test_round_trip_within_quantization() {
        let original = gradient_tensor(4, 4, 3);
        let back = pixels_to_tensor(&tensor_to_pixels(&original).unwrap());
        assert_eq!(back.shape(), original.shape());
        for (&a, &b) in original.data().iter().zip(back.data()) {
            assert_abs_diff_eq!(a, b, epsilon = 1.0 / 255.0);
        }
    }

    #[test]
    fn test_exact_values_survive_round_trip() {
        let t = ImageTensor::from_nhwc(1, 3, 1, vec![0.0, 128.0 / 255.0, 1.0]).unwrap();
        let back = pixels_to_tensor(&tensor_to_pixels(&t).unwrap());
        for (&a, &b) in t.data().iter().zip(back.data()) {
            assert_abs_diff_eq!(a, b, epsilon = f32::EPSILON);
        }
    }
}
