//! Array-form images as handed over by the host runtime.
//!
//! Workflow hosts move images between nodes as multi-dimensional float
//! arrays. For images the convention is four axes in NHWC order -
//! (batch, height, width, channel) - with normalized values in [0, 1].
//!
//! # Design
//!
//! [`ImageTensor`] deliberately keeps a *dynamic* shape (`Vec<usize>`)
//! rather than encoding the rank in the type: host values arrive untyped,
//! so "is this actually a rank-4 array?" must stay a runtime question that
//! can fail with a validation error instead of being unrepresentable.
//!
//! # Memory Layout
//!
//! Values are stored contiguously in row-major order, the last axis varying
//! fastest:
//!
//! ```text
//! Memory: [R G B R G B ...]  <- row 0 of batch element 0
//!         [R G B R G B ...]  <- row 1
//!         ...
//! ```
//!
//! # Usage
//!
//! ```rust
//! use imgnode_core::ImageTensor;
//!
//! // A 1x2x2x3 tensor: one RGB image of 2x2 pixels
//! let t = ImageTensor::new([1, 2, 2, 3], vec![0.5; 12]).unwrap();
//! assert_eq!(t.rank(), 4);
//! assert_eq!(t.shape(), &[1, 2, 2, 3]);
//! ```
//!
//! # Used By
//!
//! - [`crate::convert`] - conversion to/from the pixel-grid form

use crate::{Error, Result};

/// Owned multi-dimensional float array holding image data.
///
/// The shape is dynamic; for image payloads the expected layout is
/// `[batch, height, width, channel]` with `batch == 1`. Construction only
/// checks that the buffer length matches the shape - interpretation as an
/// image (rank, channels, batch) is validated by
/// [`crate::convert::tensor_to_pixels`].
///
/// # Example
///
/// ```rust
/// use imgnode_core::ImageTensor;
///
/// let t = ImageTensor::from_nhwc(4, 6, 3, vec![0.0; 4 * 6 * 3]).unwrap();
/// assert_eq!(t.shape(), &[1, 4, 6, 3]);
/// assert_eq!(t.len(), 72);
/// ```
#[derive(Clone, PartialEq)]
pub struct ImageTensor {
    /// Axis lengths, outermost first. Invariant: `data.len()` equals the
    /// product of all entries.
    pub(crate) shape: Vec<usize>,
    /// Contiguous values in row-major order.
    pub(crate) data: Vec<f32>,
}

impl ImageTensor {
    /// Creates a tensor from a shape and a value buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLength`] if `data.len()` does not equal the
    /// product of the shape's axis lengths.
    ///
    /// # Example
    ///
    /// ```rust
    /// use imgnode_core::ImageTensor;
    ///
    /// let ok = ImageTensor::new([1, 2, 2, 3], vec![0.0; 12]);
    /// assert!(ok.is_ok());
    ///
    /// let bad = ImageTensor::new([1, 2, 2, 3], vec![0.0; 7]);
    /// assert!(bad.is_err());
    /// ```
    pub fn new(shape: impl Into<Vec<usize>>, data: Vec<f32>) -> Result<Self> {
        let shape = shape.into();
        let expected: usize = shape.iter().product();
        if data.len() != expected {
            return Err(Error::data_length(expected, data.len()));
        }
        Ok(Self { shape, data })
    }

    /// Creates a single-image NHWC tensor of shape `[1, height, width, channels]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLength`] if `data.len()` is not
    /// `height * width * channels`.
    pub fn from_nhwc(height: usize, width: usize, channels: usize, data: Vec<f32>) -> Result<Self> {
        Self::new([1, height, width, channels], data)
    }

    /// Returns the axis lengths, outermost first.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Returns the number of axes.
    #[inline]
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Returns the values in row-major order.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Returns the total number of values.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the tensor holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl std::fmt::Debug for ImageTensor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageTensor")
            .field("shape", &self.shape)
            .field("len", &self.data.len())
            .finish()
    }
}
