//! # imgnode-core
//!
//! Core types for node-based image processing.
//!
//! This crate provides the foundational types used throughout the IMGNODE
//! ecosystem:
//!
//! - [`ImageTensor`] - Rank-4 float array in `[batch, height, width, channels]`
//!   layout, the format workflow hosts move between nodes
//! - [`PixelImage`], [`Channels`] - Flat 8-bit pixel grid with an explicit
//!   channel layout, the format pixel operations work in
//! - [`FillColor`] - Parsed padding color (hex or CSS3 named)
//! - [`tensor_to_pixels`], [`pixels_to_tensor`] - The validated boundary
//!   between the two image representations
//! - [`Error`] - Shared validation and parsing errors
//!
//! ## Design Philosophy
//!
//! Validation happens once, at the tensor boundary. [`tensor_to_pixels`]
//! rejects wrong ranks, unsupported channel counts, and multi-image
//! batches; every type downstream of it ([`PixelImage`], [`Channels`])
//! can only represent valid states, so pixel operations carry no checks
//! of their own:
//!
//! ```ignore
//! let img = tensor_to_pixels(&tensor)?; // All validation lives here.
//! let padded = expand(&img, 6, 6, 0, 0, &fill); // Infallible from here on.
//! ```
//!
//! ## Crate Structure
//!
//! This crate is the foundation of IMGNODE and has no internal
//! dependencies. The other IMGNODE crates depend on `imgnode-core`:
//!
//! ```text
//! imgnode-core (this crate)
//!    ^
//!    |
//!    +-- imgnode-transform (padding, size alignment)
//!    +-- imgnode-host (node schemas, registry, dispatch)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod convert;
pub mod error;
pub mod image;
pub mod tensor;

// Re-exports for convenience
pub use color::{FillColor, REC709_LUMA_B, REC709_LUMA_G, REC709_LUMA_R};
pub use convert::{pixels_to_tensor, tensor_to_pixels};
pub use error::{Error, Result};
pub use image::{Channels, PixelImage};
pub use tensor::ImageTensor;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use imgnode_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::FillColor;
    pub use crate::convert::{pixels_to_tensor, tensor_to_pixels};
    pub use crate::error::{Error, Result};
    pub use crate::image::{Channels, PixelImage};
    pub use crate::tensor::ImageTensor;
}
