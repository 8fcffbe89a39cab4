//! # imgnode-host
//!
//! Workflow-host integration for IMGNODE: node schemas, the node
//! registry, and runtime value dispatch.
//!
//! A node-based workflow host discovers nodes from the global
//! [`NodeRegistry`], reads each node's declarative [`NodeSchema`] to
//! build its UI, and calls [`NodeRegistry::invoke`] with named
//! [`Value`]s when the graph executes.
//!
//! # Modules
//!
//! - [`value`] - Runtime values and typed input access
//! - [`schema`] - Declarative node descriptions
//! - [`registry`] - Name-to-node lookup and dispatch
//! - [`size_align`] - The built-in size-align node
//!
//! # Example
//!
//! ```rust
//! use imgnode_core::ImageTensor;
//! use imgnode_host::{Inputs, NodeRegistry};
//!
//! let registry = NodeRegistry::global();
//!
//! let mut inputs = Inputs::new();
//! inputs.insert(
//!     "image",
//!     ImageTensor::from_nhwc(10, 10, 3, vec![0.5; 300]).unwrap(),
//! );
//! inputs.insert("modulus", 8i64);
//! inputs.insert("padding_color", "#ffffff");
//!
//! let outputs = registry.invoke("ImageSizeAlign", &inputs).unwrap();
//! assert_eq!(outputs[3].as_int(), Some(16)); // padded_width
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod registry;
pub mod schema;
pub mod size_align;
pub mod value;

pub use error::{HostError, HostResult};
pub use registry::{NodeInfo, NodeRegistry, RunFn};
pub use schema::{InputKind, InputSpec, NodeSchema, OutputSpec};
pub use value::{Inputs, Value, ValueKind};
