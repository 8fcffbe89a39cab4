//! Node registry for host-side discovery and dispatch.
//!
//! The registry maps node names to their schema and entry point. Hosts
//! enumerate it once at startup to build their menus, then dispatch
//! invocations through [`NodeRegistry::invoke`].
//!
//! # Architecture
//!
//! The registry uses a singleton pattern via [`NodeRegistry::global()`].
//! Built-in nodes are registered automatically at first access and the
//! table is immutable afterwards, so lookups need no locking.
//!
//! # Example
//!
//! ```rust
//! use imgnode_host::NodeRegistry;
//!
//! let registry = NodeRegistry::global();
//!
//! // List all registered nodes
//! for name in registry.node_names() {
//!     println!("Node: {}", name);
//! }
//!
//! assert!(registry.get("ImageSizeAlign").is_some());
//! ```

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use tracing::debug;

use crate::error::{HostError, HostResult};
use crate::schema::NodeSchema;
use crate::value::{Inputs, Value};

/// Entry-point signature every node implements.
///
/// Takes the named inputs, returns output values in schema order.
pub type RunFn = fn(&Inputs) -> HostResult<Vec<Value>>;

/// Node entry in the registry.
#[derive(Clone)]
pub struct NodeInfo {
    /// Unique node name the host dispatches by (e.g., "ImageSizeAlign").
    pub name: &'static str,
    /// Host-facing schema: inputs, outputs, display grouping.
    pub schema: NodeSchema,
    /// The node's entry point.
    pub run: RunFn,
}

/// Central registry of available nodes.
///
/// # Thread Safety
///
/// The global instance is populated once and read-only afterwards, so it
/// can be shared freely across threads.
pub struct NodeRegistry {
    nodes: HashMap<&'static str, Arc<NodeInfo>>,
}

impl NodeRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
        }
    }

    /// Returns the global registry instance with built-in nodes.
    pub fn global() -> &'static NodeRegistry {
        static INSTANCE: OnceLock<NodeRegistry> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let mut registry = NodeRegistry::new();
            registry.register_builtin_nodes();
            registry
        })
    }

    /// Registers built-in nodes.
    fn register_builtin_nodes(&mut self) {
        self.register(crate::size_align::info());
    }

    /// Registers a node in the registry.
    pub fn register(&mut self, info: NodeInfo) {
        debug!(name = info.name, "Registering node");
        self.nodes.insert(info.name, Arc::new(info));
    }

    /// Returns an iterator over registered node names.
    pub fn node_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.nodes.keys().copied()
    }

    /// Returns node info by name.
    pub fn get(&self, name: &str) -> Option<&NodeInfo> {
        self.nodes.get(name).map(|arc| arc.as_ref())
    }

    /// Returns a node's schema by name.
    pub fn schema(&self, name: &str) -> Option<&NodeSchema> {
        self.get(name).map(|info| &info.schema)
    }

    /// Invokes a node by name.
    ///
    /// # Errors
    ///
    /// [`HostError::UnknownNode`] if no node with that name is registered;
    /// otherwise whatever the node's entry point returns.
    pub fn invoke(&self, name: &str, inputs: &Inputs) -> HostResult<Vec<Value>> {
        let info = self
            .get(name)
            .ok_or_else(|| HostError::unknown_node(name))?;
        (info.run)(inputs)
    }
}

impl Default for NodeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
