//! Declarative node schemas.
//!
//! A node describes itself to the host once, at registration: which named
//! inputs it takes (with widget hints like ranges and defaults), which
//! outputs it produces, and where it sits in the host's node menu. The
//! host renders widgets and enforces ranges from this description; node
//! code never re-validates what the schema already pins down.
//!
//! All types serialize to JSON so hosts can consume the description over
//! whatever boundary they use.

use serde::Serialize;

use crate::value::ValueKind;

/// Input widget description.
///
/// Serialized with a `type` tag, so an integer input renders as:
///
/// ```json
/// {"type": "int", "default": 8, "min": 0, "max": 4096, "step": 1}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputKind {
    /// An image socket; connected from another node, no widget.
    Image,
    /// An integer widget with range clamping.
    Int {
        /// Value shown before the user edits anything.
        default: i64,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
        /// Widget increment.
        step: i64,
    },
    /// A text widget.
    Text {
        /// Value shown before the user edits anything.
        default: &'static str,
        /// Whether the widget spans multiple lines.
        multiline: bool,
    },
}

/// One named input in a node's schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InputSpec {
    /// Input name, unique within the node.
    pub name: &'static str,
    /// Widget description.
    #[serde(flatten)]
    pub kind: InputKind,
}

/// One named output in a node's schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutputSpec {
    /// Output name, unique within the node.
    pub name: &'static str,
    /// Value type produced at this position.
    pub kind: ValueKind,
}

/// A node's complete host-facing description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NodeSchema {
    /// Name shown in the host UI.
    pub display_name: &'static str,
    /// Menu path for UI grouping, e.g. `"image/transform"`.
    pub category: &'static str,
    /// Required inputs, in declaration order.
    pub inputs: &'static [InputSpec],
    /// Outputs, in the order the node returns them.
    pub outputs: &'static [OutputSpec],
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: NodeSchema = NodeSchema {
        display_name: "Sample",
        category: "image/test",
        inputs: &[
            InputSpec {
                name: "image",
                kind: InputKind::Image,
            },
            InputSpec {
                name: "amount",
                kind: InputKind::Int {
                    default: 1,
                    min: 0,
                    max: 10,
                    step: 1,
                },
            },
        ],
        outputs: &[OutputSpec {
            name: "result",
            kind: ValueKind::Image,
        }],
    };

    #[test]
    fn test_input_kind_tagged_json() {
        let json = serde_json::to_value(InputKind::Int {
            default: 8,
            min: 0,
            max: 4096,
            step: 1,
        })
        .unwrap();
        assert_eq!(json["type"], "int");
        assert_eq!(json["default"], 8);
        assert_eq!(json["max"], 4096);
    }

    #[test]
    fn test_input_spec_flattens_kind() {
        let spec = InputSpec {
            name: "padding_color",
            kind: InputKind::Text {
                default: "#ffffff",
                multiline: false,
            },
        };
        let json = serde_json::to_value(spec).unwrap();
        assert_eq!(json["name"], "padding_color");
        assert_eq!(json["type"], "text");
        assert_eq!(json["default"], "#ffffff");
        assert_eq!(json["multiline"], false);
    }

    #[test]
    fn test_schema_json_shape() {
        let json = serde_json::to_value(SAMPLE).unwrap();
        assert_eq!(json["display_name"], "Sample");
        assert_eq!(json["category"], "image/test");
        assert_eq!(json["inputs"].as_array().unwrap().len(), 2);
        assert_eq!(json["outputs"][0]["kind"], "image");
    }
}
