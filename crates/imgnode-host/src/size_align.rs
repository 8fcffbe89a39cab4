//! The size-align node: pads an image up to a modulus multiple.
//!
//! Registered under the name `"ImageSizeAlign"`. Takes an image, a
//! modulus, and a padding color; returns the padded image plus the
//! original, padded, and padding dimensions as six integers.

use tracing::trace;

use imgnode_transform::size_align;

use crate::error::HostResult;
use crate::registry::NodeInfo;
use crate::schema::{InputKind, InputSpec, NodeSchema, OutputSpec};
use crate::value::{Inputs, Value, ValueKind};

/// Registered node name.
pub const NAME: &str = "ImageSizeAlign";

const INPUTS: &[InputSpec] = &[
    InputSpec {
        name: "image",
        kind: InputKind::Image,
    },
    InputSpec {
        name: "modulus",
        kind: InputKind::Int {
            default: 8,
            min: 0,
            max: 4096,
            step: 1,
        },
    },
    InputSpec {
        name: "padding_color",
        kind: InputKind::Text {
            default: "#ffffff",
            multiline: false,
        },
    },
];

const OUTPUTS: &[OutputSpec] = &[
    OutputSpec {
        name: "padded_image",
        kind: ValueKind::Image,
    },
    OutputSpec {
        name: "original_width",
        kind: ValueKind::Int,
    },
    OutputSpec {
        name: "original_height",
        kind: ValueKind::Int,
    },
    OutputSpec {
        name: "padded_width",
        kind: ValueKind::Int,
    },
    OutputSpec {
        name: "padded_height",
        kind: ValueKind::Int,
    },
    OutputSpec {
        name: "padding_width",
        kind: ValueKind::Int,
    },
    OutputSpec {
        name: "padding_height",
        kind: ValueKind::Int,
    },
];

/// Returns the registry entry for this node.
pub fn info() -> NodeInfo {
    NodeInfo {
        name: NAME,
        schema: NodeSchema {
            display_name: "Image Size Align",
            category: "image/transform",
            inputs: INPUTS,
            outputs: OUTPUTS,
        },
        run,
    }
}

/// Node entry point.
///
/// The modulus arrives as a schema-clamped integer in `[0, 4096]`, so the
/// narrowing cast cannot lose value.
fn run(inputs: &Inputs) -> HostResult<Vec<Value>> {
    let image = inputs.image("image")?;
    let modulus = inputs.int("modulus")?;
    let padding_color = inputs.text("padding_color")?;
    trace!(modulus, padding_color, "ImageSizeAlign");

    let result = size_align(image, modulus as u32, padding_color)?;

    Ok(vec![
        Value::Image(result.image),
        Value::Int(result.original_width as i64),
        Value::Int(result.original_height as i64),
        Value::Int(result.padded_width as i64),
        Value::Int(result.padded_height as i64),
        Value::Int(result.padding_width as i64),
        Value::Int(result.padding_height as i64),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use imgnode_core::ImageTensor;

    fn align_inputs(image: ImageTensor, modulus: i64, color: &str) -> Inputs {
        let mut inputs = Inputs::new();
        inputs.insert("image", image);
        inputs.insert("modulus", modulus);
        inputs.insert("padding_color", color);
        inputs
    }

    #[test]
    fn test_schema_inputs() {
        let info = info();
        assert_eq!(info.name, "ImageSizeAlign");
        assert_eq!(info.schema.display_name, "Image Size Align");
        assert_eq!(info.schema.category, "image/transform");

        let names: Vec<_> = info.schema.inputs.iter().map(|i| i.name).collect();
        assert_eq!(names, ["image", "modulus", "padding_color"]);
        assert_eq!(
            info.schema.inputs[1].kind,
            InputKind::Int {
                default: 8,
                min: 0,
                max: 4096,
                step: 1,
            }
        );
        assert_eq!(
            info.schema.inputs[2].kind,
            InputKind::Text {
                default: "#ffffff",
                multiline: false,
            }
        );
    }

    #[test]
    fn test_schema_outputs() {
        let info = info();
        let names: Vec<_> = info.schema.outputs.iter().map(|o| o.name).collect();
        assert_eq!(
            names,
            [
                "padded_image",
                "original_width",
                "original_height",
                "padded_width",
                "padded_height",
                "padding_width",
                "padding_height",
            ]
        );
        assert_eq!(info.schema.outputs[0].kind, ValueKind::Image);
        assert!(info.schema.outputs[1..]
            .iter()
            .all(|o| o.kind == ValueKind::Int));
    }

    #[test]
    fn test_run_pads_10x10_to_16x16() {
        let image = ImageTensor::from_nhwc(10, 10, 3, vec![0.5; 300]).unwrap();
        let outputs = run(&align_inputs(image, 8, "#ffffff")).unwrap();

        assert_eq!(outputs.len(), 7);
        let padded = outputs[0].as_image().unwrap();
        assert_eq!(padded.shape(), &[1, 16, 16, 3]);

        let ints: Vec<_> = outputs[1..].iter().map(|v| v.as_int().unwrap()).collect();
        assert_eq!(ints, [10, 10, 16, 16, 6, 6]);
    }

    #[test]
    fn test_run_missing_input() {
        let mut inputs = Inputs::new();
        inputs.insert("modulus", 8i64);
        assert!(run(&inputs).is_err());
    }

    #[test]
    fn test_run_propagates_validation() {
        let rank3 = ImageTensor::new([10, 10, 3], vec![0.0; 300]).unwrap();
        let mut inputs = Inputs::new();
        inputs.insert("image", rank3);
        inputs.insert("modulus", 8i64);
        inputs.insert("padding_color", "#ffffff");

        let err = run(&inputs).unwrap_err();
        assert_eq!(err.to_string(), "expected rank-4 array, got rank 3");
    }
}
