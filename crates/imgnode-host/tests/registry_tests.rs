//! Integration tests for NodeRegistry.

use imgnode_core::ImageTensor;
use imgnode_host::{HostError, Inputs, NodeRegistry, Value, ValueKind};

/// Create a simple test image.
fn test_image(width: usize, height: usize) -> ImageTensor {
    let size = width * height * 3;
    let data: Vec<f32> = (0..size).map(|i| (i % 256) as f32 / 255.0).collect();
    ImageTensor::from_nhwc(height, width, 3, data).unwrap()
}

fn align_inputs(image: ImageTensor, modulus: i64, color: &str) -> Inputs {
    let mut inputs = Inputs::new();
    inputs.insert("image", image);
    inputs.insert("modulus", modulus);
    inputs.insert("padding_color", color);
    inputs
}

#[test]
fn registry_global_has_size_align() {
    let registry = NodeRegistry::global();
    let names: Vec<_> = registry.node_names().collect();

    assert!(
        names.contains(&"ImageSizeAlign"),
        "ImageSizeAlign not found in registry"
    );
}

#[test]
fn registry_schema_lookup() {
    let registry = NodeRegistry::global();
    let schema = registry.schema("ImageSizeAlign").expect("schema");

    assert_eq!(schema.display_name, "Image Size Align");
    assert_eq!(schema.category, "image/transform");
    assert_eq!(schema.inputs.len(), 3);
    assert_eq!(schema.outputs.len(), 7);
}

#[test]
fn registry_schema_serializes_to_json() {
    let registry = NodeRegistry::global();
    let schema = registry.schema("ImageSizeAlign").expect("schema");

    let json = serde_json::to_value(schema).expect("serialize schema");
    assert_eq!(json["category"], "image/transform");
    assert_eq!(json["inputs"][0]["name"], "image");
    assert_eq!(json["inputs"][0]["type"], "image");
    assert_eq!(json["inputs"][1]["name"], "modulus");
    assert_eq!(json["inputs"][1]["default"], 8);
    assert_eq!(json["inputs"][1]["min"], 0);
    assert_eq!(json["inputs"][1]["max"], 4096);
    assert_eq!(json["inputs"][2]["default"], "#ffffff");
    assert_eq!(json["outputs"][0]["name"], "padded_image");
    assert_eq!(json["outputs"][6]["name"], "padding_height");
}

#[test]
fn registry_invoke_end_to_end() {
    let registry = NodeRegistry::global();
    let inputs = align_inputs(test_image(10, 10), 8, "#ffffff");

    let outputs = registry
        .invoke("ImageSizeAlign", &inputs)
        .expect("invoke ImageSizeAlign");
    assert_eq!(outputs.len(), 7);

    let padded = outputs[0].as_image().expect("padded image");
    assert_eq!(padded.shape(), &[1, 16, 16, 3]);
    // Top-left of the padded image is fill white.
    assert_eq!(padded.data()[0], 1.0);

    let ints: Vec<_> = outputs[1..]
        .iter()
        .map(|v| v.as_int().expect("int output"))
        .collect();
    assert_eq!(ints, [10, 10, 16, 16, 6, 6]);
}

#[test]
fn registry_invoke_aligned_image_unchanged() {
    let registry = NodeRegistry::global();
    let image = test_image(16, 16);
    let inputs = align_inputs(image.clone(), 8, "#ffffff");

    let outputs = registry
        .invoke("ImageSizeAlign", &inputs)
        .expect("invoke ImageSizeAlign");
    assert_eq!(outputs[0], Value::Image(image));
    assert_eq!(outputs[5].as_int(), Some(0));
    assert_eq!(outputs[6].as_int(), Some(0));
}

#[test]
fn registry_invoke_unknown_node() {
    let registry = NodeRegistry::global();
    let result = registry.invoke("NoSuchNode", &Inputs::new());

    match result {
        Err(HostError::UnknownNode { name }) => assert_eq!(name, "NoSuchNode"),
        other => panic!("expected UnknownNode, got {other:?}"),
    }
}

#[test]
fn registry_invoke_missing_input() {
    let registry = NodeRegistry::global();
    let mut inputs = Inputs::new();
    inputs.insert("image", test_image(4, 4));

    let result = registry.invoke("ImageSizeAlign", &inputs);
    assert!(matches!(result, Err(HostError::MissingInput { .. })));
}

#[test]
fn registry_invoke_wrong_input_type() {
    let registry = NodeRegistry::global();
    let mut inputs = Inputs::new();
    inputs.insert("image", test_image(4, 4));
    inputs.insert("modulus", "eight");
    inputs.insert("padding_color", "#ffffff");

    let result = registry.invoke("ImageSizeAlign", &inputs);
    match result {
        Err(HostError::InputType { input, expected, .. }) => {
            assert_eq!(input, "modulus");
            assert_eq!(expected, ValueKind::Int);
        }
        other => panic!("expected InputType, got {other:?}"),
    }
}

#[test]
fn registry_invoke_propagates_validation() {
    let registry = NodeRegistry::global();
    let rank3 = ImageTensor::new([10, 10, 3], vec![0.0; 300]).unwrap();
    let inputs = align_inputs(rank3, 8, "#ffffff");

    let result = registry.invoke("ImageSizeAlign", &inputs);
    match result {
        Err(HostError::Validation(e)) => {
            assert_eq!(e.to_string(), "expected rank-4 array, got rank 3");
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn registry_thread_safe() {
    use std::thread;

    // Spawn threads that all access the global registry
    let handles: Vec<_> = (0..4)
        .map(|_| {
            thread::spawn(|| {
                let registry = NodeRegistry::global();
                let names: Vec<_> = registry.node_names().collect();
                assert!(!names.is_empty());

                let inputs = align_inputs(test_image(10, 10), 8, "#ffffff");
                let outputs = registry
                    .invoke("ImageSizeAlign", &inputs)
                    .expect("invoke from thread");
                assert_eq!(outputs.len(), 7);
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("thread panicked");
    }
}
