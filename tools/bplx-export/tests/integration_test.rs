//! Integration tests for bplx-export
//!
//! Tests the full pipeline: generate test assets -> convert -> decode output

mod generate_test_assets;

use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn bplx_export(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bplx-export"))
        .args(args)
        .output()
        .expect("Failed to run bplx-export")
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

fn decode_file(path: &Path) -> bplx_common::Asset {
    let bytes = std::fs::read(path).expect("Failed to read output");
    bplx_common::decode(&bytes).expect("Output should decode")
}

/// Test OBJ -> BPLX conversion with the demo rig
#[test]
fn test_obj_to_bplx() {
    let dir = tempdir().expect("Failed to create temp dir");
    let obj_path = dir.path().join("cube.obj");
    let out_path = dir.path().join("cube.bplx");

    generate_test_assets::generate_cube_obj(&obj_path).expect("Failed to generate OBJ");
    let output = bplx_export(&["convert", path_str(&obj_path), "-o", path_str(&out_path)]);
    assert!(output.status.success(), "convert failed: {:?}", output);

    let asset = decode_file(&out_path);
    assert_eq!(asset.mesh.vertices.len(), 8);
    assert_eq!(asset.mesh.faces.len(), 12);
    assert_eq!(asset.skeleton.bones.len(), 2);
    assert_eq!(asset.clips[0].keyframes.len(), 3);
    // First corner of the first face sets vertex 0's attributes
    assert_eq!(asset.mesh.vertices[0].normal, [0.0, 0.0, 1.0]);
    assert_eq!(asset.mesh.vertices[0].uv, [0.0, 0.0]);
}

/// Default output path swaps the extension
#[test]
fn test_convert_default_output() {
    let dir = tempdir().expect("Failed to create temp dir");
    let obj_path = dir.path().join("cube.obj");
    generate_test_assets::generate_cube_obj(&obj_path).expect("Failed to generate OBJ");

    let output = bplx_export(&["convert", path_str(&obj_path)]);
    assert!(output.status.success(), "convert failed: {:?}", output);
    assert!(dir.path().join("cube.bplx").exists());
}

#[test]
fn test_zero_based_without_rig() {
    let dir = tempdir().expect("Failed to create temp dir");
    let obj_path = dir.path().join("tri.obj");
    let out_path = dir.path().join("tri.bplx");

    generate_test_assets::generate_zero_based_triangle_obj(&obj_path)
        .expect("Failed to generate OBJ");
    let output = bplx_export(&[
        "convert",
        path_str(&obj_path),
        "-o",
        path_str(&out_path),
        "--zero-based",
        "--no-rig",
    ]);
    assert!(output.status.success(), "convert failed: {:?}", output);

    let asset = decode_file(&out_path);
    assert_eq!(asset.mesh.faces[0].indices, [0, 1, 2]);
    assert!(asset.skeleton.bones.is_empty());
    assert!(asset.clips.is_empty());
}

#[test]
fn test_zero_based_source_read_as_one_based_fails() {
    let dir = tempdir().expect("Failed to create temp dir");
    let obj_path = dir.path().join("tri.obj");
    let out_path = dir.path().join("tri.bplx");

    generate_test_assets::generate_zero_based_triangle_obj(&obj_path)
        .expect("Failed to generate OBJ");
    let output = bplx_export(&["convert", path_str(&obj_path), "-o", path_str(&out_path)]);
    assert!(!output.status.success());
    assert!(!out_path.exists());
}

#[test]
fn test_demo_then_inspect_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let out_path = dir.path().join("animated_cube.bplx");

    let output = bplx_export(&["demo", "-o", path_str(&out_path)]);
    assert!(output.status.success(), "demo failed: {:?}", output);
    assert_eq!(std::fs::metadata(&out_path).unwrap().len(), 715);

    let output = bplx_export(&["inspect", path_str(&out_path), "--json"]);
    assert!(output.status.success(), "inspect failed: {:?}", output);

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("inspect --json should print JSON");
    assert_eq!(report["version"], 1);
    assert_eq!(report["vertex_count"], 8);
    assert_eq!(report["material_count"], 1);
    assert_eq!(report["bone_count"], 2);
    assert_eq!(report["keyframe_count"], 3);
    assert_eq!(report["first_face"], serde_json::json!([0, 2, 3]));
    assert_eq!(report["clips"][0]["name"], "SimpleMovement");
}

#[test]
fn test_inspect_rejects_corrupt_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("broken.bplx");

    let mut bytes = bplx_common::encode(&bplx_common::fixtures::animated_cube()).unwrap();
    bytes.truncate(100);
    std::fs::write(&path, &bytes).unwrap();

    let output = bplx_export(&["inspect", path_str(&path)]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("truncated input"), "stderr: {}", stderr);
}

#[test]
fn test_build_from_manifest() {
    let dir = tempdir().expect("Failed to create temp dir");
    generate_test_assets::generate_cube_obj(&dir.path().join("cube.obj"))
        .expect("Failed to generate OBJ");
    generate_test_assets::generate_zero_based_triangle_obj(&dir.path().join("tri.obj"))
        .expect("Failed to generate OBJ");

    let manifest_path = dir.path().join("assets.toml");
    std::fs::write(
        &manifest_path,
        r#"
[output]
dir = "out"

[meshes]
cube = "cube.obj"
tri = { path = "tri.obj", index_base = "zero", rig = "none" }
"#,
    )
    .unwrap();

    let output = bplx_export(&["check", path_str(&manifest_path)]);
    assert!(output.status.success(), "check failed: {:?}", output);

    let output = bplx_export(&["build", path_str(&manifest_path)]);
    assert!(output.status.success(), "build failed: {:?}", output);

    let cube = decode_file(&dir.path().join("out/cube.bplx"));
    assert_eq!(cube.mesh.faces.len(), 12);
    assert_eq!(cube.skeleton.bones.len(), 2);

    let tri = decode_file(&dir.path().join("out/tri.bplx"));
    assert_eq!(tri.mesh.faces.len(), 1);
    assert!(tri.skeleton.bones.is_empty());
}

#[test]
fn test_check_reports_missing_source() {
    let dir = tempdir().expect("Failed to create temp dir");
    let manifest_path = dir.path().join("assets.toml");
    std::fs::write(&manifest_path, "[meshes]\nghost = \"ghost.obj\"\n").unwrap();

    let output = bplx_export(&["check", path_str(&manifest_path)]);
    assert!(!output.status.success());
}
