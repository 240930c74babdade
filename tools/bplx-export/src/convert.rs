//! OBJ → BPLX conversion and container inspection

use anyhow::{Context, Result};
use bplx_common::{fixtures, AnimationClip, Asset, AssetSummary, Material, Skeleton};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::obj::{parse_obj_file, IndexBase, ObjData};

/// Rig attached to a converted mesh. OBJ carries no skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RigPreset {
    /// Two-bone demo skeleton with the SimpleMovement clip
    #[default]
    Demo,
    /// Empty skeleton, no clips
    None,
}

impl RigPreset {
    fn build(self) -> (Skeleton, Vec<AnimationClip>) {
        match self {
            RigPreset::Demo => (
                fixtures::demo_skeleton(),
                vec![fixtures::simple_movement_clip()],
            ),
            RigPreset::None => (Skeleton::default(), Vec::new()),
        }
    }
}

/// Material recorded for a converted mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialPreset {
    #[default]
    Default,
    ShinyRed,
}

impl MaterialPreset {
    fn build(self) -> Material {
        match self {
            MaterialPreset::Default => fixtures::default_material(),
            MaterialPreset::ShinyRed => fixtures::shiny_red_material(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertOptions {
    pub index_base: IndexBase,
    pub rig: RigPreset,
    pub material: MaterialPreset,
}

/// Assemble an asset from parsed OBJ data.
pub fn build_asset(obj: &ObjData, name: &str, options: &ConvertOptions) -> Result<Asset> {
    let mesh = obj.to_mesh(obj.name.as_deref().unwrap_or(name), 0)?;
    let (skeleton, clips) = options.rig.build();
    Ok(Asset::new(
        mesh,
        vec![options.material.build()],
        skeleton,
        clips,
    ))
}

/// Convert an OBJ file to a BPLX container on disk
pub fn convert_obj(input: &Path, output: &Path, options: &ConvertOptions) -> Result<AssetSummary> {
    let obj = parse_obj_file(input, options.index_base)?;
    tracing::debug!(
        "Parsed OBJ {:?}: {} positions, {} uvs, {} normals, {} triangles",
        input,
        obj.positions.len(),
        obj.uvs.len(),
        obj.normals.len(),
        obj.triangles.len()
    );

    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("mesh");
    let asset = build_asset(&obj, stem, options)
        .with_context(|| format!("Failed to build asset from {:?}", input))?;
    write_bplx(output, &asset)?;

    let summary = AssetSummary::of(&asset);
    tracing::info!(
        "Converted OBJ mesh: {} vertices, {} faces, {} bones, {} clips",
        summary.vertex_count,
        summary.face_count,
        summary.bone_count,
        summary.clip_count
    );
    Ok(summary)
}

/// Write the animated cube demo asset
pub fn write_demo(output: &Path) -> Result<AssetSummary> {
    let asset = fixtures::animated_cube();
    write_bplx(output, &asset)?;
    Ok(AssetSummary::of(&asset))
}

/// Encode and write an asset. Nothing is created if encoding fails.
pub fn write_bplx(output: &Path, asset: &Asset) -> Result<()> {
    let bytes = bplx_common::encode(asset).context("Failed to encode BPLX asset")?;

    let file =
        File::create(output).with_context(|| format!("Failed to create output: {:?}", output))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&bytes)?;
    writer.flush()?;

    tracing::debug!("Wrote {} bytes to {:?}", bytes.len(), output);
    Ok(())
}

/// Read and decode a BPLX container
pub fn inspect(path: &Path) -> Result<AssetSummary> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read {:?}", path))?;
    let (header, asset) = bplx_common::decode_with_header(&bytes)
        .with_context(|| format!("Failed to decode {:?}", path))?;
    Ok(AssetSummary::from_decoded(&header, &asset))
}

/// Log a summary the way `inspect` presents it
pub fn log_summary(path: &Path, summary: &AssetSummary) {
    tracing::info!("--- BPLX {:?} ---", path);
    tracing::info!("Version: {}", summary.version);
    tracing::info!(
        "Vertices: {}, faces: {}, materials: {}",
        summary.vertex_count,
        summary.face_count,
        summary.material_count
    );
    if let Some(p) = summary.first_vertex_position {
        tracing::info!("First vertex position: ({}, {}, {})", p[0], p[1], p[2]);
    }
    if let Some(f) = summary.first_face {
        tracing::info!("First face (indices): ({}, {}, {})", f[0], f[1], f[2]);
    }
    tracing::info!("Bones: {}", summary.bone_count);
    for (i, bone) in summary.bones.iter().enumerate() {
        tracing::info!("  [{}] '{}' parent={}", i, bone.name, bone.parent);
    }
    tracing::info!("Clips: {}", summary.clip_count);
    for clip in &summary.clips {
        tracing::info!(
            "  '{}': {}s, {} keyframes",
            clip.name,
            clip.duration,
            clip.keyframe_count
        );
    }
}
