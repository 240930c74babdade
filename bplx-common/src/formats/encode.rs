//! Asset → BPLX bytes

use super::{BplxHeader, BONE_FIXED_SIZE, FACE_SIZE, KEYFRAME_SIZE, VERTEX_SIZE, WORD};
use crate::error::Result;
use crate::model::{Asset, Transform};

/// Exact number of bytes [`encode`] produces for `asset`.
pub fn encoded_len(asset: &Asset) -> usize {
    let geometry = asset.mesh.vertices.len() * VERTEX_SIZE + asset.mesh.faces.len() * FACE_SIZE;
    let bones: usize = asset
        .skeleton
        .bones
        .iter()
        .map(|b| WORD + b.name.len() + BONE_FIXED_SIZE)
        .sum();
    let clips: usize = asset
        .clips
        .iter()
        .map(|c| WORD + c.name.len() + 2 * WORD + c.keyframes.len() * KEYFRAME_SIZE)
        .sum();
    BplxHeader::SIZE + geometry + WORD + bones + WORD + clips
}

/// Serialize an asset into a complete BPLX container.
///
/// The asset is validated before anything is written, so on error no
/// partial output exists.
pub fn encode(asset: &Asset) -> Result<Vec<u8>> {
    asset.validate()?;

    let mesh = &asset.mesh;
    let header = BplxHeader::new(
        mesh.vertices.len() as u32,
        mesh.faces.len() as u32,
        asset.materials.len() as u32,
    );

    let mut out = Vec::with_capacity(encoded_len(asset));
    out.extend_from_slice(&header.to_bytes());

    // Attribute blocks are planar, not interleaved
    for v in &mesh.vertices {
        put_f32s(&mut out, &v.position);
    }
    for v in &mesh.vertices {
        put_f32s(&mut out, &v.normal);
    }
    for v in &mesh.vertices {
        put_f32s(&mut out, &v.uv);
    }
    for face in &mesh.faces {
        for &i in &face.indices {
            put_u32(&mut out, i);
        }
    }

    put_u32(&mut out, asset.skeleton.bones.len() as u32);
    for bone in &asset.skeleton.bones {
        put_name(&mut out, &bone.name);
        out.extend_from_slice(&bone.parent.to_le_bytes());
        put_transform(&mut out, &bone.rest);
    }

    put_u32(&mut out, asset.clips.len() as u32);
    for clip in &asset.clips {
        put_name(&mut out, &clip.name);
        put_f32s(&mut out, &[clip.duration]);
        put_u32(&mut out, clip.keyframes.len() as u32);
        for keyframe in &clip.keyframes {
            put_f32s(&mut out, &[keyframe.time]);
            put_u32(&mut out, keyframe.bone_index);
            put_transform(&mut out, &keyframe.transform);
        }
    }

    debug_assert_eq!(out.len(), encoded_len(asset));
    tracing::debug!(
        bytes = out.len(),
        vertices = mesh.vertices.len(),
        faces = mesh.faces.len(),
        bones = asset.skeleton.bones.len(),
        clips = asset.clips.len(),
        "encoded BPLX asset"
    );

    Ok(out)
}

fn put_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}

fn put_f32s(out: &mut Vec<u8>, values: &[f32]) {
    for f in values {
        out.extend_from_slice(&f.to_le_bytes());
    }
}

/// Length-prefixed UTF-8, no terminator
fn put_name(out: &mut Vec<u8>, name: &str) {
    put_u32(out, name.len() as u32);
    out.extend_from_slice(name.as_bytes());
}

fn put_transform(out: &mut Vec<u8>, t: &Transform) {
    put_f32s(out, &t.position);
    put_f32s(out, &t.rotation);
    put_f32s(out, &t.scale);
}
