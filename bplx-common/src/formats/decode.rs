//! BPLX bytes → Asset
//!
//! Single forward pass. Every section checks the remaining length before it
//! reads, and every cross-reference is checked as soon as it is read.

use super::{BplxHeader, BPLX_MAGIC, BPLX_VERSION, BONE_FIXED_SIZE, FACE_SIZE, KEYFRAME_SIZE, WORD};
use crate::error::{BplxError, FormatIssue, ReferenceKind, Result};
use crate::model::parent_in_range;
use crate::model::{
    AnimationClip, Asset, Bone, Face, Keyframe, Mesh, Skeleton, Transform, Vertex,
};

/// Parse a BPLX container into an asset.
///
/// The decoded asset has no materials and an unnamed mesh; neither is
/// stored by version 1. Use [`decode_with_header`] to read `material_count`.
pub fn decode(bytes: &[u8]) -> Result<Asset> {
    decode_with_header(bytes).map(|(_, asset)| asset)
}

/// Parse a BPLX container, also returning its header.
pub fn decode_with_header(bytes: &[u8]) -> Result<(BplxHeader, Asset)> {
    let mut r = Reader::new(bytes);

    let magic = r.take(4, "magic")?;
    if magic != BPLX_MAGIC {
        return Err(BplxError::FormatError(FormatIssue::BadMagic([
            magic[0], magic[1], magic[2], magic[3],
        ])));
    }

    r.take(BplxHeader::SIZE - 4, "header")?;
    let header = BplxHeader::from_bytes(bytes).ok_or(BplxError::TruncatedInput {
        section: "header",
        needed: BplxHeader::SIZE,
        remaining: bytes.len(),
    })?;
    if header.version != BPLX_VERSION {
        return Err(BplxError::FormatError(FormatIssue::UnsupportedVersion(header.version)));
    }
    if header.reserved != 0 {
        return Err(BplxError::FormatError(FormatIssue::ReservedFlags(header.reserved)));
    }
    tracing::trace!(
        vertices = header.vertex_count,
        faces = header.face_count,
        geometry_bytes = header.geometry_size(),
        "read BPLX header"
    );

    let mesh = read_mesh(&mut r, &header)?;
    let skeleton = read_skeleton(&mut r)?;
    let clips = read_clips(&mut r, skeleton.bones.len())?;

    if r.remaining() > 0 {
        return Err(BplxError::FormatError(FormatIssue::TrailingBytes(r.remaining())));
    }

    tracing::debug!(
        bytes = bytes.len(),
        vertices = mesh.vertices.len(),
        faces = mesh.faces.len(),
        bones = skeleton.bones.len(),
        clips = clips.len(),
        "decoded BPLX asset"
    );

    let asset = Asset::new(mesh, Vec::new(), skeleton, clips);
    Ok((header, asset))
}

fn read_mesh(r: &mut Reader<'_>, header: &BplxHeader) -> Result<Mesh> {
    let vertex_count = header.vertex_count;
    let positions = r.take_records(vertex_count, 3 * WORD, "positions")?;
    let normals = r.take_records(vertex_count, 3 * WORD, "normals")?;
    let uvs = r.take_records(vertex_count, 2 * WORD, "uvs")?;

    let vertices = positions
        .chunks_exact(3 * WORD)
        .zip(normals.chunks_exact(3 * WORD))
        .zip(uvs.chunks_exact(2 * WORD))
        .map(|((p, n), uv)| Vertex {
            position: f32s(p),
            normal: f32s(n),
            uv: f32s(uv),
        })
        .collect();

    let indices = r.take_records(header.face_count, FACE_SIZE, "face indices")?;
    let mut faces = Vec::with_capacity(header.face_count as usize);
    for chunk in indices.chunks_exact(FACE_SIZE) {
        let face = Face {
            indices: [le_u32(chunk, 0), le_u32(chunk, 4), le_u32(chunk, 8)],
        };
        if let Some(&bad) = face.indices.iter().find(|&&i| i >= vertex_count) {
            return Err(BplxError::InvalidReference {
                kind: ReferenceKind::FaceVertex,
                index: bad.into(),
                limit: vertex_count.into(),
            });
        }
        faces.push(face);
    }

    Ok(Mesh {
        name: String::new(),
        material_index: 0,
        vertices,
        faces,
    })
}

fn read_skeleton(r: &mut Reader<'_>) -> Result<Skeleton> {
    let bone_count = r.u32("bone count")?;
    // Each bone needs at least its name length and fixed fields
    let mut bones = Vec::with_capacity(r.capacity_hint(bone_count, WORD + BONE_FIXED_SIZE));

    for index in 0..bone_count as usize {
        let name = r.name("bone")?;
        let parent = r.i32("bone")?;
        if !parent_in_range(parent, index) {
            return Err(BplxError::InvalidReference {
                kind: ReferenceKind::BoneParent,
                index: parent.into(),
                limit: index as i64,
            });
        }
        let rest = r.transform("bone")?;
        bones.push(Bone { name, parent, rest });
    }

    Ok(Skeleton::new(bones))
}

fn read_clips(r: &mut Reader<'_>, bone_count: usize) -> Result<Vec<AnimationClip>> {
    let clip_count = r.u32("clip count")?;
    let mut clips = Vec::with_capacity(r.capacity_hint(clip_count, 3 * WORD));

    for _ in 0..clip_count {
        let name = r.name("clip")?;
        let duration = r.f32("clip")?;
        let keyframe_count = r.u32("clip")?;

        let block = r.take_records(keyframe_count, KEYFRAME_SIZE, "keyframes")?;
        let mut keyframes = Vec::with_capacity(keyframe_count as usize);
        for chunk in block.chunks_exact(KEYFRAME_SIZE) {
            let mut k = Reader::new(chunk);
            let time = k.f32("keyframes")?;
            let bone_index = k.u32("keyframes")?;
            if bone_index as usize >= bone_count {
                return Err(BplxError::InvalidReference {
                    kind: ReferenceKind::KeyframeBone,
                    index: bone_index.into(),
                    limit: bone_count as i64,
                });
            }
            let transform = k.transform("keyframes")?;
            keyframes.push(Keyframe {
                time,
                bone_index,
                transform,
            });
        }

        clips.push(AnimationClip {
            name,
            duration,
            keyframes,
        });
    }

    Ok(clips)
}

/// Forward-only cursor over the input buffer.
struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    fn take(&mut self, len: usize, section: &'static str) -> Result<&'a [u8]> {
        if len > self.remaining() {
            return Err(BplxError::TruncatedInput {
                section,
                needed: len,
                remaining: self.remaining(),
            });
        }
        let slice = &self.bytes[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    /// `count` fixed-size records, checked before any allocation
    fn take_records(
        &mut self,
        count: u32,
        record_size: usize,
        section: &'static str,
    ) -> Result<&'a [u8]> {
        let len = (count as usize)
            .checked_mul(record_size)
            .ok_or(BplxError::TruncatedInput {
                section,
                needed: usize::MAX,
                remaining: self.remaining(),
            })?;
        self.take(len, section)
    }

    /// Upper bound on how many `min_size` records could still fit
    fn capacity_hint(&self, count: u32, min_size: usize) -> usize {
        (count as usize).min(self.remaining() / min_size)
    }

    fn u32(&mut self, section: &'static str) -> Result<u32> {
        self.take(WORD, section).map(|b| le_u32(b, 0))
    }

    fn i32(&mut self, section: &'static str) -> Result<i32> {
        self.take(WORD, section)
            .map(|b| i32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    fn f32(&mut self, section: &'static str) -> Result<f32> {
        self.take(WORD, section).map(|b| le_f32(b, 0))
    }

    fn transform(&mut self, section: &'static str) -> Result<Transform> {
        let b = self.take(super::TRANSFORM_SIZE, section)?;
        Ok(Transform {
            position: f32s(&b[0..12]),
            rotation: f32s(&b[12..28]),
            scale: f32s(&b[28..40]),
        })
    }

    /// u32 length followed by that many UTF-8 bytes
    fn name(&mut self, section: &'static str) -> Result<String> {
        let len = self.u32(section)?;
        let raw = self.take(len as usize, section)?;
        std::str::from_utf8(raw)
            .map(str::to_owned)
            .map_err(|_| BplxError::FormatError(FormatIssue::InvalidName { section }))
    }
}

fn le_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

fn le_f32(bytes: &[u8], at: usize) -> f32 {
    f32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

/// `N` consecutive little-endian floats
fn f32s<const N: usize>(bytes: &[u8]) -> [f32; N] {
    debug_assert!(bytes.len() >= N * WORD);
    std::array::from_fn(|i| le_f32(bytes, i * WORD))
}
