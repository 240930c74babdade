//! BPLX binary container format (.bplx)
//!
//! One mesh, one skeleton and its animation clips in a single little-endian
//! byte stream. Sections are sequential with no alignment padding.
//!
//! # Layout
//! ```text
//! 0x00: magic "BPLX"
//! 0x04: version u32           - currently 1
//! 0x08: vertex_count u32
//! 0x0C: face_count u32
//! 0x10: material_count u32    - informational, no material records follow
//! 0x14: reserved u32          - section flags, 0 in version 1
//! 0x18: positions             - vertex_count × 3 × f32
//! var:  normals               - vertex_count × 3 × f32
//! var:  uvs                   - vertex_count × 2 × f32
//! var:  face_indices          - face_count × 3 × u32
//! var:  bone_count u32
//!       bones                 - name_len u32, name bytes, parent i32,
//!                               position 3f, rotation 4f, scale 3f
//! var:  clip_count u32
//!       clips                 - name_len u32, name bytes, duration f32,
//!                               keyframe_count u32, keyframes
//!       keyframe              - time f32, bone_index u32,
//!                               position 3f, rotation 4f, scale 3f
//! ```
//!
//! Names are UTF-8 without terminator or padding.

mod decode;
mod encode;
mod header;


pub use decode::{decode, decode_with_header};
pub use encode::{encode, encoded_len};
pub use header::{BplxHeader, RESERVED_MATERIALS_FLAG};

/// Magic bytes at offset 0
pub const BPLX_MAGIC: [u8; 4] = *b"BPLX";

/// Only version this crate reads and writes
pub const BPLX_VERSION: u32 = 1;

/// File extension for BPLX containers
pub const BPLX_EXT: &str = "bplx";

/// Size of one float/u32/i32 field
pub(crate) const WORD: usize = 4;

/// Size of a serialized TRS transform (10 floats)
pub const TRANSFORM_SIZE: usize = 10 * WORD;

/// Fixed part of a bone record after its name (parent + transform)
pub const BONE_FIXED_SIZE: usize = WORD + TRANSFORM_SIZE;

/// Size of one keyframe record (time + bone index + transform)
pub const KEYFRAME_SIZE: usize = 2 * WORD + TRANSFORM_SIZE;

/// Bytes per vertex across the three attribute blocks (3 + 3 + 2 floats)
pub const VERTEX_SIZE: usize = 8 * WORD;

/// Bytes per face (three u32 indices)
pub const FACE_SIZE: usize = 3 * WORD;
