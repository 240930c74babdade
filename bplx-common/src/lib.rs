//! BPLX asset container
//!
//! Bundles one static mesh, a skeletal rig and keyframe animation clips into
//! a single little-endian byte stream.
//!
//! # Modules
//!
//! - [`model`] - In-memory asset representation
//! - [`formats`] - Container layout, [`encode`] and [`decode`]
//! - [`report`] - Structured asset summaries
//! - [`fixtures`] - Demo asset builders
//!
//! ```
//! use bplx_common::{decode, encode, fixtures};
//!
//! let asset = fixtures::animated_cube();
//! let bytes = encode(&asset).unwrap();
//! let decoded = decode(&bytes).unwrap();
//! assert_eq!(decoded.skeleton.bones.len(), 2);
//! ```

pub mod error;
pub mod fixtures;
pub mod formats;
pub mod model;
pub mod report;

pub use error::{BplxError, FormatIssue, ReferenceKind, Result};

pub use formats::{
    decode, decode_with_header, encode, encoded_len, BplxHeader, BPLX_EXT, BPLX_MAGIC,
    BPLX_VERSION, RESERVED_MATERIALS_FLAG,
};

pub use model::{
    AnimationClip, Asset, Bone, Face, Keyframe, Material, Mesh, Skeleton, Transform, Vertex,
    NO_PARENT,
};

pub use report::AssetSummary;
