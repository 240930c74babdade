//! bplx-export library
//!
//! OBJ parsing, OBJ → BPLX conversion and manifest-driven batch builds.

pub mod convert;
pub mod manifest;
pub mod obj;

pub use convert::{
    build_asset, convert_obj, inspect, write_bplx, write_demo, ConvertOptions, MaterialPreset,
    RigPreset,
};
pub use obj::{parse_obj, parse_obj_file, IndexBase, ObjData};

// Re-export the container API for downstream tools
pub use bplx_common::{AssetSummary, BPLX_EXT};
