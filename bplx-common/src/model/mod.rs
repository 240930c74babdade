//! In-memory asset representation shared by the encoder and decoder.
//!
//! An [`Asset`] owns exactly one [`Mesh`], its materials, one [`Skeleton`] and
//! any number of [`AnimationClip`]s. Cross-references between sections are
//! plain indices:
//!
//! - face corner → vertex (`u32`, must be `< vertex_count`)
//! - bone → parent bone (`i32`, `-1` for roots, otherwise `< own index`)
//! - keyframe → bone (`u32`, must be `< bone_count`)
//! - mesh → material (`u32`, must be `< material_count`)

mod animation;
mod material;
mod mesh;
mod skeleton;

pub use animation::{AnimationClip, Keyframe};
pub use material::Material;
pub use mesh::{Face, Mesh, Vertex};
pub use skeleton::{Bone, Skeleton, NO_PARENT};
pub(crate) use skeleton::parent_in_range;

use serde::{Deserialize, Serialize};

use crate::error::{BplxError, Result};

/// Local TRS transform used for bone rest poses and keyframes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: [f32; 3],
    /// Unit quaternion [x, y, z, w]
    pub rotation: [f32; 4],
    pub scale: [f32; 3],
}

impl Transform {
    /// Identity transform (no rotation, no translation, unit scale)
    pub const IDENTITY: Self = Self {
        position: [0.0, 0.0, 0.0],
        rotation: [0.0, 0.0, 0.0, 1.0],
        scale: [1.0, 1.0, 1.0],
    };

    /// Identity rotation and scale at the given position
    pub fn from_position(position: [f32; 3]) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Root aggregate: one mesh, its materials, one skeleton and its clips.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Asset {
    pub mesh: Mesh,
    /// Insertion order is the index space used by [`Mesh::material_index`]
    pub materials: Vec<Material>,
    pub skeleton: Skeleton,
    pub clips: Vec<AnimationClip>,
}

impl Asset {
    pub fn new(
        mesh: Mesh,
        materials: Vec<Material>,
        skeleton: Skeleton,
        clips: Vec<AnimationClip>,
    ) -> Self {
        Self {
            mesh,
            materials,
            skeleton,
            clips,
        }
    }

    /// Check every structural invariant the container relies on.
    ///
    /// An asset without materials may only use material index 0: decoded
    /// assets carry no material records (version 1 does not store them) and
    /// must still re-encode.
    pub fn validate(&self) -> Result<()> {
        check_count("vertex", self.mesh.vertices.len())?;
        check_count("face", self.mesh.faces.len())?;
        check_count("material", self.materials.len())?;
        check_count("bone", self.skeleton.bones.len())?;
        check_count("clip", self.clips.len())?;

        let material_index = self.mesh.material_index as usize;
        let unset = self.materials.is_empty() && material_index == 0;
        if !unset && material_index >= self.materials.len() {
            return Err(BplxError::invalid_input(format!(
                "mesh '{}' uses material {} but only {} materials exist",
                self.mesh.name,
                self.mesh.material_index,
                self.materials.len()
            )));
        }

        self.mesh.validate()?;
        self.skeleton.validate()?;

        let bone_count = self.skeleton.bones.len();
        for clip in &self.clips {
            clip.validate(bone_count)?;
        }

        Ok(())
    }
}

/// Every count and name length is stored as a u32.
pub(crate) fn check_count(what: &str, len: usize) -> Result<()> {
    if u32::try_from(len).is_err() {
        return Err(BplxError::invalid_input(format!(
            "{} count {} does not fit in 32 bits",
            what, len
        )));
    }
    Ok(())
}
