//! Skeletal rig: bones stored in traversal order

use serde::{Deserialize, Serialize};

use super::Transform;
use crate::error::{BplxError, Result};

/// Parent index of a root bone
pub const NO_PARENT: i32 = -1;

/// A bone with its rest-pose transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bone {
    pub name: String,
    /// [`NO_PARENT`] for roots, otherwise an index lower than this bone's own
    pub parent: i32,
    pub rest: Transform,
}

impl Bone {
    pub fn new(name: impl Into<String>, parent: i32, rest: Transform) -> Self {
        Self {
            name: name.into(),
            parent,
            rest,
        }
    }

    pub fn root(name: impl Into<String>, rest: Transform) -> Self {
        Self::new(name, NO_PARENT, rest)
    }

    pub fn is_root(&self) -> bool {
        self.parent == NO_PARENT
    }

    /// Parent index, or `None` for a root bone
    pub fn parent_index(&self) -> Option<usize> {
        usize::try_from(self.parent).ok()
    }
}

/// Ordered bones. The order is the bone-index space used by keyframes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Skeleton {
    pub bones: Vec<Bone>,
}

impl Skeleton {
    pub fn new(bones: Vec<Bone>) -> Self {
        Self { bones }
    }

    pub fn bone_count(&self) -> usize {
        self.bones.len()
    }

    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.bones
            .iter()
            .enumerate()
            .filter(|(_, b)| b.is_root())
            .map(|(i, _)| i)
    }

    pub fn find(&self, name: &str) -> Option<usize> {
        self.bones.iter().position(|b| b.name == name)
    }

    /// Parents must precede children, so the hierarchy is acyclic.
    pub fn validate(&self) -> Result<()> {
        for (index, bone) in self.bones.iter().enumerate() {
            super::check_count("bone name length", bone.name.len())?;
            if !parent_in_range(bone.parent, index) {
                return Err(BplxError::invalid_input(format!(
                    "bone {} ('{}') has parent {}, expected -1 or an index below {}",
                    index, bone.name, bone.parent, index
                )));
            }
        }
        Ok(())
    }
}

/// True when `parent` is a legal parent index for the bone at `index`.
pub(crate) fn parent_in_range(parent: i32, index: usize) -> bool {
    parent == NO_PARENT || (parent >= 0 && (parent as usize) < index)
}
