//! Keyframe animation clips

use serde::{Deserialize, Serialize};

use super::Transform;
use crate::error::{BplxError, Result};

/// Timestamped local transform override for one bone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Clip-relative seconds
    pub time: f32,
    pub bone_index: u32,
    pub transform: Transform,
}

impl Keyframe {
    pub fn new(time: f32, bone_index: u32, transform: Transform) -> Self {
        Self {
            time,
            bone_index,
            transform,
        }
    }
}

/// Named clip. Keyframes keep their stored order, which need not be sorted by time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnimationClip {
    pub name: String,
    /// Seconds; expected to cover the last keyframe but not enforced
    pub duration: f32,
    pub keyframes: Vec<Keyframe>,
}

impl AnimationClip {
    pub fn new(name: impl Into<String>, duration: f32, keyframes: Vec<Keyframe>) -> Self {
        Self {
            name: name.into(),
            duration,
            keyframes,
        }
    }

    /// Keyframes targeting `bone_index`, sorted by time.
    ///
    /// An empty result means the bone holds its rest pose for this clip.
    pub fn track(&self, bone_index: u32) -> Vec<Keyframe> {
        let mut track: Vec<Keyframe> = self
            .keyframes
            .iter()
            .filter(|k| k.bone_index == bone_index)
            .copied()
            .collect();
        track.sort_by(|a, b| a.time.total_cmp(&b.time));
        track
    }

    /// Every keyframe must target a bone of the owning skeleton.
    pub fn validate(&self, bone_count: usize) -> Result<()> {
        super::check_count("clip name length", self.name.len())?;
        super::check_count("keyframe", self.keyframes.len())?;
        for (i, keyframe) in self.keyframes.iter().enumerate() {
            if keyframe.bone_index as usize >= bone_count {
                return Err(BplxError::invalid_input(format!(
                    "clip '{}' keyframe {} targets bone {} but skeleton has {} bones",
                    self.name, i, keyframe.bone_index, bone_count
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_sorts_by_time() {
        let clip = AnimationClip::new(
            "Wave",
            2.0,
            vec![
                Keyframe::new(2.0, 1, Transform::IDENTITY),
                Keyframe::new(0.0, 0, Transform::IDENTITY),
                Keyframe::new(0.5, 1, Transform::from_position([1.0, 0.0, 0.0])),
            ],
        );
        let track = clip.track(1);
        assert_eq!(track.len(), 2);
        assert_eq!(track[0].time, 0.5);
        assert_eq!(track[1].time, 2.0);
        assert!(clip.track(5).is_empty());
    }

    #[test]
    fn test_validate_bone_range() {
        let clip = AnimationClip::new("Idle", 1.0, vec![Keyframe::new(0.0, 1, Transform::IDENTITY)]);
        clip.validate(2).unwrap();
        assert!(matches!(clip.validate(1), Err(BplxError::InvalidInput { .. })));
    }
}
