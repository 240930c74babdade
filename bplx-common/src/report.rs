//! Structured summary of an asset, for callers that want to show what a
//! container holds without walking the model themselves.

use serde::Serialize;

use crate::formats::{BplxHeader, BPLX_VERSION};
use crate::model::Asset;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetSummary {
    pub version: u32,
    pub vertex_count: usize,
    pub face_count: usize,
    pub material_count: usize,
    pub bone_count: usize,
    pub clip_count: usize,
    /// Total across all clips
    pub keyframe_count: usize,
    pub first_vertex_position: Option<[f32; 3]>,
    pub first_face: Option<[u32; 3]>,
    pub bones: Vec<BoneSummary>,
    pub clips: Vec<ClipSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoneSummary {
    pub name: String,
    pub parent: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClipSummary {
    pub name: String,
    pub duration: f32,
    pub keyframe_count: usize,
}

impl AssetSummary {
    /// Summary of an in-memory asset
    pub fn of(asset: &Asset) -> Self {
        let bones = asset
            .skeleton
            .bones
            .iter()
            .map(|b| BoneSummary {
                name: b.name.clone(),
                parent: b.parent,
            })
            .collect();
        let clips: Vec<ClipSummary> = asset
            .clips
            .iter()
            .map(|c| ClipSummary {
                name: c.name.clone(),
                duration: c.duration,
                keyframe_count: c.keyframes.len(),
            })
            .collect();

        Self {
            version: BPLX_VERSION,
            vertex_count: asset.mesh.vertices.len(),
            face_count: asset.mesh.faces.len(),
            material_count: asset.materials.len(),
            bone_count: asset.skeleton.bones.len(),
            clip_count: clips.len(),
            keyframe_count: clips.iter().map(|c| c.keyframe_count).sum(),
            first_vertex_position: asset.mesh.vertices.first().map(|v| v.position),
            first_face: asset.mesh.faces.first().map(|f| f.indices),
            bones,
            clips,
        }
    }

    /// Summary of a decoded container; version and material count come
    /// from the header since the decoded asset carries no materials.
    pub fn from_decoded(header: &BplxHeader, asset: &Asset) -> Self {
        Self {
            version: header.version,
            material_count: header.material_count as usize,
            ..Self::of(asset)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::formats::{decode_with_header, encode};

    #[test]
    fn test_summary_of_animated_cube() {
        let summary = AssetSummary::of(&fixtures::animated_cube());
        assert_eq!(summary.vertex_count, 8);
        assert_eq!(summary.face_count, 12);
        assert_eq!(summary.material_count, 1);
        assert_eq!(summary.keyframe_count, 3);
        assert_eq!(summary.first_vertex_position, Some([-1.0, -1.0, 1.0]));
        assert_eq!(summary.first_face, Some([0, 2, 3]));
        assert_eq!(summary.bones[1].name, "ChildBone");
        assert_eq!(summary.bones[1].parent, 0);
        assert_eq!(summary.clips[0].name, "SimpleMovement");
    }

    #[test]
    fn test_summary_from_decoded_keeps_material_count() {
        let bytes = encode(&fixtures::animated_cube()).unwrap();
        let (header, asset) = decode_with_header(&bytes).unwrap();
        assert!(asset.materials.is_empty());

        let summary = AssetSummary::from_decoded(&header, &asset);
        assert_eq!(summary.material_count, 1);
        assert_eq!(summary.version, 1);
    }

    #[test]
    fn test_summary_serializes() {
        let summary = AssetSummary::of(&fixtures::animated_cube());
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["bone_count"], 2);
        assert_eq!(json["clips"][0]["keyframe_count"], 3);
    }

    #[test]
    fn test_summary_of_empty_asset() {
        let summary = AssetSummary::of(&Asset::default());
        assert_eq!(summary.first_vertex_position, None);
        assert_eq!(summary.first_face, None);
        assert_eq!(summary.keyframe_count, 0);
    }
}
