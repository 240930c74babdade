//! Demo asset builders.
//!
//! Each call returns a fresh value; nothing here is shared state.

use crate::model::{
    AnimationClip, Asset, Bone, Face, Keyframe, Material, Mesh, Skeleton, Transform, Vertex,
};

/// Grey material used by converted meshes
pub fn default_material() -> Material {
    Material::solid("DefaultMaterial", [0.8, 0.8, 0.8], 100.0)
}

pub fn shiny_red_material() -> Material {
    Material::solid("ShinyRed", [1.0, 0.0, 0.0], 200.0)
}

/// RootBone at the origin with ChildBone two units above it
pub fn demo_skeleton() -> Skeleton {
    Skeleton::new(vec![
        Bone::root("RootBone", Transform::IDENTITY),
        Bone::new("ChildBone", 0, Transform::from_position([0.0, 2.0, 0.0])),
    ])
}

/// Moves ChildBone out along +X and back over two seconds
pub fn simple_movement_clip() -> AnimationClip {
    AnimationClip::new(
        "SimpleMovement",
        2.0,
        vec![
            Keyframe::new(0.0, 1, Transform::from_position([0.0, 2.0, 0.0])),
            Keyframe::new(1.0, 1, Transform::from_position([2.0, 2.0, 0.0])),
            Keyframe::new(2.0, 1, Transform::from_position([0.0, 2.0, 0.0])),
        ],
    )
}

/// Cube spanning [-1, 1] with one vertex per corner and 12 triangles
pub fn unit_cube_mesh() -> Mesh {
    const N: f32 = 0.57735;
    let corners: [([f32; 3], [f32; 2]); 8] = [
        ([-1.0, -1.0, 1.0], [0.0, 0.0]),
        ([1.0, -1.0, 1.0], [1.0, 0.0]),
        ([-1.0, 1.0, 1.0], [0.0, 1.0]),
        ([1.0, 1.0, 1.0], [1.0, 1.0]),
        ([-1.0, -1.0, -1.0], [1.0, 0.0]),
        ([1.0, -1.0, -1.0], [0.0, 0.0]),
        ([-1.0, 1.0, -1.0], [1.0, 1.0]),
        ([1.0, 1.0, -1.0], [0.0, 1.0]),
    ];
    let vertices = corners
        .iter()
        .map(|&(position, uv)| Vertex {
            position,
            normal: position.map(|c| c * N),
            uv,
        })
        .collect();

    let faces = [
        [0, 2, 3],
        [0, 3, 1],
        [4, 5, 7],
        [4, 7, 6],
        [4, 6, 2],
        [4, 2, 0],
        [1, 3, 7],
        [1, 7, 5],
        [2, 6, 7],
        [2, 7, 3],
        [4, 0, 1],
        [4, 1, 5],
    ]
    .into_iter()
    .map(|indices| Face { indices })
    .collect();

    Mesh {
        name: "Cube_Mesh".to_string(),
        material_index: 0,
        vertices,
        faces,
    }
}

/// Cube mesh with the demo rig and clip attached
pub fn animated_cube() -> Asset {
    Asset::new(
        unit_cube_mesh(),
        vec![shiny_red_material()],
        demo_skeleton(),
        vec![simple_movement_clip()],
    )
}
