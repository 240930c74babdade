//! Mesh geometry: vertices and triangular faces

use serde::{Deserialize, Serialize};

use crate::error::{BplxError, Result};

/// Single vertex. On disk the three attributes live in separate flat blocks.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vertex {
    pub position: [f32; 3],
    /// Expected unit length, not validated
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Triangle referencing three vertices by zero-based index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Face {
    pub indices: [u32; 3],
}

impl Face {
    pub fn new(a: u32, b: u32, c: u32) -> Self {
        Self { indices: [a, b, c] }
    }

    /// Fan-triangulate a convex polygon.
    ///
    /// Polygons with fewer than 3 corners produce no faces.
    pub fn triangulate_fan(polygon: &[u32]) -> Vec<Face> {
        if polygon.len() < 3 {
            return Vec::new();
        }
        (1..polygon.len() - 1)
            .map(|i| Face::new(polygon[0], polygon[i], polygon[i + 1]))
            .collect()
    }
}

/// The single mesh of an asset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Mesh {
    pub name: String,
    /// Index into [`crate::Asset::materials`]
    pub material_index: u32,
    pub vertices: Vec<Vertex>,
    pub faces: Vec<Face>,
}

impl Mesh {
    pub fn new(name: impl Into<String>, material_index: u32) -> Self {
        Self {
            name: name.into(),
            material_index,
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Build a mesh from parallel attribute arrays.
    ///
    /// `normals` and `uvs` must be empty or exactly `positions.len()` long.
    /// Empty arrays are padded with zeros.
    pub fn from_attributes(
        name: impl Into<String>,
        material_index: u32,
        positions: &[[f32; 3]],
        normals: &[[f32; 3]],
        uvs: &[[f32; 2]],
        faces: Vec<Face>,
    ) -> Result<Self> {
        let name = name.into();
        let vertex_count = positions.len();

        if !normals.is_empty() && normals.len() != vertex_count {
            return Err(BplxError::invalid_input(format!(
                "mesh '{}' has {} normals for {} vertices",
                name,
                normals.len(),
                vertex_count
            )));
        }
        if !uvs.is_empty() && uvs.len() != vertex_count {
            return Err(BplxError::invalid_input(format!(
                "mesh '{}' has {} uvs for {} vertices",
                name,
                uvs.len(),
                vertex_count
            )));
        }

        let vertices = positions
            .iter()
            .enumerate()
            .map(|(i, &position)| Vertex {
                position,
                normal: normals.get(i).copied().unwrap_or_default(),
                uv: uvs.get(i).copied().unwrap_or_default(),
            })
            .collect();

        Ok(Self {
            name,
            material_index,
            vertices,
            faces,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Every face corner must reference an existing vertex.
    pub fn validate(&self) -> Result<()> {
        let vertex_count = self.vertices.len();
        for (face_index, face) in self.faces.iter().enumerate() {
            if let Some(&bad) = face.indices.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(BplxError::invalid_input(format!(
                    "face {} references vertex {} but mesh '{}' has {} vertices",
                    face_index, bad, self.name, vertex_count
                )));
            }
        }
        Ok(())
    }
}
