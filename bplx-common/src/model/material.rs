//! Surface material. Held in memory only: version 1 containers store the
//! material count but no material records.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    pub diffuse_color: [f32; 3],
    pub specular_color: [f32; 3],
    pub emissive_color: [f32; 3],
    pub shininess: f32,
    /// 1.0 = opaque
    pub transparency: f32,
    pub is_textured: bool,
    pub texture_path: Option<String>,
}

impl Material {
    /// Untextured, opaque material with the given diffuse color
    pub fn solid(name: impl Into<String>, diffuse_color: [f32; 3], shininess: f32) -> Self {
        Self {
            name: name.into(),
            diffuse_color,
            specular_color: [1.0, 1.0, 1.0],
            emissive_color: [0.0, 0.0, 0.0],
            shininess,
            transparency: 1.0,
            is_textured: false,
            texture_path: None,
        }
    }

    pub fn with_texture(mut self, path: impl Into<String>) -> Self {
        self.is_textured = true;
        self.texture_path = Some(path.into());
        self
    }
}
