//! Wavefront OBJ parsing
//!
//! Reads `v`, `vt`, `vn`, `f` and `o`/`g` statements. Everything else is
//! ignored. Polygons are fan-triangulated. Positions stay shared: each face
//! corner refers back to its `v` entry, and per-vertex UVs and normals are
//! taken from the first corner that references them.

use anyhow::{bail, Context, Result};
use bplx_common::{Face, Mesh};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// How face indices in the source are numbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexBase {
    /// Raw OBJ convention: first vertex is 1
    #[default]
    One,
    /// Already normalized: first vertex is 0
    Zero,
}

/// One face corner, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Corner {
    pub vertex: u32,
    pub uv: Option<u32>,
    pub normal: Option<u32>,
}

/// Parsed OBJ statements, indices already zero-based.
#[derive(Debug, Clone, Default)]
pub struct ObjData {
    /// First `o` or `g` name, if any
    pub name: Option<String>,
    pub positions: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub normals: Vec<[f32; 3]>,
    /// Triangulated faces
    pub triangles: Vec<[Corner; 3]>,
}

impl ObjData {
    /// Build a mesh with one vertex per `v` statement.
    pub fn to_mesh(&self, name: &str, material_index: u32) -> Result<Mesh> {
        let vertex_count = self.positions.len();
        let mut corner_uvs: Vec<Option<[f32; 2]>> = vec![None; vertex_count];
        let mut corner_normals: Vec<Option<[f32; 3]>> = vec![None; vertex_count];
        let mut faces = Vec::with_capacity(self.triangles.len());

        for (face_index, triangle) in self.triangles.iter().enumerate() {
            for corner in triangle {
                let v = corner.vertex as usize;
                if v >= vertex_count {
                    bail!(
                        "Face {} references vertex {} but only {} vertices exist",
                        face_index,
                        corner.vertex,
                        vertex_count
                    );
                }
                if let Some(uv) = corner.uv {
                    let value = lookup(&self.uvs, uv, "texture coordinate")?;
                    corner_uvs[v].get_or_insert(value);
                }
                if let Some(n) = corner.normal {
                    let value = lookup(&self.normals, n, "normal")?;
                    corner_normals[v].get_or_insert(value);
                }
            }
            faces.push(Face {
                indices: triangle.map(|c| c.vertex),
            });
        }

        let uvs = per_vertex(corner_uvs, &self.uvs, vertex_count);
        let normals = per_vertex(corner_normals, &self.normals, vertex_count);

        Ok(Mesh::from_attributes(
            name,
            material_index,
            &self.positions,
            &normals,
            &uvs,
            faces,
        )?)
    }
}

/// Attributes resolved through face corners win. Without any corner
/// references, a raw list that lines up with the positions is used as-is.
fn per_vertex<T: Copy + Default>(resolved: Vec<Option<T>>, raw: &[T], vertex_count: usize) -> Vec<T> {
    if resolved.iter().any(Option::is_some) {
        resolved.into_iter().map(Option::unwrap_or_default).collect()
    } else if raw.len() == vertex_count {
        raw.to_vec()
    } else {
        Vec::new()
    }
}

fn lookup<T: Copy>(values: &[T], index: u32, what: &str) -> Result<T> {
    values
        .get(index as usize)
        .copied()
        .with_context(|| format!("Face references missing {} {}", what, index))
}

/// Parse an OBJ file from disk
pub fn parse_obj_file(path: &Path, base: IndexBase) -> Result<ObjData> {
    let file = File::open(path).with_context(|| format!("Failed to open OBJ: {:?}", path))?;
    parse_obj(BufReader::new(file), base).with_context(|| format!("Failed to parse OBJ: {:?}", path))
}

/// Parse OBJ text
pub fn parse_obj<R: BufRead>(reader: R, base: IndexBase) -> Result<ObjData> {
    let mut data = ObjData::default();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let at = || format!("line {}", line_no + 1);

        match parts[0] {
            "v" => data.positions.push(floats(&parts[1..], 3).with_context(at)?),
            // `vt u [v [w]]`: missing components default to 0
            "vt" => data.uvs.push(floats(&parts[1..], 1).with_context(at)?),
            "vn" => data.normals.push(floats(&parts[1..], 3).with_context(at)?),
            "f" => {
                let polygon = parts[1..]
                    .iter()
                    .map(|s| parse_corner(s, base, &data))
                    .collect::<Result<Vec<_>>>()
                    .with_context(at)?;
                if polygon.len() < 3 {
                    bail!("{}: face has {} vertices, need at least 3", at(), polygon.len());
                }
                for i in 1..polygon.len() - 1 {
                    data.triangles.push([polygon[0], polygon[i], polygon[i + 1]]);
                }
            }
            "o" | "g" if data.name.is_none() && parts.len() > 1 => {
                data.name = Some(parts[1..].join(" "));
            }
            _ => {}
        }
    }

    if data.positions.is_empty() {
        bail!("No vertices found in OBJ file");
    }

    Ok(data)
}

/// First `N` floats of a statement; extra components (e.g. `w`) are ignored.
/// At least `required` must be present and the rest are zero-filled.
fn floats<const N: usize>(parts: &[&str], required: usize) -> Result<[f32; N]> {
    if parts.len() < required {
        bail!("expected at least {} components, found {}", required, parts.len());
    }
    let mut out = [0.0f32; N];
    for (slot, s) in out.iter_mut().zip(parts) {
        *slot = s.parse().with_context(|| format!("invalid number '{}'", s))?;
    }
    Ok(out)
}

/// Parse a corner reference: "v", "v/vt", "v/vt/vn", or "v//vn"
fn parse_corner(s: &str, base: IndexBase, data: &ObjData) -> Result<Corner> {
    let mut fields = s.split('/');
    let vertex = fields
        .next()
        .filter(|f| !f.is_empty())
        .with_context(|| format!("missing vertex index in '{}'", s))?;
    let vertex = resolve_index(vertex, base, data.positions.len())?;

    let optional = |field: Option<&str>, len: usize| -> Result<Option<u32>> {
        match field.filter(|f| !f.is_empty()) {
            Some(f) => resolve_index(f, base, len).map(Some),
            None => Ok(None),
        }
    };
    let uv = optional(fields.next(), data.uvs.len())?;
    let normal = optional(fields.next(), data.normals.len())?;

    Ok(Corner { vertex, uv, normal })
}

/// Convert a source index to zero-based. Negative indices count back from
/// the most recent element, as in the OBJ convention.
fn resolve_index(s: &str, base: IndexBase, len: usize) -> Result<u32> {
    let raw: i64 = s.parse().with_context(|| format!("invalid index '{}'", s))?;
    let resolved = if raw < 0 {
        len as i64 + raw
    } else {
        match base {
            IndexBase::One => raw - 1,
            IndexBase::Zero => raw,
        }
    };
    u32::try_from(resolved).with_context(|| format!("index {} is out of range", raw))
}
