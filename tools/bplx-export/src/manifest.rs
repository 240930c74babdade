//! Manifest parsing and build orchestration
//!
//! Parses assets.toml and converts every listed mesh.

use anyhow::{Context, Result};
use bplx_common::BPLX_EXT;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::convert::{convert_obj, ConvertOptions, MaterialPreset, RigPreset};
use crate::obj::IndexBase;

/// Root manifest structure
#[derive(Debug, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub output: OutputConfig,
    /// Output name → source mesh; built in name order
    #[serde(default)]
    pub meshes: BTreeMap<String, MeshEntry>,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("assets/")
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum MeshEntry {
    Simple(PathBuf),
    Detailed {
        path: PathBuf,
        #[serde(default)]
        index_base: IndexBase,
        #[serde(default)]
        rig: RigPreset,
        #[serde(default)]
        material: MaterialPreset,
    },
}

impl MeshEntry {
    pub fn path(&self) -> &Path {
        match self {
            MeshEntry::Simple(p) => p,
            MeshEntry::Detailed { path, .. } => path,
        }
    }

    pub fn options(&self) -> ConvertOptions {
        match self {
            MeshEntry::Simple(_) => ConvertOptions::default(),
            MeshEntry::Detailed {
                index_base,
                rig,
                material,
                ..
            } => ConvertOptions {
                index_base: *index_base,
                rig: *rig,
                material: *material,
            },
        }
    }
}

impl Manifest {
    /// Parse manifest from string
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse assets.toml")
    }

    /// Resolve relative source paths against the manifest's directory
    fn rebase(&mut self, base: &Path) {
        for entry in self.meshes.values_mut() {
            let path = match entry {
                MeshEntry::Simple(p) => p,
                MeshEntry::Detailed { path, .. } => path,
            };
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
        if self.output.dir.is_relative() {
            self.output.dir = base.join(&self.output.dir);
        }
    }
}

/// Load and parse a manifest file
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest: {:?}", path))?;
    let mut manifest = Manifest::parse(&content)
        .with_context(|| format!("Failed to parse manifest: {:?}", path))?;
    if let Some(base) = path.parent() {
        manifest.rebase(base);
    }
    Ok(manifest)
}

/// Validate a manifest without building
pub fn validate(manifest: &Manifest) -> Result<()> {
    for (name, entry) in &manifest.meshes {
        if !entry.path().exists() {
            anyhow::bail!("Mesh '{}' source not found: {:?}", name, entry.path());
        }
        if !is_obj(entry.path()) {
            anyhow::bail!(
                "Unsupported mesh format for '{}': {:?} (use .obj)",
                name,
                entry.path()
            );
        }
    }
    Ok(())
}

/// Build all assets from a manifest, returning the written paths
pub fn build_all(manifest: &Manifest, output_override: Option<&Path>) -> Result<Vec<PathBuf>> {
    validate(manifest)?;

    let output_dir = output_override.unwrap_or(&manifest.output.dir);
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", output_dir))?;

    let mut written = Vec::with_capacity(manifest.meshes.len());
    for (name, entry) in &manifest.meshes {
        let output = output_dir.join(format!("{}.{}", name, BPLX_EXT));
        tracing::info!("Converting mesh: {} -> {:?}", name, output);
        convert_obj(entry.path(), &output, &entry.options())
            .with_context(|| format!("Failed to convert mesh '{}'", name))?;
        written.push(output);
    }

    Ok(written)
}

fn is_obj(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("obj"))
        .unwrap_or(false)
}
