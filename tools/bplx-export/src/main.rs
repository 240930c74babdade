//! bplx-export - BPLX asset export tool
//!
//! Converts OBJ meshes to .bplx containers and inspects existing ones.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use bplx_export::{convert, manifest, ConvertOptions, IndexBase, RigPreset, BPLX_EXT};

#[derive(Parser)]
#[command(name = "bplx-export")]
#[command(about = "BPLX asset export tool")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build assets from a manifest file
    Build {
        /// Path to assets.toml manifest
        #[arg(default_value = "assets.toml")]
        manifest: PathBuf,

        /// Output directory (overrides manifest)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate manifest without building
    Check {
        /// Path to assets.toml manifest
        #[arg(default_value = "assets.toml")]
        manifest: PathBuf,
    },

    /// Convert a single OBJ file
    Convert {
        /// Input OBJ file
        input: PathBuf,

        /// Output .bplx file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Face indices are already zero-based
        #[arg(long)]
        zero_based: bool,

        /// Do not attach the demo skeleton and clip
        #[arg(long)]
        no_rig: bool,
    },

    /// Write the animated cube demo asset
    Demo {
        /// Output .bplx file
        #[arg(short, long, default_value = "animated_cube.bplx")]
        output: PathBuf,
    },

    /// Decode a .bplx file and report its contents
    Inspect {
        /// Input .bplx file
        input: PathBuf,

        /// Print the report as JSON on stdout
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build { manifest, output } => {
            tracing::info!("Building assets from {:?}", manifest);
            let config = manifest::load_manifest(&manifest)?;
            let written = manifest::build_all(&config, output.as_deref())?;
            tracing::info!("Build complete! {} assets written", written.len());
        }

        Commands::Check { manifest } => {
            tracing::info!("Checking manifest {:?}", manifest);
            let config = manifest::load_manifest(&manifest)?;
            manifest::validate(&config)?;
            tracing::info!("Manifest is valid!");
        }

        Commands::Convert {
            input,
            output,
            zero_based,
            no_rig,
        } => {
            let output = output.unwrap_or_else(|| input.with_extension(BPLX_EXT));
            tracing::info!("Converting {:?} -> {:?}", input, output);

            let options = ConvertOptions {
                index_base: if zero_based {
                    IndexBase::Zero
                } else {
                    IndexBase::One
                },
                rig: if no_rig { RigPreset::None } else { RigPreset::Demo },
                ..Default::default()
            };
            convert::convert_obj(&input, &output, &options)?;
            tracing::info!("Done!");
        }

        Commands::Demo { output } => {
            let summary = convert::write_demo(&output)?;
            tracing::info!(
                "Wrote {:?} with {} bones and {} clips",
                output,
                summary.bone_count,
                summary.clip_count
            );
        }

        Commands::Inspect { input, json } => {
            let summary = convert::inspect(&input)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                convert::log_summary(&input, &summary);
            }
        }
    }

    Ok(())
}
