//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Lodestar command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "lodestar", about = "Distance-based LOD selection demo")]
pub struct CliArgs {
    /// Number of LOD levels to register.
    #[arg(long)]
    pub levels: Option<u32>,

    /// Perspective camera zoom factor.
    #[arg(long)]
    pub zoom: Option<f32>,

    /// Growth factor between consecutive activation distances.
    #[arg(long)]
    pub scale_factor: Option<f32>,

    /// Camera sweep starting distance.
    #[arg(long)]
    pub start_distance: Option<f32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(levels) = args.levels {
            self.lod.levels = levels;
        }
        if let Some(zoom) = args.zoom {
            self.lod.zoom = zoom;
        }
        if let Some(scale) = args.scale_factor {
            self.lod.scale_factor = scale;
        }
        if let Some(start) = args.start_distance {
            self.sweep.start_distance = start;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
