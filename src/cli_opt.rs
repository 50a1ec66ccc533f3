//! CLI options.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::sink::FileFormat;

/// CLI options.
#[derive(Debug, Parser)]
pub struct CliOpt {
    /// Output file
    pub out_path: PathBuf,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::FbxBinary)]
    pub format: OutputFormat,
    /// Uniform scale applied during coordinate conversion
    #[arg(long, default_value_t = 1.0)]
    pub scale_factor: f32,
    /// Do not record local transforms
    #[arg(long)]
    pub no_transform: bool,
    /// Do not mirror the handedness axis
    #[arg(long)]
    pub no_flip_handedness: bool,
    /// Do not reverse polygon winding
    #[arg(long)]
    pub no_flip_faces: bool,
}

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// FBX binary.
    FbxBinary,
    /// FBX ascii.
    FbxAscii,
    /// FBX encrypted binary.
    FbxEncrypted,
    /// Wavefront OBJ text.
    Obj,
}

impl From<OutputFormat> for FileFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::FbxBinary => FileFormat::FbxBinary,
            OutputFormat::FbxAscii => FileFormat::FbxAscii,
            OutputFormat::FbxEncrypted => FileFormat::FbxEncrypted,
            OutputFormat::Obj => FileFormat::Obj,
        }
    }
}
