use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use glimmer_core::{
    io::{Format, LegacyRevision},
    Art, ArtKind,
};

/// Inspect and convert Fourier Graphics art.
///
/// Examples:
///   glimmer info walk.fan                          # Summarize a file
///   glimmer info old.fsh --legacy rgb              # Read a headerless file from the first editor
///   glimmer convert dot.fgl dot.fan                # Promote a glyph to an animation
///   glimmer convert old.fan new.fan --legacy bezier
#[derive(Parser, Debug)]
#[clap(name = "glimmer", version)]
pub struct Args {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the kind and structure of a file.
    Info {
        path: PathBuf,
        /// Read a headerless file in this revision (rgb, rgba or bezier).
        #[clap(long, value_name = "REV")]
        legacy: Option<LegacyRevision>,
    },
    /// Re-express a file as another kind and write it out.
    Convert {
        input: PathBuf,
        output: PathBuf,
        /// Read a headerless input in this revision (rgb, rgba or bezier).
        #[clap(long, value_name = "REV")]
        legacy: Option<LegacyRevision>,
        /// Write a headerless output in this revision instead of the current one.
        #[clap(long, value_name = "REV")]
        to_legacy: Option<LegacyRevision>,
        /// Kind to convert to. Defaults to the one the output's extension names.
        #[clap(long)]
        kind: Option<ArtKind>,
    },
}

pub fn format(legacy: Option<LegacyRevision>) -> Format {
    legacy.map_or(Format::Current, Format::Legacy)
}

/// An explicit kind wins, then the output's extension, then the art stays as it is.
pub fn target_kind(kind: Option<ArtKind>, output: &Path, art: &Art) -> ArtKind {
    kind.or_else(|| ArtKind::from_path(output))
        .unwrap_or_else(|| art.kind())
}
