//! gen-placeholders library
//!
//! Writes placeholder resources for the game client so its loaders find
//! well-formed files before real art and audio exist:
//! - Images (PNG with alpha, JPEG without) with a centered text label
//! - A minimal TrueType font with two empty glyphs
//! - Silent WAV clips and a single silent MP3 frame
//!
//! Every asset is described by an entry in the static tables in [`specs`];
//! [`generate::generate_all`] walks those tables in order.

pub mod audio;
pub mod color;
pub mod error;
pub mod font;
pub mod generate;
pub mod glyphs;
pub mod image_gen;
pub mod specs;

pub use error::GenError;
pub use generate::{clean_all, generate_all, planned_paths, resource_root, Summary};
pub use specs::{
    AudioSpec, CompressedAudioSpec, FontSpec, ImageFormat, ImageSpec, WaveAudioSpec, AUDIO_SPECS,
    FONT_SPECS, IMAGE_SPECS,
};

use std::fs;
use std::path::{Path, PathBuf};

/// Resolve `rel_path` under `root`, creating any missing parent directories.
pub(crate) fn prepare_output(root: &Path, rel_path: &str) -> Result<PathBuf, GenError> {
    let out = root.join(rel_path);
    if let Some(parent) = out.parent() {
        fs::create_dir_all(parent).map_err(|source| GenError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(out)
}

/// Write `bytes` to `path`, replacing whatever was there.
pub(crate) fn write_bytes(path: &Path, bytes: &[u8]) -> Result<(), GenError> {
    fs::write(path, bytes).map_err(|source| GenError::Io {
        path: path.to_path_buf(),
        source,
    })
}
