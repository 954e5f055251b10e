//! Driver: walks the asset tables in order and reports progress
//!
//! Each entry is generated independently and overwrites any existing file.
//! The first error aborts the run; files written before it stay in place.

use std::fs;
use std::path::{Path, PathBuf};

use crate::audio::generate_audio;
use crate::font::generate_font;
use crate::image_gen::generate_image;
use crate::specs::{AUDIO_SPECS, FONT_SPECS, IMAGE_SPECS};
use crate::GenError;

/// Resource directory relative to the project root
pub const RESOURCES_SUBDIR: &str = "application/resources";

/// Default resource root: two levels up from this crate (`tools/<crate>`)
/// to the project root, then into [`RESOURCES_SUBDIR`].
pub fn resource_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let project_root = manifest_dir
        .parent()
        .and_then(Path::parent)
        .unwrap_or(manifest_dir);
    project_root.join(RESOURCES_SUBDIR)
}

/// Counts of files written by [`generate_all`]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub images: usize,
    pub fonts: usize,
    pub audio: usize,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.images + self.fonts + self.audio
    }
}

/// Every relative path the tables produce, in generation order
pub fn planned_paths() -> impl Iterator<Item = &'static str> {
    IMAGE_SPECS
        .iter()
        .map(|s| s.path)
        .chain(FONT_SPECS.iter().map(|s| s.path))
        .chain(AUDIO_SPECS.iter().map(|s| s.path()))
}

/// Generate every image, font and audio entry under `root`
pub fn generate_all(root: &Path) -> Result<Summary, GenError> {
    println!("Resource directory: {}\n", root.display());
    let mut summary = Summary::default();

    println!("Generating images...");
    for spec in IMAGE_SPECS {
        generate_image(root, spec)?;
        summary.images += 1;
    }

    println!("\nGenerating fonts...");
    for spec in FONT_SPECS {
        generate_font(root, spec)?;
        summary.fonts += 1;
    }

    println!("\nGenerating audio...");
    for spec in AUDIO_SPECS {
        generate_audio(root, spec)?;
        summary.audio += 1;
    }

    tracing::info!(
        "Generated {} files ({} images, {} fonts, {} audio)",
        summary.total(),
        summary.images,
        summary.fonts,
        summary.audio
    );
    println!("\nDone. All placeholder resources generated.");
    Ok(summary)
}

/// Remove every generated file under `root`, returning how many were removed.
///
/// Missing files are skipped; directories are left in place.
pub fn clean_all(root: &Path) -> Result<usize, GenError> {
    let mut removed = 0;
    for rel_path in planned_paths() {
        let path = root.join(rel_path);
        if path.exists() {
            fs::remove_file(&path).map_err(|source| GenError::Io {
                path: path.clone(),
                source,
            })?;
            println!("  Removed {}", rel_path);
            removed += 1;
        }
    }
    Ok(removed)
}
