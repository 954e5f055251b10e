//! Silent audio placeholders
//!
//! - `wav`: mono 16-bit PCM, all samples zero
//! - `mp3`: one silent MPEG-1 Layer III frame

pub mod mp3;
pub mod wav;

pub use mp3::{generate_mp3, FrameHeader};
pub use wav::{frame_count, generate_wav};

use std::path::{Path, PathBuf};

use crate::specs::AudioSpec;
use crate::GenError;

/// Dispatch one audio table entry to its generator
pub fn generate_audio(root: &Path, spec: &AudioSpec) -> Result<PathBuf, GenError> {
    match spec {
        AudioSpec::Wave(wave) => generate_wav(root, wave),
        AudioSpec::Compressed(compressed) => generate_mp3(root, compressed),
    }
}
