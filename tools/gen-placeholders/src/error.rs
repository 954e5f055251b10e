//! Error type shared by all generators

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GenError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write WAV {path}: {source}")]
    Wav {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },

    #[error("Failed to build font: {0}")]
    Font(String),

    #[error("Invalid color {0:?} (expected #RRGGBB)")]
    InvalidColor(String),

    #[error("Unsupported MPEG frame: {bitrate_kbps} kbps at {sample_rate} Hz")]
    InvalidFrame { bitrate_kbps: u32, sample_rate: u32 },
}
