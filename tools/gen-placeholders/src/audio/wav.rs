//! Silent WAV generation

use std::path::{Path, PathBuf};

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::specs::WaveAudioSpec;
use crate::{prepare_output, GenError};

/// Number of sample frames for a clip (truncated, never rounded up)
pub fn frame_count(duration_secs: f64, sample_rate: u32) -> u64 {
    (duration_secs * f64::from(sample_rate)) as u64
}

/// Write a silent mono 16-bit clip for one table entry
pub fn generate_wav(root: &Path, spec: &WaveAudioSpec) -> Result<PathBuf, GenError> {
    let out = prepare_output(root, spec.path)?;
    let wav_err = |source| GenError::Wav {
        path: out.clone(),
        source,
    };

    let wav_spec = WavSpec {
        channels: 1,
        sample_rate: spec.sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(&out, wav_spec).map_err(wav_err)?;

    let frames = frame_count(spec.duration_secs, spec.sample_rate);
    for _ in 0..frames {
        writer.write_sample(0i16).map_err(wav_err)?;
    }
    writer.finalize().map_err(wav_err)?;

    tracing::debug!("{}: {} frames", spec.path, frames);
    println!("  [WAV] {}  ({}s silence)", spec.path, spec.duration_secs);
    Ok(out)
}
