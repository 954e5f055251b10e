//! Minimal MP3: a single silent MPEG-1 Layer III frame
//!
//! Header bit layout (32 bits, big-endian):
//!
//! ```text
//! AAAAAAAA AAABBCCD EEEEFFGH IIJJKLMM
//! A sync (all ones)      E bitrate index     I channel mode
//! B version (11 = MPEG1) F sample rate index J mode extension
//! C layer (01 = III)     G padding           K copyright
//! D 1 = no CRC           H private           L original, M emphasis
//! ```
//!
//! Side info and main data are left zeroed, which decodes to silence.

use std::path::{Path, PathBuf};

use crate::specs::CompressedAudioSpec;
use crate::{prepare_output, write_bytes, GenError};

/// MPEG-1 Layer III bitrates (kbps) by index; index 0 is "free", 15 is invalid
const BITRATES_KBPS: [u32; 15] = [0, 32, 40, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320];

/// MPEG-1 sample rates (Hz) by index
const SAMPLE_RATES: [u32; 3] = [44100, 48000, 32000];

/// Layer III samples per frame / 8 bits
const SLOT_FACTOR: u32 = 144;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelMode {
    Stereo = 0,
    JointStereo = 1,
    DualChannel = 2,
    Mono = 3,
}

/// MPEG-1 Layer III frame header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub bitrate_kbps: u32,
    pub sample_rate: u32,
    pub padding: bool,
    pub channel_mode: ChannelMode,
}

impl FrameHeader {
    pub const SIZE: usize = 4;

    /// Lowest bitrate at 44.1 kHz, stereo, no CRC
    pub const SILENT: Self = Self {
        bitrate_kbps: 32,
        sample_rate: 44100,
        padding: false,
        channel_mode: ChannelMode::Stereo,
    };

    fn invalid(&self) -> GenError {
        GenError::InvalidFrame {
            bitrate_kbps: self.bitrate_kbps,
            sample_rate: self.sample_rate,
        }
    }

    /// Encode to the 4 header bytes
    pub fn to_bytes(&self) -> Result<[u8; Self::SIZE], GenError> {
        let bitrate_index = BITRATES_KBPS
            .iter()
            .skip(1)
            .position(|&b| b == self.bitrate_kbps)
            .map(|i| i as u8 + 1)
            .ok_or_else(|| self.invalid())?;
        let rate_index = SAMPLE_RATES
            .iter()
            .position(|&r| r == self.sample_rate)
            .ok_or_else(|| self.invalid())? as u8;

        let version = 0b11; // MPEG-1
        let layer = 0b01; // Layer III
        let no_crc = 1;

        Ok([
            0xFF,
            0xE0 | (version << 3) | (layer << 1) | no_crc,
            (bitrate_index << 4) | (rate_index << 2) | (u8::from(self.padding) << 1),
            (self.channel_mode as u8) << 6,
        ])
    }

    /// Decode the 4 header bytes; `None` for anything other than MPEG-1 Layer III
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE || bytes[0] != 0xFF || bytes[1] & 0xFE != 0xFA {
            return None;
        }
        let bitrate_kbps = *BITRATES_KBPS.get(usize::from(bytes[2] >> 4))?;
        let sample_rate = *SAMPLE_RATES.get(usize::from((bytes[2] >> 2) & 0b11))?;
        let channel_mode = match bytes[3] >> 6 {
            0 => ChannelMode::Stereo,
            1 => ChannelMode::JointStereo,
            2 => ChannelMode::DualChannel,
            _ => ChannelMode::Mono,
        };
        Some(Self {
            bitrate_kbps,
            sample_rate,
            padding: bytes[2] & 0b10 != 0,
            channel_mode,
        })
    }

    /// Total frame length in bytes, header included
    pub fn frame_len(&self) -> usize {
        (SLOT_FACTOR * self.bitrate_kbps * 1000 / self.sample_rate) as usize
            + usize::from(self.padding)
    }

    /// Header followed by zeroed side info and main data
    pub fn silent_frame(&self) -> Result<Vec<u8>, GenError> {
        let mut frame = self.to_bytes()?.to_vec();
        frame.resize(self.frame_len(), 0);
        Ok(frame)
    }
}

/// Write a single silent frame for one table entry
pub fn generate_mp3(root: &Path, spec: &CompressedAudioSpec) -> Result<PathBuf, GenError> {
    let out = prepare_output(root, spec.path)?;
    let frame = FrameHeader::SILENT.silent_frame()?;
    write_bytes(&out, &frame)?;

    tracing::debug!("{}: {} bytes", spec.path, frame.len());
    println!("  [MP3] {}  (minimal silent frame)", spec.path);
    Ok(out)
}
