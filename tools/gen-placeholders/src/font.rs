//! Placeholder TrueType font
//!
//! The font exists so font loaders accept the file, not to render text:
//! two glyphs (`.notdef`, `space`), neither with any contours, and U+0020
//! mapped to `space`. Timestamps stay at the 1904 epoch, so every build is
//! byte-identical.

use std::path::{Path, PathBuf};

use write_fonts::tables::cmap::Cmap;
use write_fonts::tables::glyf::{GlyfLocaBuilder, Glyph};
use write_fonts::tables::head::{Flags, Head};
use write_fonts::tables::hhea::Hhea;
use write_fonts::tables::hmtx::{Hmtx, LongMetric};
use write_fonts::tables::maxp::Maxp;
use write_fonts::tables::name::{Name, NameRecord};
use write_fonts::tables::os2::{Os2, SelectionFlags};
use write_fonts::tables::post::Post;
use write_fonts::types::{FWord, Fixed, GlyphId, NameId, Tag, UfWord};
use write_fonts::FontBuilder;

use crate::specs::FontSpec;
use crate::{prepare_output, write_bytes, GenError};

pub const FAMILY_NAME: &str = "GamePlaceholder";
pub const STYLE_NAME: &str = "Regular";
pub const UNITS_PER_EM: u16 = 1000;
pub const ASCENDER: i16 = 800;
pub const DESCENDER: i16 = -200;

/// Glyph order with advance widths
const GLYPHS: &[(&str, u16)] = &[(".notdef", 500), ("space", 250)];

/// Code point -> glyph id
const CHAR_MAP: &[(char, u32)] = &[(' ', 1)];

const PLATFORM_WINDOWS: u16 = 3;
const ENCODING_UNICODE_BMP: u16 = 1;
const LANGUAGE_EN_US: u16 = 0x0409;

fn font_error(err: impl std::fmt::Display) -> GenError {
    GenError::Font(err.to_string())
}

/// Average advance of the glyphs that have a non-zero width
fn avg_char_width() -> i16 {
    let inked: Vec<u32> = GLYPHS
        .iter()
        .map(|&(_, adv)| u32::from(adv))
        .filter(|&adv| adv > 0)
        .collect();
    if inked.is_empty() {
        return 0;
    }
    (inked.iter().sum::<u32>() / inked.len() as u32) as i16
}

/// Name records for family, style, unique id, full name and PostScript
/// name, all Windows Unicode BMP / en-US. Sorted by name id.
fn name_table() -> Name {
    let unique_id = format!("{FAMILY_NAME}-{STYLE_NAME}");
    let names = [
        (NameId::FAMILY_NAME, FAMILY_NAME.to_string()),
        (NameId::SUBFAMILY_NAME, STYLE_NAME.to_string()),
        (NameId::UNIQUE_ID, unique_id.clone()),
        (NameId::FULL_NAME, format!("{FAMILY_NAME} {STYLE_NAME}")),
        (NameId::POSTSCRIPT_NAME, unique_id),
    ];
    Name::new(
        names
            .into_iter()
            .map(|(id, text)| {
                NameRecord::new(
                    PLATFORM_WINDOWS,
                    ENCODING_UNICODE_BMP,
                    LANGUAGE_EN_US,
                    id,
                    text.into(),
                )
            })
            .collect(),
    )
}

/// Assemble the complete placeholder font file
pub fn build_placeholder_font() -> Result<Vec<u8>, GenError> {
    let num_glyphs = GLYPHS.len() as u16;
    let advance_max = GLYPHS.iter().map(|&(_, adv)| adv).max().unwrap_or(0);

    let mut glyf_loca = GlyfLocaBuilder::new();
    for _ in GLYPHS {
        glyf_loca.add_glyph(&Glyph::Empty).map_err(font_error)?;
    }
    // Every glyph is empty, so only loca carries information
    let (_, loca, loca_format) = glyf_loca.build();

    let head = Head {
        font_revision: Fixed::ONE,
        flags: Flags::BASELINE_AT_Y_0 | Flags::LSB_AT_X_0,
        units_per_em: UNITS_PER_EM,
        lowest_rec_ppem: 3,
        index_to_loc_format: loca_format as i16,
        ..Default::default()
    };
    let hhea = Hhea {
        ascender: FWord::new(ASCENDER),
        descender: FWord::new(DESCENDER),
        advance_width_max: UfWord::new(advance_max),
        caret_slope_rise: 1,
        number_of_h_metrics: num_glyphs,
        ..Default::default()
    };
    // Version 1.0: no outlines, hints or twilight zone
    let maxp = Maxp {
        max_points: Some(0),
        max_contours: Some(0),
        max_composite_points: Some(0),
        max_composite_contours: Some(0),
        max_zones: Some(2),
        max_twilight_points: Some(0),
        max_storage: Some(0),
        max_function_defs: Some(0),
        max_instruction_defs: Some(0),
        max_stack_elements: Some(0),
        max_size_of_instructions: Some(0),
        max_component_elements: Some(0),
        max_component_depth: Some(0),
        ..Maxp::new(num_glyphs)
    };
    let first_char = CHAR_MAP.first().map_or(0, |&(c, _)| c as u16);
    let last_char = CHAR_MAP.last().map_or(0, |&(c, _)| c as u16);
    let os2 = Os2 {
        x_avg_char_width: avg_char_width(),
        ul_unicode_range_1: 1, // Basic Latin
        ach_vend_id: Tag::new(b"NONE"),
        fs_selection: SelectionFlags::REGULAR,
        us_first_char_index: first_char,
        us_last_char_index: last_char,
        s_typo_ascender: ASCENDER,
        s_typo_descender: DESCENDER,
        us_win_ascent: ASCENDER.unsigned_abs(),
        us_win_descent: DESCENDER.unsigned_abs(),
        ul_code_page_range_1: Some(1), // Latin 1
        ul_code_page_range_2: Some(0),
        sx_height: Some(0),
        s_cap_height: Some(0),
        us_default_char: Some(0),
        us_break_char: Some(0x20),
        us_max_context: Some(0),
        ..Default::default()
    };
    let hmtx = Hmtx::new(
        GLYPHS
            .iter()
            .map(|&(_, adv)| LongMetric::new(adv, 0))
            .collect(),
        Vec::new(),
    );
    let cmap = Cmap::from_mappings(CHAR_MAP.iter().map(|&(c, gid)| (c, GlyphId::new(gid))))
        .map_err(font_error)?;
    let mut post = Post::new_v2(GLYPHS.iter().map(|&(name, _)| name));
    post.underline_position = FWord::new(-100);
    post.underline_thickness = FWord::new(50);

    let mut builder = FontBuilder::new();
    builder
        .add_table(&head)
        .and_then(|b| b.add_table(&hhea))
        .and_then(|b| b.add_table(&maxp))
        .and_then(|b| b.add_table(&os2))
        .and_then(|b| b.add_table(&hmtx))
        .and_then(|b| b.add_table(&cmap))
        .and_then(|b| b.add_table(&name_table()))
        .and_then(|b| b.add_table(&post))
        .and_then(|b| b.add_table(&loca))
        .map_err(font_error)?;
    // A single pad byte; some loaders reject a zero-length glyf
    builder.add_raw(Tag::new(b"glyf"), vec![0]);
    Ok(builder.build())
}

/// Write the placeholder font for one table entry
pub fn generate_font(root: &Path, spec: &FontSpec) -> Result<PathBuf, GenError> {
    let out = prepare_output(root, spec.path)?;
    let bytes = build_placeholder_font()?;
    write_bytes(&out, &bytes)?;

    tracing::debug!("{}: {} bytes", spec.path, bytes.len());
    println!("  [TTF] {}", spec.path);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn be16(data: &[u8], at: usize) -> u16 {
        u16::from_be_bytes([data[at], data[at + 1]])
    }

    fn be32(data: &[u8], at: usize) -> u32 {
        u32::from_be_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
    }

    /// Table directory entries as (tag, offset)
    fn directory(font: &[u8]) -> Vec<([u8; 4], usize)> {
        (0..be16(font, 4) as usize)
            .map(|i| {
                let record = 12 + i * 16;
                let mut tag = [0; 4];
                tag.copy_from_slice(&font[record..record + 4]);
                (tag, be32(font, record + 8) as usize)
            })
            .collect()
    }

    #[test]
    fn test_font_is_deterministic() {
        assert_eq!(
            build_placeholder_font().unwrap(),
            build_placeholder_font().unwrap()
        );
    }

    #[test]
    fn test_whole_file_checksum() {
        // checkSumAdjustment makes the whole-file sum equal the magic
        let font = build_placeholder_font().unwrap();
        assert_eq!(font.len() % 4, 0);
        let sum = (0..font.len())
            .step_by(4)
            .fold(0u32, |sum, at| sum.wrapping_add(be32(&font, at)));
        assert_eq!(sum, 0xB1B0_AFBA);
    }

    #[test]
    fn test_table_directory() {
        let font = build_placeholder_font().unwrap();
        assert_eq!(be32(&font, 0), 0x0001_0000);

        let tags: Vec<[u8; 4]> = directory(&font).into_iter().map(|(tag, _)| tag).collect();
        assert_eq!(tags.len(), 10);
        let mut sorted = tags.clone();
        sorted.sort();
        assert_eq!(tags, sorted);
        for required in [b"cmap", b"glyf", b"head", b"loca", b"name", b"post"] {
            assert!(tags.contains(required));
        }
    }

    #[test]
    fn test_os2_metrics() {
        let font = build_placeholder_font().unwrap();
        let (_, os2) = directory(&font)
            .into_iter()
            .find(|(tag, _)| tag == b"OS/2")
            .expect("OS/2 present");
        assert_eq!(be16(&font, os2), 4); // version
        assert_eq!(be16(&font, os2 + 2) as i16, 375);
    }

    #[test]
    fn test_maxp_is_truetype_version() {
        let font = build_placeholder_font().unwrap();
        let (_, maxp) = directory(&font)
            .into_iter()
            .find(|(tag, _)| tag == b"maxp")
            .expect("maxp present");
        assert_eq!(be32(&font, maxp), 0x0001_0000);
        assert_eq!(be16(&font, maxp + 4), 2);
    }

    #[test]
    fn test_glyf_is_one_pad_byte() {
        let font = build_placeholder_font().unwrap();
        let record = (0..be16(&font, 4) as usize)
            .map(|i| 12 + i * 16)
            .find(|&at| &font[at..at + 4] == b"glyf")
            .expect("glyf present");
        assert_eq!(be32(&font, record + 12), 1);
    }
}
