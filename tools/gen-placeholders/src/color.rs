//! `#RRGGBB` color parsing for the image table

use crate::GenError;

/// Parse a `#RRGGBB` string into RGB bytes.
pub fn parse_hex_color(s: &str) -> Result<[u8; 3], GenError> {
    let invalid = || GenError::InvalidColor(s.to_string());

    let hex = s.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    Ok([channel(0)?, channel(2)?, channel(4)?])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#5B8DEE").unwrap(), [0x5B, 0x8D, 0xEE]);
        assert_eq!(parse_hex_color("#000000").unwrap(), [0, 0, 0]);
        assert_eq!(parse_hex_color("#ffffff").unwrap(), [255, 255, 255]);
    }

    #[test]
    fn test_parse_hex_color_rejects_malformed() {
        for bad in ["5B8DEE", "#5B8DE", "#5B8DEEF", "#GG0000", "", "#", "#ééé"] {
            assert!(
                matches!(parse_hex_color(bad), Err(GenError::InvalidColor(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
