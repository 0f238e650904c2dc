use crate::error::{ContrastError, Result};
use crate::types::Color;

/// Parse a 6-digit hex string (optionally `#`-prefixed) into a color.
/// Case-insensitive. Anything else is `InvalidFormat`.
pub fn parse_color(input: &str) -> Result<Color> {
    let hex = input.strip_prefix('#').unwrap_or(input);
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ContrastError::InvalidFormat(input.to_string()));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16)
            .map_err(|_| ContrastError::InvalidFormat(input.to_string()))
    };
    Ok(Color::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Format a color as `#rrggbb`, lowercase and zero-padded.
pub fn format_color(color: Color) -> String {
    color.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_6digit_hex() {
        assert_eq!(parse_color("#ff0000").unwrap(), Color::new(255, 0, 0));
        assert_eq!(parse_color("#00ff00").unwrap(), Color::new(0, 255, 0));
        assert_eq!(parse_color("#1e293b").unwrap(), Color::new(30, 41, 59));
    }

    #[test]
    fn parse_without_prefix() {
        assert_eq!(parse_color("42456d").unwrap(), Color::new(66, 69, 109));
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(parse_color("#E6F2FC").unwrap(), parse_color("#e6f2fc").unwrap());
    }

    #[test]
    fn parse_malformed_is_invalid_format() {
        for input in ["not-a-color", "#ff00", "#xyz", "", "#", "#ff000080", "##ff0000", "#ff00zz", " #ff0000"] {
            let err = parse_color(input).unwrap_err();
            assert!(
                matches!(err, ContrastError::InvalidFormat(ref s) if s == input),
                "{input:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn parse_rejects_multibyte_input_of_six_bytes() {
        // "ééé" is six bytes but not six hex digits
        assert!(parse_color("ééé").is_err());
    }

    #[test]
    fn format_zero_pads() {
        assert_eq!(format_color(Color::new(5, 0, 10)), "#05000a");
        assert_eq!(format_color(Color::WHITE), "#ffffff");
    }

    #[test]
    fn format_normalizes_parsed_input() {
        assert_eq!(format_color(parse_color("ABCDEF").unwrap()), "#abcdef");
        assert_eq!(format_color(parse_color("#0A0b0C").unwrap()), "#0a0b0c");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn format_then_parse_is_identity(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
                let color = Color::new(r, g, b);
                prop_assert_eq!(parse_color(&format_color(color)).unwrap(), color);
            }

            #[test]
            fn parse_then_format_normalizes(hex in "#?[0-9a-fA-F]{6}") {
                let expected = format!("#{}", hex.trim_start_matches('#').to_lowercase());
                prop_assert_eq!(format_color(parse_color(&hex).unwrap()), expected);
            }
        }
    }
}
