use crate::error::{ContrastError, Result};
use crate::types::Color;

/// Parse any CSS color value into an opaque color.
/// Handles hex (3/6 digits), rgb(), hsl(), named colors and the rest of what
/// csscolorparser understands. Translucent values are `InvalidFormat`; use
/// [`parse_css_color_over`] to flatten them first.
pub fn parse_css_color(value: &str) -> Result<Color> {
    let (color, alpha) = parse_rgba(value)?;
    if alpha < 255 {
        return Err(ContrastError::InvalidFormat(value.to_string()));
    }
    Ok(color)
}

/// Parse any CSS color value, compositing translucent colors over `backdrop`.
pub fn parse_css_color_over(value: &str, backdrop: Color) -> Result<Color> {
    let (color, alpha) = parse_rgba(value)?;
    if alpha == 255 {
        return Ok(color);
    }
    Ok(super::composite::composite_over(
        color,
        backdrop,
        alpha as f64 / 255.0,
    ))
}

fn parse_rgba(value: &str) -> Result<(Color, u8)> {
    let trimmed = value.trim();

    // Keywords that only make sense against a cascade
    match trimmed.to_lowercase().as_str() {
        "inherit" | "currentcolor" | "initial" | "unset" | "" => {
            return Err(ContrastError::InvalidFormat(value.to_string()))
        }
        _ => {}
    }

    let parsed = trimmed
        .parse::<csscolorparser::Color>()
        .map_err(|_| ContrastError::InvalidFormat(value.to_string()))?;
    let [r, g, b, a] = parsed.to_rgba8();
    Ok((Color::new(r, g, b), a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_passthrough() {
        assert_eq!(parse_css_color("#ff0000").unwrap(), Color::new(255, 0, 0));
        assert_eq!(parse_css_color("#1e293b").unwrap(), Color::new(30, 41, 59));
    }

    #[test]
    fn hex_3digit_expansion() {
        assert_eq!(parse_css_color("#f00").unwrap(), Color::new(255, 0, 0));
    }

    #[test]
    fn rgb_comma_format() {
        assert_eq!(
            parse_css_color("rgb(255, 0, 128)").unwrap(),
            Color::new(255, 0, 128)
        );
    }

    #[test]
    fn hsl_red() {
        assert_eq!(
            parse_css_color("hsl(0, 100%, 50%)").unwrap(),
            Color::new(255, 0, 0)
        );
    }

    #[test]
    fn named_color() {
        assert_eq!(parse_css_color("red").unwrap(), Color::new(255, 0, 0));
        assert_eq!(parse_css_color("  White ").unwrap(), Color::WHITE);
    }

    #[test]
    fn translucent_rejected_without_backdrop() {
        let err = parse_css_color("rgba(96, 96, 96, 0.25)").unwrap_err();
        assert!(matches!(err, ContrastError::InvalidFormat(_)));
        assert!(parse_css_color("transparent").is_err());
    }

    #[test]
    fn translucent_composited_over_backdrop() {
        let color = parse_css_color_over("rgba(0, 0, 0, 0.2)", Color::WHITE).unwrap();
        // alpha 0.2 -> 51/255, 255 * (1 - 51/255) = 204
        assert_eq!(color, Color::new(204, 204, 204));
    }

    #[test]
    fn transparent_over_backdrop_is_backdrop() {
        let backdrop = Color::new(230, 242, 252);
        assert_eq!(parse_css_color_over("transparent", backdrop).unwrap(), backdrop);
    }

    #[test]
    fn cascade_keywords_rejected() {
        for value in ["inherit", "currentColor", "initial", "unset", ""] {
            assert!(parse_css_color(value).is_err(), "{value:?}");
        }
    }

    #[test]
    fn garbage_rejected() {
        assert!(parse_css_color("not-a-color").is_err());
    }
}
