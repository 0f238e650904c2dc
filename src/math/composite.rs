use crate::types::Color;

/// Alpha-composite a foreground color over a background color.
/// formula per channel: result = fg * alpha + bg * (1 - alpha)
/// Alpha is clamped to [0, 1].
pub fn composite_over(fg: Color, bg: Color, alpha: f64) -> Color {
    let alpha = alpha.clamp(0.0, 1.0);
    let blend = |f: u8, b: u8| -> u8 {
        let result = f as f64 * alpha + b as f64 * (1.0 - alpha);
        result.round() as u8
    };

    Color::new(blend(fg.r, bg.r), blend(fg.g, bg.g), blend(fg.b, bg.b))
}
