use std::collections::HashSet;

use super::hsv::{hsv_to_rgb, rgb_to_hsv, Hsv};
use super::wcag::{contrast_ratio, relative_luminance};
use crate::types::Color;

/// Hue offsets tried around the base color, complement first.
const HUE_OFFSETS: [f64; 12] = [
    180.0, 150.0, 210.0, 120.0, 240.0, 90.0, 270.0, 60.0, 300.0, 30.0, 330.0, 0.0,
];

/// HSV values used for candidates against a light base (dark candidates).
const DARK_VALUES: [f64; 4] = [0.15, 0.25, 0.35, 0.45];
/// HSV values used for candidates against a dark base (light candidates).
const LIGHT_VALUES: [f64; 4] = [1.0, 0.95, 0.9, 0.85];

/// Swap a foreground/background pair.
pub fn swap(a: Color, b: Color) -> (Color, Color) {
    (b, a)
}

/// Deterministic colors that reach `min_ratio` against `base`.
///
/// Candidates are hue rotations of `base` on the opposite side of the
/// luminance scale, then black and white. The sequence is lazy, finite and
/// free of duplicates.
pub fn complementary_suggestions(base: Color, min_ratio: f64) -> impl Iterator<Item = Color> {
    let hsv = rgb_to_hsv(base);
    let values: &'static [f64] = if relative_luminance(base) > 0.5 {
        &DARK_VALUES
    } else {
        &LIGHT_VALUES
    };
    // keep some chroma even for grays so hue rotation has an effect
    let saturation = hsv.s.max(0.35);

    let rotated = HUE_OFFSETS.into_iter().flat_map(move |offset| {
        values
            .iter()
            .map(move |&v| hsv_to_rgb(Hsv::new(hsv.h + offset, saturation, v)))
    });

    let mut seen = HashSet::new();
    rotated
        .chain([Color::BLACK, Color::WHITE])
        .filter(move |&candidate| contrast_ratio(base, candidate).value() >= min_ratio)
        .filter(move |&candidate| seen.insert(candidate))
}
