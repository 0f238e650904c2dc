use crate::types::{Color, ComplianceLevel};

pub const AAA_RATIO: f64 = 7.0;
pub const AA_RATIO: f64 = 4.5;
pub const AAA_LARGE_RATIO: f64 = 4.5;
pub const AA_LARGE_RATIO: f64 = 3.0;

/// Convert an sRGB channel (0-255) to linear light.
/// WCAG 2.x uses 0.03928 as the piecewise breakpoint.
fn srgb_to_linear(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance per WCAG 2.x, in [0, 1].
/// L = 0.2126 * R + 0.7152 * G + 0.0722 * B (linear channels)
pub fn relative_luminance(color: Color) -> f64 {
    0.2126 * srgb_to_linear(color.r)
        + 0.7152 * srgb_to_linear(color.g)
        + 0.0722 * srgb_to_linear(color.b)
}

/// An unrounded WCAG contrast ratio in [1, 21].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ContrastRatio(f64);

impl ContrastRatio {
    pub fn value(self) -> f64 {
        self.0
    }

    /// Ratio rounded to 2 decimals, for display only.
    pub fn rounded(self) -> f64 {
        (self.0 * 100.0).round() / 100.0
    }

    pub fn level(self) -> ComplianceLevel {
        classify(self.0)
    }

    pub fn thresholds(self) -> Thresholds {
        check_thresholds(self.0)
    }
}

/// WCAG contrast ratio between two colors. Order does not matter.
/// ratio = (L1 + 0.05) / (L2 + 0.05) where L1 >= L2
pub fn contrast_ratio(a: Color, b: Color) -> ContrastRatio {
    let l1 = relative_luminance(a);
    let l2 = relative_luminance(b);
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    ContrastRatio((lighter + 0.05) / (darker + 0.05))
}

/// Classify a ratio for normal-size text. Bounds are inclusive.
pub fn classify(ratio: f64) -> ComplianceLevel {
    if ratio >= AAA_RATIO {
        ComplianceLevel::AAA
    } else if ratio >= AA_RATIO {
        ComplianceLevel::AA
    } else {
        ComplianceLevel::Fail
    }
}

/// Pass/fail for every WCAG threshold, normal and large text.
pub fn check_thresholds(ratio: f64) -> Thresholds {
    Thresholds {
        pass_aa: ratio >= AA_RATIO,
        pass_aa_large: ratio >= AA_LARGE_RATIO,
        pass_aaa: ratio >= AAA_RATIO,
        pass_aaa_large: ratio >= AAA_LARGE_RATIO,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub pass_aa: bool,
    pub pass_aa_large: bool,
    pub pass_aaa: bool,
    pub pass_aaa_large: bool,
}

impl Thresholds {
    /// Level reached for the given text size.
    pub fn level(self, is_large_text: bool) -> ComplianceLevel {
        let (aaa, aa) = if is_large_text {
            (self.pass_aaa_large, self.pass_aa_large)
        } else {
            (self.pass_aaa, self.pass_aa)
        };
        if aaa {
            ComplianceLevel::AAA
        } else if aa {
            ComplianceLevel::AA
        } else {
            ComplianceLevel::Fail
        }
    }
}
