use rayon::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::math::color_parse::{parse_css_color, parse_css_color_over};
use crate::math::wcag::contrast_ratio;
use crate::types::{AuditSummary, Color, ColorPairInput, ComplianceLevel, InvalidPair, PairReport};

/// Evaluate one foreground/background pair.
/// `level` is taken against the large-text thresholds when `is_large_text`.
pub fn evaluate_pair(foreground: Color, background: Color, is_large_text: bool) -> PairReport {
    let ratio = contrast_ratio(foreground, background);
    let thresholds = ratio.thresholds();

    PairReport {
        foreground: foreground.to_string(),
        background: background.to_string(),
        ratio: ratio.rounded(),
        ratio_raw: ratio.value(),
        level: thresholds.level(is_large_text),
        pass_aa: thresholds.pass_aa,
        pass_aa_large: thresholds.pass_aa_large,
        pass_aaa: thresholds.pass_aaa,
        pass_aaa_large: thresholds.pass_aaa_large,
    }
}

/// Parse and evaluate a pair given as CSS color strings.
///
/// The background must be opaque; a translucent foreground is composited
/// over the background first.
pub fn evaluate_input(pair: &ColorPairInput) -> Result<PairReport> {
    let background = parse_css_color(&pair.background)?;
    let foreground = parse_css_color_over(&pair.foreground, background)?;
    Ok(evaluate_pair(
        foreground,
        background,
        pair.is_large_text.unwrap_or(false),
    ))
}

/// Evaluate many pairs in parallel and sort them against `required`.
///
/// Each pair is independent, so Rayon's `par_iter()` is used with no shared
/// state. Input order is preserved within each bucket.
pub fn audit_pairs(pairs: &[ColorPairInput], required: ComplianceLevel) -> AuditSummary {
    let outcomes: Vec<Result<PairReport>> = pairs.par_iter().map(evaluate_input).collect();

    let mut summary = AuditSummary::default();
    for (index, (pair, outcome)) in pairs.iter().zip(outcomes).enumerate() {
        match outcome {
            Ok(report) if report.level >= required => summary.passed.push(report),
            Ok(report) => summary.violations.push(report),
            Err(err) => summary.invalid.push(InvalidPair {
                index: index as u32,
                foreground: pair.foreground.clone(),
                background: pair.background.clone(),
                reason: err.to_string(),
            }),
        }
    }

    debug!(
        total = pairs.len(),
        passed = summary.passed.len(),
        violations = summary.violations.len(),
        invalid = summary.invalid.len(),
        %required,
        "audited color pairs"
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_pair(foreground: &str, background: &str) -> ColorPairInput {
        ColorPairInput {
            foreground: foreground.to_string(),
            background: background.to_string(),
            is_large_text: Some(false),
        }
    }

    // --- evaluate_pair tests ---

    #[test]
    fn black_on_white_passes_all() {
        let report = evaluate_pair(Color::BLACK, Color::WHITE, false);
        assert!(report.pass_aa);
        assert!(report.pass_aaa);
        assert_eq!(report.ratio, 21.0);
        assert_eq!(report.level, ComplianceLevel::AAA);
        assert_eq!(report.foreground, "#000000");
        assert_eq!(report.background, "#ffffff");
    }

    #[test]
    fn ratio_rounded_to_2_decimals() {
        let report = evaluate_pair(Color::new(0x76, 0x76, 0x76), Color::WHITE, false);
        assert_eq!(report.ratio, 4.54);
        assert!(report.ratio_raw > 4.54 && report.ratio_raw < 4.55);
    }

    #[test]
    fn large_text_relaxes_level() {
        // ~3.03:1 fails normal text but passes AA for large text
        let gray = Color::new(0x94, 0x94, 0x94);
        assert_eq!(evaluate_pair(gray, Color::WHITE, false).level, ComplianceLevel::Fail);
        assert_eq!(evaluate_pair(gray, Color::WHITE, true).level, ComplianceLevel::AA);
    }

    #[test]
    fn input_accepts_css_colors() {
        let report = evaluate_input(&make_pair("black", "rgb(255, 255, 255)")).unwrap();
        assert_eq!(report.ratio, 21.0);
    }

    #[test]
    fn semi_transparent_fg_composited() {
        // White text at 50% on black -> effective gray ~5.3:1
        let report = evaluate_input(&make_pair("rgba(255, 255, 255, 0.5)", "#000000")).unwrap();
        assert!(report.ratio > 4.0 && report.ratio < 6.0, "got {}", report.ratio);
    }

    #[test]
    fn translucent_background_rejected() {
        assert!(evaluate_input(&make_pair("#000000", "rgba(0, 0, 0, 0.5)")).is_err());
    }

    // --- audit_pairs tests ---

    #[test]
    fn high_contrast_passes_aa() {
        let summary = audit_pairs(&[make_pair("#000000", "#ffffff")], ComplianceLevel::AA);
        assert_eq!(summary.passed.len(), 1);
        assert!(summary.violations.is_empty());
    }

    #[test]
    fn low_contrast_fails_aa() {
        let summary = audit_pairs(&[make_pair("#cccccc", "#ffffff")], ComplianceLevel::AA);
        assert_eq!(summary.violations.len(), 1);
        assert!(summary.passed.is_empty());
    }

    #[test]
    fn aaa_requirement_stricter() {
        // ~4.6:1 passes AA but not AAA
        let pairs = [make_pair("#757575", "#ffffff")];
        assert_eq!(audit_pairs(&pairs, ComplianceLevel::AA).passed.len(), 1);
        assert_eq!(audit_pairs(&pairs, ComplianceLevel::AAA).violations.len(), 1);
    }

    #[test]
    fn invalid_pairs_reported_with_index() {
        let pairs = [
            make_pair("#000000", "#ffffff"),
            make_pair("not-a-color", "#ffffff"),
        ];
        let summary = audit_pairs(&pairs, ComplianceLevel::AA);
        assert_eq!(summary.passed.len(), 1);
        assert_eq!(summary.invalid.len(), 1);
        assert_eq!(summary.invalid[0].index, 1);
        assert_eq!(summary.invalid[0].foreground, "not-a-color");
        assert!(summary.invalid[0].reason.contains("not-a-color"));
    }

    #[test]
    fn no_pairs_returns_empty() {
        assert_eq!(audit_pairs(&[], ComplianceLevel::AA), AuditSummary::default());
    }

    #[test]
    fn many_pairs_keep_input_order() {
        let pairs: Vec<ColorPairInput> = (0..=255u16)
            .step_by(5)
            .map(|v| make_pair(&format!("#{:02x}{:02x}{:02x}", v, v, v), "#ffffff"))
            .collect();
        let summary = audit_pairs(&pairs, ComplianceLevel::AA);
        assert_eq!(summary.passed.len() + summary.violations.len(), pairs.len());
        // darker grays come first and contrast falls monotonically
        let ratios: Vec<f64> = summary.passed.iter().map(|r| r.ratio_raw).collect();
        assert!(ratios.windows(2).all(|w| w[0] >= w[1]));
    }
}
