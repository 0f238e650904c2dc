//! Node-API surface consumed by the JS presentation layer.

use napi::{Error, Result, Status};
use napi_derive::napi;

use crate::error::ContrastError;
use crate::math::{hex, hsv, sampling, suggest, wcag};
use crate::types::{
    AuditSummary, Color, ColorPairInput, ComplianceLevel, EngineOptions, EngineOptionsInput, PairReport,
};

impl From<ContrastError> for Error {
    fn from(err: ContrastError) -> Self {
        let status = match err {
            ContrastError::InvalidFormat(_)
            | ContrastError::OutOfRange { .. }
            | ContrastError::InvalidOptions(_) => Status::InvalidArg,
            _ => Status::GenericFailure,
        };
        Error::new(status, err.to_string())
    }
}

fn color(input: &str) -> Result<Color> {
    Ok(hex::parse_color(input)?)
}

fn options(input: Option<EngineOptionsInput>) -> Result<EngineOptions> {
    Ok(input.unwrap_or_default().resolve()?)
}

#[napi]
pub fn health_check() -> String {
    "wcag-contrast-native ok".to_string()
}

/// Normalize a hex color to `#rrggbb`.
#[napi]
pub fn parse_color(input: String) -> Result<String> {
    Ok(color(&input)?.to_string())
}

/// Format checked channels as `#rrggbb`.
#[napi]
pub fn format_rgb(r: i64, g: i64, b: i64) -> Result<String> {
    Ok(Color::try_from_channels(r, g, b)?.to_string())
}

/// Format the picker's RGB text fields, clamping into 0-255.
#[napi]
pub fn format_rgb_fields(r: String, g: String, b: String) -> String {
    Color::from_input_fields(&r, &g, &b).to_string()
}

#[napi]
pub fn relative_luminance(input: String) -> Result<f64> {
    Ok(wcag::relative_luminance(color(&input)?))
}

/// Contrast ratio rounded to 2 decimals.
#[napi]
pub fn contrast_ratio(foreground: String, background: String) -> Result<f64> {
    Ok(wcag::contrast_ratio(color(&foreground)?, color(&background)?).rounded())
}

/// Compliance level, computed on the unrounded ratio.
#[napi]
pub fn wcag_compliance(foreground: String, background: String) -> Result<ComplianceLevel> {
    Ok(wcag::contrast_ratio(color(&foreground)?, color(&background)?).level())
}

#[napi]
pub fn evaluate_pair(pair: ColorPairInput) -> Result<PairReport> {
    Ok(crate::engine::evaluate_input(&pair)?)
}

#[napi]
pub fn audit_pairs(pairs: Vec<ColorPairInput>, required: Option<ComplianceLevel>) -> AuditSummary {
    crate::engine::audit_pairs(&pairs, required.unwrap_or(ComplianceLevel::AA))
}

#[napi(object)]
pub struct RandomColors {
    pub text: String,
    pub background: String,
}

/// Dark text on a light background, drawn at random.
#[napi]
pub fn random_colors(options: Option<EngineOptionsInput>) -> Result<RandomColors> {
    let options = self::options(options)?;
    let (text, background) = sampling::random_color_pair(&mut rand::thread_rng(), &options)?;
    Ok(RandomColors {
        text: text.to_string(),
        background: background.to_string(),
    })
}

#[napi]
pub fn sample_color(target: f64, tolerance: Option<f64>, max_attempts: Option<u32>) -> Result<String> {
    let sampled = sampling::sample_color_capped(
        &mut rand::thread_rng(),
        target,
        tolerance.unwrap_or(sampling::DEFAULT_TOLERANCE),
        max_attempts.unwrap_or(sampling::DEFAULT_MAX_ATTEMPTS),
    )?;
    Ok(sampled.to_string())
}

/// Candidates reaching `options.minSuggestionRatio` against `base`.
#[napi]
pub fn complementary_suggestions(
    base: String,
    options: Option<EngineOptionsInput>,
    limit: Option<u32>,
) -> Result<Vec<String>> {
    let min_ratio = self::options(options)?.min_suggestion_ratio;
    let limit = limit.map_or(usize::MAX, |l| l as usize);
    Ok(suggest::complementary_suggestions(color(&base)?, min_ratio)
        .take(limit)
        .map(|c| c.to_string())
        .collect())
}

/// Hue in degrees, saturation and value in 0-1.
#[napi]
pub fn hsv_to_hex(h: f64, s: f64, v: f64) -> String {
    hsv::hsv_to_rgb(hsv::Hsv::new(h, s, v)).to_string()
}

#[napi]
pub fn suggestion_prompt(base: String, options: Option<EngineOptionsInput>) -> Result<String> {
    Ok(crate::suggestion::suggestion_prompt(
        color(&base)?,
        self::options(options)?.min_suggestion_ratio,
    ))
}

#[napi(object)]
pub struct ValidatedSuggestion {
    pub color: String,
    pub ratio: f64,
    pub level: ComplianceLevel,
}

/// Decode a model reply and keep only colors that reach `options.minSuggestionRatio`.
#[napi]
pub fn validate_suggestion_response(
    base: String,
    reply_json: String,
    options: Option<EngineOptionsInput>,
) -> Result<Vec<ValidatedSuggestion>> {
    let min_ratio = self::options(options)?.min_suggestion_ratio;
    let base = color(&base)?;
    let text = crate::suggestion::parse_model_reply(&reply_json)?;
    let candidates = crate::suggestion::extract_hex_colors(&text);
    Ok(crate::suggestion::validate_suggestions(
        base,
        &candidates,
        min_ratio,
    )
    .into_iter()
    .map(|s| ValidatedSuggestion {
        color: s.color.to_string(),
        ratio: s.ratio,
        level: s.level,
    })
    .collect())
}
