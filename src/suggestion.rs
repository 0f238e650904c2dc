//! Glue for model-generated color suggestions.
//!
//! The hosted model is reached by the host application; this module builds
//! the prompt, decodes the JSON reply and keeps only suggestions that really
//! meet the requested contrast.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ContrastError, Result};
use crate::math::wcag::contrast_ratio;
use crate::types::{Color, ComplianceLevel, EngineOptions};

/// Anything that can turn a prompt into a raw JSON reply.
pub trait SuggestionSource {
    fn complete(&self, prompt: &str) -> Result<String>;
}

/// A candidate that passed validation against the base color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub color: Color,
    /// Rounded to 2 decimals.
    pub ratio: f64,
    pub level: ComplianceLevel,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ModelReply {
    Text { text: String },
    Error { error: String },
}

/// Prompt asking a language model for colors contrasting with `base`.
pub fn suggestion_prompt(base: Color, min_ratio: f64) -> String {
    format!(
        "You are an expert in the Web Content Accessibility Guidelines (WCAG).\n\
         Propose a list of complementary, analogous or contrasting colors that \
         reach a contrast ratio of at least {min_ratio}:1 against the main color.\n\
         For each color include its HEX, RGB and HSL values and its contrast \
         ratio with the main color. Write every HEX value as #rrggbb.\n\
         The colors must be practical for web design, graphic design and user interfaces.\n\
         Main color: {base}"
    )
}

/// Decode the reply body of the suggestion endpoint into its free text.
pub fn parse_model_reply(json: &str) -> Result<String> {
    match serde_json::from_str::<ModelReply>(json)? {
        ModelReply::Text { text } => Ok(text),
        ModelReply::Error { error } => Err(ContrastError::Provider(error)),
    }
}

/// All `#rrggbb` tokens in `text`, in order of appearance, without repeats.
/// Tokens embedded in longer hex runs or followed by letters are skipped.
pub fn extract_hex_colors(text: &str) -> Vec<Color> {
    let bytes = text.as_bytes();
    let mut colors = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'#' {
            i += 1;
            continue;
        }
        let digits = bytes[i + 1..]
            .iter()
            .take_while(|b| b.is_ascii_hexdigit())
            .count();
        let bounded = bytes
            .get(i + 1 + digits)
            .map_or(true, |b| !b.is_ascii_alphanumeric());
        if digits == 6 && bounded {
            if let Ok(color) = crate::math::hex::parse_color(&text[i..i + 7]) {
                if !colors.contains(&color) {
                    colors.push(color);
                }
            }
        }
        i += 1 + digits;
    }

    colors
}

/// Keep the candidates that reach `min_ratio` against `base`.
pub fn validate_suggestions(base: Color, candidates: &[Color], min_ratio: f64) -> Vec<Suggestion> {
    candidates
        .iter()
        .filter_map(|&color| {
            let ratio = contrast_ratio(base, color);
            if ratio.value() >= min_ratio {
                Some(Suggestion {
                    color,
                    ratio: ratio.rounded(),
                    level: ratio.level(),
                })
            } else {
                debug!(
                    %base,
                    %color,
                    ratio = ratio.value(),
                    "discarding suggestion below minimum ratio"
                );
                None
            }
        })
        .collect()
}

/// Ask `source` for suggestions and return only those that hold up.
pub fn suggest_with<S: SuggestionSource + ?Sized>(
    source: &S,
    base: Color,
    min_ratio: f64,
) -> Result<Vec<Suggestion>> {
    let prompt = suggestion_prompt(base, min_ratio);
    let reply = source.complete(&prompt)?;
    let text = parse_model_reply(&reply)?;
    let candidates = extract_hex_colors(&text);
    let suggestions = validate_suggestions(base, &candidates, min_ratio);
    debug!(
        %base,
        offered = candidates.len(),
        kept = suggestions.len(),
        "validated model suggestions"
    );
    Ok(suggestions)
}

/// [`suggest_with`] using the configured minimum suggestion ratio.
pub fn suggest_with_options<S: SuggestionSource + ?Sized>(
    source: &S,
    base: Color,
    options: &EngineOptions,
) -> Result<Vec<Suggestion>> {
    options.validate()?;
    suggest_with(source, base, options.min_suggestion_ratio)
}
