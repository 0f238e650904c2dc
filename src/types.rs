use std::fmt;
use std::str::FromStr;

#[cfg(feature = "node")]
use napi_derive::napi;
use serde::{Deserialize, Serialize};

use crate::error::{ContrastError, Result};
use crate::math::sampling::{DEFAULT_MAX_ATTEMPTS, DEFAULT_TOLERANCE};

/// An opaque sRGB color with 8-bit channels.
///
/// Serializes as its canonical `#rrggbb` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from wider integers, rejecting anything outside 0-255.
    pub fn try_from_channels(r: i64, g: i64, b: i64) -> Result<Self> {
        let check = |channel: char, value: i64| {
            u8::try_from(value).map_err(|_| ContrastError::OutOfRange { channel, value })
        };
        Ok(Self::new(check('r', r)?, check('g', g)?, check('b', b)?))
    }

    /// Build a color from wider integers, clamping each channel into 0-255.
    pub fn from_clamped(r: i64, g: i64, b: i64) -> Self {
        let clamp = |v: i64| v.clamp(0, 255) as u8;
        Self::new(clamp(r), clamp(g), clamp(b))
    }

    /// Build a color from three numeric text fields.
    /// Each field is read up to its first non-digit (`"12px"` is 12, `"3.7"`
    /// is 3); fields without leading digits count as 0. Numbers are clamped
    /// into 0-255.
    pub fn from_input_fields(r: &str, g: &str, b: &str) -> Self {
        Self::from_clamped(leading_int(r), leading_int(g), leading_int(b))
    }
}

/// Integer prefix of a text field: optional sign then a digit run.
/// Saturates instead of overflowing.
fn leading_int(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| {
            let d = i64::from(d - b'0');
            if negative {
                acc.saturating_mul(10).saturating_sub(d)
            } else {
                acc.saturating_mul(10).saturating_add(d)
            }
        })
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ContrastError;

    fn from_str(s: &str) -> Result<Self> {
        crate::math::hex::parse_color(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ContrastError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// WCAG conformance level reached by a contrast ratio (normal text).
#[cfg_attr(feature = "node", napi(string_enum))]
#[cfg_attr(not(feature = "node"), derive(Clone, Copy))]
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComplianceLevel {
    Fail,
    AA,
    AAA,
}

impl ComplianceLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            ComplianceLevel::Fail => "Fail",
            ComplianceLevel::AA => "AA",
            ComplianceLevel::AAA => "AAA",
        }
    }
}

impl fmt::Display for ComplianceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplianceLevel {
    type Err = ContrastError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AAA" => Ok(ComplianceLevel::AAA),
            "AA" => Ok(ComplianceLevel::AA),
            "FAIL" => Ok(ComplianceLevel::Fail),
            _ => Err(ContrastError::InvalidOptions(format!(
                "unknown compliance level {s:?}"
            ))),
        }
    }
}

/// Engine configuration. Loaded from JSON or merged from [`EngineOptionsInput`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineOptions {
    /// Accepted luminance distance when sampling random colors.
    pub tolerance: f64,
    /// Draws before sampling gives up.
    pub max_attempts: u32,
    /// Target luminance for random text colors.
    pub text_luminance: f64,
    /// Target luminance for random background colors.
    pub background_luminance: f64,
    /// Minimum ratio a suggested color must reach.
    pub min_suggestion_ratio: f64,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            text_luminance: 0.1,
            background_luminance: 0.9,
            min_suggestion_ratio: 7.0,
        }
    }
}

impl EngineOptions {
    /// Parse options from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(ContrastError::InvalidOptions(
                "maxAttempts must be at least 1".to_string(),
            ));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ContrastError::InvalidOptions(format!(
                "tolerance must be a non-negative number, got {}",
                self.tolerance
            )));
        }
        for (name, value) in [
            ("textLuminance", self.text_luminance),
            ("backgroundLuminance", self.background_luminance),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ContrastError::InvalidOptions(format!(
                    "{name} must be within 0-1, got {value}"
                )));
            }
        }
        if !(1.0..=21.0).contains(&self.min_suggestion_ratio) {
            return Err(ContrastError::InvalidOptions(format!(
                "minSuggestionRatio must be within 1-21, got {}",
                self.min_suggestion_ratio
            )));
        }
        Ok(())
    }
}

/// Partial options as passed from JS. Missing fields take their defaults.
#[cfg_attr(feature = "node", napi(object))]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineOptionsInput {
    pub tolerance: Option<f64>,
    pub max_attempts: Option<u32>,
    pub text_luminance: Option<f64>,
    pub background_luminance: Option<f64>,
    pub min_suggestion_ratio: Option<f64>,
}

impl EngineOptionsInput {
    /// Fill the gaps from [`EngineOptions::default`] and validate.
    pub fn resolve(self) -> Result<EngineOptions> {
        let defaults = EngineOptions::default();
        let options = EngineOptions {
            tolerance: self.tolerance.unwrap_or(defaults.tolerance),
            max_attempts: self.max_attempts.unwrap_or(defaults.max_attempts),
            text_luminance: self.text_luminance.unwrap_or(defaults.text_luminance),
            background_luminance: self
                .background_luminance
                .unwrap_or(defaults.background_luminance),
            min_suggestion_ratio: self
                .min_suggestion_ratio
                .unwrap_or(defaults.min_suggestion_ratio),
        };
        options.validate()?;
        Ok(options)
    }
}

/// A foreground/background pair as supplied by the host, before parsing.
#[cfg_attr(feature = "node", napi(object))]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPairInput {
    pub foreground: String,
    pub background: String,
    pub is_large_text: Option<bool>,
}

/// Evaluation of one color pair.
#[cfg_attr(feature = "node", napi(object))]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairReport {
    /// Canonical `#rrggbb`.
    pub foreground: String,
    pub background: String,
    /// Rounded to 2 decimals for display.
    pub ratio: f64,
    pub ratio_raw: f64,
    pub level: ComplianceLevel,
    pub pass_aa: bool,
    pub pass_aa_large: bool,
    pub pass_aaa: bool,
    pub pass_aaa_large: bool,
}

/// A pair that could not be evaluated.
#[cfg_attr(feature = "node", napi(object))]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidPair {
    pub index: u32,
    pub foreground: String,
    pub background: String,
    pub reason: String,
}

/// Result of auditing many pairs against a required level.
#[cfg_attr(feature = "node", napi(object))]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditSummary {
    pub passed: Vec<PairReport>,
    pub violations: Vec<PairReport>,
    pub invalid: Vec<InvalidPair>,
}
