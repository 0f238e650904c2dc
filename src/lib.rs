//! WCAG color-contrast evaluation.
//!
//! Pure functions for hex parsing, relative luminance, contrast ratio and
//! AA/AAA classification, plus luminance-targeted random colors and contrast
//! suggestions. Build with the `node` feature to load it as a Node addon.

pub mod engine;
pub mod error;
pub mod math;
pub mod suggestion;
pub mod types;

#[cfg(feature = "node")]
pub mod bindings;

pub use error::{ContrastError, Result};
pub use math::hex::{format_color, parse_color};
pub use math::sampling::{random_color_pair, sample_color_near_luminance};
pub use math::suggest::{complementary_suggestions, swap};
pub use math::wcag::{classify, contrast_ratio, relative_luminance, ContrastRatio};
pub use types::{Color, ComplianceLevel, EngineOptions, EngineOptionsInput};
