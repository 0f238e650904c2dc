//! Color science: parsing, luminance, contrast, classification and sampling.

pub mod color_parse;
pub mod composite;
pub mod hex;
pub mod hsv;
pub mod sampling;
pub mod suggest;
pub mod wcag;
