use rand::Rng;
use tracing::{debug, warn};

use super::wcag::relative_luminance;
use crate::error::{ContrastError, Result};
use crate::types::{Color, EngineOptions};

pub const DEFAULT_TOLERANCE: f64 = 0.1;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;

/// Draw random colors until one lands within `tolerance` of `target` luminance.
/// Gives up after [`DEFAULT_MAX_ATTEMPTS`] draws.
pub fn sample_color_near_luminance<R: Rng + ?Sized>(
    rng: &mut R,
    target: f64,
    tolerance: f64,
) -> Result<Color> {
    sample_color_capped(rng, target, tolerance, DEFAULT_MAX_ATTEMPTS)
}

/// Rejection sampling with an explicit cap on draws.
pub fn sample_color_capped<R: Rng + ?Sized>(
    rng: &mut R,
    target: f64,
    tolerance: f64,
    max_attempts: u32,
) -> Result<Color> {
    if !(0.0..=1.0).contains(&target) {
        return Err(ContrastError::InvalidOptions(format!(
            "target luminance must be within 0-1, got {target}"
        )));
    }
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(ContrastError::InvalidOptions(format!(
            "tolerance must be a non-negative number, got {tolerance}"
        )));
    }
    if max_attempts == 0 {
        return Err(ContrastError::InvalidOptions(
            "max attempts must be at least 1".to_string(),
        ));
    }

    for attempt in 1..=max_attempts {
        let color = Color::new(rng.gen(), rng.gen(), rng.gen());
        if (relative_luminance(color) - target).abs() <= tolerance {
            debug!(
                %color,
                target_luminance = target,
                tolerance,
                attempt,
                "sampled color near luminance"
            );
            return Ok(color);
        }
    }

    warn!(
        target_luminance = target,
        tolerance,
        max_attempts,
        "luminance sampling exhausted"
    );
    Err(ContrastError::SamplingExhausted {
        target,
        tolerance,
        attempts: max_attempts,
    })
}

/// Random (text, background) pair: dark text on a light background,
/// with targets and limits taken from `options`.
pub fn random_color_pair<R: Rng + ?Sized>(
    rng: &mut R,
    options: &EngineOptions,
) -> Result<(Color, Color)> {
    options.validate()?;
    let text = sample_color_capped(
        rng,
        options.text_luminance,
        options.tolerance,
        options.max_attempts,
    )?;
    let background = sample_color_capped(
        rng,
        options.background_luminance,
        options.tolerance,
        options.max_attempts,
    )?;
    Ok((text, background))
}
