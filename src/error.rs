//! Error types for color parsing, sampling and suggestion handling.

use thiserror::Error;

/// Errors reported by the contrast engine.
#[derive(Debug, Error)]
pub enum ContrastError {
    /// Input string is not a well-formed color.
    #[error("Invalid color format: {0:?}")]
    InvalidFormat(String),

    /// A channel value outside [0, 255] was given to a checked constructor.
    #[error("Channel {channel} out of range: {value} (expected 0-255)")]
    OutOfRange { channel: char, value: i64 },

    /// The sampling retry cap was reached without a qualifying color.
    #[error(
        "No color within {tolerance} of luminance {target} after {attempts} attempts"
    )]
    SamplingExhausted {
        target: f64,
        tolerance: f64,
        attempts: u32,
    },

    /// Options or arguments that can never be satisfied.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// A model reply was not the expected JSON shape.
    #[error("Malformed model response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// The model endpoint reported an error.
    #[error("Suggestion provider error: {0}")]
    Provider(String),
}

pub type Result<T> = std::result::Result<T, ContrastError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_format_mentions_input() {
        let err = ContrastError::InvalidFormat("#ff00".to_string());
        assert!(err.to_string().contains("#ff00"));
    }

    #[test]
    fn out_of_range_mentions_channel_and_value() {
        let err = ContrastError::OutOfRange { channel: 'g', value: 300 };
        let msg = err.to_string();
        assert!(msg.contains('g'));
        assert!(msg.contains("300"));
    }

    #[test]
    fn sampling_exhausted_mentions_attempts() {
        let err = ContrastError::SamplingExhausted {
            target: 0.5,
            tolerance: 0.0,
            attempts: 10_000,
        };
        assert!(err.to_string().contains("10000 attempts"));
    }

    #[test]
    fn json_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ContrastError = json_err.into();
        assert!(matches!(err, ContrastError::MalformedResponse(_)));
    }
}
