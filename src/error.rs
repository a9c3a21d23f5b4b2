//! Error type shared by the color table, decoder, and encoder.

use crate::models::BandRole;

/// Errors raised by the resistor color-code core.
///
/// Every operation either returns a complete result or one of these; no
/// operation produces a partially filled band sequence.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ResistorError {
    /// The color name (or alias) is not registered in the table.
    #[error("Unknown color '{0}'")]
    UnknownColor(String),

    /// The color exists but cannot play the role its band position requires.
    #[error("Band {position} requires a {role} color, but '{color}' has no {role} value")]
    InvalidBandRole {
        /// 1-based band position
        position: usize,
        /// Canonical color name
        color: String,
        /// Role required at that position
        role: BandRole,
    },

    /// Target resistance is zero, negative, non-finite, or not a number at all.
    #[error("Invalid resistance value '{0}': expected a positive, finite number of ohms")]
    InvalidResistanceValue(String),

    /// No color in the table carries this digit value.
    #[error("No color encodes digit {0}")]
    NoColorForDigit(u8),

    /// The target needs a multiplier outside the span the table offers.
    #[error("{ohms} Ω cannot be represented with {bands} bands: multiplier 1e{exponent} is out of range")]
    ValueOutOfRange {
        /// Requested resistance in ohms
        ohms: f64,
        /// Requested band count
        bands: usize,
        /// Power of ten the significand would need
        exponent: i32,
    },

    /// Band count other than 4, 5, or 6.
    #[error("Unsupported band count {0}: expected 4, 5, or 6")]
    UnsupportedBandCount(usize),

    /// Number of colors supplied does not match the band count.
    #[error("Expected {expected} band colors, got {actual}")]
    BandCountMismatch {
        /// Band count requested
        expected: usize,
        /// Colors supplied
        actual: usize,
    },

    /// Unit suffix is not one of Ω, kΩ, MΩ.
    #[error("Unknown unit '{0}': expected Ω, kΩ, or MΩ")]
    UnknownUnit(String),

    /// The embedded color table could not be loaded.
    #[error("Color table unavailable: {0}")]
    TableUnavailable(String),
}
