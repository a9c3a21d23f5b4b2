//! Band roles, band counts, and the per-position band layout.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ResistorError;

/// Role a band plays on the resistor body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BandRole {
    /// Significant digit (0-9)
    Digit,
    /// Power-of-ten scale applied to the significand
    Multiplier,
    /// Manufacturing tolerance in percent
    Tolerance,
    /// Temperature coefficient in ppm/K (6-band resistors only)
    TempCoefficient,
}

impl BandRole {
    /// Identifier used on the command line and in JSON output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Digit => "digit",
            Self::Multiplier => "multiplier",
            Self::Tolerance => "tolerance",
            Self::TempCoefficient => "temp-coefficient",
        }
    }
}

impl fmt::Display for BandRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TempCoefficient => write!(f, "temperature coefficient"),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

impl FromStr for BandRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "digit" => Ok(Self::Digit),
            "multiplier" => Ok(Self::Multiplier),
            "tolerance" => Ok(Self::Tolerance),
            "temp-coefficient" | "tempco" | "temp" => Ok(Self::TempCoefficient),
            other => Err(format!(
                "Invalid role '{other}'. Must be 'digit', 'multiplier', 'tolerance', or 'temp-coefficient'"
            )),
        }
    }
}

/// Number of bands on the resistor.
///
/// Serialized as the plain integer (`4`, `5`, `6`) so it reads naturally in
/// config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum BandCount {
    /// Two digits, multiplier, tolerance
    #[default]
    Four,
    /// Three digits, multiplier, tolerance
    Five,
    /// Three digits, multiplier, tolerance, temperature coefficient
    Six,
}

impl BandCount {
    /// Builds a band count from the number of bands.
    pub fn from_len(len: usize) -> Result<Self, ResistorError> {
        match len {
            4 => Ok(Self::Four),
            5 => Ok(Self::Five),
            6 => Ok(Self::Six),
            other => Err(ResistorError::UnsupportedBandCount(other)),
        }
    }

    /// Total number of bands.
    #[must_use]
    pub const fn bands(self) -> usize {
        match self {
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
        }
    }

    /// Number of significant-digit bands (`bands - 2`).
    #[must_use]
    pub const fn digit_count(self) -> usize {
        match self {
            Self::Four => 2,
            Self::Five | Self::Six => 3,
        }
    }

    /// 1-based position of the multiplier band.
    #[must_use]
    pub const fn multiplier_position(self) -> usize {
        self.digit_count() + 1
    }

    /// 1-based position of the tolerance band.
    #[must_use]
    pub const fn tolerance_position(self) -> usize {
        self.digit_count() + 2
    }

    /// Whether the last band is a temperature coefficient.
    #[must_use]
    pub const fn has_temp_coefficient(self) -> bool {
        matches!(self, Self::Six)
    }

    /// Role and label for every band position, in order.
    #[must_use]
    pub fn layout(self) -> Vec<BandSpec> {
        let mut specs: Vec<BandSpec> = (1..=self.digit_count())
            .map(|position| BandSpec::new(position, BandRole::Digit))
            .collect();
        specs.push(BandSpec::new(
            self.multiplier_position(),
            BandRole::Multiplier,
        ));
        specs.push(BandSpec::new(self.tolerance_position(), BandRole::Tolerance));
        if self.has_temp_coefficient() {
            specs.push(BandSpec::new(6, BandRole::TempCoefficient));
        }
        specs
    }
}

impl TryFrom<u8> for BandCount {
    type Error = ResistorError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_len(usize::from(value))
    }
}

impl From<BandCount> for u8 {
    fn from(count: BandCount) -> Self {
        match count {
            BandCount::Four => 4,
            BandCount::Five => 5,
            BandCount::Six => 6,
        }
    }
}

impl fmt::Display for BandCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bands())
    }
}

impl FromStr for BandCount {
    type Err = ResistorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len: usize = s
            .trim()
            .parse()
            .map_err(|_| ResistorError::UnsupportedBandCount(0))?;
        Self::from_len(len)
    }
}

/// One band position and the role it plays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BandSpec {
    /// 1-based position on the resistor body
    pub position: usize,
    /// Role of the band at this position
    pub role: BandRole,
    /// Human-readable label, e.g. "Band 1 (1st Digit)"
    pub label: String,
}

impl BandSpec {
    /// Creates a band spec with its standard label.
    #[must_use]
    pub fn new(position: usize, role: BandRole) -> Self {
        let description = match role {
            BandRole::Digit => format!("{} Digit", ordinal(position)),
            BandRole::Multiplier => "Multiplier".to_string(),
            BandRole::Tolerance => "Tolerance".to_string(),
            BandRole::TempCoefficient => "Temp Coefficient".to_string(),
        };
        Self {
            position,
            role,
            label: format!("Band {position} ({description})"),
        }
    }
}

fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
