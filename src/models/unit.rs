//! Resistance units, value parsing, and display formatting.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::ResistorError;

static VALUE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]?(?:\d+\.?\d*|\.\d+))(?:[eE]([+-]?\d+))?\s*(\S*)$").unwrap()
});

/// Unit a resistance is entered or displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Ω
    #[default]
    Ohm,
    /// kΩ
    Kiloohm,
    /// MΩ
    Megaohm,
}

impl Unit {
    /// Number of ohms in one of this unit.
    #[must_use]
    pub const fn factor(&self) -> f64 {
        match self {
            Self::Ohm => 1.0,
            Self::Kiloohm => 1e3,
            Self::Megaohm => 1e6,
        }
    }

    /// Power of ten of [`Unit::factor`].
    #[must_use]
    pub const fn exponent(&self) -> i32 {
        match self {
            Self::Ohm => 0,
            Self::Kiloohm => 3,
            Self::Megaohm => 6,
        }
    }

    /// Symbol used by [`format_resistance`].
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Ohm => "Ω",
            Self::Kiloohm => "KΩ",
            Self::Megaohm => "MΩ",
        }
    }

    /// Largest unit whose displayed magnitude stays below 1000.
    #[must_use]
    pub fn for_ohms(ohms: f64) -> Self {
        if ohms >= 1e6 {
            Self::Megaohm
        } else if ohms >= 1e3 {
            Self::Kiloohm
        } else {
            Self::Ohm
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Unit {
    type Err = ResistorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Single letters are case-sensitive: "m" would read as milli.
        match s.trim() {
            "" | "Ω" | "R" | "r" => return Ok(Self::Ohm),
            "k" | "K" | "kΩ" | "KΩ" => return Ok(Self::Kiloohm),
            "M" | "MΩ" => return Ok(Self::Megaohm),
            _ => {}
        }

        match s.trim().to_lowercase().as_str() {
            "ohm" | "ohms" => Ok(Self::Ohm),
            "kohm" | "kohms" | "kiloohm" | "kiloohms" | "kilohm" | "kilohms" => Ok(Self::Kiloohm),
            "meg" | "mohm" | "mohms" | "megaohm" | "megaohms" | "megohm" | "megohms" => {
                Ok(Self::Megaohm)
            }
            _ => Err(ResistorError::UnknownUnit(s.trim().to_string())),
        }
    }
}

/// A resistance as typed, kept in decimal until a unit is applied.
///
/// Scaling "8.2" by 1e6 in binary lands on 8199999.999999999; folding the
/// unit into the decimal exponent and parsing once gives exactly 8200000.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResistanceInput {
    text: String,
    mantissa: String,
    exponent: i32,
    /// Unit suffix, if the text carried one
    pub unit: Option<Unit>,
}

impl ResistanceInput {
    /// Splits "4.7k", "4.7 kΩ", "1e3", or "470" into number and optional unit.
    pub fn parse(text: &str) -> Result<Self, ResistorError> {
        let text = text.trim();
        let invalid = || ResistorError::InvalidResistanceValue(text.to_string());
        let captures = VALUE_PATTERN.captures(text).ok_or_else(invalid)?;

        let exponent = match captures.get(2) {
            Some(exponent) => exponent.as_str().parse().map_err(|_| invalid())?,
            None => 0,
        };
        let unit = match &captures[3] {
            "" => None,
            suffix => Some(suffix.parse::<Unit>()?),
        };

        Ok(Self {
            text: text.to_string(),
            mantissa: captures[1].to_string(),
            exponent,
            unit,
        })
    }

    /// Value in ohms, reading the number in `unit` (the suffix is ignored).
    pub fn ohms_in(&self, unit: Unit) -> Result<f64, ResistorError> {
        let invalid = || ResistorError::InvalidResistanceValue(self.text.clone());
        let exponent = self.exponent.checked_add(unit.exponent()).ok_or_else(invalid)?;
        format!("{}e{exponent}", self.mantissa)
            .parse()
            .map_err(|_| invalid())
    }

    /// Value in ohms using the suffix, or ohms when there is none.
    pub fn ohms(&self) -> Result<f64, ResistorError> {
        self.ohms_in(self.unit.unwrap_or_default())
    }
}

/// Parses a resistance with an optional unit suffix into ohms.
///
/// # Examples
///
/// ```
/// use resistor_code::models::parse_resistance;
///
/// assert_eq!(parse_resistance("4.7k").unwrap(), 4700.0);
/// assert_eq!(parse_resistance("220").unwrap(), 220.0);
/// assert_eq!(parse_resistance("8.2 MΩ").unwrap(), 8_200_000.0);
/// ```
pub fn parse_resistance(text: &str) -> Result<f64, ResistorError> {
    ResistanceInput::parse(text)?.ohms()
}

/// Significand times a multiplier, in ohms.
///
/// Sub-unit multipliers divide by their exact reciprocal (10, 100) so that
/// 82 with gold reads 8.2 rather than 8.200000000000001.
#[must_use]
pub fn scale_significand(significand: u32, multiplier: f64) -> f64 {
    let significand = f64::from(significand);
    if multiplier > 0.0 && multiplier < 1.0 {
        let divisor = multiplier.recip().round();
        if (divisor * multiplier - 1.0).abs() < 1e-9 {
            return significand / divisor;
        }
    }
    significand * multiplier
}

/// Formats ohms in the largest unit with magnitude below 1000, two decimals.
///
/// # Examples
///
/// ```
/// use resistor_code::models::format_resistance;
///
/// assert_eq!(format_resistance(4700.0), "4.70 KΩ");
/// assert_eq!(format_resistance(220.0), "220.00 Ω");
/// assert_eq!(format_resistance(2_200_000.0), "2.20 MΩ");
/// ```
#[must_use]
pub fn format_resistance(ohms: f64) -> String {
    let unit = Unit::for_ohms(ohms);
    format!("{:.2} {}", ohms / unit.factor(), unit.symbol())
}

/// Formats ohms with thousands separators and at most three decimals,
/// e.g. `4,700 Ω` or `0.47 Ω`.
#[must_use]
pub fn format_ohms_grouped(ohms: f64) -> String {
    let fixed = format!("{:.3}", ohms.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let fraction = fraction.trim_end_matches('0');
    let sign = if ohms < 0.0 { "-" } else { "" };
    if fraction.is_empty() {
        format!("{sign}{grouped} Ω")
    } else {
        format!("{sign}{grouped}.{fraction} Ω")
    }
}
