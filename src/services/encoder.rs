//! Reverse transform: target resistance to the closest band colors.

// Digit counts are 2 or 3 and exponents stay within f64 range
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color_table::{ColorEntry, ColorTable};
use crate::error::ResistorError;
use crate::models::{
    format_ohms_grouped, format_resistance, scale_significand, BandCount, BandRole,
};

/// Relative slack when comparing a power of ten against the multiplier span.
const SPAN_EPSILON: f64 = 1e-9;

/// Which colors the encoder writes into bands it cannot derive from the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TolerancePolicy {
    /// Tolerance color for 4-band resistors
    pub four_band: String,
    /// Tolerance color for 5- and 6-band resistors
    pub multi_band: String,
    /// Temperature-coefficient color for 6-band resistors; `None` leaves the band empty
    pub temp_coefficient: Option<String>,
}

impl Default for TolerancePolicy {
    fn default() -> Self {
        Self {
            four_band: "gold".to_string(),
            multi_band: "silver".to_string(),
            temp_coefficient: None,
        }
    }
}

impl TolerancePolicy {
    /// Tolerance color for the given band count.
    #[must_use]
    pub fn tolerance_color(&self, band_count: BandCount) -> &str {
        match band_count {
            BandCount::Four => &self.four_band,
            BandCount::Five | BandCount::Six => &self.multi_band,
        }
    }
}

/// Band colors chosen for a target resistance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EncodeResult {
    /// One entry per band position; `None` marks an unpopulated band
    pub bands: Vec<Option<String>>,
    /// Integer read from the digit bands
    pub significand: u32,
    /// Multiplier of the chosen multiplier color
    pub multiplier: f64,
    /// Resistance the chosen bands encode (`significand * multiplier`)
    pub resistance_ohms: f64,
}

impl EncodeResult {
    /// Populated band colors in order.
    pub fn colors(&self) -> impl Iterator<Item = &str> {
        self.bands.iter().filter_map(|band| band.as_deref())
    }

    /// Encoded resistance in the largest unit below 1000.
    #[must_use]
    pub fn formatted(&self) -> String {
        format_resistance(self.resistance_ohms)
    }

    /// Full ohm value plus the scaled form, e.g. "4,700 Ω (4.70 KΩ)".
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} ({})",
            format_ohms_grouped(self.resistance_ohms),
            self.formatted()
        )
    }
}

/// Encodes resistances into band colors against a color table.
#[derive(Debug, Clone)]
pub struct Encoder<'a> {
    table: &'a ColorTable,
    policy: TolerancePolicy,
}

impl<'a> Encoder<'a> {
    /// Creates an encoder with the default policy (gold for 4 bands, silver otherwise).
    #[must_use]
    pub fn new(table: &'a ColorTable) -> Self {
        Self::with_policy(table, TolerancePolicy::default())
    }

    /// Creates an encoder with a custom tolerance policy.
    #[must_use]
    pub const fn with_policy(table: &'a ColorTable, policy: TolerancePolicy) -> Self {
        Self { table, policy }
    }

    /// Picks band colors for `target_ohms` on a resistor with `band_count` bands.
    ///
    /// The target is first renormalized: its leading `digit_count` significant
    /// digits become the significand (truncated, never rounded) and the
    /// remaining power of ten is left to the multiplier. The multiplier color
    /// is the one closest to `target_ohms / significand`; ties go to the
    /// color defined first in the table.
    ///
    /// # Examples
    ///
    /// ```
    /// use resistor_code::color_table::ColorTable;
    /// use resistor_code::models::BandCount;
    /// use resistor_code::services::Encoder;
    ///
    /// let table = ColorTable::load().unwrap();
    /// let result = Encoder::new(&table).encode(4700.0, BandCount::Four).unwrap();
    /// let colors: Vec<&str> = result.colors().collect();
    /// assert_eq!(colors, ["yellow", "violet", "red", "gold"]);
    /// ```
    pub fn encode(
        &self,
        target_ohms: f64,
        band_count: BandCount,
    ) -> Result<EncodeResult, ResistorError> {
        if !target_ohms.is_finite() || target_ohms <= 0.0 {
            return Err(ResistorError::InvalidResistanceValue(
                target_ohms.to_string(),
            ));
        }

        let (digits, exponent) = significant_digits(target_ohms, band_count.digit_count());
        self.check_span(target_ohms, exponent, band_count)?;

        let significand = digits
            .iter()
            .fold(0u32, |acc, &digit| acc * 10 + u32::from(digit));
        let derived_multiplier = target_ohms / f64::from(significand);

        let (multiplier_entry, multiplier) = self
            .closest_multiplier(derived_multiplier)
            .ok_or(ResistorError::ValueOutOfRange {
                ohms: target_ohms,
                bands: band_count.bands(),
                exponent,
            })?;

        debug!(
            target_ohms,
            significand,
            derived_multiplier,
            chosen = %multiplier_entry.name,
            "Selected multiplier color"
        );

        let mut bands = Vec::with_capacity(band_count.bands());
        for &digit in &digits {
            let entry = self
                .table
                .color_for_digit(digit)
                .ok_or(ResistorError::NoColorForDigit(digit))?;
            bands.push(Some(entry.name.clone()));
        }

        bands.push(Some(multiplier_entry.name.clone()));

        let tolerance = self.policy_color(
            band_count.tolerance_position(),
            self.policy.tolerance_color(band_count),
            BandRole::Tolerance,
        )?;
        bands.push(Some(tolerance));

        if band_count.has_temp_coefficient() {
            let temp_coefficient = match &self.policy.temp_coefficient {
                Some(name) => Some(self.policy_color(6, name, BandRole::TempCoefficient)?),
                None => None,
            };
            bands.push(temp_coefficient);
        }

        Ok(EncodeResult {
            bands,
            significand,
            multiplier,
            resistance_ohms: scale_significand(significand, multiplier),
        })
    }

    /// Multiplier color minimizing `|multiplier - derived|`, first in table order on ties.
    #[must_use]
    pub fn closest_multiplier(&self, derived: f64) -> Option<(&'a ColorEntry, f64)> {
        self.table
            .colors_with_role(BandRole::Multiplier)
            .into_iter()
            .filter_map(|entry| entry.multiplier.map(|m| (entry, m)))
            // min_by keeps the first of equal elements
            .min_by(|(_, a), (_, b)| (a - derived).abs().total_cmp(&(b - derived).abs()))
    }

    /// Fails when `10^exponent` lies outside the table's multiplier span.
    fn check_span(
        &self,
        target_ohms: f64,
        exponent: i32,
        band_count: BandCount,
    ) -> Result<(), ResistorError> {
        let out_of_range = ResistorError::ValueOutOfRange {
            ohms: target_ohms,
            bands: band_count.bands(),
            exponent,
        };
        let Some((lowest, highest)) = self.table.multiplier_span() else {
            return Err(out_of_range);
        };

        let scale = 10f64.powi(exponent);
        if scale < lowest * (1.0 - SPAN_EPSILON) || scale > highest * (1.0 + SPAN_EPSILON) {
            return Err(out_of_range);
        }
        Ok(())
    }

    /// Resolves a policy color and checks it can play `role`.
    fn policy_color(
        &self,
        position: usize,
        name: &str,
        role: BandRole,
    ) -> Result<String, ResistorError> {
        let entry = self.table.lookup(name)?;
        if !entry.has_role(role) {
            return Err(ResistorError::InvalidBandRole {
                position,
                color: entry.name.clone(),
                role,
            });
        }
        Ok(entry.name.clone())
    }
}

/// Leading `count` significant digits of `value` (zero-padded, truncated) and
/// the power of ten that scales them back to `value`.
///
/// Works on the shortest decimal form of the float, so 0.47 yields `[4, 7]`
/// and exponent -2 rather than suffering from binary rounding.
fn significant_digits(value: f64, count: usize) -> (Vec<u8>, i32) {
    let scientific = format!("{value:e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let mut digits: Vec<u8> = mantissa
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as u8)
        .take(count)
        .collect();
    digits.resize(count, 0);

    (digits, exponent - (count as i32 - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{parse_resistance, RgbColor};
    use crate::services::Decoder;

    fn table() -> &'static ColorTable {
        ColorTable::standard().unwrap()
    }

    fn encode(ohms: f64, band_count: BandCount) -> Result<EncodeResult, ResistorError> {
        Encoder::new(table()).encode(ohms, band_count)
    }

    fn bands(result: &EncodeResult) -> Vec<Option<&str>> {
        result.bands.iter().map(Option::as_deref).collect()
    }

    #[test]
    fn test_significant_digits() {
        assert_eq!(significant_digits(4700.0, 2), (vec![4, 7], 2));
        assert_eq!(significant_digits(4700.0, 3), (vec![4, 7, 0], 1));
        assert_eq!(significant_digits(0.47, 2), (vec![4, 7], -2));
        assert_eq!(significant_digits(10.0, 2), (vec![1, 0], 0));
        assert_eq!(significant_digits(5.0, 2), (vec![5, 0], -1));
        assert_eq!(significant_digits(123_456.0, 2), (vec![1, 2], 4));
        assert_eq!(significant_digits(1e9, 3), (vec![1, 0, 0], 7));
    }

    #[test]
    fn test_encode_four_band() {
        let result = encode(4700.0, BandCount::Four).unwrap();
        assert_eq!(
            bands(&result),
            vec![Some("yellow"), Some("violet"), Some("red"), Some("gold")]
        );
        assert_eq!(result.significand, 47);
        assert_eq!(result.multiplier, 100.0);
        assert_eq!(result.resistance_ohms, 4700.0);
        assert_eq!(result.summary(), "4,700 Ω (4.70 KΩ)");
    }

    #[test]
    fn test_encode_five_band_uses_silver() {
        let result = encode(4700.0, BandCount::Five).unwrap();
        assert_eq!(
            bands(&result),
            vec![
                Some("yellow"),
                Some("violet"),
                Some("black"),
                Some("brown"),
                Some("silver")
            ]
        );
    }

    #[test]
    fn test_encode_six_band_leaves_temp_coefficient_empty() {
        let result = encode(220.0, BandCount::Six).unwrap();
        assert_eq!(result.bands.len(), 6);
        assert_eq!(
            bands(&result),
            vec![
                Some("red"),
                Some("red"),
                Some("black"),
                Some("black"),
                Some("silver"),
                None
            ]
        );
        assert_eq!(result.colors().count(), 5);
    }

    #[test]
    fn test_encode_six_band_with_temp_coefficient_policy() {
        let policy = TolerancePolicy {
            temp_coefficient: Some("brown".to_string()),
            ..TolerancePolicy::default()
        };
        let result = Encoder::with_policy(table(), policy)
            .encode(220.0, BandCount::Six)
            .unwrap();
        assert_eq!(result.bands[5].as_deref(), Some("brown"));
    }

    #[test]
    fn test_encode_fractional_and_small_values() {
        let result = encode(0.47, BandCount::Four).unwrap();
        assert_eq!(
            bands(&result),
            vec![Some("yellow"), Some("violet"), Some("silver"), Some("gold")]
        );

        let result = encode(5.0, BandCount::Four).unwrap();
        assert_eq!(
            bands(&result),
            vec![Some("green"), Some("black"), Some("gold"), Some("gold")]
        );
    }

    #[test]
    fn test_encode_truncates_extra_digits() {
        let result = encode(123_456.0, BandCount::Four).unwrap();
        assert_eq!(result.significand, 12);
        assert_eq!(result.multiplier, 10_000.0);
        assert_eq!(result.resistance_ohms, 120_000.0);

        let result = encode(4799.0, BandCount::Four).unwrap();
        assert_eq!(result.significand, 47);
    }

    #[test]
    fn test_encode_large_values_renormalize() {
        let result = encode(47_000.0, BandCount::Four).unwrap();
        assert_eq!(
            bands(&result),
            vec![Some("yellow"), Some("violet"), Some("orange"), Some("gold")]
        );

        let result = encode(99e9, BandCount::Four).unwrap();
        assert_eq!(result.bands[2].as_deref(), Some("white"));
    }

    #[test]
    fn test_encode_out_of_range() {
        assert!(matches!(
            encode(1e11, BandCount::Four),
            Err(ResistorError::ValueOutOfRange { exponent: 10, .. })
        ));
        assert!(matches!(
            encode(0.047, BandCount::Four),
            Err(ResistorError::ValueOutOfRange { exponent: -3, .. })
        ));
        // Three digits reach one decade further up but not down
        assert!(encode(1e11, BandCount::Five).is_ok());
        assert!(encode(0.47, BandCount::Five).is_err());
    }

    #[test]
    fn test_encode_rejects_invalid_values() {
        assert_eq!(
            encode(-5.0, BandCount::Four),
            Err(ResistorError::InvalidResistanceValue("-5".to_string()))
        );
        assert!(matches!(
            encode(0.0, BandCount::Four),
            Err(ResistorError::InvalidResistanceValue(_))
        ));
        assert!(matches!(
            encode(f64::NAN, BandCount::Five),
            Err(ResistorError::InvalidResistanceValue(_))
        ));
        assert!(matches!(
            encode(f64::INFINITY, BandCount::Six),
            Err(ResistorError::InvalidResistanceValue(_))
        ));
    }

    #[test]
    fn test_round_trip_exact_values() {
        let decoder = Decoder::new(table());
        for (ohms, band_count) in [
            (4700.0, BandCount::Four),
            (10_000.0, BandCount::Four),
            (220.0, BandCount::Four),
            (1.0, BandCount::Four),
            (330_000.0, BandCount::Five),
            (2.2e6, BandCount::Five),
            (6.8e6, BandCount::Four),
        ] {
            let encoded = encode(ohms, band_count).unwrap();
            let colors: Vec<&str> = encoded.colors().collect();
            let decoded = decoder.decode(&colors, band_count).unwrap();
            assert!(
                (decoded.resistance_ohms - ohms).abs() <= ohms * 1e-9,
                "{ohms} -> {colors:?} -> {}",
                decoded.resistance_ohms
            );
        }
    }

    /// E12 series as two significant digits.
    const E12: [u32; 12] = [10, 12, 15, 18, 22, 27, 33, 39, 47, 56, 68, 82];

    const E96_SAMPLE: [&str; 16] = [
        "1.00", "1.02", "1.15", "1.37", "1.62", "2.01", "2.05", "2.49", "3.01", "3.57",
        "4.87", "4.99", "6.19", "7.68", "8.87", "9.76",
    ];

    /// Encodes `text` parsed with its unit and checks decode lands on it exactly.
    fn assert_exact_round_trip(text: &str, band_count: BandCount) {
        let decoder = Decoder::new(table());
        let ohms = parse_resistance(text).unwrap();
        let encoded = encode(ohms, band_count).unwrap();
        // An unset 6th band is skipped, so decode what is actually populated
        let colors: Vec<&str> = encoded.colors().collect();
        let populated = BandCount::from_len(colors.len()).unwrap();
        let decoded = decoder.decode(&colors, populated).unwrap();
        assert_eq!(encoded.resistance_ohms, ohms, "{text} encoded as {colors:?}");
        assert_eq!(decoded.resistance_ohms, ohms, "{text} decoded from {colors:?}");
    }

    #[test]
    fn test_round_trip_e12_series_with_units() {
        for value in E12 {
            // One decade each: 4.7, 47, 470
            let decades = [
                format!("{}.{}", value / 10, value % 10),
                value.to_string(),
                format!("{value}0"),
            ];
            for number in &decades {
                for unit in ["", "k", "M"] {
                    assert_exact_round_trip(&format!("{number}{unit}"), BandCount::Four);
                }
            }
        }
        assert_exact_round_trip("0.47", BandCount::Four);
    }

    #[test]
    fn test_round_trip_e96_sample_on_five_bands() {
        for value in E96_SAMPLE {
            for unit in ["", "k", "M"] {
                assert_exact_round_trip(&format!("{value}{unit}"), BandCount::Five);
                assert_exact_round_trip(&format!("{value}{unit}"), BandCount::Six);
            }
        }
        assert_exact_round_trip("16.1k", BandCount::Five);
        assert_exact_round_trip("953k", BandCount::Five);
    }

    #[test]
    fn test_encode_suffixed_values_keep_their_digits() {
        let result = encode(parse_resistance("8.2M").unwrap(), BandCount::Four).unwrap();
        assert_eq!(
            bands(&result),
            vec![Some("gray"), Some("red"), Some("green"), Some("gold")]
        );
        assert_eq!(result.formatted(), "8.20 MΩ");

        let result = encode(parse_resistance("2.05M").unwrap(), BandCount::Five).unwrap();
        assert_eq!(result.significand, 205);
        assert_eq!(
            bands(&result),
            vec![
                Some("red"),
                Some("black"),
                Some("green"),
                Some("yellow"),
                Some("silver")
            ]
        );

        let result = encode(parse_resistance("2.01k").unwrap(), BandCount::Five).unwrap();
        assert_eq!(result.significand, 201);
        assert_eq!(result.resistance_ohms, 2010.0);
    }

    #[test]
    fn test_round_trip_within_quantization() {
        let decoder = Decoder::new(table());
        for ohms in [1234.0, 56_789.0, 3.33, 987_654_321.0] {
            let encoded = encode(ohms, BandCount::Four).unwrap();
            let colors: Vec<&str> = encoded.colors().collect();
            let decoded = decoder.decode(&colors, BandCount::Four).unwrap();
            assert!(decoded.resistance_ohms <= ohms * (1.0 + 1e-9));
            assert!(ohms - decoded.resistance_ohms < encoded.multiplier);
        }
    }

    #[test]
    fn test_closest_multiplier_tie_prefers_table_order() {
        let entry = |name: &str, multiplier: f64| crate::color_table::ColorEntry {
            name: name.to_string(),
            digit: None,
            multiplier: Some(multiplier),
            tolerance: None,
            temp_coefficient: None,
            swatch: RgbColor::new(0, 0, 0),
            aliases: Vec::new(),
        };

        let table =
            ColorTable::from_entries(vec![entry("hundred", 100.0), entry("ten", 10.0)]).unwrap();
        let (chosen, _) = Encoder::new(&table).closest_multiplier(55.0).unwrap();
        assert_eq!(chosen.name, "hundred");

        let table =
            ColorTable::from_entries(vec![entry("ten", 10.0), entry("hundred", 100.0)]).unwrap();
        let (chosen, _) = Encoder::new(&table).closest_multiplier(55.0).unwrap();
        assert_eq!(chosen.name, "ten");
    }

    #[test]
    fn test_policy_color_must_have_role() {
        let policy = TolerancePolicy {
            four_band: "orange".to_string(),
            ..TolerancePolicy::default()
        };
        let err = Encoder::with_policy(table(), policy)
            .encode(4700.0, BandCount::Four)
            .unwrap_err();
        assert_eq!(
            err,
            ResistorError::InvalidBandRole {
                position: 4,
                color: "orange".to_string(),
                role: BandRole::Tolerance,
            }
        );

        let policy = TolerancePolicy {
            temp_coefficient: Some("gold".to_string()),
            ..TolerancePolicy::default()
        };
        assert!(Encoder::with_policy(table(), policy)
            .encode(4700.0, BandCount::Six)
            .is_err());
    }

    #[test]
    fn test_encode_is_deterministic() {
        let first = encode(33_000.0, BandCount::Five).unwrap();
        let second = encode(33_000.0, BandCount::Five).unwrap();
        assert_eq!(first, second);
    }
}
