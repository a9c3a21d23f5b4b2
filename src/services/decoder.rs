//! Forward transform: band colors to resistance and tolerance.

use serde::Serialize;
use tracing::debug;

use crate::color_table::{ColorEntry, ColorTable};
use crate::error::ResistorError;
use crate::models::{
    format_ohms_grouped, format_resistance, scale_significand, BandCount, BandRole,
};

/// Outcome of decoding a band sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodeResult {
    /// Significand times multiplier, in ohms
    pub resistance_ohms: f64,
    /// Tolerance in percent
    pub tolerance_percent: f64,
    /// Temperature coefficient in ppm/K (6-band only, display-only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_coefficient: Option<f64>,
    /// Resistance in the largest unit below 1000, e.g. "4.70 KΩ"
    pub formatted: String,
}

impl DecodeResult {
    /// Full ohm value plus the scaled form, e.g. "4,700 Ω (4.70 KΩ)".
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} ({})",
            format_ohms_grouped(self.resistance_ohms),
            self.formatted
        )
    }
}

/// Decodes band colors against a color table.
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'a> {
    table: &'a ColorTable,
}

impl<'a> Decoder<'a> {
    /// Creates a decoder over `table`.
    #[must_use]
    pub const fn new(table: &'a ColorTable) -> Self {
        Self { table }
    }

    /// Decodes `band_colors` (in band order) for a resistor with `band_count` bands.
    ///
    /// The significand is the digit bands read as a base-10 integer; the
    /// resistance is that significand times the multiplier band. The 6th band,
    /// when present, is validated and reported but does not change the
    /// resistance.
    ///
    /// # Examples
    ///
    /// ```
    /// use resistor_code::color_table::ColorTable;
    /// use resistor_code::models::BandCount;
    /// use resistor_code::services::Decoder;
    ///
    /// let table = ColorTable::load().unwrap();
    /// let result = Decoder::new(&table)
    ///     .decode(&["yellow", "violet", "red", "gold"], BandCount::Four)
    ///     .unwrap();
    /// assert_eq!(result.resistance_ohms, 4700.0);
    /// assert_eq!(result.tolerance_percent, 5.0);
    /// assert_eq!(result.formatted, "4.70 KΩ");
    /// ```
    pub fn decode<S: AsRef<str>>(
        &self,
        band_colors: &[S],
        band_count: BandCount,
    ) -> Result<DecodeResult, ResistorError> {
        if band_colors.len() != band_count.bands() {
            return Err(ResistorError::BandCountMismatch {
                expected: band_count.bands(),
                actual: band_colors.len(),
            });
        }

        let digit_count = band_count.digit_count();

        let mut significand: u32 = 0;
        for (index, color) in band_colors[..digit_count].iter().enumerate() {
            let entry = self.entry_for(index + 1, color.as_ref(), BandRole::Digit)?;
            let digit = entry.digit.map_or(0, u32::from);
            significand = significand * 10 + digit;
        }

        let multiplier = self.role_value(
            band_count.multiplier_position(),
            band_colors[digit_count].as_ref(),
            BandRole::Multiplier,
        )?;

        let tolerance_percent = self.role_value(
            band_count.tolerance_position(),
            band_colors[digit_count + 1].as_ref(),
            BandRole::Tolerance,
        )?;

        let temp_coefficient = if band_count.has_temp_coefficient() {
            Some(self.role_value(
                6,
                band_colors[digit_count + 2].as_ref(),
                BandRole::TempCoefficient,
            )?)
        } else {
            None
        };

        let resistance_ohms = scale_significand(significand, multiplier);
        debug!(significand, multiplier, resistance_ohms, "Decoded band sequence");

        Ok(DecodeResult {
            resistance_ohms,
            tolerance_percent,
            temp_coefficient,
            formatted: format_resistance(resistance_ohms),
        })
    }

    /// Looks up `color` and checks it can play `role` at `position`.
    fn entry_for(
        &self,
        position: usize,
        color: &str,
        role: BandRole,
    ) -> Result<&'a ColorEntry, ResistorError> {
        let entry = self.table.lookup(color)?;
        if entry.has_role(role) {
            Ok(entry)
        } else {
            Err(ResistorError::InvalidBandRole {
                position,
                color: entry.name.clone(),
                role,
            })
        }
    }

    fn role_value(
        &self,
        position: usize,
        color: &str,
        role: BandRole,
    ) -> Result<f64, ResistorError> {
        let entry = self.entry_for(position, color, role)?;
        entry
            .role_value(role)
            .ok_or_else(|| ResistorError::InvalidBandRole {
                position,
                color: entry.name.clone(),
                role,
            })
    }
}
