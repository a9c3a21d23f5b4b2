//! Resistor color-code table.
//!
//! This module provides the embedded color table, role lookups, and the
//! legal colors for each band position.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::ResistorError;
use crate::models::{BandRole, BandSpec, RgbColor};

/// One color and every role value it carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorEntry {
    /// Canonical lowercase name (e.g., "violet")
    pub name: String,
    /// Significant-digit value (0-9)
    #[serde(default)]
    pub digit: Option<u8>,
    /// Multiplier applied to the significand
    #[serde(default)]
    pub multiplier: Option<f64>,
    /// Tolerance in percent
    #[serde(default)]
    pub tolerance: Option<f64>,
    /// Temperature coefficient in ppm/K
    #[serde(default)]
    pub temp_coefficient: Option<f64>,
    /// Display color of the band
    pub swatch: RgbColor,
    /// Alternative spellings accepted by lookups (e.g., "grey")
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl ColorEntry {
    /// Value this color carries for `role`, if any.
    ///
    /// Digits are widened to `f64` so every role reads the same way.
    #[must_use]
    pub fn role_value(&self, role: BandRole) -> Option<f64> {
        match role {
            BandRole::Digit => self.digit.map(f64::from),
            BandRole::Multiplier => self.multiplier,
            BandRole::Tolerance => self.tolerance,
            BandRole::TempCoefficient => self.temp_coefficient,
        }
    }

    /// Whether this color can be used for a band of the given role.
    #[must_use]
    pub fn has_role(&self, role: BandRole) -> bool {
        self.role_value(role).is_some()
    }

    /// Name with the first letter capitalized (e.g., "Violet").
    #[must_use]
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Schema of colors.json.
#[derive(Debug, Clone, Deserialize)]
struct ColorTableData {
    version: String,
    colors: Vec<ColorEntry>,
}

/// Immutable registry of band colors.
///
/// Entries keep their definition order, which is the tie-break order for
/// every "first match" search. Lookups by name or alias are
/// case-insensitive.
#[derive(Debug, Clone)]
pub struct ColorTable {
    /// Data version from colors.json
    version: String,
    /// Entries in table order
    entries: Vec<ColorEntry>,
    /// Lowercase name or alias -> entry index
    lookup: HashMap<String, usize>,
}

impl ColorTable {
    /// Loads the standard color table from the embedded colors.json.
    pub fn load() -> Result<Self> {
        let json_data = include_str!("colors.json");
        Self::from_json(json_data).context("Failed to load embedded colors.json")
    }

    /// Process-wide standard table, loaded on first use.
    pub fn standard() -> Result<&'static Self, ResistorError> {
        static STANDARD: OnceLock<ColorTable> = OnceLock::new();

        if let Some(table) = STANDARD.get() {
            return Ok(table);
        }

        let table =
            Self::load().map_err(|e| ResistorError::TableUnavailable(format!("{e:#}")))?;
        Ok(STANDARD.get_or_init(|| table))
    }

    /// Parses a table from JSON in the colors.json schema.
    pub fn from_json(json: &str) -> Result<Self> {
        let data: ColorTableData =
            serde_json::from_str(json).context("Failed to parse color table JSON")?;
        let mut table = Self::from_entries(data.colors)?;
        table.version = data.version;
        Ok(table)
    }

    /// Builds a table from entries, validating the role invariants:
    ///
    /// - names and aliases are unique (case-insensitive)
    /// - digits are 0-9 and unique
    /// - multipliers are positive, finite, and unique
    /// - tolerances and temperature coefficients are positive and finite
    pub fn from_entries(entries: Vec<ColorEntry>) -> Result<Self> {
        let mut lookup = HashMap::new();
        let mut seen_digits: HashMap<u8, &str> = HashMap::new();
        let mut seen_multipliers: Vec<(f64, &str)> = Vec::new();

        for (idx, entry) in entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                anyhow::bail!("Color at index {idx} has an empty name");
            }

            for key in std::iter::once(&entry.name).chain(entry.aliases.iter()) {
                let key = key.trim().to_lowercase();
                if lookup.insert(key.clone(), idx).is_some() {
                    anyhow::bail!("Duplicate color name or alias '{key}'");
                }
            }

            if let Some(digit) = entry.digit {
                if digit > 9 {
                    anyhow::bail!("Color '{}' has digit {digit}, expected 0-9", entry.name);
                }
                if let Some(other) = seen_digits.insert(digit, &entry.name) {
                    anyhow::bail!(
                        "Digit {digit} is defined by both '{other}' and '{}'",
                        entry.name
                    );
                }
            }

            if let Some(multiplier) = entry.multiplier {
                if !multiplier.is_finite() || multiplier <= 0.0 {
                    anyhow::bail!(
                        "Color '{}' has invalid multiplier {multiplier}",
                        entry.name
                    );
                }
                if let Some((_, other)) = seen_multipliers.iter().find(|(m, _)| *m == multiplier)
                {
                    anyhow::bail!(
                        "Multiplier {multiplier} is defined by both '{other}' and '{}'",
                        entry.name
                    );
                }
                seen_multipliers.push((multiplier, &entry.name));
            }

            for (role, value) in [
                (BandRole::Tolerance, entry.tolerance),
                (BandRole::TempCoefficient, entry.temp_coefficient),
            ] {
                if let Some(value) = value {
                    if !value.is_finite() || value <= 0.0 {
                        anyhow::bail!("Color '{}' has invalid {role} {value}", entry.name);
                    }
                }
            }
        }

        Ok(Self {
            version: String::new(),
            entries,
            lookup,
        })
    }

    /// Finds a color by name or alias, failing with `UnknownColor`.
    pub fn lookup(&self, name: &str) -> Result<&ColorEntry, ResistorError> {
        self.get(name)
            .ok_or_else(|| ResistorError::UnknownColor(name.trim().to_string()))
    }

    /// Finds a color by name or alias.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ColorEntry> {
        let idx = self.lookup.get(&name.trim().to_lowercase())?;
        self.entries.get(*idx)
    }

    /// Colors that can play `role`, in table order.
    #[must_use]
    pub fn colors_with_role(&self, role: BandRole) -> Vec<&ColorEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.has_role(role))
            .collect()
    }

    /// First color in table order whose digit value is `digit`.
    #[must_use]
    pub fn color_for_digit(&self, digit: u8) -> Option<&ColorEntry> {
        self.colors_with_role(BandRole::Digit)
            .into_iter()
            .find(|entry| entry.digit == Some(digit))
    }

    /// Legal colors for a band position.
    #[must_use]
    pub fn options_for(&self, spec: &BandSpec) -> Vec<&ColorEntry> {
        self.colors_with_role(spec.role)
    }

    /// Smallest and largest multiplier in the table.
    #[must_use]
    pub fn multiplier_span(&self) -> Option<(f64, f64)> {
        self.entries
            .iter()
            .filter_map(|entry| entry.multiplier)
            .fold(None, |span, m| match span {
                None => Some((m, m)),
                Some((lo, hi)) => Some((lo.min(m), hi.max(m))),
            })
    }

    /// All entries in table order.
    #[must_use]
    pub fn entries(&self) -> &[ColorEntry] {
        &self.entries
    }

    /// Data version of the loaded table.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Number of colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no colors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
