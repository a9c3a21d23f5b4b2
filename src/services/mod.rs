//! Service layer for the color-code transforms.
//!
//! Both services are stateless views over a borrowed [`ColorTable`]; the
//! free functions below run them against the process-wide standard table.

pub mod decoder;
pub mod encoder;

pub use decoder::{DecodeResult, Decoder};
pub use encoder::{EncodeResult, Encoder, TolerancePolicy};

use crate::color_table::ColorTable;
use crate::error::ResistorError;
use crate::models::BandCount;

/// Decodes band colors with the standard color table.
pub fn decode<S: AsRef<str>>(
    band_colors: &[S],
    band_count: BandCount,
) -> Result<DecodeResult, ResistorError> {
    Decoder::new(ColorTable::standard()?).decode(band_colors, band_count)
}

/// Encodes a resistance in ohms with the standard color table and default policy.
pub fn encode(target_ohms: f64, band_count: BandCount) -> Result<EncodeResult, ResistorError> {
    Encoder::new(ColorTable::standard()?).encode(target_ohms, band_count)
}
