//! CLI command handlers.
//!
//! Each subcommand parses its arguments, calls into the color-code core,
//! and renders the result as text or JSON.

pub mod bands;
pub mod colors;
pub mod common;
pub mod config;
pub mod decode;
pub mod encode;

// Re-export types used by main.rs and tests
pub use bands::BandsArgs;
pub use colors::ColorsArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use decode::DecodeArgs;
pub use encode::EncodeArgs;
