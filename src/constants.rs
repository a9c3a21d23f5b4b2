//! Application-wide constants.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Resistor Code";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "resistor-code";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "ResistorCode";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "RESISTOR_CODE_CONFIG_DIR";
