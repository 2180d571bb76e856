//! Document encoders for target config formats.
//!
//! Encoders take the transformed settings document (top-level fields intact,
//! `mcpServers` already expanded and filtered) and render the text written to
//! the target's config file.

mod json;
mod toml;

use serde_json::{Map, Value};

pub use self::toml::TomlEncoder;
pub use json::JsonEncoder;

use crate::error::Result;
use crate::target::ConfigFormat;

/// Trait for rendering a settings document into a target's native text.
pub trait ConfigEncoder: Send + Sync {
    /// Render `document` to the target format.
    fn encode(&self, document: &Map<String, Value>) -> Result<String>;

    /// Get the format this encoder produces.
    fn format(&self) -> ConfigFormat;
}

/// Create an encoder for the given format.
pub fn encoder_for_format(format: ConfigFormat) -> Box<dyn ConfigEncoder> {
    match format {
        ConfigFormat::Json => Box::new(JsonEncoder),
        ConfigFormat::Toml => Box::new(TomlEncoder),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoder_for_format_returns_correct_type() {
        let json_encoder = encoder_for_format(ConfigFormat::Json);
        assert_eq!(json_encoder.format(), ConfigFormat::Json);

        let toml_encoder = encoder_for_format(ConfigFormat::Toml);
        assert_eq!(toml_encoder.format(), ConfigFormat::Toml);
    }
}
