//! JSON encoder (claude-desktop, gemini, claude-code).

use serde_json::{Map, Value};

use super::ConfigEncoder;
use crate::error::{Error, Result};
use crate::target::ConfigFormat;

/// Renders the full document as 2-space-indented JSON.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonEncoder;

impl ConfigEncoder for JsonEncoder {
    fn encode(&self, document: &Map<String, Value>) -> Result<String> {
        serde_json::to_string_pretty(document).map_err(|e| Error::encode("document", e.to_string()))
    }

    fn format(&self) -> ConfigFormat {
        ConfigFormat::Json
    }
}
