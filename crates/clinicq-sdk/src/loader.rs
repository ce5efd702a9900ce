//! YAML / JSON document loading

use crate::error::{Result, SdkError};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Supported document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            "json" => Ok(DocumentFormat::Json),
            other => Err(SdkError::UnsupportedFormat(if other.is_empty() {
                path.display().to_string()
            } else {
                other.to_string()
            })),
        }
    }

    /// Parse a document
    pub fn parse<T: DeserializeOwned>(&self, content: &str) -> Result<T> {
        match self {
            DocumentFormat::Yaml => Ok(serde_yaml::from_str(content)?),
            DocumentFormat::Json => Ok(serde_json::from_str(content)?),
        }
    }
}

/// Read and parse a file, choosing the format from its extension
pub fn load_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let format = DocumentFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), ?format, "loading document");
    format.parse(&content)
}
