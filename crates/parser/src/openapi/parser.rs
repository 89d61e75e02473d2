//! OpenAPI spec parser

use std::fs;
use std::path::Path;

use api_doc_parser_common::Api;

use super::types::OpenApiSpec;
use crate::error::{ParseError, Result};

/// OpenAPI 3.x parser.
///
/// A mechanical single-pass walk: resources are derived from collection
/// paths and their item schemas, producing the same normalized model as
/// the Hydra parser.
pub struct OpenApiParser {
    /// Loaded OpenAPI spec
    spec: OpenApiSpec,

    /// Entrypoint URL override
    entrypoint_url: Option<String>,
}

impl OpenApiParser {
    /// Load an OpenAPI spec from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            ParseError::Parse(format!(
                "failed to read OpenAPI file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_json(&content)
    }

    /// Parse an OpenAPI spec from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let spec: OpenApiSpec = serde_json::from_str(json)
            .map_err(|e| ParseError::Parse(format!("failed to parse OpenAPI JSON: {}", e)))?;
        Ok(Self {
            spec,
            entrypoint_url: None,
        })
    }

    /// Record this entrypoint URL in the model instead of the first
    /// declared server.
    pub fn with_entrypoint(mut self, url: &str) -> Self {
        self.entrypoint_url = Some(url.to_owned());
        self
    }

    /// Convert into the normalized model.
    pub fn parse(&self) -> Result<Api> {
        super::converter::convert_openapi(&self.spec, self.entrypoint_url.as_deref())
    }

    /// Reference to the underlying spec
    pub fn spec(&self) -> &OpenApiSpec {
        &self.spec
    }
}
