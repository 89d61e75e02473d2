//! Swagger spec parser

use std::fs;
use std::path::Path;

use api_doc_parser_common::Api;

use super::types::SwaggerSpec;
use crate::error::{ParseError, Result};

/// Swagger 2.0 parser.
///
/// Same single-pass walk as the OpenAPI parser, against the older
/// `definitions`/`basePath` document shape.
pub struct SwaggerParser {
    /// Loaded Swagger spec
    spec: SwaggerSpec,

    /// Entrypoint URL override
    entrypoint_url: Option<String>,
}

impl SwaggerParser {
    /// Load a Swagger spec from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            ParseError::Parse(format!(
                "failed to read Swagger file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_json(&content)
    }

    /// Parse a Swagger spec from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let spec: SwaggerSpec = serde_json::from_str(json)
            .map_err(|e| ParseError::Parse(format!("failed to parse Swagger JSON: {}", e)))?;
        Ok(Self {
            spec,
            entrypoint_url: None,
        })
    }

    /// Record this entrypoint URL in the model instead of the one
    /// assembled from `schemes`/`host`/`basePath`.
    pub fn with_entrypoint(mut self, url: &str) -> Self {
        self.entrypoint_url = Some(url.to_owned());
        self
    }

    /// Convert into the normalized model.
    pub fn parse(&self) -> Result<Api> {
        super::converter::convert_swagger(&self.spec, self.entrypoint_url.as_deref())
    }

    /// Reference to the underlying spec
    pub fn spec(&self) -> &SwaggerSpec {
        &self.spec
    }
}
