//! GraphQL introspection parser

use std::fs;
use std::path::Path;

use api_doc_parser_common::Api;

use super::types::{IntrospectionEnvelope, IntrospectionResult, IntrospectionSchema};
use crate::error::{ParseError, Result};

/// GraphQL introspection parser.
///
/// Converts a standard introspection result into the normalized model:
/// every non-root object type becomes a resource.
pub struct GraphQlParser {
    /// Loaded introspection schema
    schema: IntrospectionSchema,

    /// Entrypoint URL recorded in the model (GraphQL documents carry none)
    entrypoint_url: String,
}

impl GraphQlParser {
    /// Load an introspection result from a file path
    pub fn from_file<P: AsRef<Path>>(path: P, entrypoint_url: &str) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            ParseError::Parse(format!(
                "failed to read introspection file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_json(&content, entrypoint_url)
    }

    /// Parse an introspection result from a JSON string, with or without
    /// the surrounding `data` envelope.
    pub fn from_json(json: &str, entrypoint_url: &str) -> Result<Self> {
        let schema = match serde_json::from_str::<IntrospectionEnvelope>(json) {
            Ok(envelope) => envelope.data.schema,
            Err(_) => {
                serde_json::from_str::<IntrospectionResult>(json)
                    .map_err(|e| {
                        ParseError::Parse(format!(
                            "failed to parse GraphQL introspection JSON: {}",
                            e
                        ))
                    })?
                    .schema
            }
        };
        Ok(Self {
            schema,
            entrypoint_url: entrypoint_url.to_owned(),
        })
    }

    /// Convert into the normalized model.
    pub fn parse(&self) -> Result<Api> {
        super::converter::convert_graphql(&self.schema, &self.entrypoint_url)
    }

    /// Reference to the underlying schema
    pub fn schema(&self) -> &IntrospectionSchema {
        &self.schema
    }
}
