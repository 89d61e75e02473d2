//! Swagger 2.0 type definitions
//!
//! Simplified representation focusing on resource extraction. Unlike
//! OpenAPI 3, schemas nest directly (no media-type indirection) and live
//! under `definitions`.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Swagger document root
#[derive(Debug, Clone, Deserialize)]
pub struct SwaggerSpec {
    /// Swagger version (e.g. "2.0")
    pub swagger: String,

    /// API metadata
    pub info: Info,

    #[serde(default)]
    pub host: Option<String>,

    #[serde(rename = "basePath", default)]
    pub base_path: Option<String>,

    #[serde(default)]
    pub schemes: Vec<String>,

    /// API paths (endpoints)
    #[serde(default)]
    pub paths: BTreeMap<String, PathItem>,

    /// Reusable schema definitions
    #[serde(default)]
    pub definitions: BTreeMap<String, Schema>,
}

/// API information
#[derive(Debug, Clone, Deserialize)]
pub struct Info {
    pub title: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Operations declared for one path
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathItem {
    #[serde(default)]
    pub get: Option<PathOperation>,
    #[serde(default)]
    pub post: Option<PathOperation>,
    #[serde(default)]
    pub put: Option<PathOperation>,
    #[serde(default)]
    pub patch: Option<PathOperation>,
    #[serde(default)]
    pub delete: Option<PathOperation>,
}

/// One HTTP operation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathOperation {
    #[serde(default)]
    pub operation_id: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parameters: Vec<SwaggerParameter>,
    #[serde(default)]
    pub responses: BTreeMap<String, Response>,
    #[serde(default)]
    pub deprecated: bool,
}

/// Parameter declared on an operation.
///
/// Body parameters carry a `schema`; primitive parameters carry `type`.
#[derive(Debug, Clone, Deserialize)]
pub struct SwaggerParameter {
    pub name: String,

    /// Location: query, header, path, formData, body
    #[serde(rename = "in")]
    pub location: String,

    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(rename = "type", default)]
    pub param_type: Option<String>,
    #[serde(default)]
    pub schema: Option<Schema>,
}

/// Response
#[derive(Debug, Clone, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub schema: Option<Schema>,
}

/// Schema definition
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Schema {
    #[serde(rename = "type", default)]
    pub schema_type: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, Schema>,
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default)]
    pub items: Option<Box<Schema>>,
    #[serde(rename = "$ref", default)]
    pub ref_path: Option<String>,
}

impl SwaggerSpec {
    /// Get a definition by reference path
    /// e.g. "#/definitions/Book" -> returns the Book schema
    pub fn resolve_definition(&self, ref_path: &str) -> Option<&Schema> {
        self.definitions.get(Self::definition_name(ref_path)?)
    }

    /// Definition name behind "#/definitions/X"
    pub fn definition_name(ref_path: &str) -> Option<&str> {
        ref_path.strip_prefix("#/definitions/")
    }

    /// Base URL assembled from `schemes`, `host` and `basePath`.
    pub fn base_url(&self) -> String {
        let scheme = self.schemes.first().map(String::as_str).unwrap_or("https");
        match &self.host {
            Some(host) => format!(
                "{}://{}{}",
                scheme,
                host,
                self.base_path.as_deref().unwrap_or("")
            ),
            None => self.base_path.clone().unwrap_or_else(|| "/".to_owned()),
        }
    }
}
