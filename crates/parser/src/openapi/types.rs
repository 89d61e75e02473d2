//! OpenAPI 3.0 type definitions
//!
//! Simplified representation focusing on resource extraction. Maps are
//! ordered so repeated parses of the same document yield identical
//! models.

use serde::Deserialize;
use std::collections::BTreeMap;

/// OpenAPI document root
#[derive(Debug, Clone, Deserialize)]
pub struct OpenApiSpec {
    /// OpenAPI version (e.g. "3.0.0")
    pub openapi: String,

    /// API metadata
    pub info: Info,

    /// Declared servers; the first one is the default entrypoint
    #[serde(default)]
    pub servers: Vec<Server>,

    /// API paths (endpoints)
    #[serde(default)]
    pub paths: BTreeMap<String, PathItem>,

    /// Reusable components
    #[serde(default)]
    pub components: Option<Components>,
}

/// API information
#[derive(Debug, Clone, Deserialize)]
pub struct Info {
    pub title: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Server information
#[derive(Debug, Clone, Deserialize)]
pub struct Server {
    pub url: String,
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
    pub parameters: Vec<QueryParameter>,
    #[serde(default)]
    pub request_body: Option<RequestBody>,
    #[serde(default)]
    pub responses: BTreeMap<String, Response>,
    #[serde(default)]
    pub deprecated: bool,
}

/// Parameter declared on an operation
#[derive(Debug, Clone, Deserialize)]
pub struct QueryParameter {
    pub name: String,

    /// Location: query, header, path, cookie
    #[serde(rename = "in")]
    pub location: String,

    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub schema: Option<Schema>,
    #[serde(default)]
    pub deprecated: bool,
}

/// Request body
#[derive(Debug, Clone, Deserialize)]
pub struct RequestBody {
    pub content: BTreeMap<String, MediaType>,
}

/// Response
#[derive(Debug, Clone, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub content: BTreeMap<String, MediaType>,
}

/// Media type
#[derive(Debug, Clone, Deserialize)]
pub struct MediaType {
    #[serde(default)]
    pub schema: Option<SchemaOrRef>,
}

/// Schema or reference
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SchemaOrRef {
    /// Reference to a component schema
    Reference {
        #[serde(rename = "$ref")]
        ref_path: String,
    },

    /// Inline schema
    Schema(Box<Schema>),
}

/// Schema definition
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Schema {
    /// Type: string, number, integer, boolean, array, object
    #[serde(rename = "type")]
    #[serde(default)]
    pub schema_type: Option<String>,

    /// Format (e.g. int64, date-time)
    #[serde(default)]
    pub format: Option<String>,

    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,

    /// Properties (for object type)
    #[serde(default)]
    pub properties: BTreeMap<String, SchemaOrRef>,

    /// Required property names
    #[serde(default)]
    pub required: Vec<String>,

    /// Items schema (for array type)
    #[serde(default)]
    pub items: Option<Box<SchemaOrRef>>,

    /// Additional properties (for map-like objects)
    #[serde(rename = "additionalProperties")]
    #[serde(default)]
    pub additional_properties: Option<Box<SchemaOrRef>>,

    /// Reference
    #[serde(rename = "$ref")]
    #[serde(default)]
    pub ref_path: Option<String>,

    #[serde(default)]
    pub deprecated: bool,
}

/// Reusable components
#[derive(Debug, Clone, Deserialize)]
pub struct Components {
    #[serde(default)]
    pub schemas: BTreeMap<String, Schema>,
}

impl OpenApiSpec {
    /// Get a schema by reference path
    /// e.g. "#/components/schemas/Book" -> returns the Book schema
    pub fn resolve_schema_ref(&self, ref_path: &str) -> Option<&Schema> {
        let name = Self::schema_ref_name(ref_path)?;
        self.components.as_ref().and_then(|c| c.schemas.get(name))
    }

    /// Schema name behind "#/components/schemas/X"
    pub fn schema_ref_name(ref_path: &str) -> Option<&str> {
        ref_path.strip_prefix("#/components/schemas/")
    }
}
