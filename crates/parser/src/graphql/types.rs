//! GraphQL introspection type definitions
//!
//! The standard introspection result shape, as returned by the
//! `__schema` query.

use serde::Deserialize;

/// Introspection result with the surrounding `data` envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct IntrospectionEnvelope {
    pub data: IntrospectionResult,
}

/// Bare introspection result.
#[derive(Debug, Clone, Deserialize)]
pub struct IntrospectionResult {
    #[serde(rename = "__schema")]
    pub schema: IntrospectionSchema,
}

/// The `__schema` object.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionSchema {
    #[serde(default)]
    pub query_type: Option<TypeName>,
    #[serde(default)]
    pub mutation_type: Option<TypeName>,
    #[serde(default)]
    pub subscription_type: Option<TypeName>,
    #[serde(default)]
    pub types: Vec<FullType>,
}

/// Name-only type reference used for the root types.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeName {
    pub name: String,
}

/// A type declared by the schema.
#[derive(Debug, Clone, Deserialize)]
pub struct FullType {
    /// OBJECT, SCALAR, ENUM, INTERFACE, UNION, INPUT_OBJECT
    pub kind: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Option<Vec<IntrospectionField>>,
}

/// A field of an object type.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionField {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub field_type: TypeRef,
    #[serde(default)]
    pub is_deprecated: bool,
    #[serde(default)]
    pub deprecation_reason: Option<String>,
}

/// A (possibly wrapped) type reference.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRef {
    pub kind: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub of_type: Option<Box<TypeRef>>,
}

impl TypeRef {
    /// Unwrap NON_NULL/LIST wrappers down to the named type.
    pub fn unwrap_modifiers(&self) -> &TypeRef {
        match (self.kind.as_str(), &self.of_type) {
            ("NON_NULL" | "LIST", Some(inner)) => inner.unwrap_modifiers(),
            _ => self,
        }
    }

    /// Whether the outermost wrapper makes the field non-null.
    pub fn is_non_null(&self) -> bool {
        self.kind == "NON_NULL"
    }

    /// Whether a LIST wrapper appears anywhere around the named type.
    pub fn is_list(&self) -> bool {
        match self.kind.as_str() {
            "LIST" => true,
            "NON_NULL" => self
                .of_type
                .as_deref()
                .map(TypeRef::is_list)
                .unwrap_or(false),
            _ => false,
        }
    }
}
