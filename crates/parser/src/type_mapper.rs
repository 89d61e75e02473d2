//! Type mapping from format-specific datatypes to the normalized `FieldType`

use api_doc_parser_common::FieldType;

const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

/// Maps datatype names from the source formats to [`FieldType`].
pub struct TypeMapper;

impl TypeMapper {
    /// Map an RDF range IRI (typically an XSD datatype) to a field type.
    ///
    /// Class IRIs outside the XSD namespace return `None`: they describe
    /// relations, not scalar types.
    pub fn from_range(range: &str) -> Option<FieldType> {
        let local = range.strip_prefix(XSD)?;
        Some(match local {
            "string" => FieldType::String,
            "integer" | "int" | "long" | "short" | "byte" | "nonNegativeInteger"
            | "positiveInteger" => FieldType::Integer,
            "float" | "double" | "decimal" => FieldType::Float,
            "boolean" => FieldType::Boolean,
            "date" => FieldType::Date,
            "dateTime" => FieldType::DateTime,
            _ => return None,
        })
    }

    /// Map a JSON-schema scalar type (OpenAPI, Swagger) to a field type.
    pub fn from_json_schema(schema_type: &str, format: Option<&str>) -> FieldType {
        match schema_type {
            "string" => match format {
                Some("date") => FieldType::Date,
                Some("date-time") => FieldType::DateTime,
                _ => FieldType::String,
            },
            "integer" => FieldType::Integer,
            "number" => FieldType::Float,
            "boolean" => FieldType::Boolean,
            "object" => FieldType::Object,
            _ => FieldType::String,
        }
    }

    /// Map a GraphQL scalar name to a field type.
    pub fn from_graphql(scalar: &str) -> FieldType {
        match scalar {
            "Int" => FieldType::Integer,
            "Float" => FieldType::Float,
            "Boolean" => FieldType::Boolean,
            // String, ID and custom scalars
            _ => FieldType::String,
        }
    }
}
