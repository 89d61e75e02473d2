//! Converts a GraphQL introspection schema to the normalized model

use api_doc_parser_common::{Api, Field, FieldType, Resource, ResourceRef};

use super::types::{IntrospectionField, IntrospectionSchema};
use crate::error::Result;
use crate::reference::resolve_resource_references;
use crate::type_mapper::TypeMapper;

pub(crate) fn convert_graphql(schema: &IntrospectionSchema, entrypoint: &str) -> Result<Api> {
    let roots: Vec<&str> = [
        &schema.query_type,
        &schema.mutation_type,
        &schema.subscription_type,
    ]
    .into_iter()
    .filter_map(|root| root.as_ref().map(|root| root.name.as_str()))
    .collect();

    let mut resources = Vec::new();
    for full_type in &schema.types {
        if full_type.kind != "OBJECT" {
            continue;
        }
        let Some(name) = full_type.name.as_deref() else {
            continue;
        };
        // Introspection machinery and the operation roots are not
        // resources.
        if name.starts_with("__") || roots.contains(&name) {
            continue;
        }

        let fields = full_type
            .fields
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .map(build_field)
            .collect();

        resources.push(Resource {
            name: name.to_owned(),
            url: format!("{entrypoint}#{name}"),
            id: Some(name.to_owned()),
            title: None,
            description: full_type.description.clone(),
            fields,
            // Introspection describes types, not HTTP verbs.
            operations: Vec::new(),
            parameters: Vec::new(),
            deprecated: false,
        });
    }

    resolve_resource_references(&mut resources);

    Ok(Api {
        entrypoint: entrypoint.to_owned(),
        title: None,
        resources,
    })
}

fn build_field(field: &IntrospectionField) -> Field {
    let named = field.field_type.unwrap_modifiers();

    let mut out = Field::new(field.name.clone());
    out.required = field.field_type.is_non_null();
    out.description = field.description.clone().or_else(|| {
        field
            .deprecation_reason
            .as_ref()
            .map(|reason| format!("Deprecated: {reason}"))
    });
    out.deprecated = field.is_deprecated;
    out.range = named.name.clone();

    match named.kind.as_str() {
        "OBJECT" => {
            if let Some(target) = &named.name {
                out.reference = Some(ResourceRef::Unresolved(target.clone()));
            }
        }
        "SCALAR" | "ENUM" => {
            let scalar = named.name.as_deref().unwrap_or("String");
            let base = TypeMapper::from_graphql(scalar);
            out.field_type = Some(if field.field_type.is_list() {
                FieldType::List(Box::new(base))
            } else {
                base
            });
        }
        _ => {}
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field_from(value: serde_json::Value) -> IntrospectionField {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn non_null_scalars_become_required_typed_fields() {
        let field = field_from(json!({
            "name": "isbn",
            "type": {
                "kind": "NON_NULL",
                "ofType": { "kind": "SCALAR", "name": "String" }
            }
        }));

        let built = build_field(&field);
        assert!(built.required);
        assert_eq!(built.field_type, Some(FieldType::String));
        assert_eq!(built.reference, None);
    }

    #[test]
    fn object_fields_become_pending_references() {
        let field = field_from(json!({
            "name": "book",
            "type": { "kind": "OBJECT", "name": "Book" }
        }));

        let built = build_field(&field);
        assert!(!built.required);
        assert_eq!(
            built.reference,
            Some(ResourceRef::Unresolved("Book".to_owned()))
        );
    }
}
