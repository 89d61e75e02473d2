//! Converts a Swagger spec to the normalized model

use std::collections::BTreeMap;

use api_doc_parser_common::{
    Api, Field, FieldType, Operation, OperationType, Parameter, Resource, ResourceRef,
};

use super::types::{PathItem, PathOperation, Schema, SwaggerSpec};
use crate::error::Result;
use crate::reference::resolve_resource_references;
use crate::type_mapper::TypeMapper;

pub(crate) fn convert_swagger(spec: &SwaggerSpec, entrypoint: Option<&str>) -> Result<Api> {
    let entrypoint = entrypoint.map(str::to_owned).unwrap_or_else(|| spec.base_url());

    let mut grouped: BTreeMap<String, PathGroup> = BTreeMap::new();
    for (path, item) in &spec.paths {
        let (collection, is_item) = split_path(path);
        let group = grouped.entry(collection).or_default();
        if is_item {
            group.item = Some(item.clone());
        } else {
            group.collection = Some(item.clone());
        }
    }

    let mut resources = Vec::new();
    for (collection_path, group) in &grouped {
        if let Some(resource) = build_resource(spec, &entrypoint, collection_path, group) {
            resources.push(resource);
        }
    }

    resolve_resource_references(&mut resources);

    Ok(Api {
        entrypoint,
        title: Some(spec.info.title.clone()),
        resources,
    })
}

/// Split a path into its collection prefix and whether it addresses a
/// single item (trailing template segment).
fn split_path(path: &str) -> (String, bool) {
    match path.rsplit_once('/') {
        Some((prefix, last))
            if last.starts_with('{') && last.ends_with('}') && !prefix.is_empty() =>
        {
            (prefix.to_owned(), true)
        }
        _ => (path.trim_end_matches('/').to_owned(), false),
    }
}

#[derive(Default)]
struct PathGroup {
    collection: Option<PathItem>,
    item: Option<PathItem>,
}

fn build_resource(
    spec: &SwaggerSpec,
    entrypoint: &str,
    collection_path: &str,
    group: &PathGroup,
) -> Option<Resource> {
    let name = collection_path.trim_matches('/').to_owned();
    if name.is_empty() {
        return None;
    }
    let url = format!("{}{}", entrypoint.trim_end_matches('/'), collection_path);

    let definition_ref = item_definition_ref(group);
    let (definition_name, definition) = match &definition_ref {
        Some(ref_path) => (
            SwaggerSpec::definition_name(ref_path).map(str::to_owned),
            spec.resolve_definition(ref_path),
        ),
        None => (None, None),
    };

    let fields = definition.map(build_fields).unwrap_or_default();

    let mut operations = Vec::new();
    if let Some(item) = &group.collection {
        collect_operations(item, OperationScope::Collection, &mut operations);
    }
    if let Some(item) = &group.item {
        collect_operations(item, OperationScope::Item, &mut operations);
    }
    if operations.is_empty() && fields.is_empty() {
        return None;
    }

    let parameters = group
        .collection
        .as_ref()
        .and_then(|item| item.get.as_ref())
        .map(build_parameters)
        .unwrap_or_default();

    Some(Resource {
        name,
        url,
        id: definition_name,
        title: definition.and_then(|schema| schema.title.clone()),
        description: definition.and_then(|schema| schema.description.clone()),
        fields,
        operations,
        parameters,
        deprecated: false,
    })
}

/// `$ref` of the definition describing a single item of this resource.
fn item_definition_ref(group: &PathGroup) -> Option<String> {
    if let Some(item) = &group.item {
        if let Some(op) = &item.get {
            if let Some(ref_path) = response_definition_ref(op) {
                return Some(ref_path);
            }
        }
    }
    if let Some(item) = &group.collection {
        if let Some(op) = &item.post {
            if let Some(ref_path) = body_definition_ref(op) {
                return Some(ref_path);
            }
            if let Some(ref_path) = response_definition_ref(op) {
                return Some(ref_path);
            }
        }
    }
    None
}

fn response_definition_ref(op: &PathOperation) -> Option<String> {
    for status in ["200", "201"] {
        if let Some(response) = op.responses.get(status) {
            if let Some(schema) = &response.schema {
                if let Some(ref_path) = &schema.ref_path {
                    return Some(ref_path.clone());
                }
            }
        }
    }
    None
}

fn body_definition_ref(op: &PathOperation) -> Option<String> {
    op.parameters
        .iter()
        .find(|parameter| parameter.location == "body")
        .and_then(|parameter| parameter.schema.as_ref())
        .and_then(|schema| schema.ref_path.clone())
}

fn build_fields(definition: &Schema) -> Vec<Field> {
    let mut fields = Vec::new();
    for (name, property) in &definition.properties {
        let mut field = Field::new(name.clone());
        field.required = definition.required.contains(name);
        apply_schema(property, &mut field);
        fields.push(field);
    }
    fields
}

fn apply_schema(schema: &Schema, field: &mut Field) {
    field.description = schema.description.clone();

    if let Some(ref_path) = &schema.ref_path {
        if let Some(target) = SwaggerSpec::definition_name(ref_path) {
            field.reference = Some(ResourceRef::Unresolved(target.to_owned()));
            field.range = Some(target.to_owned());
        }
        return;
    }

    let Some(schema_type) = schema.schema_type.as_deref() else {
        return;
    };
    field.range = Some(schema_type.to_owned());
    match schema_type {
        "array" => {
            let item_type = schema
                .items
                .as_deref()
                .map(|items| {
                    if let Some(ref_path) = &items.ref_path {
                        if let Some(target) = SwaggerSpec::definition_name(ref_path) {
                            field.reference = Some(ResourceRef::Unresolved(target.to_owned()));
                        }
                        FieldType::String
                    } else {
                        scalar_type(items)
                    }
                })
                .unwrap_or(FieldType::String);
            field.field_type = Some(FieldType::List(Box::new(item_type)));
        }
        other => {
            field.field_type = Some(TypeMapper::from_json_schema(other, schema.format.as_deref()));
        }
    }
}

fn scalar_type(schema: &Schema) -> FieldType {
    match schema.schema_type.as_deref() {
        Some(schema_type) => TypeMapper::from_json_schema(schema_type, schema.format.as_deref()),
        None => FieldType::String,
    }
}

#[derive(Clone, Copy)]
enum OperationScope {
    Collection,
    Item,
}

fn collect_operations(item: &PathItem, scope: OperationScope, out: &mut Vec<Operation>) {
    let methods: [(&str, Option<&PathOperation>); 5] = [
        ("GET", item.get.as_ref()),
        ("POST", item.post.as_ref()),
        ("PUT", item.put.as_ref()),
        ("PATCH", item.patch.as_ref()),
        ("DELETE", item.delete.as_ref()),
    ];
    for (method, op) in methods {
        let Some(op) = op else { continue };
        let kind = match (scope, method) {
            (OperationScope::Collection, "POST") => OperationType::Create,
            (OperationScope::Collection, _) => OperationType::List,
            (OperationScope::Item, "PUT" | "PATCH") => OperationType::Edit,
            (OperationScope::Item, "DELETE") => OperationType::Delete,
            (OperationScope::Item, "POST") => OperationType::Create,
            (OperationScope::Item, _) => OperationType::Show,
        };
        out.push(Operation {
            name: op
                .operation_id
                .clone()
                .or_else(|| op.summary.clone())
                .unwrap_or_default(),
            kind,
            method: Some(method.to_owned()),
            expects: body_definition_ref(op),
            returns: response_definition_ref(op),
            types: Vec::new(),
            deprecated: op.deprecated,
        });
    }
}

fn build_parameters(op: &PathOperation) -> Vec<Parameter> {
    op.parameters
        .iter()
        .filter(|parameter| parameter.location == "query")
        .map(|parameter| Parameter {
            variable: parameter.name.clone(),
            range: parameter.param_type.clone(),
            required: parameter.required,
            description: parameter.description.clone().unwrap_or_default(),
            deprecated: false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_path_detects_item_templates() {
        assert_eq!(split_path("/books"), ("/books".to_owned(), false));
        assert_eq!(split_path("/books/{isbn}"), ("/books".to_owned(), true));
    }
}
