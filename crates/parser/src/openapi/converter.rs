//! Converts an OpenAPI spec to the normalized model
//!
//! Collection paths (`/books`) and their item paths (`/books/{id}`) are
//! grouped into one resource each; the item schema supplies the fields.
//! Schema references between resources resolve in a local second pass,
//! the same way the Hydra parser resolves class IRIs.

use std::collections::BTreeMap;

use api_doc_parser_common::{
    Api, Field, FieldType, Operation, OperationType, Parameter, Resource, ResourceRef,
};

use super::types::{MediaType, OpenApiSpec, PathItem, PathOperation, Schema, SchemaOrRef};
use crate::error::Result;
use crate::reference::resolve_resource_references;
use crate::type_mapper::TypeMapper;

pub(crate) fn convert_openapi(spec: &OpenApiSpec, entrypoint: Option<&str>) -> Result<Api> {
    let entrypoint = entrypoint
        .map(str::to_owned)
        .or_else(|| spec.servers.first().map(|server| server.url.clone()))
        .unwrap_or_else(|| "/".to_owned());

    // Group item paths under their collection path.
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
    spec: &OpenApiSpec,
    entrypoint: &str,
    collection_path: &str,
    group: &PathGroup,
) -> Option<Resource> {
    let name = collection_path.trim_matches('/').to_owned();
    if name.is_empty() {
        return None;
    }
    let url = format!("{}{}", entrypoint.trim_end_matches('/'), collection_path);

    // The item schema names the resource's class and supplies its fields.
    let schema_ref = item_schema_ref(group);
    let (schema_name, schema) = match &schema_ref {
        Some(ref_path) => (
            OpenApiSpec::schema_ref_name(ref_path).map(str::to_owned),
            spec.resolve_schema_ref(ref_path),
        ),
        None => (None, None),
    };

    let fields = schema.map(build_fields).unwrap_or_default();

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
        id: schema_name,
        title: schema.and_then(|s| s.title.clone()),
        description: schema.and_then(|s| s.description.clone()),
        fields,
        operations,
        parameters,
        deprecated: false,
    })
}

/// `$ref` of the schema describing a single item of this resource.
fn item_schema_ref(group: &PathGroup) -> Option<String> {
    // Prefer the item GET response; fall back to the create payload.
    if let Some(item) = &group.item {
        if let Some(op) = &item.get {
            if let Some(ref_path) = response_schema_ref(op) {
                return Some(ref_path);
            }
        }
    }
    if let Some(item) = &group.collection {
        if let Some(op) = &item.post {
            if let Some(body) = &op.request_body {
                if let Some(ref_path) = media_schema_ref(body.content.values().next()) {
                    return Some(ref_path);
                }
            }
            if let Some(ref_path) = response_schema_ref(op) {
                return Some(ref_path);
            }
        }
    }
    None
}

fn response_schema_ref(op: &PathOperation) -> Option<String> {
    for status in ["200", "201"] {
        if let Some(response) = op.responses.get(status) {
            if let Some(ref_path) = media_schema_ref(response.content.values().next()) {
                return Some(ref_path);
            }
        }
    }
    None
}

fn media_schema_ref(media: Option<&MediaType>) -> Option<String> {
    match media?.schema.as_ref()? {
        SchemaOrRef::Reference { ref_path } => Some(ref_path.clone()),
        SchemaOrRef::Schema(schema) => schema.ref_path.clone(),
    }
}

fn build_fields(schema: &Schema) -> Vec<Field> {
    let mut fields = Vec::new();
    for (name, property) in &schema.properties {
        let mut field = Field::new(name.clone());
        field.required = schema.required.contains(name);
        match property {
            SchemaOrRef::Reference { ref_path } => {
                if let Some(target) = OpenApiSpec::schema_ref_name(ref_path) {
                    field.reference = Some(ResourceRef::Unresolved(target.to_owned()));
                    field.range = Some(target.to_owned());
                }
            }
            SchemaOrRef::Schema(property_schema) => {
                apply_schema(property_schema, &mut field);
            }
        }
        fields.push(field);
    }
    fields
}

fn apply_schema(schema: &Schema, field: &mut Field) {
    field.description = schema.description.clone();
    field.deprecated = schema.deprecated;

    if let Some(ref_path) = &schema.ref_path {
        if let Some(target) = OpenApiSpec::schema_ref_name(ref_path) {
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
                .map(|items| match items {
                    SchemaOrRef::Reference { ref_path } => {
                        if let Some(target) = OpenApiSpec::schema_ref_name(ref_path) {
                            field.reference = Some(ResourceRef::Unresolved(target.to_owned()));
                        }
                        FieldType::String
                    }
                    SchemaOrRef::Schema(inner) => scalar_type(inner),
                })
                .unwrap_or(FieldType::String);
            field.field_type = Some(FieldType::List(Box::new(item_type)));
        }
        "object" => {
            if let Some(additional) = schema.additional_properties.as_deref() {
                let value_type = match additional {
                    SchemaOrRef::Schema(inner) => scalar_type(inner),
                    SchemaOrRef::Reference { .. } => FieldType::String,
                };
                field.field_type = Some(FieldType::Map(
                    Box::new(FieldType::String),
                    Box::new(value_type),
                ));
            } else {
                field.field_type = Some(FieldType::Object);
            }
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
            expects: op
                .request_body
                .as_ref()
                .and_then(|body| media_schema_ref(body.content.values().next())),
            returns: response_schema_ref(op),
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
            range: parameter
                .schema
                .as_ref()
                .and_then(|schema| schema.schema_type.clone()),
            required: parameter.required,
            description: parameter.description.clone().unwrap_or_default(),
            deprecated: parameter.deprecated,
        })
        .collect()
}
