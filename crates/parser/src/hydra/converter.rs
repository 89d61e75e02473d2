//! Expanded-documentation walk
//!
//! Turns the expanded entrypoint/documentation pair into the normalized
//! model. Construction runs in two passes: the first builds every
//! resource with links recorded as pending IRIs (forward references
//! between resources are common), the second rewrites those IRIs into
//! indices over the finished resource list.

use tracing::warn;

use api_doc_parser_common::{Api, Field, Operation, OperationType, Resource, ResourceRef};

use super::parser::EntrypointAndDocs;
use super::vocab;
use crate::error::{ParseError, Result};
use crate::jsonld::Node;
use crate::reference::resolve_resource_references;
use crate::type_mapper::TypeMapper;

/// Build the normalized API from the fetched pair.
pub(crate) fn build_api(fetched: &EntrypointAndDocs) -> Result<Api> {
    let entrypoint_node = fetched
        .entrypoint
        .first()
        .ok_or_else(|| ParseError::Parse("the API entrypoint document is empty".to_owned()))?;
    let entrypoint_type = entrypoint_node
        .types
        .first()
        .ok_or(ParseError::EntrypointMissingType)?;

    let docs_node = fetched.docs.first().ok_or(ParseError::MissingSupportedClass)?;
    let title = docs_node.first_str(vocab::HYDRA_TITLE).map(str::to_owned);

    let entrypoint_class = find_supported_class(&fetched.docs, entrypoint_type)?;
    if entrypoint_class.get(vocab::HYDRA_SUPPORTED_PROPERTY).is_empty() {
        return Err(ParseError::MissingSupportedProperty);
    }

    // Pass 1: one resource per entrypoint property.
    let mut resources = Vec::new();
    for supported in entrypoint_class.nodes(vocab::HYDRA_SUPPORTED_PROPERTY) {
        let Some(property) = supported.nodes(vocab::HYDRA_PROPERTY).next() else {
            continue;
        };
        let Some(property_iri) = property.id.as_deref() else {
            continue;
        };

        let Some(url) = entrypoint_node.first_id(property_iri) else {
            // Entrypoints sometimes list properties with no working route;
            // that never fails the whole parse.
            warn!(
                property = property_iri,
                "unable to find the URL for entrypoint property, skipping"
            );
            continue;
        };

        let related_class = match find_related_class(&fetched.docs, property) {
            Ok(class) => class,
            Err(error @ ParseError::RelatedClassNotFound(_)) => {
                warn!(property = property_iri, %error, "skipping entrypoint property");
                continue;
            }
            Err(error) => return Err(error),
        };

        resources.push(build_resource(
            related_class,
            property,
            url,
            &fetched.entrypoint_url,
        ));
    }

    // Pass 2: rewrite pending IRIs into resource indices.
    resolve_resource_references(&mut resources);

    Ok(Api {
        entrypoint: fetched.entrypoint_url.clone(),
        title,
        resources,
    })
}

/// Look up a class description by IRI in the expanded documentation.
///
/// Linear scan: documentation graphs hold tens of classes and this runs a
/// bounded number of times per parse.
pub(crate) fn find_supported_class<'a>(docs: &'a [Node], class_iri: &str) -> Result<&'a Node> {
    let root = docs.first().ok_or(ParseError::MissingSupportedClass)?;
    if root.get(vocab::HYDRA_SUPPORTED_CLASS).is_empty() {
        return Err(ParseError::MissingSupportedClass);
    }
    root.nodes(vocab::HYDRA_SUPPORTED_CLASS)
        .find(|class| class.id.as_deref() == Some(class_iri))
        .ok_or_else(|| ParseError::ClassNotFound(class_iri.to_owned()))
}

/// Decide which class the collection behind an entrypoint property
/// contains.
///
/// Strategy 1 inspects the property's ranges for an `owl:equivalentClass`
/// restriction whose `owl:onProperty` is `hydra:member`; its
/// `owl:allValuesFrom` target is the item class. Strategy 2 falls back to
/// the first `supportedOperation` whose `returns` is not a Hydra core
/// vocabulary term. The fallback accepts any non-Hydra IRI, so a
/// vocabulary aliasing Hydra terms under another prefix could in theory
/// mis-resolve here.
pub(crate) fn find_related_class<'a>(docs: &'a [Node], property: &Node) -> Result<&'a Node> {
    for range in property.nodes(vocab::RDFS_RANGE) {
        for restriction in range.nodes(vocab::OWL_EQUIVALENT_CLASS) {
            let on_member = restriction
                .first_id(vocab::OWL_ON_PROPERTY)
                .is_some_and(|iri| iri == vocab::HYDRA_MEMBER);
            if !on_member {
                continue;
            }
            if let Some(target) = restriction.first_id(vocab::OWL_ALL_VALUES_FROM) {
                return find_supported_class(docs, target);
            }
        }
    }

    for operation in property.nodes(vocab::HYDRA_SUPPORTED_OPERATION) {
        let Some(returns) = operation.first_id(vocab::HYDRA_RETURNS) else {
            continue;
        };
        if !returns.starts_with(vocab::HYDRA) {
            return find_supported_class(docs, returns);
        }
    }

    Err(ParseError::RelatedClassNotFound(
        property.id.clone().unwrap_or_default(),
    ))
}

fn build_resource(
    related_class: &Node,
    property: &Node,
    url: &str,
    entrypoint_url: &str,
) -> Resource {
    let mut fields = Vec::new();
    for supported in related_class.nodes(vocab::HYDRA_SUPPORTED_PROPERTY) {
        if let Some(field) = build_field(supported) {
            fields.push(field);
        }
    }

    let mut operations = Vec::new();
    // Operations declared on the entrypoint property act on the collection.
    for operation in property.nodes(vocab::HYDRA_SUPPORTED_OPERATION) {
        if let Some(operation) = build_operation(operation, OperationScope::Collection) {
            operations.push(operation);
        }
    }
    // Operations declared on the class itself act on a single item.
    for operation in related_class.nodes(vocab::HYDRA_SUPPORTED_OPERATION) {
        if let Some(operation) = build_operation(operation, OperationScope::Item) {
            operations.push(operation);
        }
    }

    Resource {
        name: resource_name(url, entrypoint_url),
        url: url.to_owned(),
        id: related_class.id.clone(),
        title: related_class
            .first_str(vocab::HYDRA_TITLE)
            .map(str::to_owned),
        description: related_class
            .first_str(vocab::HYDRA_DESCRIPTION)
            .map(str::to_owned),
        fields,
        operations,
        parameters: Vec::new(),
        deprecated: related_class
            .first_bool(vocab::OWL_DEPRECATED)
            .unwrap_or(false),
    }
}

fn build_field(supported: &Node) -> Option<Field> {
    let property = supported.nodes(vocab::HYDRA_PROPERTY).next()?;

    let name = supported
        .first_str(vocab::HYDRA_TITLE)
        .or_else(|| property.first_str(vocab::RDFS_LABEL))?
        .to_owned();

    let (range, max_cardinality) = field_range(property);

    // A hydra:Link property references another resource; any other ranged
    // property tentatively embeds it. Pass 2 keeps whichever IRI matches a
    // resource and drops the rest.
    let is_link = property.has_type(vocab::HYDRA_LINK);
    let (reference, embedded) = match (&range, is_link) {
        (Some(iri), true) => (Some(ResourceRef::Unresolved(iri.clone())), None),
        (Some(iri), false) => (None, Some(ResourceRef::Unresolved(iri.clone()))),
        (None, _) => (None, None),
    };

    Some(Field {
        name,
        id: property.id.clone(),
        field_type: range.as_deref().and_then(TypeMapper::from_range),
        range,
        reference,
        embedded,
        readable: supported.first_bool(vocab::HYDRA_READABLE).unwrap_or(false),
        writable: supported
            .first_bool(vocab::HYDRA_WRITEABLE)
            .or_else(|| supported.first_bool(vocab::HYDRA_WRITABLE))
            .unwrap_or(false),
        required: supported.first_bool(vocab::HYDRA_REQUIRED).unwrap_or(false),
        description: supported
            .first_str(vocab::HYDRA_DESCRIPTION)
            .map(str::to_owned),
        max_cardinality,
        deprecated: supported.first_bool(vocab::OWL_DEPRECATED).unwrap_or(false),
    })
}

/// Range IRI and cardinality restriction attached to a property.
///
/// The range list may mix a plain class IRI with restriction nodes
/// carrying `owl:maxCardinality`.
fn field_range(property: &Node) -> (Option<String>, Option<u64>) {
    let mut range = None;
    let mut max_cardinality = None;
    for node in property.nodes(vocab::RDFS_RANGE) {
        if range.is_none() {
            if let Some(id) = node.id.as_deref() {
                range = Some(id.to_owned());
                continue;
            }
        }
        if max_cardinality.is_none() {
            if let Some(value) = node.first_u64(vocab::OWL_MAX_CARDINALITY) {
                max_cardinality = Some(value);
            }
        }
    }
    (range, max_cardinality)
}

#[derive(Clone, Copy, PartialEq)]
enum OperationScope {
    Collection,
    Item,
}

fn build_operation(node: &Node, scope: OperationScope) -> Option<Operation> {
    let method = node.first_str(vocab::HYDRA_METHOD).map(str::to_owned);
    // An operation with no return type cannot be modeled. owl:Nothing is
    // kept: the absence of a payload is itself meaningful (e.g. DELETE).
    let returns = node.first_id(vocab::HYDRA_RETURNS)?.to_owned();

    Some(Operation {
        name: node
            .first_str(vocab::HYDRA_TITLE)
            .or_else(|| node.first_str(vocab::RDFS_LABEL))
            .unwrap_or_default()
            .to_owned(),
        kind: operation_type(method.as_deref(), scope),
        method,
        expects: node.first_id(vocab::HYDRA_EXPECTS).map(str::to_owned),
        returns: Some(returns),
        types: node.types.clone(),
        deprecated: node.first_bool(vocab::OWL_DEPRECATED).unwrap_or(false),
    })
}

/// Operation category from HTTP method and collection-vs-item context.
fn operation_type(method: Option<&str>, scope: OperationScope) -> OperationType {
    match scope {
        OperationScope::Collection => match method {
            Some("POST") => OperationType::Create,
            _ => OperationType::List,
        },
        OperationScope::Item => match method {
            Some("PUT") | Some("PATCH") => OperationType::Edit,
            Some("DELETE") => OperationType::Delete,
            Some("POST") => OperationType::Create,
            _ => OperationType::Show,
        },
    }
}

/// Short resource identifier: the URL suffix relative to the entrypoint.
fn resource_name(url: &str, entrypoint_url: &str) -> String {
    url.strip_prefix(entrypoint_url)
        .unwrap_or(url)
        .trim_matches('/')
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jsonld::Term;
    use serde_json::json;

    fn node_with(id: Option<&str>, properties: Vec<(&str, Vec<Term>)>) -> Node {
        let mut node = Node::default();
        node.id = id.map(str::to_owned);
        for (iri, terms) in properties {
            node.properties.insert(iri.to_owned(), terms);
        }
        node
    }

    fn reference(iri: &str) -> Term {
        Term::Node(Node::reference(iri))
    }

    fn docs_with_class(class_iri: &str) -> Vec<Node> {
        let class = Node::reference(class_iri);
        vec![node_with(
            Some("https://example.com/docs.jsonld"),
            vec![(vocab::HYDRA_SUPPORTED_CLASS, vec![Term::Node(class)])],
        )]
    }

    #[test]
    fn operation_typing_follows_method_and_scope() {
        assert_eq!(
            operation_type(Some("POST"), OperationScope::Collection),
            OperationType::Create
        );
        assert_eq!(
            operation_type(Some("GET"), OperationScope::Collection),
            OperationType::List
        );
        assert_eq!(
            operation_type(Some("GET"), OperationScope::Item),
            OperationType::Show
        );
        assert_eq!(
            operation_type(Some("PATCH"), OperationScope::Item),
            OperationType::Edit
        );
        assert_eq!(
            operation_type(Some("DELETE"), OperationScope::Item),
            OperationType::Delete
        );
    }

    #[test]
    fn resource_name_is_the_entrypoint_relative_suffix() {
        assert_eq!(
            resource_name("https://example.com/books", "https://example.com/"),
            "books"
        );
        assert_eq!(
            resource_name("https://example.com/books", "https://example.com"),
            "books"
        );
        // Foreign URLs keep their full form rather than a bogus suffix.
        assert_eq!(
            resource_name("https://other.example/x", "https://example.com/"),
            "https://other.example/x"
        );
    }

    #[test]
    fn equivalence_class_strategy_wins_over_the_fallback() {
        let docs = docs_with_class("https://example.com/docs.jsonld#Book");
        let restriction = node_with(
            None,
            vec![
                (vocab::OWL_ON_PROPERTY, vec![reference(vocab::HYDRA_MEMBER)]),
                (
                    vocab::OWL_ALL_VALUES_FROM,
                    vec![reference("https://example.com/docs.jsonld#Book")],
                ),
            ],
        );
        let range = node_with(
            None,
            vec![(vocab::OWL_EQUIVALENT_CLASS, vec![Term::Node(restriction)])],
        );
        let property = node_with(
            Some("https://example.com/docs.jsonld#Entrypoint/book"),
            vec![(vocab::RDFS_RANGE, vec![Term::Node(range)])],
        );

        let class = find_related_class(&docs, &property).expect("resolves");
        assert_eq!(class.id.as_deref(), Some("https://example.com/docs.jsonld#Book"));
    }

    #[test]
    fn fallback_uses_the_first_non_hydra_returns() {
        let docs = docs_with_class("https://example.com/docs.jsonld#Book");
        let list_op = node_with(
            None,
            vec![(
                vocab::HYDRA_RETURNS,
                vec![reference("http://www.w3.org/ns/hydra/core#Collection")],
            )],
        );
        let create_op = node_with(
            None,
            vec![(
                vocab::HYDRA_RETURNS,
                vec![reference("https://example.com/docs.jsonld#Book")],
            )],
        );
        let property = node_with(
            Some("https://example.com/docs.jsonld#Entrypoint/book"),
            vec![(
                vocab::HYDRA_SUPPORTED_OPERATION,
                vec![Term::Node(list_op), Term::Node(create_op)],
            )],
        );

        let class = find_related_class(&docs, &property).expect("resolves");
        assert_eq!(class.id.as_deref(), Some("https://example.com/docs.jsonld#Book"));
    }

    #[test]
    fn unresolvable_property_reports_its_iri() {
        let docs = docs_with_class("https://example.com/docs.jsonld#Book");
        let property = node_with(
            Some("https://example.com/docs.jsonld#Entrypoint/unknown"),
            vec![],
        );

        let error = find_related_class(&docs, &property).unwrap_err();
        match error {
            ParseError::RelatedClassNotFound(iri) => {
                assert_eq!(iri, "https://example.com/docs.jsonld#Entrypoint/unknown");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn operations_without_returns_are_skipped() {
        let op = node_with(
            None,
            vec![(
                vocab::HYDRA_METHOD,
                vec![Term::Value(json!("GET"))],
            )],
        );
        assert!(build_operation(&op, OperationScope::Item).is_none());
    }
}
