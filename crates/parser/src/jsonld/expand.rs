//! Subset JSON-LD expansion
//!
//! Normalizes a document into the flat expanded form consumed by the
//! Hydra parser: every property key an absolute IRI, every value wrapped
//! as a literal or node term. Covers document-level contexts (inline,
//! array and remote), prefix and vocabulary mapping, `@type: @id`
//! coercion and relative-IRI resolution against a base URL. Documents
//! already in expanded form pass through unchanged.
//!
//! Property-scoped contexts and `@list`/`@graph` containers are outside
//! the subset; API documentation documents do not use them.

use std::collections::VecDeque;

use serde_json::Value;

use super::context::{Coercion, Context};
use super::loader::DocumentLoader;
use super::node::{Node, Term};
use crate::error::{ParseError, Result};

/// Remote contexts may chain; anything deeper than this is a loop.
const MAX_REMOTE_CONTEXTS: usize = 8;

/// Expand `document` against `base`, loading remote contexts through
/// `loader`.
pub async fn expand(
    document: &Value,
    base: &str,
    loader: &dyn DocumentLoader,
) -> Result<Vec<Node>> {
    let mut context = Context::default();
    if let Some(object) = document.as_object() {
        if let Some(raw) = object.get("@context") {
            apply_context(&mut context, raw, loader).await?;
        }
    }

    match document {
        Value::Array(items) => items
            .iter()
            .map(|item| expand_node(item, &context, base))
            .collect(),
        Value::Object(_) => Ok(vec![expand_node(document, &context, base)?]),
        other => Err(ParseError::Expansion(format!(
            "cannot expand a {} document",
            json_kind(other)
        ))),
    }
}

/// Fold an `@context` entry (string, array or object) into `context`.
async fn apply_context(
    context: &mut Context,
    raw: &Value,
    loader: &dyn DocumentLoader,
) -> Result<()> {
    let mut pending: VecDeque<Value> = VecDeque::new();
    pending.push_back(raw.clone());
    let mut loaded = 0usize;

    while let Some(entry) = pending.pop_front() {
        match entry {
            Value::String(url) => {
                loaded += 1;
                if loaded > MAX_REMOTE_CONTEXTS {
                    return Err(ParseError::Expansion(format!(
                        "more than {MAX_REMOTE_CONTEXTS} chained remote contexts"
                    )));
                }
                let document = loader.load(&url).await?;
                let inner = document.get("@context").cloned().ok_or_else(|| {
                    ParseError::Expansion(format!(
                        "remote context \"{url}\" has no \"@context\" key"
                    ))
                })?;
                pending.push_front(inner);
            }
            Value::Array(entries) => {
                for entry in entries.into_iter().rev() {
                    pending.push_front(entry);
                }
            }
            Value::Object(object) => context.merge_object(&object)?,
            Value::Null => *context = Context::default(),
            other => {
                return Err(ParseError::Expansion(format!(
                    "unsupported @context entry: {other}"
                )));
            }
        }
    }
    Ok(())
}

fn expand_node(value: &Value, context: &Context, base: &str) -> Result<Node> {
    let object = match value {
        Value::Object(object) => object,
        // A bare IRI reference.
        Value::String(iri) => return Ok(Node::reference(resolve_reference(context, iri, base))),
        other => {
            return Err(ParseError::Expansion(format!(
                "expected a node object, found {}",
                json_kind(other)
            )));
        }
    };

    let mut node = Node::default();
    for (key, raw) in object {
        match key.as_str() {
            "@context" => continue,
            "@id" => {
                let iri = raw.as_str().ok_or_else(|| {
                    ParseError::Expansion("\"@id\" must be a string".to_owned())
                })?;
                node.id = Some(resolve_reference(context, iri, base));
            }
            "@type" => {
                let raw_types: Vec<&str> = match raw {
                    Value::String(s) => vec![s.as_str()],
                    Value::Array(items) => items.iter().filter_map(Value::as_str).collect(),
                    _ => {
                        return Err(ParseError::Expansion(
                            "\"@type\" must be a string or an array of strings".to_owned(),
                        ));
                    }
                };
                for t in raw_types {
                    if let Some(iri) = context.expand_iri(t, true) {
                        node.types.push(iri);
                    }
                }
            }
            key => {
                // Keys that map to nothing under the active context are
                // dropped, exactly as full expansion does.
                let Some(iri) = context.expand_iri(key, true) else {
                    continue;
                };
                let coercion = context.coercion(key);
                let mut terms = Vec::new();
                collect_terms(raw, context, base, coercion, &mut terms)?;
                node.properties.entry(iri).or_default().extend(terms);
            }
        }
    }
    Ok(node)
}

fn collect_terms(
    raw: &Value,
    context: &Context,
    base: &str,
    coercion: Coercion,
    out: &mut Vec<Term>,
) -> Result<()> {
    match raw {
        Value::Array(items) => {
            for item in items {
                collect_terms(item, context, base, coercion, out)?;
            }
        }
        Value::Object(object) => {
            if let Some(value) = object.get("@value") {
                out.push(Term::Value(value.clone()));
            } else {
                out.push(Term::Node(expand_node(raw, context, base)?));
            }
        }
        Value::String(s) if coercion == Coercion::Id => {
            out.push(Term::Node(Node::reference(resolve_reference(
                context, s, base,
            ))));
        }
        Value::Null => {}
        scalar => out.push(Term::Value(scalar.clone())),
    }
    Ok(())
}

/// Expand an IRI reference, resolving relative ones against `base`.
fn resolve_reference(context: &Context, value: &str, base: &str) -> String {
    match context.expand_iri(value, false) {
        Some(iri) if iri.contains(':') => iri,
        Some(iri) => join_url(base, &iri),
        None => join_url(base, value),
    }
}

/// Resolve a possibly-relative IRI reference against a base URL.
fn join_url(base: &str, reference: &str) -> String {
    if reference.is_empty() {
        return base.to_owned();
    }
    if reference.contains("://") {
        return reference.to_owned();
    }
    if let Some(stripped) = reference.strip_prefix("//") {
        let scheme = base.split("://").next().unwrap_or("https");
        return format!("{scheme}://{stripped}");
    }
    if reference.starts_with('/') {
        return format!("{}{}", origin(base), reference);
    }
    if reference.starts_with('#') {
        let without_fragment = base.split('#').next().unwrap_or(base);
        return format!("{without_fragment}{reference}");
    }
    // Path-relative: replace everything after the last slash of the base.
    match base.rfind('/') {
        Some(slash) if slash > origin(base).len() => {
            format!("{}{}", &base[..=slash], reference)
        }
        _ => format!("{}/{}", base.trim_end_matches('/'), reference),
    }
}

/// The `scheme://authority` prefix of a URL.
fn origin(base: &str) -> &str {
    match base.find("://") {
        Some(scheme_end) => {
            let after = &base[scheme_end + 3..];
            match after.find('/') {
                Some(slash) => &base[..scheme_end + 3 + slash],
                None => base,
            }
        }
        None => base,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::super::loader::MockDocumentLoader;
    use super::*;
    use serde_json::json;

    const HYDRA_TITLE: &str = "http://www.w3.org/ns/hydra/core#title";
    const RDFS_RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";

    #[tokio::test]
    async fn expands_a_compact_document() {
        let document = json!({
            "@context": {
                "@vocab": "https://example.com/docs#",
                "hydra": "http://www.w3.org/ns/hydra/core#",
                "rdfs": "http://www.w3.org/2000/01/rdf-schema#",
                "xmls": "http://www.w3.org/2001/XMLSchema#",
                "range": { "@id": "rdfs:range", "@type": "@id" }
            },
            "@id": "/docs.jsonld",
            "@type": "hydra:ApiDocumentation",
            "hydra:title": "Test API",
            "range": "xmls:string"
        });

        let loader = MockDocumentLoader::new();
        let nodes = expand(&document, "https://example.com/docs.jsonld", &loader)
            .await
            .expect("expansion succeeds");

        assert_eq!(nodes.len(), 1);
        let node = &nodes[0];
        assert_eq!(node.id.as_deref(), Some("https://example.com/docs.jsonld"));
        assert!(node.has_type("http://www.w3.org/ns/hydra/core#ApiDocumentation"));
        assert_eq!(node.first_str(HYDRA_TITLE), Some("Test API"));
        assert_eq!(
            node.first_id(RDFS_RANGE),
            Some("http://www.w3.org/2001/XMLSchema#string")
        );
    }

    #[tokio::test]
    async fn resolves_relative_ids_against_the_base() {
        let document = json!({
            "@context": {
                "@vocab": "https://example.com/docs.jsonld#",
                "book": { "@id": "Entrypoint/book", "@type": "@id" }
            },
            "@id": "/",
            "@type": "Entrypoint",
            "book": "/books"
        });

        let loader = MockDocumentLoader::new();
        let nodes = expand(&document, "https://example.com/", &loader)
            .await
            .expect("expansion succeeds");

        let node = &nodes[0];
        assert_eq!(node.id.as_deref(), Some("https://example.com/"));
        assert!(node.has_type("https://example.com/docs.jsonld#Entrypoint"));
        assert_eq!(
            node.first_id("https://example.com/docs.jsonld#Entrypoint/book"),
            Some("https://example.com/books")
        );
    }

    #[tokio::test]
    async fn loads_remote_contexts_through_the_loader() {
        let document = json!({
            "@context": "https://example.com/contexts/Entrypoint",
            "@type": "Thing"
        });

        let mut loader = MockDocumentLoader::new();
        loader
            .expect_load()
            .withf(|url| url == "https://example.com/contexts/Entrypoint")
            .returning(|_| Ok(json!({ "@context": { "@vocab": "https://schema.org/" } })));

        let nodes = expand(&document, "https://example.com/", &loader)
            .await
            .expect("expansion succeeds");

        assert!(nodes[0].has_type("https://schema.org/Thing"));
    }

    #[tokio::test]
    async fn expanded_documents_pass_through() {
        let document = json!([{
            "@id": "https://example.com/docs.jsonld#Book",
            "@type": ["http://www.w3.org/ns/hydra/core#Class"],
            "http://www.w3.org/ns/hydra/core#title": [{ "@value": "Book" }]
        }]);

        let loader = MockDocumentLoader::new();
        let nodes = expand(&document, "https://example.com/", &loader)
            .await
            .expect("expansion succeeds");

        assert_eq!(nodes.len(), 1);
        assert_eq!(
            nodes[0].id.as_deref(),
            Some("https://example.com/docs.jsonld#Book")
        );
        assert_eq!(nodes[0].first_str(HYDRA_TITLE), Some("Book"));
    }

    #[tokio::test]
    async fn rejects_scalar_documents() {
        let loader = MockDocumentLoader::new();
        let error = expand(&json!(42), "https://example.com/", &loader)
            .await
            .expect_err("scalars are not documents");
        assert!(matches!(error, ParseError::Expansion(_)));
    }

    #[test]
    fn join_url_covers_reference_forms() {
        assert_eq!(
            join_url("https://example.com/", "/books"),
            "https://example.com/books"
        );
        assert_eq!(
            join_url("https://example.com/docs.jsonld", "#Book"),
            "https://example.com/docs.jsonld#Book"
        );
        assert_eq!(
            join_url("https://example.com/a/b", "c"),
            "https://example.com/a/c"
        );
        assert_eq!(
            join_url("https://example.com/", "https://other.example/x"),
            "https://other.example/x"
        );
    }
}
