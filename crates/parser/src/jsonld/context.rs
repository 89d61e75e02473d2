//! `@context` processing for the expansion subset

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::error::{ParseError, Result};

/// How a term's plain-string values are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Coercion {
    /// Values are IRIs (`"@type": "@id"` in the term definition).
    Id,
    /// Values are literals.
    None,
}

/// A single term definition from an `@context`.
#[derive(Debug, Clone)]
pub(crate) struct TermDefinition {
    pub iri: String,
    pub coercion: Coercion,
}

/// The active context during expansion.
#[derive(Debug, Clone, Default)]
pub(crate) struct Context {
    pub vocab: Option<String>,
    pub terms: HashMap<String, TermDefinition>,
}

impl Context {
    /// Merge one `@context` object into this context.
    pub fn merge_object(&mut self, object: &Map<String, Value>) -> Result<()> {
        for (term, definition) in object {
            match term.as_str() {
                "@vocab" => {
                    self.vocab = definition.as_str().map(str::to_owned);
                }
                // The request URL is the base here; `@base` overrides are
                // not part of the subset.
                "@base" => {}
                _ => match definition {
                    Value::String(iri) => {
                        self.terms.insert(
                            term.clone(),
                            TermDefinition {
                                iri: iri.clone(),
                                coercion: Coercion::None,
                            },
                        );
                    }
                    Value::Object(def) => {
                        let iri = def.get("@id").and_then(Value::as_str).ok_or_else(|| {
                            ParseError::Expansion(format!(
                                "term definition for \"{term}\" has no \"@id\""
                            ))
                        })?;
                        let coercion = match def.get("@type").and_then(Value::as_str) {
                            Some("@id") | Some("@vocab") => Coercion::Id,
                            _ => Coercion::None,
                        };
                        self.terms.insert(
                            term.clone(),
                            TermDefinition {
                                iri: iri.to_owned(),
                                coercion,
                            },
                        );
                    }
                    Value::Null => {
                        self.terms.remove(term);
                    }
                    other => {
                        return Err(ParseError::Expansion(format!(
                            "unsupported term definition for \"{term}\": {other}"
                        )));
                    }
                },
            }
        }
        Ok(())
    }

    /// Expand a term or compact IRI into an absolute IRI.
    ///
    /// Returns `None` when the value maps to nothing (an unknown term with
    /// no active vocabulary, or a relative IRI when `as_vocab` is false).
    pub fn expand_iri(&self, value: &str, as_vocab: bool) -> Option<String> {
        if value.starts_with('@') {
            return Some(value.to_owned());
        }
        if let Some(def) = self.terms.get(value) {
            return Some(self.resolve_term_iri(&def.iri));
        }
        if let Some((prefix, suffix)) = value.split_once(':') {
            // "//" marks an absolute IRI such as http://…; anything else
            // is a compact IRI when the prefix is a known term.
            if suffix.starts_with("//") {
                return Some(value.to_owned());
            }
            if let Some(def) = self.terms.get(prefix) {
                return Some(format!("{}{}", def.iri, suffix));
            }
            // Unknown scheme-like prefix (urn:, mailto:): keep as-is.
            return Some(value.to_owned());
        }
        if as_vocab {
            if let Some(vocab) = &self.vocab {
                return Some(format!("{vocab}{value}"));
            }
        }
        None
    }

    /// Term definitions may themselves be compact ("hydra:member") or
    /// vocabulary-relative ("Entrypoint/book").
    fn resolve_term_iri(&self, iri: &str) -> String {
        match iri.split_once(':') {
            Some((prefix, suffix)) if !suffix.starts_with("//") => {
                if let Some(def) = self.terms.get(prefix) {
                    return format!("{}{}", def.iri, suffix);
                }
                iri.to_owned()
            }
            Some(_) => iri.to_owned(),
            None => match &self.vocab {
                Some(vocab) => format!("{vocab}{iri}"),
                None => iri.to_owned(),
            },
        }
    }

    /// Coercion declared for a (not yet expanded) document key.
    pub fn coercion(&self, term: &str) -> Coercion {
        self.terms
            .get(term)
            .map(|def| def.coercion)
            .unwrap_or(Coercion::None)
    }
}
