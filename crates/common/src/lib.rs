//! Common types for the api-doc-parser format parsers
//!
//! This crate contains the normalized API model produced by every parser
//! (Hydra/JSON-LD, OpenAPI v3, Swagger v2, GraphQL introspection) and
//! consumed by downstream tooling such as admin UIs and code generators.

mod model;

pub use model::*;
