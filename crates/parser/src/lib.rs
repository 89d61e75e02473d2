//! Parsers for machine-readable API descriptions
//!
//! This crate ingests Hydra/JSON-LD API documentation, OpenAPI 3 specs,
//! Swagger 2 specs and GraphQL introspection results, and converts each
//! into the shared normalized model from `api_doc_parser_common`:
//! resources, fields, operations and query parameters. Downstream tooling
//! (admin UIs, code generators) consumes only that model, never the
//! source format.
//!
//! ## Parsers
//!
//! - [`hydra::HydraParser`] discovers and parses live Hydra APIs over
//!   HTTP. The core of this crate: two-pass resource graph construction
//!   over expanded JSON-LD, with forward-reference resolution and
//!   competing class-disambiguation heuristics.
//! - [`openapi::OpenApiParser`], [`swagger::SwaggerParser`] and
//!   [`graphql::GraphQlParser`] are mechanical single-pass document
//!   walks into the same model.
//!
//! ## Usage
//! ```rust,ignore
//! use api_doc_parser::hydra::HydraParser;
//!
//! let parsed = HydraParser::new().parse("https://demo.example.com/").await?;
//! for resource in &parsed.api.resources {
//!     println!("{} -> {}", resource.name, resource.url);
//! }
//! ```

mod error;
mod http;
mod reference;
mod type_mapper;

pub mod graphql;
pub mod hydra;
pub mod jsonld;
pub mod openapi;
pub mod swagger;

pub use error::{ParseError, Result};
pub use http::{FetchOptions, HeaderMap, HeaderName, HeaderValue, HeadersProvider, ResponseMeta};
pub use hydra::{HydraParser, ParseFailure, ParsedApi};
pub use type_mapper::TypeMapper;

pub use api_doc_parser_common as model;

/// Parse the Hydra documentation behind `entrypoint_url` with default
/// options.
pub async fn parse_hydra_documentation(
    entrypoint_url: &str,
) -> std::result::Result<ParsedApi, Box<ParseFailure>> {
    HydraParser::new().parse(entrypoint_url).await
}
