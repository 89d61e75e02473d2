//! OpenAPI 3.x specification parser
//!
//! Parses OpenAPI specs into the normalized model. A single-pass schema
//! walk: collection and item paths become resources, component schemas
//! become fields, and `$ref` links between schemas become resource
//! references.
//!
//! ## Usage
//! ```rust,ignore
//! use api_doc_parser::openapi::OpenApiParser;
//!
//! let api = OpenApiParser::from_file("openapi.json")?.parse()?;
//! ```

mod converter;
mod parser;
mod types;

pub use parser::OpenApiParser;
pub use types::*;
