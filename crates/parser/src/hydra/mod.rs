//! Hydra/JSON-LD documentation parser
//!
//! The core of this crate, and the only parser here that performs
//! non-trivial graph construction. Discovery follows the Hydra contract:
//!
//! 1. GET the API entrypoint; its `Link` header (relation
//!    `hydra:apiDocumentation`) names the documentation resource.
//! 2. GET the documentation; expand both documents to context-free
//!    JSON-LD.
//! 3. Walk the entrypoint class: each of its supported properties points
//!    at one collection resource, whose item class is resolved through
//!    competing heuristics (collection equivalence restriction, then
//!    operation return types).
//! 4. Resolve forward references between the finished resources.
//!
//! Query parameters of a collection cost an extra request each and are
//! fetched on demand through [`HydraParser::get_parameters`], never
//! during the main parse.
//!
//! ## Usage
//! ```rust,ignore
//! use api_doc_parser::hydra::HydraParser;
//!
//! let parsed = HydraParser::new().parse("https://demo.example.com").await?;
//! for resource in &parsed.api.resources {
//!     println!("{} -> {}", resource.name, resource.url);
//! }
//! ```

mod converter;
mod fetcher;
mod parameters;
mod parser;
mod types;
pub(crate) mod vocab;

pub use parser::{EntrypointAndDocs, HydraParser};
pub use types::{FetchedDocument, ParseFailure, ParsedApi};
