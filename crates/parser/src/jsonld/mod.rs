//! Minimal JSON-LD support for the Hydra parser
//!
//! Expansion normalizes arbitrary JSON-LD into a flat form where every
//! property key is an absolute IRI and every value is array-wrapped. This
//! removes context-dependent aliasing before graph construction begins:
//! the Hydra walk only ever sees [`Node`]s and never a raw document.
//!
//! The implementation is a pragmatic subset of JSON-LD 1.1 expansion,
//! covering what API documentation documents actually use; see
//! [`expand`] for its exact scope.

mod context;
mod expand;
mod loader;
mod node;

pub use expand::expand;
pub use loader::DocumentLoader;
pub use node::{Node, Term};
