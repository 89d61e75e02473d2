//! Error types shared by every parser in this crate

use thiserror::Error;

/// Errors produced while fetching or parsing an API description.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The entrypoint response carried no `Link` HTTP header.
    #[error("the entrypoint response has no \"Link\" HTTP header")]
    MissingLinkHeader,

    /// A `Link` HTTP header is present but does not advertise the Hydra
    /// `apiDocumentation` relation.
    #[error("the \"Link\" HTTP header is not of the type \"http://www.w3.org/ns/hydra/core#apiDocumentation\"")]
    MalformedLinkHeader,

    /// The API entrypoint document has no `@type` key.
    #[error("the API entrypoint has no \"@type\" key")]
    EntrypointMissingType,

    /// The documentation has no `hydra:supportedClass` array.
    #[error("the API documentation has no \"http://www.w3.org/ns/hydra/core#supportedClass\" key or its value is not an array")]
    MissingSupportedClass,

    /// The entrypoint class has no `hydra:supportedProperty` array.
    #[error("the entrypoint definition has no \"http://www.w3.org/ns/hydra/core#supportedProperty\" key or its value is not an array")]
    MissingSupportedProperty,

    /// No supported class matches the given IRI.
    #[error("the class \"{0}\" is not defined in the API documentation")]
    ClassNotFound(String),

    /// Neither resolution strategy found the class a property points to.
    #[error("cannot find the class related to \"{0}\"")]
    RelatedClassNotFound(String),

    /// The response cannot carry a usable JSON-LD document (5xx, 204 or an
    /// unexpected content type).
    #[error("unusable response from \"{url}\" (status {status})")]
    UnusableResponse { url: String, status: u16 },

    /// A resource collection could not be fetched.
    #[error("the resource \"{url}\" is unreachable: {reason}")]
    UnreachableResource { url: String, reason: String },

    /// JSON-LD expansion failed.
    #[error("JSON-LD expansion failed: {0}")]
    Expansion(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Any other malformed-document condition.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result type for parser operations.
pub type Result<T> = std::result::Result<T, ParseError>;
