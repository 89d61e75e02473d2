//! Hydra parser result and wire types

use serde::Deserialize;

use api_doc_parser_common::Api;

use crate::error::ParseError;
use crate::http::ResponseMeta;

/// A fetched JSON-LD document plus its response metadata.
///
/// `body` is `None` when the response cannot carry a usable document
/// (status ≥ 500, status 204, or a content type other than
/// `application/ld+json`).
#[derive(Debug, Clone)]
pub struct FetchedDocument {
    pub meta: ResponseMeta,
    pub body: Option<serde_json::Value>,
}

/// Successful parse: the normalized API plus the entrypoint response.
#[derive(Debug, Clone)]
pub struct ParsedApi {
    pub api: Api,
    pub response: ResponseMeta,
    pub status: u16,
}

/// Failed parse.
///
/// Carries an [`Api`] with an empty resource list so callers can inspect
/// the outcome uniformly, plus whatever response metadata was available
/// when the failure occurred.
#[derive(Debug, thiserror::Error)]
#[error("{error}")]
pub struct ParseFailure {
    pub api: Api,
    pub error: ParseError,
    pub response: Option<ResponseMeta>,
    pub status: Option<u16>,
}

/// Compact-form `hydra:search` section of a collection document, as
/// emitted by Hydra servers alongside the member list.
#[derive(Debug, Deserialize)]
pub(crate) struct CollectionBody {
    #[serde(rename = "hydra:search")]
    pub search: Option<SearchDocument>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchDocument {
    #[serde(rename = "hydra:mapping", default)]
    pub mapping: Vec<SearchMapping>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchMapping {
    #[serde(rename = "hydra:variable")]
    pub variable: String,
    #[serde(rename = "hydra:property")]
    pub property: Option<String>,
    #[serde(rename = "hydra:required", default)]
    pub required: bool,
}
