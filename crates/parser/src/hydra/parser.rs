//! Hydra documentation parser
//!
//! Orchestrates the two discovery fetches (the entrypoint, then the
//! documentation resource its `Link` header advertises), expands both
//! documents and hands them to the resource graph builder. The fetches
//! are sequential because the docs URL is only known once the entrypoint
//! response headers are in hand; the two expansions run concurrently.

use reqwest::Client;
use tracing::debug;

use api_doc_parser_common::{Api, Parameter, Resource};

use super::converter;
use super::fetcher::{extract_documentation_url, fetch_json_ld, FetcherLoader};
use super::parameters;
use super::types::{ParseFailure, ParsedApi};
use crate::error::{ParseError, Result};
use crate::http::{FetchOptions, ResponseMeta};
use crate::jsonld::{expand, Node};

/// Parses Hydra/JSON-LD API documentation reachable over HTTP.
///
/// Every call to [`HydraParser::parse`] re-fetches and re-expands from
/// scratch; nothing is cached between invocations.
pub struct HydraParser {
    client: Client,
    options: FetchOptions,
}

/// The expanded entrypoint/documentation pair.
pub struct EntrypointAndDocs {
    pub entrypoint_url: String,
    pub docs_url: String,
    pub entrypoint: Vec<Node>,
    pub docs: Vec<Node>,
    pub response: ResponseMeta,
}

impl HydraParser {
    pub fn new() -> Self {
        Self::with_options(FetchOptions::default())
    }

    pub fn with_options(options: FetchOptions) -> Self {
        Self {
            client: Client::new(),
            options,
        }
    }

    /// Parse the documentation behind `entrypoint_url`.
    ///
    /// On failure the caller still receives an [`Api`] with an empty
    /// resource list, plus whatever response metadata was available when
    /// the failure occurred.
    pub async fn parse(
        &self,
        entrypoint_url: &str,
    ) -> std::result::Result<ParsedApi, Box<ParseFailure>> {
        match self.fetch_entrypoint_and_docs(entrypoint_url).await {
            Ok(fetched) => {
                let response = fetched.response.clone();
                let status = response.status;
                match converter::build_api(&fetched) {
                    Ok(api) => Ok(ParsedApi {
                        api,
                        response,
                        status,
                    }),
                    Err(error) => Err(Box::new(ParseFailure {
                        api: Api::new(entrypoint_url),
                        error,
                        response: Some(response),
                        status: Some(status),
                    })),
                }
            }
            Err((error, response)) => {
                let status = response.as_ref().map(|meta| meta.status);
                Err(Box::new(ParseFailure {
                    api: Api::new(entrypoint_url),
                    error,
                    response,
                    status,
                }))
            }
        }
    }

    /// Fetch and expand the entrypoint and its documentation.
    pub(crate) async fn fetch_entrypoint_and_docs(
        &self,
        entrypoint_url: &str,
    ) -> std::result::Result<EntrypointAndDocs, (ParseError, Option<ResponseMeta>)> {
        let entrypoint_doc = fetch_json_ld(&self.client, entrypoint_url, &self.options)
            .await
            .map_err(|error| (error, None))?;
        let entrypoint_body = match &entrypoint_doc.body {
            Some(body) => body.clone(),
            None => {
                return Err((
                    ParseError::UnusableResponse {
                        url: entrypoint_doc.meta.url.clone(),
                        status: entrypoint_doc.meta.status,
                    },
                    Some(entrypoint_doc.meta),
                ));
            }
        };

        let docs_url = extract_documentation_url(&entrypoint_doc.meta)
            .map_err(|error| (error, Some(entrypoint_doc.meta.clone())))?;
        debug!(docs_url = %docs_url, "discovered API documentation");

        let docs_doc = fetch_json_ld(&self.client, &docs_url, &self.options)
            .await
            .map_err(|error| (error, Some(entrypoint_doc.meta.clone())))?;
        let docs_body = match &docs_doc.body {
            Some(body) => body.clone(),
            None => {
                return Err((
                    ParseError::UnusableResponse {
                        url: docs_doc.meta.url.clone(),
                        status: docs_doc.meta.status,
                    },
                    Some(docs_doc.meta),
                ));
            }
        };

        // Both documents are in hand; their expansions are independent
        // CPU-bound transforms and may overlap (remote contexts aside).
        let loader = FetcherLoader {
            client: self.client.clone(),
            options: self.options.clone(),
        };
        let entrypoint_base = entrypoint_doc.meta.url.clone();
        let (entrypoint, docs) = tokio::try_join!(
            expand(&entrypoint_body, &entrypoint_base, &loader),
            expand(&docs_body, &docs_url, &loader),
        )
        .map_err(|error| (error, Some(entrypoint_doc.meta.clone())))?;

        Ok(EntrypointAndDocs {
            entrypoint_url: entrypoint_base,
            docs_url,
            entrypoint,
            docs,
            response: entrypoint_doc.meta,
        })
    }

    /// Fetch the query parameters supported by `resource`'s collection.
    ///
    /// This is the deliberately lazy part of the model: it costs one extra
    /// request per call and is never memoized.
    pub async fn get_parameters(&self, resource: &Resource) -> Result<Vec<Parameter>> {
        parameters::get_parameters(&self.client, &self.options, resource).await
    }
}

impl Default for HydraParser {
    fn default() -> Self {
        Self::new()
    }
}
