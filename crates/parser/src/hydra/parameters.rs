//! On-demand collection parameter discovery
//!
//! Fetches a resource's collection and reads its `hydra:search` template
//! mapping. Deliberately excluded from the main parse: it costs one
//! request per resource and most consumers never need it.

use reqwest::Client;
use tracing::debug;

use api_doc_parser_common::{Parameter, Resource};

use super::fetcher::fetch_json_ld;
use super::types::CollectionBody;
use crate::error::{ParseError, Result};
use crate::http::FetchOptions;

/// Fetch the query parameters supported by `resource`'s collection.
///
/// A collection without a search mapping yields an empty list; only the
/// fetch itself failing is an error.
pub(crate) async fn get_parameters(
    client: &Client,
    options: &FetchOptions,
    resource: &Resource,
) -> Result<Vec<Parameter>> {
    // Zero items requested: only the search template matters here.
    let separator = if resource.url.contains('?') { '&' } else { '?' };
    let url = format!("{}{}itemsPerPage=0", resource.url, separator);

    let document = fetch_json_ld(client, &url, options).await.map_err(|error| {
        ParseError::UnreachableResource {
            url: resource.url.clone(),
            reason: error.to_string(),
        }
    })?;
    let Some(body) = document.body else {
        return Err(ParseError::UnreachableResource {
            url: resource.url.clone(),
            reason: format!("unusable response (status {})", document.meta.status),
        });
    };

    let collection: CollectionBody = serde_json::from_value(body)?;
    let Some(search) = collection.search else {
        debug!(url = %resource.url, "collection declares no search mapping");
        return Ok(Vec::new());
    };

    let parameters = search
        .mapping
        .into_iter()
        .filter_map(|mapping| {
            let property = mapping.property?;
            // The range comes from the already-built field list, matched
            // by property name.
            let range = resource
                .field(&property)
                .and_then(|field| field.range.clone());
            Some(Parameter {
                variable: mapping.variable,
                range,
                required: mapping.required,
                description: String::new(),
                deprecated: false,
            })
        })
        .collect();

    Ok(parameters)
}
