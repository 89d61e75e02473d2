//! Document fetching and API documentation discovery
//!
//! One HTTP GET per call. The body is surfaced only when the response can
//! actually carry JSON-LD; everything else comes back as metadata-only so
//! callers can report the status uniformly.

use async_trait::async_trait;
use reqwest::header::LINK;
use reqwest::Client;
use tracing::debug;

use super::types::FetchedDocument;
use super::vocab;
use crate::error::{ParseError, Result};
use crate::http::{FetchOptions, ResponseMeta};
use crate::jsonld::DocumentLoader;

/// Media type every fetched document must declare.
const JSON_LD_MIME: &str = "application/ld+json";

/// Fetch one JSON-LD document.
pub(crate) async fn fetch_json_ld(
    client: &Client,
    url: &str,
    options: &FetchOptions,
) -> Result<FetchedDocument> {
    debug!(url, "fetching JSON-LD document");
    let response = client
        .get(url)
        .headers(options.headers.headers())
        .send()
        .await?;

    let meta = ResponseMeta {
        url: response.url().to_string(),
        status: response.status().as_u16(),
        headers: response.headers().clone(),
    };

    let usable = meta.status < 500
        && meta.status != 204
        && meta
            .content_type()
            .is_some_and(|content_type| content_type.contains(JSON_LD_MIME));

    let body = if usable {
        Some(response.json().await?)
    } else {
        debug!(url, status = %meta.status, "response cannot carry a JSON-LD document");
        None
    };

    Ok(FetchedDocument { meta, body })
}

/// Extract the documentation URL from the entrypoint response headers.
///
/// The entrypoint must advertise its documentation with a `Link` header
/// of relation `hydra:apiDocumentation`.
pub(crate) fn extract_documentation_url(meta: &ResponseMeta) -> Result<String> {
    let header = meta
        .headers
        .get(LINK)
        .and_then(|value| value.to_str().ok())
        .ok_or(ParseError::MissingLinkHeader)?;

    for entry in header.split(',') {
        let mut parts = entry.split(';');
        let target = match parts.next() {
            Some(target) => target.trim(),
            None => continue,
        };
        let Some(url) = target
            .strip_prefix('<')
            .and_then(|target| target.strip_suffix('>'))
        else {
            continue;
        };
        let relates = parts.any(|param| {
            let Some((key, value)) = param.split_once('=') else {
                return false;
            };
            key.trim() == "rel" && value.trim().trim_matches('"') == vocab::HYDRA_API_DOCUMENTATION
        });
        if relates {
            return Ok(url.to_owned());
        }
    }

    Err(ParseError::MalformedLinkHeader)
}

/// Document loader used during expansion: remote contexts re-enter the
/// same fetcher, and therefore the same headers, as the top-level fetches.
pub(crate) struct FetcherLoader {
    pub client: Client,
    pub options: FetchOptions,
}

#[async_trait]
impl DocumentLoader for FetcherLoader {
    async fn load(&self, url: &str) -> Result<serde_json::Value> {
        let document = fetch_json_ld(&self.client, url, &self.options).await?;
        document.body.ok_or(ParseError::UnusableResponse {
            url: document.meta.url,
            status: document.meta.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderMap, HeaderValue};

    fn meta_with_link(link: Option<&str>) -> ResponseMeta {
        let mut headers = HeaderMap::new();
        if let Some(link) = link {
            headers.insert(LINK, HeaderValue::from_str(link).unwrap());
        }
        ResponseMeta {
            url: "https://example.com/".into(),
            status: 200,
            headers,
        }
    }

    #[test]
    fn missing_link_header_is_reported() {
        let error = extract_documentation_url(&meta_with_link(None)).unwrap_err();
        assert!(matches!(error, ParseError::MissingLinkHeader));
    }

    #[test]
    fn link_header_without_the_relation_is_malformed() {
        let meta = meta_with_link(Some("<https://example.com/other>; rel=\"alternate\""));
        let error = extract_documentation_url(&meta).unwrap_err();
        assert!(matches!(error, ParseError::MalformedLinkHeader));
    }

    #[test]
    fn finds_the_documentation_relation_among_others() {
        let meta = meta_with_link(Some(
            "<https://example.com/alt>; rel=\"alternate\", \
             <https://example.com/docs.jsonld>; \
             rel=\"http://www.w3.org/ns/hydra/core#apiDocumentation\"",
        ));
        let url = extract_documentation_url(&meta).unwrap();
        assert_eq!(url, "https://example.com/docs.jsonld");
    }
}
