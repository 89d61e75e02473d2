//! HTTP request options and response metadata

use std::fmt;
use std::sync::Arc;

pub use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::header::CONTENT_TYPE;

/// Supplier of request headers.
///
/// `Dynamic` is re-evaluated for every request, so callers can hand out
/// refreshed authorization tokens without rebuilding the parser.
#[derive(Clone, Default)]
pub enum HeadersProvider {
    #[default]
    None,
    Static(HeaderMap),
    Dynamic(Arc<dyn Fn() -> HeaderMap + Send + Sync>),
}

impl HeadersProvider {
    pub fn headers(&self) -> HeaderMap {
        match self {
            HeadersProvider::None => HeaderMap::new(),
            HeadersProvider::Static(map) => map.clone(),
            HeadersProvider::Dynamic(supplier) => supplier(),
        }
    }
}

impl fmt::Debug for HeadersProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeadersProvider::None => f.write_str("HeadersProvider::None"),
            HeadersProvider::Static(map) => {
                f.debug_tuple("HeadersProvider::Static").field(map).finish()
            }
            HeadersProvider::Dynamic(_) => f.write_str("HeadersProvider::Dynamic(..)"),
        }
    }
}

/// Options applied to every request issued by a parser.
#[derive(Clone, Debug, Default)]
pub struct FetchOptions {
    pub headers: HeadersProvider,
}

impl FetchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send the same headers with every request.
    pub fn with_headers(headers: HeaderMap) -> Self {
        Self {
            headers: HeadersProvider::Static(headers),
        }
    }

    /// Re-evaluate `supplier` for every request.
    pub fn with_headers_fn(supplier: impl Fn() -> HeaderMap + Send + Sync + 'static) -> Self {
        Self {
            headers: HeadersProvider::Dynamic(Arc::new(supplier)),
        }
    }
}

/// Snapshot of an HTTP response: final URL, status and headers.
///
/// Kept separate from `reqwest::Response` because the body has already
/// been consumed by the time callers see it.
#[derive(Clone, Debug)]
pub struct ResponseMeta {
    pub url: String,
    pub status: u16,
    pub headers: HeaderMap,
}

impl ResponseMeta {
    /// The `Content-Type` header, if any.
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
    }
}
