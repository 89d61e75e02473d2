//! Remote document loading during JSON-LD expansion

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// Loads remote documents referenced during expansion, typically the
/// `@context` IRIs of fetched documents.
///
/// The Hydra parser implements this on top of its own document fetcher,
/// so remote contexts travel with the same headers as the top-level
/// requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentLoader: Send + Sync {
    async fn load(&self, url: &str) -> Result<Value>;
}
