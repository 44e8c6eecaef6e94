use crate::errors::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Trait defining the contract for document storage operations.
///
/// Repositories read and write whole JSON documents by key. There is no
/// cross-process locking: concurrent read-modify-write cycles against the
/// same key are last-write-wins, and callers that need stronger guarantees
/// must serialize access themselves.
#[async_trait]
pub trait DocumentStoreTrait: Send + Sync {
    /// Returns `Ok(None)` when the document does not exist. A document that
    /// exists but cannot be parsed is reported as `StorageError::Corrupt`.
    fn get_document(&self, key: &str) -> Result<Option<Value>>;

    async fn put_document(&self, key: &str, value: &Value) -> Result<()>;

    async fn delete_document(&self, key: &str) -> Result<()>;
}
