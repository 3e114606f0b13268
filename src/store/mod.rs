//! Document Store Module
//!
//! The durable side of the read-through cache: the capability the core
//! relies on, plus an in-memory implementation used by the server and tests.

mod memory;

pub use memory::MemoryDocumentStore;

use async_trait::async_trait;

use crate::document::{Document, DocumentId};
use crate::error::Result;

// == Document Store Trait ==
/// Authoritative storage addressable by document identifier.
///
/// Implementations report connectivity failures as
/// [`crate::error::CacheError::StoreUnavailable`]. A missing document is
/// `Ok(None)`, never an error.
#[async_trait]
pub trait DocumentStore<D: Document>: Send + Sync {
    /// Point lookup by identifier.
    async fn find_by_id(&self, id: &DocumentId) -> Result<Option<D>>;

    /// Every identifier currently held by the store.
    async fn list_all_ids(&self) -> Result<Vec<DocumentId>>;
}
