//! Document Module
//!
//! The records served by the read-through cache and their identifiers.

mod album;
mod id;

pub use album::Album;
pub use id::DocumentId;

use serde::{de::DeserializeOwned, Serialize};

// == Document Trait ==
/// A record retrievable by identifier and cacheable as JSON.
///
/// Documents are never mutated once stored, so a cached copy is always
/// equivalent to the stored one until it expires.
pub trait Document: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// The identifier assigned by the store, if any.
    fn id(&self) -> Option<DocumentId>;

    /// Stamps the identifier chosen by the store at creation time.
    fn assign_id(&mut self, id: DocumentId);
}
