//! In-memory document store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::DocumentStore;
use crate::document::{Document, DocumentId};
use crate::error::Result;

#[derive(Debug)]
struct Collection<D> {
    documents: HashMap<DocumentId, D>,
    /// Insertion order, for stable enumeration
    order: Vec<DocumentId>,
}

// == Memory Document Store ==
/// A document store held entirely in process memory.
#[derive(Debug)]
pub struct MemoryDocumentStore<D> {
    collection: RwLock<Collection<D>>,
}

impl<D: Document> MemoryDocumentStore<D> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            collection: RwLock::new(Collection {
                documents: HashMap::new(),
                order: Vec::new(),
            }),
        }
    }

    // == Insert Many ==
    /// Stores the documents, keeping an identifier a document already
    /// carries unless it is taken, and issuing a fresh one otherwise.
    ///
    /// Returns the identifiers in the same order as the input.
    pub async fn insert_many(&self, documents: Vec<D>) -> Vec<DocumentId> {
        let mut collection = self.collection.write().await;
        let mut ids = Vec::with_capacity(documents.len());

        for mut document in documents {
            let id = match document.id() {
                Some(id) if !collection.documents.contains_key(&id) => id,
                _ => {
                    let id = DocumentId::new();
                    document.assign_id(id);
                    id
                }
            };
            collection.documents.insert(id, document);
            collection.order.push(id);
            ids.push(id);
        }

        ids
    }

    // == Drop All ==
    /// Removes every document, returning how many were dropped.
    pub async fn drop_all(&self) -> usize {
        let mut collection = self.collection.write().await;
        let count = collection.documents.len();
        collection.documents.clear();
        collection.order.clear();
        count
    }

    pub async fn len(&self) -> usize {
        self.collection.read().await.documents.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.collection.read().await.documents.is_empty()
    }
}

impl<D: Document> Default for MemoryDocumentStore<D> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<D: Document> DocumentStore<D> for MemoryDocumentStore<D> {
    async fn find_by_id(&self, id: &DocumentId) -> Result<Option<D>> {
        Ok(self.collection.read().await.documents.get(id).cloned())
    }

    async fn list_all_ids(&self) -> Result<Vec<DocumentId>> {
        Ok(self.collection.read().await.order.clone())
    }
}
