//! Property-Based Tests for the read-through protocol
//!
//! Each case builds a fresh store and cache and drives them on a
//! current-thread runtime.

use proptest::prelude::*;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use super::test_doubles::CountingStore;
use super::{Lookup, ReadThroughCache, ReadThroughOptions};
use crate::cache::{KeyValueCache, MemoryCache};
use crate::document::{Album, DocumentId};

const TTL: Duration = Duration::from_secs(300);

fn album_strategy() -> impl Strategy<Value = Album> {
    ("[A-Za-z ]{1,24}", "[A-Za-z0-9 .]{1,32}", 1600i32..2100)
        .prop_map(|(artist, title, year)| Album::new(artist, title, year))
}

fn block_on<F: Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(future)
}

type Harness = (
    ReadThroughCache<Album>,
    Arc<CountingStore>,
    MemoryCache,
    Vec<DocumentId>,
);

async fn reader_over(albums: Vec<Album>) -> Harness {
    let (store, ids) = CountingStore::seeded(albums).await;
    let store = Arc::new(store);
    let cache = MemoryCache::new(1000);
    let reader: ReadThroughCache<Album> = ReadThroughCache::new(
        store.clone(),
        Arc::new(cache.clone()),
        ReadThroughOptions::new(TTL),
    );
    (reader, store, cache, ids)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    // GetMany answers line up with the requested ids, whatever mix of
    // stored, missing, and already-cached ids is asked for
    #[test]
    fn prop_get_many_preserves_order(
        albums in prop::collection::vec(album_strategy(), 1..8),
        picks in prop::collection::vec((any::<bool>(), any::<prop::sample::Index>()), 1..16),
        prewarm in any::<bool>()
    ) {
        block_on(async {
            let (reader, _store, _cache, ids) = reader_over(albums).await;
            if prewarm {
                reader.get_many(&ids[..1]).await;
            }

            let requested: Vec<DocumentId> = picks
                .iter()
                .map(|(stored, index)| if *stored { *index.get(&ids) } else { DocumentId::new() })
                .collect();

            let results = reader.get_many(&requested).await;
            prop_assert_eq!(results.len(), requested.len());

            for (id, result) in requested.iter().zip(results) {
                let lookup = result.unwrap();
                if ids.contains(id) {
                    prop_assert_eq!(lookup.into_document().and_then(|a| a.id), Some(*id));
                } else {
                    prop_assert_eq!(lookup, Lookup::NotFound);
                }
            }
            Ok(())
        })?;
    }

    // A second Get of a cached document is answered without the store and
    // returns the same content
    #[test]
    fn prop_repeated_hits_are_idempotent(
        albums in prop::collection::vec(album_strategy(), 1..8),
        index in any::<prop::sample::Index>()
    ) {
        block_on(async {
            let (reader, store, _cache, ids) = reader_over(albums).await;
            let id = *index.get(&ids);

            let first = reader.get(&id).await.unwrap();
            let second = reader.get(&id).await.unwrap();

            prop_assert_eq!(store.fetches(), 1);
            prop_assert!(second.is_cache_hit());
            prop_assert_eq!(first.into_document(), second.into_document());
            Ok(())
        })?;
    }

    // Looking up ids the store does not hold never writes to the cache
    #[test]
    fn prop_negative_results_never_cached(
        albums in prop::collection::vec(album_strategy(), 0..4),
        missing in 1usize..10
    ) {
        block_on(async {
            let (reader, _store, cache, _ids) = reader_over(albums).await;
            let unknown: Vec<DocumentId> = (0..missing).map(|_| DocumentId::new()).collect();

            for result in reader.get_many(&unknown).await {
                prop_assert_eq!(result.unwrap(), Lookup::NotFound);
            }
            for id in &unknown {
                prop_assert!(cache.get(&id.cache_key()).await.unwrap().is_none());
            }
            prop_assert_eq!(reader.stats().populates, 0);
            Ok(())
        })?;
    }
}
