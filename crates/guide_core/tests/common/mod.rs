#![allow(dead_code)]

use async_trait::async_trait;
use guide_core::{
    Coordinate, GuideConfig, KeyValueStore, KvError, KvResult, MemoryKvStore, NewPlace, Place,
    PlaceStore,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// Wraps a memory store and fails reads/writes on demand.
#[derive(Default)]
pub struct FlakyKvStore {
    pub inner: MemoryKvStore,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
    pub attempted_writes: AtomicUsize,
}

impl FlakyKvStore {
    pub fn failing_reads() -> Self {
        let store = Self::default();
        store.fail_reads.store(true, Ordering::SeqCst);
        store
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl KeyValueStore for FlakyKvStore {
    async fn get(&self, key: &str) -> KvResult<Option<Vec<u8>>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(KvError::Backend("simulated read failure".to_string()));
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> KvResult<()> {
        self.attempted_writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(KvError::Backend("simulated write failure".to_string()));
        }
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> KvResult<()> {
        self.inner.remove(key).await
    }
}

/// Store over a shared memory backend, already loaded with the seed.
pub async fn seeded_store() -> (PlaceStore<Arc<MemoryKvStore>>, Arc<MemoryKvStore>) {
    let kv = Arc::new(MemoryKvStore::new());
    let mut store = PlaceStore::new(Arc::clone(&kv), &GuideConfig::default());
    store.load().await;
    (store, kv)
}

pub fn park() -> NewPlace {
    NewPlace::new("Park", Coordinate::new(61.80, 34.38))
}

pub fn titles(places: &[Place]) -> Vec<&str> {
    places.iter().map(|place| place.title.as_str()).collect()
}
