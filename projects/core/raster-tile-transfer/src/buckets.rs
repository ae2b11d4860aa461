//! Optional profiling spans around load and store calls.
//!
//! The engines never require a collector. When one is passed, each call is wrapped in a
//! bucket named after the engine and the surface format, e.g. `StoreTile_B8G8R8A8_UNORM`.
//! Bucket IDs are registered once per format for the life of the process, with whichever
//! collector asks first.

use core::sync::atomic::{AtomicU32, Ordering};
use raster_tile_formats::format::Format;
use std::sync::{Mutex, PoisonError};

/// Receives timing spans.
pub trait BucketCollector: Send + Sync {
    /// Registers a bucket called `name`, returning its ID.
    fn register_bucket(&self, name: &str) -> u32;
    /// Opens a span in bucket `id`.
    fn start_bucket(&self, id: u32);
    /// Closes the innermost span in bucket `id`.
    fn stop_bucket(&self, id: u32);
}

/// A collector that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBucketCollector;

impl BucketCollector for NullBucketCollector {
    fn register_bucket(&self, _name: &str) -> u32 {
        0
    }

    fn start_bucket(&self, _id: u32) {}

    fn stop_bucket(&self, _id: u32) {}
}

const NUM_FORMATS: usize = Format::ALL.len();
const UNREGISTERED: u32 = u32::MAX;

/// Bucket IDs of one engine, one slot per format.
#[derive(Debug)]
pub struct BucketCache {
    prefix: &'static str,
    ids: [AtomicU32; NUM_FORMATS],
    lock: Mutex<()>,
}

impl BucketCache {
    /// Creates an empty cache naming its buckets `{prefix}_{format}`.
    pub const fn new(prefix: &'static str) -> Self {
        #[allow(clippy::declare_interior_mutable_const)]
        const EMPTY: AtomicU32 = AtomicU32::new(UNREGISTERED);
        Self {
            prefix,
            ids: [EMPTY; NUM_FORMATS],
            lock: Mutex::new(()),
        }
    }

    /// Returns the bucket ID for `format`, registering it with `collector` on first use.
    ///
    /// Concurrent first uses register the bucket only once.
    ///
    /// The cache does not remember which collector registered an ID. Later calls return
    /// the cached ID even for a different collector, without registering with it, so every
    /// collector used with one cache must share the first collector's ID space. The engine
    /// caches ([`LOAD_TILE_BUCKETS`], [`STORE_TILE_BUCKETS`]) live for the whole process.
    pub fn bucket_id(&self, collector: &dyn BucketCollector, format: Format) -> u32 {
        let slot = &self.ids[format.row()];
        let id = slot.load(Ordering::Acquire);
        if id != UNREGISTERED {
            return id;
        }

        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let id = slot.load(Ordering::Acquire);
        if id != UNREGISTERED {
            return id;
        }

        let id = collector.register_bucket(&format!("{}_{}", self.prefix, format.name()));
        slot.store(id, Ordering::Release);
        id
    }
}

/// Bucket IDs of [`load_tile`](crate::load_tile) spans.
pub static LOAD_TILE_BUCKETS: BucketCache = BucketCache::new("LoadTile");
/// Bucket IDs of [`store_tile`](crate::store_tile) spans.
pub static STORE_TILE_BUCKETS: BucketCache = BucketCache::new("StoreTile");

/// Closes its span when dropped.
pub(crate) struct BucketSpan<'a> {
    collector: &'a dyn BucketCollector,
    id: u32,
}

impl<'a> BucketSpan<'a> {
    pub(crate) fn start(
        collector: &'a dyn BucketCollector,
        cache: &BucketCache,
        format: Format,
    ) -> Self {
        let id = cache.bucket_id(collector, format);
        collector.start_bucket(id);
        Self { collector, id }
    }
}

impl Drop for BucketSpan<'_> {
    fn drop(&mut self) {
        self.collector.stop_bucket(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;
    use std::string::String;
    use std::sync::Arc;

    #[derive(Default)]
    struct RecordingCollector {
        names: Mutex<Vec<String>>,
        events: Mutex<Vec<(bool, u32)>>,
    }

    impl BucketCollector for RecordingCollector {
        fn register_bucket(&self, name: &str) -> u32 {
            let mut names = self.names.lock().unwrap();
            names.push(name.into());
            100 + names.len() as u32 - 1
        }

        fn start_bucket(&self, id: u32) {
            self.events.lock().unwrap().push((true, id));
        }

        fn stop_bucket(&self, id: u32) {
            self.events.lock().unwrap().push((false, id));
        }
    }

    #[test]
    fn registers_each_format_once() {
        let cache = BucketCache::new("StoreTile");
        let collector = RecordingCollector::default();

        let a = cache.bucket_id(&collector, Format::B8G8R8A8_UNORM);
        let b = cache.bucket_id(&collector, Format::R32_FLOAT);
        assert_eq!(cache.bucket_id(&collector, Format::B8G8R8A8_UNORM), a);
        assert_ne!(a, b);
        assert_eq!(
            *collector.names.lock().unwrap(),
            ["StoreTile_B8G8R8A8_UNORM", "StoreTile_R32_FLOAT"]
        );
    }

    #[test]
    fn ids_are_shared_across_collectors() {
        let cache = BucketCache::new("StoreTile");
        let first = RecordingCollector::default();
        let second = RecordingCollector::default();

        let id = cache.bucket_id(&first, Format::R32_FLOAT);
        assert_eq!(cache.bucket_id(&second, Format::R32_FLOAT), id);
        assert_eq!(first.names.lock().unwrap().len(), 1);
        assert!(second.names.lock().unwrap().is_empty());
    }

    #[test]
    fn concurrent_first_use_registers_once() {
        let cache = Arc::new(BucketCache::new("LoadTile"));
        let collector = Arc::new(RecordingCollector::default());

        let threads: Vec<_> = (0..8)
            .map(|_| {
                let cache = cache.clone();
                let collector = collector.clone();
                std::thread::spawn(move || cache.bucket_id(&*collector, Format::R16_UNORM))
            })
            .collect();
        let ids: Vec<u32> = threads.into_iter().map(|x| x.join().unwrap()).collect();

        assert!(ids.iter().all(|&x| x == ids[0]));
        assert_eq!(collector.names.lock().unwrap().len(), 1);
    }

    #[test]
    fn spans_stop_on_drop() {
        let cache = BucketCache::new("LoadTile");
        let collector = RecordingCollector::default();
        {
            let _span = BucketSpan::start(&collector, &cache, Format::R8_UINT);
        }
        assert_eq!(*collector.events.lock().unwrap(), [(true, 100), (false, 100)]);
    }

    #[test]
    fn null_collector_is_silent() {
        let cache = BucketCache::new("LoadTile");
        assert_eq!(cache.bucket_id(&NullBucketCollector, Format::R8_UINT), 0);
    }
}
