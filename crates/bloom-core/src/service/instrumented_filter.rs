//! Bloom filter wrapped with metrics and tracing
//!
//! Behaves exactly like the wrapped [`BloomFilter`]; every insertion and
//! lookup is additionally timed and reported to a [`MetricsRecorder`].

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use tracing::trace;

use crate::domain::BloomFilter;
use crate::error::FilterError;
use crate::metrics::{MetricsRecorder, NoOpMetrics};

/// A [`BloomFilter`] reporting its activity to a metrics recorder
pub struct InstrumentedFilter<R: MetricsRecorder = NoOpMetrics> {
    filter: BloomFilter,
    recorder: Arc<R>,
}

impl InstrumentedFilter<NoOpMetrics> {
    /// Wrap `filter` without recording anything
    pub fn new(filter: BloomFilter) -> Self {
        Self::with_recorder(filter, Arc::new(NoOpMetrics))
    }
}

impl<R: MetricsRecorder> InstrumentedFilter<R> {
    /// Wrap `filter`, reporting its creation to `recorder`
    pub fn with_recorder(filter: BloomFilter, recorder: Arc<R>) -> Self {
        recorder.record_filter_created(filter.size(), filter.hash_count());
        Self { filter, recorder }
    }

    pub fn add<T: fmt::Display + ?Sized>(&mut self, element: &T) -> Result<(), FilterError> {
        let start = Instant::now();
        self.filter.add(element)?;
        self.recorder.record_insert(start.elapsed());
        trace!(
            elements = self.filter.elements_added(),
            bits_set = self.filter.bits_set(),
            "Element added"
        );
        Ok(())
    }

    pub fn add_bytes(&mut self, bytes: &[u8]) {
        let start = Instant::now();
        self.filter.add_bytes(bytes);
        self.recorder.record_insert(start.elapsed());
    }

    pub fn contains<T: fmt::Display + ?Sized>(&self, element: &T) -> Result<bool, FilterError> {
        let start = Instant::now();
        let found = self.filter.contains(element)?;
        self.recorder.record_lookup(start.elapsed(), found);
        trace!(found, "Lookup");
        Ok(found)
    }

    pub fn contains_bytes(&self, bytes: &[u8]) -> bool {
        let start = Instant::now();
        let found = self.filter.contains_bytes(bytes);
        self.recorder.record_lookup(start.elapsed(), found);
        found
    }

    /// The wrapped filter
    pub fn filter(&self) -> &BloomFilter {
        &self.filter
    }

    pub fn recorder(&self) -> &Arc<R> {
        &self.recorder
    }

    /// Unwrap, returning the filter
    pub fn into_inner(self) -> BloomFilter {
        self.filter
    }
}

impl<R: MetricsRecorder> fmt::Display for InstrumentedFilter<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.filter, f)
    }
}
