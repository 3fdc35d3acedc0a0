//! Service Layer
//!
//! Wraps the domain filter with observability.

mod instrumented_filter;

pub use instrumented_filter::InstrumentedFilter;
