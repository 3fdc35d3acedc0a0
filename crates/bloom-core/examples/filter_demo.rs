//! Walk through direct and optimal filter construction.
//!
//! ```bash
//! RUST_LOG=debug cargo run -p bloom-core --example filter_demo
//! ```

use std::sync::Arc;

use bloom_core::{BloomFilter, FilterError, InstrumentedFilter, Metrics};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), FilterError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    let metrics = Arc::new(Metrics::new());

    let mut direct = InstrumentedFilter::with_recorder(BloomFilter::new(64, 2)?, metrics.clone());
    direct.add("alpha")?;
    direct.add("betta")?;
    info!(
        alpha = direct.contains("alpha")?,
        gamma = direct.contains("gamma")?,
        betta = direct.contains("betta")?,
        bits = %direct,
        "Direct filter (m=64, k=2)"
    );

    let mut optimal = InstrumentedFilter::with_recorder(BloomFilter::optimal(3, 0.01)?, metrics.clone());
    optimal.add("one")?;
    optimal.add("two")?;
    info!(
        one = optimal.contains("one")?,
        three = optimal.contains("three")?,
        two = optimal.contains("two")?,
        m = optimal.filter().size(),
        k = optimal.filter().hash_count(),
        estimated_fpr = optimal.filter().false_positive_rate(),
        "Optimal filter (n=3, p=0.01)"
    );

    info!(metrics = ?metrics.snapshot(), "Done");
    Ok(())
}
