//! # Filter Scenarios
//!
//! Exercises the filter the way a caller would:
//!
//! 1. **Direct construction**: `(m, k)` chosen by the caller
//! 2. **Optimal construction**: `(m, k)` derived from `(n, p)`
//! 3. **Configuration**: JSON config to filter
//! 4. **Instrumentation**: shared metrics across filters

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bloom_core::{
        BloomConfig, BloomConfigBuilder, BloomFilter, FilterError, InstrumentedFilter, Metrics,
    };

    use crate::init_test_tracing;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const PINNED_SEEDS: [u32; 7] = [
        0x9E37_79B1,
        0x85EB_CA77,
        0xC2B2_AE3D,
        0x27D4_EB2F,
        0x1656_67B1,
        0xD3A2_646D,
        0xFD70_46C5,
    ];

    fn users(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("user-{i}")).collect()
    }

    // =============================================================================
    // DIRECT CONSTRUCTION
    // =============================================================================

    #[test]
    fn test_direct_filter_alpha_betta_gamma() {
        init_test_tracing();

        let mut filter = BloomFilter::new(64, 2).unwrap();
        filter.add("alpha").unwrap();
        filter.add("betta").unwrap();

        assert!(filter.contains("alpha").unwrap());
        assert!(filter.contains("betta").unwrap());

        let gamma = filter.contains("gamma").unwrap();
        assert_eq!(filter.contains("gamma").unwrap(), gamma);

        let ones = filter.render().matches('1').count();
        assert!(ones <= 2 * 2, "At most k bits per added element");
    }

    #[test]
    fn test_pinned_seeds_give_reproducible_bits() {
        let mut filter = BloomFilter::with_seeds(64, &[33, 35]).unwrap();
        filter.add("alpha").unwrap();
        filter.add("betta").unwrap();

        // alpha -> {17, 39}, betta -> {45, 49}
        assert_eq!(
            filter.render(),
            "0000000000000010001000001000000000000000000000100000000000000000"
        );
        assert!(!filter.contains("gamma").unwrap());

        let mut again = BloomFilter::with_seeds(64, &filter.seeds()).unwrap();
        again.add("betta").unwrap();
        again.add("alpha").unwrap();
        assert_eq!(again.render(), filter.render(), "Insertion order does not matter");
    }

    // =============================================================================
    // OPTIMAL CONSTRUCTION
    // =============================================================================

    #[test]
    fn test_optimal_filter_one_two_three() {
        init_test_tracing();

        let mut filter = BloomFilter::optimal(3, 0.01).unwrap();
        assert_eq!(filter.size(), 29);
        assert_eq!(filter.hash_count(), 7);

        filter.add("one").unwrap();
        filter.add("two").unwrap();
        assert!(filter.contains("one").unwrap());
        assert!(filter.contains("two").unwrap());

        let three = filter.contains("three").unwrap();
        assert_eq!(filter.contains("three").unwrap(), three);
    }

    #[test]
    fn test_optimal_filter_observed_fpr_near_target() {
        let config = BloomConfig::optimal(1_000, 0.01).with_seeds(PINNED_SEEDS.to_vec());
        let mut filter = BloomFilter::from_config(&config).unwrap();
        assert_eq!((filter.size(), filter.hash_count()), (9_585, 7));

        for user in users(1_000) {
            filter.add(&user).unwrap();
        }
        for user in users(1_000) {
            assert!(filter.contains(&user).unwrap(), "False negative for {user}");
        }

        let queries = 50_000;
        let false_positives = (0..queries)
            .filter(|i| filter.contains(&format!("visitor-{i}")).unwrap())
            .count();
        let observed = false_positives as f64 / queries as f64;

        assert!(observed <= 0.03, "Observed FPR {observed} too far above 0.01");
        assert!((filter.false_positive_rate() - 0.01).abs() < 0.001);
    }

    #[test]
    fn test_invalid_construction_reports_parameter() {
        let cases: Vec<(Result<BloomFilter, FilterError>, &str)> = vec![
            (BloomFilter::new(0, 2), "size_bits"),
            (BloomFilter::new(64, 0), "hash_count"),
            (BloomFilter::optimal(0, 0.01), "expected_elements"),
            (BloomFilter::optimal(3, 0.0), "target_fpr"),
            (BloomFilter::optimal(3, 1.0), "target_fpr"),
            (BloomFilter::with_seeds(64, &[]), "seeds"),
        ];

        for (result, expected) in cases {
            match result {
                Err(FilterError::InvalidParameter { name, .. }) => assert_eq!(name, expected),
                other => panic!("Expected InvalidParameter({expected}), got {other:?}"),
            }
        }
    }

    // =============================================================================
    // CONFIGURATION
    // =============================================================================

    #[test]
    fn test_json_config_builds_equivalent_filter() {
        let json = r#"{
            "sizing": { "mode": "explicit", "size_bits": 64, "hash_count": 2 },
            "seeds": [33, 35]
        }"#;
        let config: BloomConfig = serde_json::from_str(json).unwrap();
        let from_config = BloomFilter::from_config(&config).unwrap();
        let direct = BloomFilter::with_seeds(64, &[33, 35]).unwrap();

        assert_eq!(from_config.size(), direct.size());
        assert_eq!(from_config.seeds(), direct.seeds());
    }

    #[test]
    fn test_builder_config_matches_named_constructor() {
        let config = BloomConfigBuilder::new()
            .expected_elements(3)
            .target_fpr(0.01)
            .build()
            .unwrap();
        let filter = BloomFilter::from_config(&config).unwrap();
        let optimal = BloomFilter::optimal(3, 0.01).unwrap();

        assert_eq!(filter.size(), optimal.size());
        assert_eq!(filter.hash_count(), optimal.hash_count());
    }

    #[test]
    fn test_mixed_element_types_share_text_encoding() {
        let mut filter = BloomFilter::with_seeds(1_024, &PINNED_SEEDS).unwrap();
        filter.add(&42_u64).unwrap();
        filter.add(&'x').unwrap();
        filter.add(&1.5_f32).unwrap();

        assert!(filter.contains("42").unwrap());
        assert!(filter.contains("x").unwrap());
        assert!(filter.contains("1.5").unwrap());
        assert!(filter.contains_bytes(b"42"));
    }

    // =============================================================================
    // INSTRUMENTATION
    // =============================================================================

    #[test]
    fn test_shared_metrics_across_filters() {
        init_test_tracing();

        let metrics = Arc::new(Metrics::new());
        let mut direct =
            InstrumentedFilter::with_recorder(BloomFilter::new(64, 2).unwrap(), metrics.clone());
        let mut optimal = InstrumentedFilter::with_recorder(
            BloomFilter::optimal(3, 0.01).unwrap(),
            metrics.clone(),
        );

        direct.add("alpha").unwrap();
        direct.add("betta").unwrap();
        optimal.add("one").unwrap();
        optimal.add("two").unwrap();

        assert!(direct.contains("alpha").unwrap());
        assert!(optimal.contains("two").unwrap());

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.filters_created, 2);
        assert_eq!(snapshot.bits_allocated, 64 + 29);
        assert_eq!(snapshot.hash_functions_created, 2 + 7);
        assert_eq!(snapshot.elements_inserted, 4);
        assert_eq!(snapshot.lookups_performed, 2);
        assert_eq!(snapshot.lookups_positive, 2);
    }
}
