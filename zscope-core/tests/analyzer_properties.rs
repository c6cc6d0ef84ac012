// zscope-core/tests/analyzer_properties.rs
use proptest::prelude::*;

use zscope_core::{classify, compute_summary_statistics, summarize_outliers, Analysis, Sample};

fn to_samples(values: &[i32]) -> Vec<Sample> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| Sample::new(format!("S{}", i), *v as f64))
        .collect()
}

fn outlier_labels(samples: &[Sample], threshold: f64) -> Vec<String> {
    let stats = compute_summary_statistics(samples).unwrap();
    classify(samples, &stats, threshold)
        .into_iter()
        .filter(|r| r.is_outlier)
        .map(|r| r.label)
        .collect()
}

proptest! {
    #[test]
    fn distinct_values_have_positive_spread(values in prop::collection::vec(-100_000i32..100_000, 2..64)) {
        prop_assume!(values.iter().any(|v| *v != values[0]));
        let stats = compute_summary_statistics(&to_samples(&values)).unwrap();
        prop_assert!(stats.std_dev > 0.0);
    }

    #[test]
    fn identical_values_have_no_outliers(value in -1e6f64..1e6, n in 2usize..40, threshold in -5.0f64..5.0) {
        let samples: Vec<Sample> = (0..n).map(|i| Sample::new(format!("S{}", i), value)).collect();
        let stats = compute_summary_statistics(&samples).unwrap();
        prop_assert_eq!(stats.std_dev, 0.0);
        let results = classify(&samples, &stats, threshold);
        prop_assert!(results.iter().all(|r| r.zscore == 0.0 && !r.is_outlier));
        let results = Analysis::new(samples).unwrap().classify(threshold);
        prop_assert!(results.iter().all(|r| r.zscore == 0.0 && !r.is_outlier));
    }

    #[test]
    fn classify_is_idempotent(values in prop::collection::vec(-1000i32..1000, 2..40), threshold in -3.0f64..3.0) {
        let samples = to_samples(&values);
        let stats = compute_summary_statistics(&samples).unwrap();
        let first = classify(&samples, &stats, threshold);
        let second = classify(&samples, &stats, threshold);
        prop_assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            prop_assert_eq!(a.zscore.to_bits(), b.zscore.to_bits());
            prop_assert_eq!(a.is_outlier, b.is_outlier);
            prop_assert_eq!(&a.label, &b.label);
        }
    }

    #[test]
    fn raising_threshold_never_adds_outliers(
        values in prop::collection::vec(-1000i32..1000, 2..40),
        t1 in -3.0f64..3.0,
        delta in 0.0f64..3.0,
    ) {
        let samples = to_samples(&values);
        let low = outlier_labels(&samples, t1);
        let high = outlier_labels(&samples, t1 + delta);
        for label in &high {
            prop_assert!(low.contains(label), "{} flagged at {} but not at {}", label, t1 + delta, t1);
        }
    }

    #[test]
    fn summary_matches_flags(values in prop::collection::vec(-1000i32..1000, 2..40), threshold in -1.0f64..3.0) {
        let samples = to_samples(&values);
        let stats = compute_summary_statistics(&samples).unwrap();
        let results = classify(&samples, &stats, threshold);
        let summary = summarize_outliers(&results);

        let flagged = results.iter().filter(|r| r.is_outlier).count();
        prop_assert_eq!(summary.count, flagged);
        let expected = 100.0 * flagged as f64 / results.len() as f64;
        prop_assert!((summary.percentage - expected).abs() < 1e-9);

        if flagged == 0 {
            prop_assert_eq!((summary.min, summary.max), (0.0, 0.0));
        } else {
            prop_assert!(summary.min <= summary.max);
        }
    }

    #[test]
    fn cached_analysis_agrees(values in prop::collection::vec(-1000i32..1000, 2..40), threshold in -1.0f64..3.0) {
        let samples = to_samples(&values);
        let stats = compute_summary_statistics(&samples).unwrap();
        let analysis = Analysis::new(samples.clone()).unwrap();
        prop_assert_eq!(analysis.classify(threshold), classify(&samples, &stats, threshold));
    }
}
