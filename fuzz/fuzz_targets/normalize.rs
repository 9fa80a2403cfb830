#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use fuzzy_equals::{Metric, MetricEvaluator};

#[derive(Arbitrary, Debug)]
pub struct Texts {
    pub s1: String,
    pub s2: String,
}

fn fuzz(texts: Texts) {
    for metric in Metric::ALL {
        if let Some(val) = metric.normalized_distance(&texts.s1, &texts.s2) {
            assert!((0.0..=1.0).contains(&val), "{metric} out of range: {val}");
        }

        if let Some(val) = metric.normalized_distance(&texts.s1, &texts.s1) {
            assert_eq!(0.0, val, "{metric} on identical input");
        }
    }
}

fuzz_target!(|texts: Texts| {
    fuzz(texts);
});
