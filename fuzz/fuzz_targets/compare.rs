#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use fuzzy_equals::fuzz::BatchComparator;
use fuzzy_equals::{compare, ComparisonOption, Options, Tolerance};

#[derive(Arbitrary, Debug)]
pub struct Input {
    pub s1: String,
    pub s2: String,
    pub options: u16,
}

fn fuzz(input: Input) {
    let options: Options = ComparisonOption::ALL
        .into_iter()
        .enumerate()
        .filter(|(idx, _)| input.options & (1 << idx) != 0)
        .map(|(_, option)| option)
        .collect();

    let scorer = BatchComparator::new(&input.s1, options);
    for tolerance in Tolerance::ALL {
        let result = compare(&input.s1, &input.s2, tolerance, options);
        assert!((0.0..=1.0).contains(&result.average_score));
        let measured = !scorer.evaluate(&input.s2).is_empty();
        assert_eq!(measured && tolerance.matches(result.average_score), result.matched);
        assert_eq!(result, scorer.compare(&input.s2, tolerance));
    }
}

fuzz_target!(|input: Input| {
    fuzz(input);
});
