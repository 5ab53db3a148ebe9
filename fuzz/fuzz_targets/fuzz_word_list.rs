#![no_main]
use libfuzzer_sys::fuzz_target;
use tfgen::{Fixture, GeneratorConfig, WordSet};

// Arbitrary bytes as a word list, then a small generation run over whatever
// words survive. Catches panics in trimming, BOM handling and sampling at
// the population boundary.
fuzz_target!(|data: &[u8]| {
    let Ok(words) = WordSet::from_bytes(data) else {
        return;
    };
    for sample_size in [0, words.len() / 2, words.len(), words.len() + 1] {
        let config = GeneratorConfig {
            iterations: 2,
            sample_size,
            ..GeneratorConfig::default()
        };
        match Fixture::generate(&words, &config) {
            Ok(fixture) => assert!(fixture.samples().iter().all(|s| s.len() == sample_size)),
            Err(_) => assert!(sample_size > words.len()),
        }
    }
});
