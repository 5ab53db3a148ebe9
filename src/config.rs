//! Generation parameters.
//!
//! The CLI always runs with [`GeneratorConfig::default`]; the fields are
//! public so library callers and tests can shrink the workload.

use std::ops::RangeInclusive;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::Error;

pub const DEFAULT_SEED: u64 = 1337;
pub const DEFAULT_ITERATIONS: usize = 500;
pub const DEFAULT_SAMPLE_SIZE: usize = 350;
pub const DEFAULT_MIN_WEIGHT: u32 = 0;
pub const DEFAULT_MAX_WEIGHT: u32 = 50;
pub const DEFAULT_LANGUAGE: &str = "Spanish";

// Same shape the word-cloud service requires of its language directories.
static LANGUAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-z]+$").expect("static regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Seed for the sampler. Same seed + same word list = same bytes out.
    pub seed: u64,
    /// Number of samples in the fixture.
    pub iterations: usize,
    /// Distinct words per sample.
    pub sample_size: usize,
    /// Inclusive bounds for each word's weight.
    pub weights: RangeInclusive<u32>,
    /// Value of the `language=` form field.
    pub language: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            iterations: DEFAULT_ITERATIONS,
            sample_size: DEFAULT_SAMPLE_SIZE,
            weights: DEFAULT_MIN_WEIGHT..=DEFAULT_MAX_WEIGHT,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if self.weights.is_empty() {
            return Err(Error::EmptyWeightRange {
                start: *self.weights.start(),
                end: *self.weights.end(),
            });
        }
        if !is_valid_language(&self.language) {
            return Err(Error::InvalidLanguage(self.language.clone()));
        }
        Ok(())
    }

    /// The literal text written before the JSON array.
    pub fn payload_prefix(&self) -> String {
        format!("language={}&tfs=", self.language)
    }
}

pub fn is_valid_language(language: &str) -> bool {
    LANGUAGE_RE.is_match(language)
}
