//! Seeded random sampling of word subsets.
//!
//! All randomness flows through an explicitly owned [`Sampler`]; building a
//! new one with the same seed replays the exact same sequence of draws.

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use std::iter::FusedIterator;
use std::ops::RangeInclusive;

use crate::config::GeneratorConfig;
use crate::error::Error;
use crate::fixture::Sample;
use crate::wordlist::WordSet;

#[derive(Debug, Clone)]
pub struct Sampler {
    rng: StdRng,
}

impl Sampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw `sample_size` distinct words uniformly without replacement, then
    /// give each one an independent uniform weight from `weights`.
    ///
    /// Fails instead of truncating when the word set is too small.
    pub fn draw(
        &mut self,
        words: &WordSet,
        sample_size: usize,
        weights: &RangeInclusive<u32>,
    ) -> Result<Sample, Error> {
        check_population(words, sample_size)?;
        check_weights(weights)?;
        Ok(self.draw_checked(words, sample_size, weights))
    }

    /// Lazily draw `config.iterations` samples.
    ///
    /// Preconditions are checked up front so the iterator itself cannot fail.
    pub fn samples<'a>(
        &'a mut self,
        words: &'a WordSet,
        config: &GeneratorConfig,
    ) -> Result<Samples<'a>, Error> {
        check_population(words, config.sample_size)?;
        check_weights(&config.weights)?;
        Ok(Samples {
            sampler: self,
            words,
            sample_size: config.sample_size,
            weights: config.weights.clone(),
            remaining: config.iterations,
        })
    }

    fn draw_checked(
        &mut self,
        words: &WordSet,
        sample_size: usize,
        weights: &RangeInclusive<u32>,
    ) -> Sample {
        // Words first, then weights, so a sample's word choice does not depend
        // on the weight range.
        let picked = index::sample(&mut self.rng, words.len(), sample_size);
        let chosen: Vec<&str> = picked
            .into_iter()
            .map(|i| words.as_slice()[i].as_str())
            .collect();
        chosen
            .into_iter()
            .map(|word| (word.to_owned(), self.rng.gen_range(weights.clone())))
            .collect()
    }
}

fn check_population(words: &WordSet, sample_size: usize) -> Result<(), Error> {
    if sample_size > words.len() {
        return Err(Error::InsufficientPopulation {
            requested: sample_size,
            available: words.len(),
        });
    }
    Ok(())
}

fn check_weights(weights: &RangeInclusive<u32>) -> Result<(), Error> {
    if weights.is_empty() {
        return Err(Error::EmptyWeightRange {
            start: *weights.start(),
            end: *weights.end(),
        });
    }
    Ok(())
}

/// Bounded iterator over freshly drawn samples. See [`Sampler::samples`].
#[derive(Debug)]
pub struct Samples<'a> {
    sampler: &'a mut Sampler,
    words: &'a WordSet,
    sample_size: usize,
    weights: RangeInclusive<u32>,
    remaining: usize,
}

impl Iterator for Samples<'_> {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(
            self.sampler
                .draw_checked(self.words, self.sample_size, &self.weights),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Samples<'_> {}

impl FusedIterator for Samples<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn vocab(n: usize) -> WordSet {
        WordSet::from_text(&(0..n).map(|i| format!("w{i:04}\n")).collect::<String>())
    }

    #[test]
    fn draw_has_requested_size_and_distinct_keys() {
        let words = vocab(40);
        let mut sampler = Sampler::new(7);
        let sample = sampler.draw(&words, 25, &(0..=50)).unwrap();
        assert_eq!(sample.len(), 25);
        let keys: HashSet<&str> = sample.iter().map(|(w, _)| w).collect();
        assert_eq!(keys.len(), 25);
        assert!(keys.iter().all(|w| words.contains(w)));
        assert!(sample.iter().all(|(_, n)| n <= 50));
    }

    #[test]
    fn full_population_sample_is_a_permutation() {
        let words = vocab(30);
        let mut sampler = Sampler::new(1);
        let sample = sampler.draw(&words, 30, &(0..=50)).unwrap();
        let mut keys: Vec<&str> = sample.iter().map(|(w, _)| w).collect();
        keys.sort_unstable();
        assert_eq!(keys, words.iter().collect::<Vec<_>>());
    }

    #[test]
    fn insufficient_population() {
        let words = vocab(10);
        let mut sampler = Sampler::new(1337);
        assert_eq!(
            sampler.draw(&words, 11, &(0..=50)).unwrap_err(),
            Error::InsufficientPopulation {
                requested: 11,
                available: 10
            }
        );
    }

    #[test]
    fn empty_sample_from_empty_set() {
        let mut sampler = Sampler::new(1337);
        let sample = sampler.draw(&WordSet::default(), 0, &(0..=50)).unwrap();
        assert!(sample.is_empty());
    }

    #[test]
    #[allow(clippy::reversed_empty_ranges)]
    fn empty_weight_range() {
        let words = vocab(10);
        let mut sampler = Sampler::new(1337);
        assert_eq!(
            sampler.draw(&words, 3, &(5..=4)).unwrap_err(),
            Error::EmptyWeightRange { start: 5, end: 4 }
        );
    }

    #[test]
    fn fixed_weight() {
        let words = vocab(10);
        let mut sampler = Sampler::new(3);
        let sample = sampler.draw(&words, 10, &(9..=9)).unwrap();
        assert!(sample.iter().all(|(_, n)| n == 9));
    }

    #[test]
    fn same_seed_same_draws() {
        let words = vocab(100);
        let config = GeneratorConfig {
            iterations: 20,
            sample_size: 30,
            ..GeneratorConfig::default()
        };
        let mut a = Sampler::new(42);
        let mut b = Sampler::new(42);
        let xs: Vec<Sample> = a.samples(&words, &config).unwrap().collect();
        let ys: Vec<Sample> = b.samples(&words, &config).unwrap().collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn different_seed_different_draws() {
        let words = vocab(100);
        let config = GeneratorConfig {
            iterations: 5,
            sample_size: 30,
            ..GeneratorConfig::default()
        };
        let xs: Vec<Sample> = Sampler::new(1).samples(&words, &config).unwrap().collect();
        let ys: Vec<Sample> = Sampler::new(2).samples(&words, &config).unwrap().collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn samples_is_bounded_and_exact_size() {
        let words = vocab(20);
        let config = GeneratorConfig {
            iterations: 4,
            sample_size: 5,
            ..GeneratorConfig::default()
        };
        let mut sampler = Sampler::new(9);
        let mut iter = sampler.samples(&words, &config).unwrap();
        assert_eq!(iter.len(), 4);
        iter.next();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.by_ref().count(), 3);
        assert!(iter.next().is_none());
    }

    #[test]
    fn samples_checks_population_before_first_draw() {
        let words = vocab(3);
        let config = GeneratorConfig::default();
        let mut sampler = Sampler::new(config.seed);
        assert!(matches!(
            sampler.samples(&words, &config),
            Err(Error::InsufficientPopulation {
                requested: 350,
                available: 3
            })
        ));
    }

    #[test]
    fn samples_continue_the_sampler_stream() {
        let words = vocab(50);
        let config = GeneratorConfig {
            iterations: 2,
            sample_size: 10,
            ..GeneratorConfig::default()
        };
        let mut whole = Sampler::new(5);
        let all: Vec<Sample> = whole
            .samples(&words, &GeneratorConfig { iterations: 4, ..config.clone() })
            .unwrap()
            .collect();

        let mut split = Sampler::new(5);
        let mut parts: Vec<Sample> = split.samples(&words, &config).unwrap().collect();
        parts.extend(split.samples(&words, &config).unwrap());
        assert_eq!(all, parts);
    }
}
