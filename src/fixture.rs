//! Fixture data model, payload rendering and parsing.
//!
//! A fixture file is a single form-encoded-looking line:
//!
//! ```text
//! language=Spanish&tfs=[{"el": 3, "que": 41, ...}, ...]\n
//! ```

use anyhow::{Context, Result};
use log::{debug, info};
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use crate::config::{GeneratorConfig, is_valid_language};
use crate::error::Error;
use crate::output;
use crate::sampler::Sampler;
use crate::wordlist::WordSet;

/// One synthetic term-frequency record: distinct words with their weights,
/// in draw order. Serializes as a JSON object with keys in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sample {
    entries: Vec<(String, u32)>,
}

impl Sample {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, word: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(w, _)| w == word)
            .map(|&(_, n)| n)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(w, n)| (w.as_str(), *n))
    }

    pub fn into_entries(self) -> Vec<(String, u32)> {
        self.entries
    }

    fn first_duplicate(&self) -> Option<&str> {
        let mut seen = HashSet::with_capacity(self.entries.len());
        self.entries
            .iter()
            .map(|(w, _)| w.as_str())
            .find(|w| !seen.insert(*w))
    }
}

impl FromIterator<(String, u32)> for Sample {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Serialize for Sample {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(w, n)| (w, n)))
    }
}

impl<'de> Deserialize<'de> for Sample {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SampleVisitor;

        impl<'de> Visitor<'de> for SampleVisitor {
            type Value = Sample;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping words to non-negative integer weights")
            }

            // Duplicates are kept here and rejected by `Fixture::parse`, which
            // knows the sample index for the error.
            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Sample, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((word, weight)) = map.next_entry::<String, u32>()? {
                    entries.push((word, weight));
                }
                Ok(Sample { entries })
            }
        }

        deserializer.deserialize_map(SampleVisitor)
    }
}

/// The complete generated artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    language: String,
    samples: Vec<Sample>,
}

impl Fixture {
    /// Draw `config.iterations` samples from `words` with a sampler seeded
    /// from `config.seed`.
    pub fn generate(words: &WordSet, config: &GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let mut sampler = Sampler::new(config.seed);
        let samples: Vec<Sample> = sampler.samples(words, config)?.collect();
        debug!(
            "drew {} samples of {} words (seed {}, weights {:?})",
            samples.len(),
            config.sample_size,
            config.seed,
            config.weights
        );
        Ok(Self {
            language: config.language.clone(),
            samples,
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Full file content: prefix, JSON array, newline.
    pub fn to_payload(&self) -> Result<Vec<u8>> {
        let mut buf = format!("language={}&tfs=", self.language).into_bytes();
        output::write_json(&mut buf, &self.samples).context("failed to serialize samples")?;
        buf.push(b'\n');
        Ok(buf)
    }

    /// Render the payload in memory, then write it with a single call.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let payload = self.to_payload()?;
        std::fs::write(path, &payload)
            .with_context(|| format!("failed to write fixture: {}", path.display()))?;
        info!("wrote {} bytes to {}", payload.len(), path.display());
        Ok(())
    }

    /// Read a payload produced by [`Fixture::to_payload`] (or by any tool
    /// following the same layout).
    pub fn parse(text: &str) -> Result<Self> {
        let (language, json) = text
            .strip_prefix("language=")
            .and_then(|rest| rest.split_once("&tfs="))
            .ok_or(Error::MissingPrefix)?;
        if !is_valid_language(language) {
            return Err(Error::InvalidLanguage(language.to_string()).into());
        }
        let json = json
            .strip_suffix('\n')
            .filter(|j| !j.ends_with('\n'))
            .ok_or(Error::MissingTrailingNewline)?;
        let samples: Vec<Sample> = serde_json::from_str(json)
            .context("tfs is not a JSON array of word-to-weight objects")?;
        for (index, sample) in samples.iter().enumerate() {
            if let Some(key) = sample.first_duplicate() {
                return Err(Error::DuplicateKey {
                    index,
                    key: key.to_string(),
                }
                .into());
            }
        }
        Ok(Self {
            language: language.to_string(),
            samples,
        })
    }

    pub fn read_from(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read fixture: {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("malformed fixture: {}", path.display()))
    }
}

/// Load `stopwords`, generate a fixture and write it to `output`.
///
/// Nothing is written unless generation succeeds.
pub fn generate_file(stopwords: &Path, output: &Path, config: &GeneratorConfig) -> Result<Fixture> {
    let words = WordSet::load(stopwords)?;
    info!("loaded {} distinct words from {}", words.len(), stopwords.display());
    let fixture = Fixture::generate(&words, config)
        .with_context(|| format!("failed to generate fixture from {}", stopwords.display()))?;
    info!("generated {} samples", fixture.len());
    fixture.write_to(output)?;
    Ok(fixture)
}
