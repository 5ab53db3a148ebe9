//! Stopword list loading.

use anyhow::{Context, Result};
use log::debug;
use std::collections::BTreeSet;
use std::path::Path;

use crate::decompress::read_maybe_compressed;

/// Deduplicated vocabulary read from a stopword file.
///
/// Kept sorted so that index-based sampling sees the same order on every
/// run regardless of the order lines appear in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: Vec<String>,
}

impl WordSet {
    /// One word per line. Any Unicode line boundary ends a line (`\r` alone,
    /// `\u{2028}`, ...). Surrounding whitespace is trimmed and blank lines are
    /// skipped.
    pub fn from_text(text: &str) -> Self {
        text.split(is_line_boundary).collect()
    }

    /// Like [`WordSet::from_text`], after validating UTF-8 and dropping a
    /// leading byte-order mark.
    pub fn from_bytes(buf: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(strip_bom(buf)).context("word list is not valid UTF-8")?;
        Ok(Self::from_text(text))
    }

    /// Read a word list from disk; `.gz` and `.zst` files are decompressed.
    pub fn load(path: &Path) -> Result<Self> {
        let buf = read_maybe_compressed(path)?;
        let words = Self::from_bytes(&buf)
            .with_context(|| format!("failed to load word list: {}", path.display()))?;
        debug!(
            "read {} bytes from {}, {} distinct words",
            buf.len(),
            path.display(),
            words.len()
        );
        Ok(words)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words
            .binary_search_by(|w| w.as_str().cmp(word))
            .is_ok()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<'a> FromIterator<&'a str> for WordSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let set: BTreeSet<&str> = iter
            .into_iter()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .collect();
        Self {
            words: set.into_iter().map(str::to_owned).collect(),
        }
    }
}

fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c'..='\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Strip UTF-8 BOM (U+FEFF, bytes EF BB BF) from the beginning of a buffer.
fn strip_bom(buf: &[u8]) -> &[u8] {
    buf.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(buf)
}
