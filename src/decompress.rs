//! Transparent decompression for gzip and zstd compressed word lists.
//!
//! Detects compression by file extension (.gz → gzip, .zst/.zstd → zstd).
//! Decompresses the entire file to an in-memory buffer; word lists are small.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    Gzip,
    Zstd,
}

impl Compression {
    /// Compression implied by the file extension, if any.
    pub fn detect(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "gz" | "gzip" => Some(Self::Gzip),
            "zst" | "zstd" => Some(Self::Zstd),
            _ => None,
        }
    }
}

/// Read a file, decompressing it first when its extension calls for it.
pub fn read_maybe_compressed(path: &Path) -> Result<Vec<u8>> {
    let Some(compression) = Compression::detect(path) else {
        return std::fs::read(path)
            .with_context(|| format!("failed to read file: {}", path.display()));
    };
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open file: {}", path.display()))?;
    let mut buf = Vec::new();
    match compression {
        Compression::Gzip => {
            flate2::read::GzDecoder::new(file)
                .read_to_end(&mut buf)
                .with_context(|| format!("failed to decompress gzip file: {}", path.display()))?;
        }
        Compression::Zstd => {
            zstd::Decoder::new(file)
                .with_context(|| {
                    format!("failed to initialize zstd decoder for: {}", path.display())
                })?
                .read_to_end(&mut buf)
                .with_context(|| format!("failed to decompress zstd file: {}", path.display()))?;
        }
    }
    Ok(buf)
}
