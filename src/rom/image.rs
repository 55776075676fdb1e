use anyhow::{Context, Result};
use std::fs;

/// The built bootloader image, read whole. No format checks: the transform
/// is byte-oriented and works on any contents, including an empty file.
pub struct RomImage {
    bytes: Vec<u8>,
}

impl RomImage {
    pub fn load(path: &str) -> Result<Self> {
        let bytes =
            fs::read(path).with_context(|| format!("reading bootloader image {path}"))?;
        Ok(Self { bytes })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }
}
