//! Digest value returned by a finished hash.

use core::fmt;

use crate::DIGEST_SIZE;

/// A SHA-256 digest: the eight state words left after the final compression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digest([u32; 8]);

impl Digest {
    pub(crate) const fn from_words(words: [u32; 8]) -> Self {
        Self(words)
    }

    /// The digest as words.
    #[inline]
    pub fn words(&self) -> &[u32; 8] {
        &self.0
    }

    /// The digest as 32 big-endian bytes.
    pub fn to_bytes(&self) -> [u8; DIGEST_SIZE] {
        let mut out = [0u8; DIGEST_SIZE];
        for (dst, word) in out.chunks_exact_mut(4).zip(self.0.iter()) {
            dst.copy_from_slice(&word.to_be_bytes());
        }
        out
    }

    /// Lowercase hex, 64 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }
}

impl From<Digest> for [u8; DIGEST_SIZE] {
    fn from(digest: Digest) -> Self {
        digest.to_bytes()
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in self.0.iter() {
            write!(f, "{word:08x}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}
