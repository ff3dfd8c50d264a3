//! Printable seeds for reproducible generation.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::{Rng, RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed driving deterministic board generation.
///
/// Seeds render as 64 lowercase hex digits and parse back losslessly, so a
/// generated board can be reported, stored, and regenerated from its seed
/// alone.
///
/// # Examples
///
/// ```
/// use cluegrid_generator::GeneratorSeed;
///
/// let seed = GeneratorSeed::from_bytes([7; 32]);
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<GeneratorSeed>().unwrap(), seed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeneratorSeed([u8; 32]);

/// Errors rejecting a malformed seed string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The string was not exactly 64 characters long.
    #[display("seed must be 64 hex digits, got {len}")]
    InvalidLength {
        /// Length of the rejected string.
        len: usize,
    },
    /// A character was not a hex digit.
    #[display("invalid hex digit {found:?} at offset {offset}")]
    InvalidDigit {
        /// The rejected character.
        found: char,
        /// Zero-based character offset.
        offset: usize,
    },
}

impl GeneratorSeed {
    /// Wraps raw seed bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Derives a seed from an arbitrary phrase via SHA-256, so
    /// human-memorable strings can name boards.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Draws a fresh seed from the given random source.
    #[must_use]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.random())
    }

    /// Returns the PRNG this seed drives.
    pub(crate) fn rng(self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for GeneratorSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for GeneratorSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 64 {
            return Err(SeedParseError::InvalidLength { len: s.len() });
        }
        let mut bytes = [0_u8; 32];
        for (offset, found) in s.chars().enumerate() {
            let digit = found
                .to_digit(16)
                .ok_or(SeedParseError::InvalidDigit { found, offset })?;
            #[expect(clippy::cast_possible_truncation)]
            let digit = digit as u8;
            bytes[offset / 2] = (bytes[offset / 2] << 4) | digit;
        }
        Ok(Self(bytes))
    }
}
