//! Seeded randomness for the randomized heuristics.

use std::{fmt, str::FromStr};

use rand::{
    SeedableRng as _,
    seq::{IndexedRandom as _, SliceRandom as _},
};
use rand_pcg::Pcg64;

/// A 256-bit seed for [`SearchRng`].
///
/// The text form is 64 hexadecimal digits, so a seed printed by one run can
/// be passed back to reproduce it.
///
/// # Examples
///
/// ```
/// use crossfill_solver::SearchSeed;
///
/// let seed: SearchSeed = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
///     .parse()?;
/// assert_eq!(seed.to_string().parse::<SearchSeed>()?, seed);
/// # Ok::<(), crossfill_solver::ParseSeedError>(())
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchSeed([u8; 32]);

impl SearchSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Draws a fresh seed from the operating system.
    ///
    /// # Errors
    ///
    /// Returns an error if the system entropy source is unavailable.
    pub fn generate() -> Result<Self, getrandom::Error> {
        let mut bytes = [0; 32];
        getrandom::fill(&mut bytes)?;
        Ok(Self(bytes))
    }
}

impl From<u64> for SearchSeed {
    fn from(value: u64) -> Self {
        let mut bytes = [0; 32];
        bytes[..8].copy_from_slice(&value.to_le_bytes());
        Self(bytes)
    }
}

impl fmt::Display for SearchSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|byte| write!(f, "{byte:02x}"))
    }
}

/// An error returned when parsing a [`SearchSeed`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The text is not 64 characters long.
    #[display("seed must be 64 hex digits, got {len} characters")]
    InvalidLength {
        /// The number of characters found.
        len: usize,
    },
    /// The text contains a non-hexadecimal character.
    #[display("invalid hex digit {digit:?} in seed")]
    InvalidDigit {
        /// The offending character.
        digit: char,
    },
}

impl FromStr for SearchSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let len = s.chars().count();
        if len != 64 {
            return Err(ParseSeedError::InvalidLength { len });
        }
        let mut bytes = [0; 32];
        let digits = s.chars().map(|digit| {
            digit
                .to_digit(16)
                .ok_or(ParseSeedError::InvalidDigit { digit })
        });
        let digits = digits.collect::<Result<Vec<_>, _>>()?;
        for (byte, pair) in bytes.iter_mut().zip(digits.chunks_exact(2)) {
            #[expect(clippy::cast_possible_truncation)]
            let value = (pair[0] * 16 + pair[1]) as u8;
            *byte = value;
        }
        Ok(Self(bytes))
    }
}

/// The random source handed to randomized heuristics.
///
/// Each expander owns its own generator, so cloning an expander forks the
/// random stream rather than sharing it.
#[derive(Debug, Clone)]
pub struct SearchRng(Pcg64);

impl SearchRng {
    /// Creates a generator from a seed.
    #[must_use]
    pub fn new(seed: SearchSeed) -> Self {
        Self(Pcg64::from_seed(seed.0))
    }

    /// Shuffles `items` in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.0);
    }

    /// Picks one element uniformly, or `None` if `items` is empty.
    pub fn choose<T>(&mut self, items: &[T]) -> Option<T>
    where
        T: Copy,
    {
        items.choose(&mut self.0).copied()
    }
}

impl Default for SearchRng {
    fn default() -> Self {
        Self::new(SearchSeed::default())
    }
}
