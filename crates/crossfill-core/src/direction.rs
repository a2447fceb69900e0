use std::str::FromStr;

use crate::ParseTopologyError;

/// Orientation of a word slot.
///
/// The derived ordering puts [`Direction::Vertical`] first, which is the
/// tie-break used by slot ordering when two slots start on the same cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum Direction {
    /// Top to bottom (`D`own or `V`ertical in rule text).
    #[display("V")]
    Vertical,
    /// Left to right (`A`cross or `H`orizontal in rule text).
    #[display("H")]
    Horizontal,
}

impl Direction {
    /// Returns the other orientation.
    #[must_use]
    pub const fn crossing(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }
}

impl FromStr for Direction {
    type Err = ParseTopologyError;

    /// Parses a direction code, case-insensitively.
    ///
    /// ```
    /// use crossfill_core::Direction;
    ///
    /// assert_eq!("a".parse(), Ok(Direction::Horizontal));
    /// assert_eq!("V".parse(), Ok(Direction::Vertical));
    /// assert!("x".parse::<Direction>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if ["A", "H"].iter().any(|code| s.eq_ignore_ascii_case(code)) {
            return Ok(Self::Horizontal);
        }
        if ["D", "V"].iter().any(|code| s.eq_ignore_ascii_case(code)) {
            return Ok(Self::Vertical);
        }
        Err(ParseTopologyError::InvalidDirection {
            token: s.to_owned(),
        })
    }
}
