use std::num::NonZeroU32;
use std::str::FromStr;

use crate::error::AppError;

// ---------------------------------------------------------------------------
// Row limit
// ---------------------------------------------------------------------------

/// How many rows a ranking report returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    All,
    Top(NonZeroU32),
}

impl Limit {
    /// `None` for `Limit::All`, otherwise the value bound to `LIMIT ?`.
    pub fn bound(&self) -> Option<i64> {
        match self {
            Limit::All => None,
            Limit::Top(n) => Some(i64::from(n.get())),
        }
    }
}

impl FromStr for Limit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(Limit::All);
        }
        s.parse::<NonZeroU32>()
            .map(Limit::Top)
            .map_err(|_| AppError::Config(format!("limit must be 'all' or a positive integer, got '{s}'")))
    }
}

impl std::fmt::Display for Limit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Limit::All => write!(f, "all"),
            Limit::Top(n) => write!(f, "{n}"),
        }
    }
}
