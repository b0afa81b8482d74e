//! Contestant strategies
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Answer tokens accepted as "change the pick".
const AFFIRMATIVE: [&str; 2] = ["Y", "YES"];
/// Answer tokens accepted as "keep the pick".
const NEGATIVE: [&str; 2] = ["N", "NO"];

/// What the contestant does after the host opens the other doors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Stay,
    Switch,
}

impl Strategy {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Strategy::Stay => "Stay",
            Strategy::Switch => "Switch",
        }
    }

    /// Whether the contestant abandons the original pick.
    #[must_use]
    pub const fn switches(self) -> bool {
        matches!(self, Strategy::Switch)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised when an answer is neither an affirmative nor a negative token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{input} is an invalid input.")]
pub struct ParseStrategyError {
    pub input: String,
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if AFFIRMATIVE.iter().any(|token| s.eq_ignore_ascii_case(token)) {
            Ok(Strategy::Switch)
        } else if NEGATIVE.iter().any(|token| s.eq_ignore_ascii_case(token)) {
            Ok(Strategy::Stay)
        } else {
            Err(ParseStrategyError {
                input: s.to_string(),
            })
        }
    }
}
