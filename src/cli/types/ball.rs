//! Range-checked ball number wrapper.

use crate::error::LotoError;
use crate::storage::models::{BALL_MAX, BALL_MIN};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A lottery ball number, guaranteed to lie in 1..=90.
///
/// Validation happens here at the CLI boundary; the draw store and the
/// analytics engine accept plain `u8` values and assume they are in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BallNumber(u8);

impl BallNumber {
    pub fn new(value: u8) -> Result<Self, LotoError> {
        if (BALL_MIN..=BALL_MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(LotoError::InvalidBall {
                value: value.to_string(),
            })
        }
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for BallNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BallNumber {
    type Err = LotoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u8 = s.parse().map_err(|_| LotoError::InvalidBall {
            value: s.to_string(),
        })?;
        Self::new(value)
    }
}
