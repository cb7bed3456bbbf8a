//! Data models for the storage layer

use crate::cli::types::Category;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Smallest valid ball number.
pub const BALL_MIN: u8 = 1;
/// Largest valid ball number.
pub const BALL_MAX: u8 = 90;
/// Number of balls in one draw.
pub const BALLS_PER_DRAW: usize = 5;

/// One recorded draw result.
///
/// Ids are assigned by the store and never reused, even after deletion.
/// The five ball values are pairwise distinct; the CLI layer validates
/// this before a draw reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draw {
    pub id: i64,
    pub category: Category,
    pub draw_date: NaiveDate,
    pub balls: [u8; BALLS_PER_DRAW],
    /// Unix seconds at insertion. Informational only; no query reads it.
    pub created_at: i64,
}

impl Draw {
    /// Whether this draw's five balls include `ball`.
    pub fn contains_ball(&self, ball: u8) -> bool {
        self.balls.contains(&ball)
    }
}

/// Insert input: a draw before the store has assigned its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDraw {
    pub category: Category,
    pub draw_date: NaiveDate,
    pub balls: [u8; BALLS_PER_DRAW],
}

/// A (ball number, count) pair produced by an analytics query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallFrequency {
    pub ball_number: u8,
    pub frequency: u32,
}
