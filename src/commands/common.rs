//! Shared helpers for command implementations.
//!
//! Input validation lives here, at the request-handling layer: the draw
//! store assumes ball values are in range and pairwise distinct.

use crate::{
    cli::types::BallNumber,
    error::{LotoError, Result},
    storage::models::{Draw, BALLS_PER_DRAW},
};

/// Check count and distinctness of the submitted ball numbers.
///
/// Range validation already happened when each `BallNumber` was parsed.
pub fn validate_balls(balls: &[BallNumber]) -> Result<[u8; BALLS_PER_DRAW]> {
    let values: Vec<u8> = balls.iter().map(BallNumber::as_u8).collect();

    let values: [u8; BALLS_PER_DRAW] = values
        .try_into()
        .map_err(|_| LotoError::InvalidBallCount { count: balls.len() })?;

    for (i, ball) in values.iter().enumerate() {
        if values[i + 1..].contains(ball) {
            return Err(LotoError::DuplicateBalls);
        }
    }

    Ok(values)
}

/// One draw formatted as a fixed-width text line.
pub fn format_draw_line(draw: &Draw) -> String {
    let balls = draw
        .balls
        .iter()
        .map(|ball| format!("{:>2}", ball))
        .collect::<Vec<_>>()
        .join(" ");
    format!("#{:<6} {}  {}", draw.id, draw.draw_date, balls)
}
