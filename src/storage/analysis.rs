//! Frequency and occurrence statistics over a category's draws
//!
//! Every method re-derives its result from the current draw set; nothing
//! is cached between calls. Counter tables live on the stack of each call.
//!
//! Ordering is normative throughout: frequency rankings are built from the
//! 1..=90 enumeration and sorted with Rust's stable sort, so numbers with
//! equal frequency always come out lower-ball-first.

use super::{models::*, schema::DrawDatabase};
use crate::cli::types::Category;
use anyhow::Result;

/// Stack-local counter table, one slot per ball number.
type BallCounts = [u32; BALL_MAX as usize];

fn count_ball(counts: &mut BallCounts, ball: u8) {
    counts[usize::from(ball - BALL_MIN)] += 1;
}

/// Expand a counter table into records, in 1..=90 order.
fn to_frequencies(counts: &BallCounts) -> Vec<BallFrequency> {
    (BALL_MIN..=BALL_MAX)
        .map(|ball_number| BallFrequency {
            ball_number,
            frequency: counts[usize::from(ball_number - BALL_MIN)],
        })
        .collect()
}

/// Drop zero entries and rank by frequency descending (stable, so ties
/// keep ascending ball-number order).
fn rank_nonzero(counts: &BallCounts) -> Vec<BallFrequency> {
    let mut frequencies: Vec<BallFrequency> = to_frequencies(counts)
        .into_iter()
        .filter(|record| record.frequency > 0)
        .collect();
    frequencies.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    frequencies
}

impl DrawDatabase {
    /// How often each of the 90 numbers has been drawn in a category.
    ///
    /// Always returns exactly 90 records in 1..=90 order; numbers never
    /// drawn appear with frequency 0.
    pub fn all_ball_frequencies(&self, category: Category) -> Result<Vec<BallFrequency>> {
        let draws = self.draws_in_category(category)?;

        let mut counts: BallCounts = [0; BALL_MAX as usize];
        for draw in &draws {
            for ball in draw.balls {
                count_ball(&mut counts, ball);
            }
        }

        Ok(to_frequencies(&counts))
    }

    /// The `limit` most frequently drawn numbers, descending by frequency.
    pub fn top_frequent_balls(&self, category: Category, limit: usize) -> Result<Vec<BallFrequency>> {
        let mut frequencies = self.all_ball_frequencies(category)?;
        frequencies.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        frequencies.truncate(limit);
        Ok(frequencies)
    }

    /// The `limit` least frequently drawn numbers, ascending by frequency.
    ///
    /// Numbers with frequency 0 are eligible and dominate the head.
    pub fn least_frequent_balls(
        &self,
        category: Category,
        limit: usize,
    ) -> Result<Vec<BallFrequency>> {
        let mut frequencies = self.all_ball_frequencies(category)?;
        frequencies.sort_by_key(|record| record.frequency);
        frequencies.truncate(limit);
        Ok(frequencies)
    }

    /// Count of draws whose five balls include `ball_number`.
    ///
    /// An out-of-range number matches no draw and yields 0.
    pub fn ball_frequency(&self, category: Category, ball_number: u8) -> Result<u32> {
        let draws = self.draws_in_category(category)?;
        Ok(draws
            .iter()
            .filter(|draw| draw.contains_ball(ball_number))
            .count() as u32)
    }

    /// Which numbers tend to be drawn alongside `ball_number`.
    ///
    /// For every draw containing the number, counts each *other* ball in
    /// that same draw. The queried number itself and zero-frequency
    /// numbers are omitted; the result is descending by frequency.
    pub fn simultaneous_occurrences(
        &self,
        category: Category,
        ball_number: u8,
    ) -> Result<Vec<BallFrequency>> {
        let draws = self.draws_in_category(category)?;

        let mut counts: BallCounts = [0; BALL_MAX as usize];
        for draw in draws.iter().filter(|draw| draw.contains_ball(ball_number)) {
            for ball in draw.balls {
                if ball != ball_number {
                    count_ball(&mut counts, ball);
                }
            }
        }

        Ok(rank_nonzero(&counts))
    }

    /// Which numbers tend to appear in the draw right after one containing
    /// `ball_number`.
    ///
    /// The category's draws are re-sorted oldest-first (insertion order on
    /// equal dates); for each adjacent pair whose first draw contains the
    /// number, all five balls of the second draw are counted. Adjacency is
    /// positional in the date-sorted sequence, not a calendar gap. Empty
    /// when the category has fewer than two draws.
    pub fn subsequent_occurrences(
        &self,
        category: Category,
        ball_number: u8,
    ) -> Result<Vec<BallFrequency>> {
        let mut draws = self.draws_in_category(category)?;
        // Reversing the descending listing would flip the tie-break to
        // descending id, so sort ascending explicitly.
        draws.sort_by_key(|draw| (draw.draw_date, draw.id));

        let mut counts: BallCounts = [0; BALL_MAX as usize];
        for pair in draws.windows(2) {
            if pair[0].contains_ball(ball_number) {
                for ball in pair[1].balls {
                    count_ball(&mut counts, ball);
                }
            }
        }

        Ok(rank_nonzero(&counts))
    }

    /// All draws containing `ball_number`, most recent date first.
    pub fn draws_with_ball(&self, category: Category, ball_number: u8) -> Result<Vec<Draw>> {
        let mut draws = self.draws_in_category(category)?;
        draws.retain(|draw| draw.contains_ball(ball_number));
        Ok(draws)
    }
}
