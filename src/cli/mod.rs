//! CLI argument definitions and parsing.

pub mod types;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use types::{BallNumber, Category};

#[derive(Debug, Parser)]
#[clap(name = "loto90", about = "5/90 lottery draw log and statistics")]
pub struct Loto {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Record a new draw result for a category.
    AddDraw {
        /// Lottery category: GH18, CIV10, CIV13 or CIV16.
        #[clap(long, short)]
        category: Category,

        /// Draw date (YYYY-MM-DD).
        #[clap(long, short)]
        date: NaiveDate,

        /// The five drawn numbers, each in 1..=90: `-b 5 12 33 47 90`.
        #[clap(long, short, num_args = 5)]
        balls: Vec<BallNumber>,

        /// Output the stored draw as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List a category's draws, most recent date first.
    ListDraws {
        /// Lottery category: GH18, CIV10, CIV13 or CIV16.
        #[clap(long, short)]
        category: Category,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Delete one draw by its id.
    ///
    /// Deleting an id that does not exist is not an error; a notice is
    /// printed instead.
    DeleteDraw {
        /// Draw id as reported by `add-draw` or `list-draws`.
        #[clap(long, short)]
        id: i64,
    },

    /// Delete every draw recorded for a category.
    ResetCategory {
        /// Lottery category: GH18, CIV10, CIV13 or CIV16.
        #[clap(long, short)]
        category: Category,
    },

    /// Frequency statistics for a category.
    ///
    /// Shows the most and least frequently drawn numbers plus the full
    /// 90-entry frequency table.
    Statistics {
        /// Lottery category: GH18, CIV10, CIV13 or CIV16.
        #[clap(long, short)]
        category: Category,

        /// How many numbers to show in the top/bottom rankings.
        #[clap(long, short, default_value_t = 5)]
        limit: usize,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Occurrence analysis for one ball number.
    ///
    /// Shows which numbers were drawn alongside it, which numbers appeared
    /// in the draw right after one containing it, and its draw history.
    Consult {
        /// Lottery category: GH18, CIV10, CIV13 or CIV16.
        #[clap(long, short)]
        category: Category,

        /// Ball number to analyze (1..=90).
        #[clap(long, short)]
        ball: BallNumber,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}
