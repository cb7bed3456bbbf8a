//! 5/90 Lottery Draw Log and Statistics Library
//!
//! Records lottery draw results (five distinct numbers in 1..=90 per draw,
//! scoped to one of four fixed categories) and computes descriptive
//! statistics over the historical record.
//!
//! ## Features
//!
//! - **Draw Log**: Insert, list, and delete draws per lottery category
//! - **Frequency Table**: Per-number draw frequency across all 90 numbers
//! - **Top/Bottom Rankings**: Most and least frequently drawn numbers
//! - **Simultaneous Occurrences**: Numbers drawn alongside a given number
//! - **Subsequent Occurrences**: Numbers appearing in the draw right after
//!   one containing a given number
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use loto90::{Category, DrawDatabase, NewDraw};
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut db = DrawDatabase::new_in_memory()?;
//! let draw = db.insert_draw(&NewDraw {
//!     category: Category::Gh18,
//!     draw_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     balls: [5, 12, 33, 47, 90],
//! })?;
//!
//! assert_eq!(db.ball_frequency(Category::Gh18, 5)?, 1);
//! db.delete_draw(draw.id)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Override the default database location:
//! ```bash
//! export LOTO90_DB=/tmp/draws.db
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{BallNumber, Category};
pub use error::{LotoError, Result};
pub use storage::{BallFrequency, Draw, DrawDatabase, NewDraw};

pub const DB_PATH_ENV_VAR: &str = "LOTO90_DB";
