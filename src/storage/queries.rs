//! Basic database query operations

use super::{models::*, schema::DrawDatabase};
use crate::cli::types::Category;
use anyhow::Result;
use chrono::Utc;
use rusqlite::{params, types::Type, Row};
use std::str::FromStr;

const DRAW_COLUMNS: &str =
    "id, category, draw_date, ball1, ball2, ball3, ball4, ball5, created_at";

impl DrawDatabase {
    /// Insert a new draw, assigning its id and creation timestamp.
    ///
    /// Returns the stored record. The five ball values are assumed valid
    /// (in range, pairwise distinct); the CLI layer enforces that.
    pub fn insert_draw(&mut self, draw: &NewDraw) -> Result<Draw> {
        let created_at = Utc::now().timestamp();

        self.conn.execute(
            "INSERT INTO draws (category, draw_date, ball1, ball2, ball3, ball4, ball5, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                draw.category.as_str(),
                draw.draw_date,
                draw.balls[0],
                draw.balls[1],
                draw.balls[2],
                draw.balls[3],
                draw.balls[4],
                created_at
            ],
        )?;

        Ok(Draw {
            id: self.conn.last_insert_rowid(),
            category: draw.category,
            draw_date: draw.draw_date,
            balls: draw.balls,
            created_at,
        })
    }

    /// Get one draw by id.
    pub fn get_draw(&self, id: i64) -> Result<Option<Draw>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {DRAW_COLUMNS} FROM draws WHERE id = ?"))?;

        let result = stmt.query_row(params![id], Self::row_to_draw);

        match result {
            Ok(draw) => Ok(Some(draw)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Delete one draw by id. Returns whether a record was removed;
    /// a missing id is the `false` case, not an error.
    pub fn delete_draw(&mut self, id: i64) -> Result<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM draws WHERE id = ?", params![id])?;
        Ok(rows_affected > 0)
    }

    /// Delete every draw in a category.
    ///
    /// Returns true iff all matching records were removed. The single
    /// DELETE statement cannot partially fail, so a successful execution
    /// always reports true; the bool keeps the caller contract explicit.
    pub fn delete_draws_in_category(&mut self, category: Category) -> Result<bool> {
        self.conn.execute(
            "DELETE FROM draws WHERE category = ?",
            params![category.as_str()],
        )?;
        Ok(true)
    }

    /// All draws in a category, most recent date first.
    ///
    /// Tie-break for equal dates is insertion order (ascending id). Callers
    /// index into this sequence positionally, so the ordering is part of
    /// the contract.
    pub fn draws_in_category(&self, category: Category) -> Result<Vec<Draw>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {DRAW_COLUMNS} FROM draws
             WHERE category = ?
             ORDER BY draw_date DESC, id ASC"
        ))?;

        let rows = stmt.query_map(params![category.as_str()], Self::row_to_draw)?;

        let mut draws = Vec::new();
        for row in rows {
            draws.push(row?);
        }
        Ok(draws)
    }

    /// Helper to convert a database row to a Draw.
    pub(crate) fn row_to_draw(row: &Row) -> rusqlite::Result<Draw> {
        let category_str: String = row.get(1)?;
        let category = Category::from_str(&category_str)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e)))?;

        Ok(Draw {
            id: row.get(0)?,
            category,
            draw_date: row.get(2)?,
            balls: [
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
                row.get(6)?,
                row.get(7)?,
            ],
            created_at: row.get(8)?,
        })
    }
}
