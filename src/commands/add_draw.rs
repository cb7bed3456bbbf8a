//! Add-draw command implementation

use chrono::NaiveDate;

use crate::{
    cli::types::{BallNumber, Category},
    storage::{DrawDatabase, NewDraw},
    Result,
};

use super::common::{format_draw_line, validate_balls};

/// Handle the add-draw command
pub fn handle_add_draw(
    db: &mut DrawDatabase,
    category: Category,
    date: NaiveDate,
    balls: &[BallNumber],
    as_json: bool,
) -> Result<()> {
    let balls = validate_balls(balls)?;

    let draw = db.insert_draw(&NewDraw {
        category,
        draw_date: date,
        balls,
    })?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&draw)?);
    } else {
        println!("✓ Draw #{} recorded for {}", draw.id, category);
        println!("{}", format_draw_line(&draw));
    }

    Ok(())
}
