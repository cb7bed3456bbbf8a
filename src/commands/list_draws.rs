//! List-draws command implementation

use crate::{cli::types::Category, storage::DrawDatabase, Result};

use super::common::format_draw_line;

/// Handle the list-draws command
pub fn handle_list_draws(db: &DrawDatabase, category: Category, as_json: bool) -> Result<()> {
    let draws = db.draws_in_category(category)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&draws)?);
        return Ok(());
    }

    if draws.is_empty() {
        println!("No draws recorded for {}", category);
        return Ok(());
    }

    println!("{} draws for {} (most recent first)", draws.len(), category);
    for draw in &draws {
        println!("{}", format_draw_line(draw));
    }

    Ok(())
}
