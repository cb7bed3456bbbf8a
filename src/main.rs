//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use loto90::{
    cli::{Commands, Loto},
    commands::{
        handle_add_draw, handle_consult, handle_delete_draw, handle_list_draws,
        handle_reset_category, handle_statistics,
    },
    DrawDatabase, Result,
};

/// Run the CLI.
fn main() -> Result<()> {
    let app = Loto::parse();
    let mut db = DrawDatabase::new()?;

    match app.command {
        Commands::AddDraw {
            category,
            date,
            balls,
            json,
        } => handle_add_draw(&mut db, category, date, &balls, json)?,

        Commands::ListDraws { category, json } => handle_list_draws(&db, category, json)?,

        Commands::DeleteDraw { id } => handle_delete_draw(&mut db, id)?,

        Commands::ResetCategory { category } => handle_reset_category(&mut db, category)?,

        Commands::Statistics {
            category,
            limit,
            json,
        } => handle_statistics(&db, category, limit, json)?,

        Commands::Consult {
            category,
            ball,
            json,
        } => handle_consult(&db, category, ball, json)?,
    }

    Ok(())
}
