//! Consult command implementation

use serde::Serialize;

use crate::{
    cli::types::{BallNumber, Category},
    storage::{BallFrequency, Draw, DrawDatabase},
    Result,
};

use super::common::format_draw_line;

/// Occurrence analysis payload for one ball number.
#[derive(Debug, Serialize)]
pub struct ConsultReport {
    pub category: Category,
    pub ball_number: u8,
    /// Numbers drawn in the same draw, zero entries omitted.
    pub simultaneous: Vec<BallFrequency>,
    /// Numbers appearing in the draw right after, zero entries omitted.
    pub subsequent: Vec<BallFrequency>,
    pub draw_history: Vec<Draw>,
}

/// Build the consultation bundle for one ball number.
pub fn build_consult_report(
    db: &DrawDatabase,
    category: Category,
    ball: BallNumber,
) -> Result<ConsultReport> {
    let ball_number = ball.as_u8();
    Ok(ConsultReport {
        category,
        ball_number,
        simultaneous: db.simultaneous_occurrences(category, ball_number)?,
        subsequent: db.subsequent_occurrences(category, ball_number)?,
        draw_history: db.draws_with_ball(category, ball_number)?,
    })
}

/// Handle the consult command
pub fn handle_consult(
    db: &DrawDatabase,
    category: Category,
    ball: BallNumber,
    as_json: bool,
) -> Result<()> {
    let report = build_consult_report(db, category, ball)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Ball {} in {}: drawn in {} of {} draws",
        report.ball_number,
        report.category,
        report.draw_history.len(),
        db.draws_in_category(report.category)?.len()
    );
    println!();

    println!("Drawn alongside:");
    print_occurrences(&report.simultaneous);
    println!();

    println!("Seen in the following draw:");
    print_occurrences(&report.subsequent);
    println!();

    if report.draw_history.is_empty() {
        println!("No draws contain ball {}", report.ball_number);
    } else {
        println!("Draw history (most recent first):");
        for draw in &report.draw_history {
            println!("{}", format_draw_line(draw));
        }
    }

    Ok(())
}

fn print_occurrences(records: &[BallFrequency]) {
    if records.is_empty() {
        println!("  (none)");
        return;
    }
    println!("  {:<6} {}", "Ball", "Frequency");
    for record in records {
        println!("  {:<6} {}", record.ball_number, record.frequency);
    }
}
