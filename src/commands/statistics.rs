//! Statistics command implementation

use serde::Serialize;

use crate::{
    cli::types::Category,
    storage::{BallFrequency, DrawDatabase},
    Result,
};

/// Frequency statistics payload for one category.
#[derive(Debug, Serialize)]
pub struct StatisticsReport {
    pub category: Category,
    pub draw_count: usize,
    pub top_frequent: Vec<BallFrequency>,
    pub least_frequent: Vec<BallFrequency>,
    /// Always all 90 numbers, in 1..=90 order, zeroes included.
    pub all_frequencies: Vec<BallFrequency>,
}

/// Build the statistics bundle for a category.
pub fn build_statistics_report(
    db: &DrawDatabase,
    category: Category,
    limit: usize,
) -> Result<StatisticsReport> {
    Ok(StatisticsReport {
        category,
        draw_count: db.draws_in_category(category)?.len(),
        top_frequent: db.top_frequent_balls(category, limit)?,
        least_frequent: db.least_frequent_balls(category, limit)?,
        all_frequencies: db.all_ball_frequencies(category)?,
    })
}

/// Handle the statistics command
pub fn handle_statistics(
    db: &DrawDatabase,
    category: Category,
    limit: usize,
    as_json: bool,
) -> Result<()> {
    let report = build_statistics_report(db, category, limit)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Statistics for {} ({} draws)",
        report.category, report.draw_count
    );
    println!();

    println!("Most drawn:");
    print_ranking(&report.top_frequent);
    println!();

    println!("Least drawn:");
    print_ranking(&report.least_frequent);
    println!();

    println!("Full frequency table:");
    for chunk in report.all_frequencies.chunks(10) {
        let line = chunk
            .iter()
            .map(|record| format!("{:>2}:{:<4}", record.ball_number, record.frequency))
            .collect::<Vec<_>>()
            .join(" ");
        println!("  {}", line);
    }

    Ok(())
}

fn print_ranking(records: &[BallFrequency]) {
    println!("  {:<6} {}", "Ball", "Frequency");
    for record in records {
        println!("  {:<6} {}", record.ball_number, record.frequency);
    }
}
