//! Reset-category command implementation

use crate::{cli::types::Category, storage::DrawDatabase, Result};

/// Handle the reset-category command
pub fn handle_reset_category(db: &mut DrawDatabase, category: Category) -> Result<()> {
    let count = db.draws_in_category(category)?.len();
    db.delete_draws_in_category(category)?;

    println!("✓ {} draws deleted from {}", count, category);

    Ok(())
}
