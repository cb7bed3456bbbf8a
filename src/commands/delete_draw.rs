//! Delete-draw command implementation

use crate::{storage::DrawDatabase, Result};

use super::common::format_draw_line;

/// Handle the delete-draw command.
///
/// A missing id is reported as a notice, not a failure: absence is a
/// boolean signal from the store.
pub fn handle_delete_draw(db: &mut DrawDatabase, id: i64) -> Result<()> {
    let draw = db.get_draw(id)?;

    if db.delete_draw(id)? {
        println!("✓ Draw #{} deleted", id);
        if let Some(draw) = draw {
            println!("{}", format_draw_line(&draw));
        }
    } else {
        println!("No draw with id {}", id);
    }

    Ok(())
}
