//! Command implementations for the loto90 CLI

pub mod add_draw;
pub mod common;
pub mod consult;
pub mod delete_draw;
pub mod list_draws;
pub mod reset_category;
pub mod statistics;

pub use add_draw::handle_add_draw;
pub use consult::{build_consult_report, handle_consult};
pub use delete_draw::handle_delete_draw;
pub use list_draws::handle_list_draws;
pub use reset_category::handle_reset_category;
pub use statistics::{build_statistics_report, handle_statistics};
