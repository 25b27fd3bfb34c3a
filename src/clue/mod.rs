//! Clue domain models and the pure parts of the search logic
//!
//! - `model`: clue record and search inputs
//! - `category_index`: sampled category name → id lookup
//! - `date_range`: anchor date + granularity → date window

mod category_index;
mod date_range;
mod model;

pub use category_index::CategoryIndex;
pub use date_range::{DateRange, format_date, resolve as resolve_date_range};
pub use model::{ANY, Clue, DateCriteria, Granularity, SearchCriteria, difficulty_choices};
