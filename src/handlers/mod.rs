//! Search action handlers
//!
//! Each handler takes raw user input, validates it, runs the planner and
//! returns a report ready for display. One file per user action.

pub mod categories;
pub mod search;
pub mod search_by_date;
