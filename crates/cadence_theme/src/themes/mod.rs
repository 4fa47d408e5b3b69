//! Built-in themes

mod planner;

pub use planner::{contrast_combinations, PlannerTheme};
