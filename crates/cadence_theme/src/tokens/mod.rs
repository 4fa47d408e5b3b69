//! Design tokens for theming
//!
//! Tokens are the atomic values that make up the planner's design system.
//! Only color tokens live here; typography and spacing are fixed by the
//! component library and do not vary between light and dark mode.

mod color;

pub use color::*;
