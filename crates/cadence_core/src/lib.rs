//! Cadence core primitives
//!
//! Small shared types used across the Cadence UI crates: the RGBA [`Color`]
//! type with hex/`rgb()` string parsing, and widget identity for focus
//! tracking.

pub mod color;
pub mod widget;

pub use color::Color;
pub use widget::WidgetId;
