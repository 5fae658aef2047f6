//! Shared terminal utilities.
//!
//! Box drawing, themes, strength badges, and screen management.

mod output;
mod raw_mode;
mod theme;

pub use output::*;
pub use raw_mode::*;
pub use theme::*;
