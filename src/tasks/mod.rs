//! Background tasks module
//!
//! This module contains the tasks that run alongside the console: the
//! ticker that owns the countdown and the display that renders it.

pub mod display;
pub mod ticker;

// Re-export main types
pub use display::display_task;
pub use ticker::{Command, Request, TickerTask};
