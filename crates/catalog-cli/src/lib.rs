//! Interactive console for a tree of program catalog files.
//!
//! The binary parses flags, sets up logging, and hands a [`Console`] over
//! stdin/stdout to [`run_shell`]. Tests drive the same loop with scripted
//! input.

pub mod console;
pub mod logging;
pub mod menu;
pub mod shell;

mod commands;
mod summary;

pub use console::Console;
pub use shell::run_shell;
