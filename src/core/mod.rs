//! Command surface over the structural kernel.

pub mod command;

pub use command::{execute, Command};
