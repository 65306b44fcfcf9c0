//! zstruct - syntax-tree-aware structural navigation and editing
//!
//! Modules:
//! - models: positions, selections, edit history, rope-backed text buffer
//! - kernel: languages, syntax snapshots, function profiles, editor context, structural operations
//! - core: named commands and their dispatch

pub mod core;
pub mod kernel;
pub mod models;
