//! Headless structural core (syntax snapshots, profiles, operations).

pub mod context;
pub mod language;
pub mod profile;
pub mod structure;
pub mod syntax;

pub use context::EditorContext;
pub use language::LanguageId;
pub use profile::{
    load_settings, parse_settings, ConfigError, FunctionKind, LanguageProfile, ProfileTable,
    StructureSettings,
};
pub use structure::{Direction, Outcome, SwapOptions};
pub use syntax::{node_at, SyntaxDocument, SyntaxNode, SyntaxSnapshot, TreeReady};
