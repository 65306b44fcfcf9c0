//! Per-language tables of function-like node kinds.
//!
//! Grammars name the same concept differently (`function_item` in Rust, `arrow_function` or
//! `method_definition` in JavaScript). Node kinds are classified into the closed
//! [`FunctionKind`] set once, and each language lists the kinds it treats as functions.

use crate::kernel::language::LanguageId;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FunctionKind {
    ArrowFunction,
    FunctionExpression,
    FunctionDeclaration,
    GeneratorFunction,
    GeneratorFunctionDeclaration,
    MethodDefinition,
    FunctionItem,
    ClosureExpression,
    FunctionDefinition,
    Lambda,
    LambdaExpression,
    MethodDeclaration,
    ConstructorDeclaration,
    FuncLiteral,
    /// Any node kind that is not function-like in a supported grammar.
    Unknown,
}

impl FunctionKind {
    pub fn from_node_kind(kind: &str) -> Self {
        match kind {
            "arrow_function" => Self::ArrowFunction,
            // tree-sitter-javascript renamed `function` to `function_expression`.
            "function" | "function_expression" => Self::FunctionExpression,
            "function_declaration" => Self::FunctionDeclaration,
            "generator_function" => Self::GeneratorFunction,
            "generator_function_declaration" => Self::GeneratorFunctionDeclaration,
            "method_definition" => Self::MethodDefinition,
            "function_item" => Self::FunctionItem,
            "closure_expression" => Self::ClosureExpression,
            "function_definition" => Self::FunctionDefinition,
            "lambda" => Self::Lambda,
            "lambda_expression" => Self::LambdaExpression,
            "method_declaration" => Self::MethodDeclaration,
            "constructor_declaration" => Self::ConstructorDeclaration,
            "func_literal" => Self::FuncLiteral,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ArrowFunction => "arrow_function",
            Self::FunctionExpression => "function",
            Self::FunctionDeclaration => "function_declaration",
            Self::GeneratorFunction => "generator_function",
            Self::GeneratorFunctionDeclaration => "generator_function_declaration",
            Self::MethodDefinition => "method_definition",
            Self::FunctionItem => "function_item",
            Self::ClosureExpression => "closure_expression",
            Self::FunctionDefinition => "function_definition",
            Self::Lambda => "lambda",
            Self::LambdaExpression => "lambda_expression",
            Self::MethodDeclaration => "method_declaration",
            Self::ConstructorDeclaration => "constructor_declaration",
            Self::FuncLiteral => "func_literal",
            Self::Unknown => "unknown",
        }
    }
}

/// Ordered set of the kinds one language treats as functions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LanguageProfile {
    function_kinds: Vec<FunctionKind>,
}

impl LanguageProfile {
    pub fn new(kinds: impl IntoIterator<Item = FunctionKind>) -> Self {
        let mut function_kinds = Vec::new();
        for kind in kinds {
            if kind != FunctionKind::Unknown && !function_kinds.contains(&kind) {
                function_kinds.push(kind);
            }
        }
        Self { function_kinds }
    }

    pub fn function_kinds(&self) -> &[FunctionKind] {
        &self.function_kinds
    }

    pub fn is_function_kind(&self, node_kind: &str) -> bool {
        match FunctionKind::from_node_kind(node_kind) {
            FunctionKind::Unknown => false,
            kind => self.function_kinds.contains(&kind),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProfileTable {
    profiles: FxHashMap<LanguageId, LanguageProfile>,
}

impl ProfileTable {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        use FunctionKind::*;

        let js = [
            ArrowFunction,
            FunctionExpression,
            FunctionDeclaration,
            GeneratorFunction,
            GeneratorFunctionDeclaration,
            MethodDefinition,
        ];

        let mut table = Self::empty();
        for language in [
            LanguageId::JavaScript,
            LanguageId::Jsx,
            LanguageId::TypeScript,
            LanguageId::Tsx,
        ] {
            table.insert(language, LanguageProfile::new(js));
        }
        table.insert(
            LanguageId::Rust,
            LanguageProfile::new([FunctionItem, ClosureExpression]),
        );
        table.insert(LanguageId::Bash, LanguageProfile::new([FunctionDefinition]));
        table.insert(
            LanguageId::Python,
            LanguageProfile::new([FunctionDefinition, Lambda]),
        );
        table.insert(
            LanguageId::Go,
            LanguageProfile::new([FunctionDeclaration, MethodDeclaration, FuncLiteral]),
        );
        table.insert(LanguageId::C, LanguageProfile::new([FunctionDefinition]));
        table.insert(
            LanguageId::Cpp,
            LanguageProfile::new([FunctionDefinition, LambdaExpression]),
        );
        table.insert(
            LanguageId::Java,
            LanguageProfile::new([MethodDeclaration, ConstructorDeclaration, LambdaExpression]),
        );
        table
    }

    pub fn insert(&mut self, language: LanguageId, profile: LanguageProfile) {
        self.profiles.insert(language, profile);
    }

    pub fn get(&self, language: LanguageId) -> Option<&LanguageProfile> {
        self.profiles.get(&language)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Built-in table with `settings.languages` layered on top, one language at a time.
    pub fn from_settings(settings: &StructureSettings) -> Self {
        let mut table = Self::builtin();

        for (name, entry) in &settings.languages {
            let Some(language) = LanguageId::from_name(name) else {
                tracing::warn!(language = %name, "skipping profile for unknown language");
                continue;
            };

            let mut kinds = Vec::with_capacity(entry.function_declaration.len());
            for node_kind in &entry.function_declaration {
                match FunctionKind::from_node_kind(node_kind) {
                    FunctionKind::Unknown => {
                        tracing::warn!(
                            language = %name,
                            node_kind = %node_kind,
                            "skipping unrecognized function node kind"
                        );
                    }
                    kind => kinds.push(kind),
                }
            }
            table.insert(language, LanguageProfile::new(kinds));
        }

        table
    }
}

// ==================== settings file ====================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageProfileSettings {
    #[serde(default)]
    pub function_declaration: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureSettings {
    #[serde(default)]
    pub languages: BTreeMap<String, LanguageProfileSettings>,
    #[serde(default = "default_move_cursor_with_node")]
    pub move_cursor_with_node: bool,
}

fn default_move_cursor_with_node() -> bool {
    true
}

impl Default for StructureSettings {
    fn default() -> Self {
        Self {
            languages: BTreeMap::new(),
            move_cursor_with_node: default_move_cursor_with_node(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Json(e) => write!(f, "Invalid settings: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

pub fn parse_settings(data: &str) -> Result<StructureSettings, ConfigError> {
    Ok(serde_json::from_str(data)?)
}

pub fn load_settings(path: &Path) -> Result<StructureSettings, ConfigError> {
    let data = std::fs::read_to_string(path)?;
    let settings = parse_settings(&data)?;
    tracing::debug!(
        path = %path.display(),
        languages = settings.languages.len(),
        "structure settings loaded"
    );
    Ok(settings)
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/profile.rs"]
mod tests;
