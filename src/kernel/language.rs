use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum LanguageId {
    Rust,
    Go,
    Python,
    C,
    Cpp,
    Java,
    JavaScript,
    Jsx,
    TypeScript,
    Tsx,
    Json,
    Css,
    Html,
    Toml,
    Bash,
}

impl LanguageId {
    pub const ALL: [Self; 15] = [
        Self::Rust,
        Self::Go,
        Self::Python,
        Self::C,
        Self::Cpp,
        Self::Java,
        Self::JavaScript,
        Self::Jsx,
        Self::TypeScript,
        Self::Tsx,
        Self::Json,
        Self::Css,
        Self::Html,
        Self::Toml,
        Self::Bash,
    ];

    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|s| s.to_str())? {
            "rs" => Some(Self::Rust),
            "go" => Some(Self::Go),
            "py" | "pyi" => Some(Self::Python),
            "c" => Some(Self::C),
            "cc" | "cpp" | "cxx" | "c++" | "hpp" | "hh" | "hxx" | "h++" | "h" => Some(Self::Cpp),
            "java" => Some(Self::Java),
            "js" | "mjs" | "cjs" => Some(Self::JavaScript),
            "jsx" => Some(Self::Jsx),
            "ts" | "mts" | "cts" => Some(Self::TypeScript),
            "tsx" => Some(Self::Tsx),
            "json" => Some(Self::Json),
            "css" => Some(Self::Css),
            "html" | "htm" => Some(Self::Html),
            "toml" => Some(Self::Toml),
            "sh" | "bash" | "zsh" => Some(Self::Bash),
            _ => None,
        }
    }

    /// Accepts an identifier (`javascript`), a short alias (`js`) or a grammar scope name
    /// (`source.js`).
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        let name = name.strip_prefix("source.").unwrap_or(&name);
        match name {
            "rust" | "rs" => Some(Self::Rust),
            "go" => Some(Self::Go),
            "python" | "py" => Some(Self::Python),
            "c" => Some(Self::C),
            "cpp" | "c++" => Some(Self::Cpp),
            "java" => Some(Self::Java),
            "javascript" | "js" => Some(Self::JavaScript),
            "javascriptreact" | "jsx" => Some(Self::Jsx),
            "typescript" | "ts" => Some(Self::TypeScript),
            "typescriptreact" | "tsx" => Some(Self::Tsx),
            "json" => Some(Self::Json),
            "css" => Some(Self::Css),
            "html" | "text.html.basic" => Some(Self::Html),
            "toml" => Some(Self::Toml),
            "bash" | "shell" | "shellscript" | "sh" => Some(Self::Bash),
            _ => None,
        }
    }

    pub fn language_id(self) -> &'static str {
        match self {
            Self::Rust => "rust",
            Self::Go => "go",
            Self::Python => "python",
            Self::C => "c",
            Self::Cpp => "cpp",
            Self::Java => "java",
            Self::JavaScript => "javascript",
            Self::Jsx => "javascriptreact",
            Self::TypeScript => "typescript",
            Self::Tsx => "typescriptreact",
            Self::Json => "json",
            Self::Css => "css",
            Self::Html => "html",
            Self::Toml => "toml",
            Self::Bash => "shellscript",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Rust => "Rust",
            Self::Go => "Go",
            Self::Python => "Python",
            Self::C => "C",
            Self::Cpp => "C++",
            Self::Java => "Java",
            Self::JavaScript => "JavaScript",
            Self::Jsx => "JSX",
            Self::TypeScript => "TypeScript",
            Self::Tsx => "TSX",
            Self::Json => "JSON",
            Self::Css => "CSS",
            Self::Html => "HTML",
            Self::Toml => "TOML",
            Self::Bash => "Shell",
        }
    }
}

impl std::fmt::Display for LanguageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/language.rs"]
mod tests;
