use super::*;
use std::io::Write;

#[test]
fn classifies_known_node_kinds() {
    assert_eq!(
        FunctionKind::from_node_kind("arrow_function"),
        FunctionKind::ArrowFunction
    );
    assert_eq!(
        FunctionKind::from_node_kind("function"),
        FunctionKind::FunctionExpression
    );
    assert_eq!(
        FunctionKind::from_node_kind("function_expression"),
        FunctionKind::FunctionExpression
    );
    assert_eq!(
        FunctionKind::from_node_kind("function_item"),
        FunctionKind::FunctionItem
    );
    assert_eq!(FunctionKind::from_node_kind("array"), FunctionKind::Unknown);
}

#[test]
fn as_str_round_trips_for_every_known_kind() {
    let kinds = [
        FunctionKind::ArrowFunction,
        FunctionKind::FunctionExpression,
        FunctionKind::FunctionDeclaration,
        FunctionKind::GeneratorFunction,
        FunctionKind::GeneratorFunctionDeclaration,
        FunctionKind::MethodDefinition,
        FunctionKind::FunctionItem,
        FunctionKind::ClosureExpression,
        FunctionKind::FunctionDefinition,
        FunctionKind::Lambda,
        FunctionKind::LambdaExpression,
        FunctionKind::MethodDeclaration,
        FunctionKind::ConstructorDeclaration,
        FunctionKind::FuncLiteral,
    ];
    for kind in kinds {
        assert_eq!(FunctionKind::from_node_kind(kind.as_str()), kind);
    }
}

#[test]
fn profile_dedups_and_drops_unknown() {
    let profile = LanguageProfile::new([
        FunctionKind::FunctionItem,
        FunctionKind::Unknown,
        FunctionKind::FunctionItem,
        FunctionKind::ClosureExpression,
    ]);
    assert_eq!(
        profile.function_kinds(),
        &[FunctionKind::FunctionItem, FunctionKind::ClosureExpression]
    );
    assert!(profile.is_function_kind("closure_expression"));
    assert!(!profile.is_function_kind("arrow_function"));
    assert!(!profile.is_function_kind("unknown"));
}

#[test]
fn builtin_table_covers_function_languages_only() {
    let table = ProfileTable::builtin();

    let js = table.get(LanguageId::JavaScript).expect("javascript profile");
    for kind in [
        "arrow_function",
        "function",
        "function_declaration",
        "method_definition",
    ] {
        assert!(js.is_function_kind(kind), "{kind}");
    }

    let rust = table.get(LanguageId::Rust).expect("rust profile");
    assert!(rust.is_function_kind("function_item"));
    assert!(rust.is_function_kind("closure_expression"));

    let bash = table.get(LanguageId::Bash).expect("bash profile");
    assert!(bash.is_function_kind("function_definition"));

    for language in [
        LanguageId::Json,
        LanguageId::Css,
        LanguageId::Html,
        LanguageId::Toml,
    ] {
        assert!(table.get(language).is_none(), "{:?}", language);
    }
}

#[test]
fn settings_default_when_fields_missing() {
    let settings = parse_settings("{}").expect("settings");
    assert!(settings.languages.is_empty());
    assert!(settings.move_cursor_with_node);
}

#[test]
fn settings_override_builtin_per_language() {
    let settings = parse_settings(
        r#"{
            "languages": {
                "source.js": { "function_declaration": ["arrow_function", "no_such_kind"] },
                "json": { "function_declaration": ["function"] },
                "cobol": { "function_declaration": ["paragraph"] }
            },
            "move_cursor_with_node": false
        }"#,
    )
    .expect("settings");
    assert!(!settings.move_cursor_with_node);

    let table = ProfileTable::from_settings(&settings);

    let js = table.get(LanguageId::JavaScript).expect("javascript profile");
    assert_eq!(js.function_kinds(), &[FunctionKind::ArrowFunction]);
    assert!(!js.is_function_kind("function_declaration"));

    assert!(table.get(LanguageId::Json).is_some());
    // Untouched languages keep their built-in entry.
    assert_eq!(
        table.get(LanguageId::Rust),
        ProfileTable::builtin().get(LanguageId::Rust)
    );
}

#[test]
fn invalid_json_is_a_config_error() {
    let err = parse_settings("{ languages: ").expect_err("invalid json");
    assert!(matches!(err, ConfigError::Json(_)));
    assert!(err.to_string().starts_with("Invalid settings"));
}

#[test]
fn load_settings_reads_file() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    write!(
        file,
        r#"{{ "languages": {{ "rust": {{ "function_declaration": ["function_item"] }} }} }}"#
    )
    .expect("write settings");

    let settings = load_settings(file.path()).expect("load settings");
    let table = ProfileTable::from_settings(&settings);
    assert_eq!(
        table.get(LanguageId::Rust).map(LanguageProfile::function_kinds),
        Some(&[FunctionKind::FunctionItem][..])
    );
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = load_settings(&dir.path().join("absent.json")).expect_err("missing file");
    assert!(matches!(err, ConfigError::Io(_)));
}
