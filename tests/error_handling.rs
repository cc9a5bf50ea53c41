mod common;
use crate::common::{fixture, init_tracing};

use std::path::Path;

use depclosure::errors::DepclosureError;
use depclosure::fs::RealFileSystem;
use depclosure::fs::mock::MockFileSystem;
use depclosure::run_with;
use depclosure::deps::parse_declarations;
use depclosure::types::RedeclarationPolicy;
use depclosure_test_utils::builders::{ConfigFileBuilder, DeclarationsBuilder, cli_args};

fn run_path(path: &Path) -> (Result<(), DepclosureError>, Vec<u8>) {
    let mut out = Vec::new();
    let result = run_with(&cli_args(&[path.to_str().unwrap()]), &RealFileSystem, &mut out);
    (result, out)
}

#[test]
fn nonexistent_input_is_file_not_found() {
    init_tracing();

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nonexistent.txt");
    let (result, out) = run_path(&missing);

    match result {
        Err(err @ DepclosureError::FileNotFound { .. }) => {
            assert!(err.to_string().starts_with("file not found:"));
            assert!(err.hint().unwrap().contains("path"));
        }
        other => panic!("Expected FileNotFound, got: {:?}", other),
    }
    assert!(out.is_empty());
}

#[test]
fn empty_file_is_empty_input() {
    init_tracing();

    let file = DeclarationsBuilder::new().write_temp().unwrap();
    let (result, out) = run_path(file.path());
    assert!(matches!(result, Err(DepclosureError::EmptyInput)));
    assert!(out.is_empty());
}

#[test]
fn blank_lines_only_is_empty_input() {
    init_tracing();

    let file = DeclarationsBuilder::new()
        .raw("")
        .raw("   ")
        .raw("\t")
        .raw("")
        .write_temp()
        .unwrap();
    let (result, _) = run_path(file.path());
    assert!(matches!(result, Err(DepclosureError::EmptyInput)));
}

#[test]
fn malformed_line_is_named_and_nothing_is_printed() {
    init_tracing();

    let file = DeclarationsBuilder::new()
        .declare("A", &["B"])
        .raw("X depends Y R")
        .declare("Y", &["Z"])
        .write_temp()
        .unwrap();
    let (result, out) = run_path(file.path());

    match result {
        Err(DepclosureError::InvalidLineFormat { line_number, line }) => {
            assert_eq!(line_number, 2);
            assert_eq!(line, "X depends Y R");
        }
        other => panic!("Expected InvalidLineFormat, got: {:?}", other),
    }
    assert!(out.is_empty());
}

#[test]
fn strict_config_rejects_redeclaration() {
    init_tracing();

    let fs = MockFileSystem::new()
        .with_file("deps.txt", "A depends on B\nA depends on C\n")
        .with_file("strict.toml", "[parse]\nredeclaration = \"reject\"\n");
    let mut out = Vec::new();
    let result = run_with(
        &cli_args(&["deps.txt", "--config", "strict.toml"]),
        &fs,
        &mut out,
    );

    assert!(matches!(
        result,
        Err(DepclosureError::DuplicateDeclaration { line_number: 2, .. })
    ));
    assert!(out.is_empty());
}

#[test]
fn reject_policy_names_the_second_declaration() {
    init_tracing();

    let cfg = ConfigFileBuilder::new()
        .redeclaration(RedeclarationPolicy::Reject)
        .build();
    let text = DeclarationsBuilder::new()
        .declare("A", &["B"])
        .declare("C", &["D"])
        .raw("")
        .declare("A", &["E"])
        .build();

    match parse_declarations(&text, cfg.parse.redeclaration) {
        Err(DepclosureError::DuplicateDeclaration {
            library,
            line_number,
        }) => {
            assert_eq!(library, "A");
            assert_eq!(line_number, 4);
        }
        other => panic!("Expected DuplicateDeclaration, got: {:?}", other),
    }

    let relaxed = ConfigFileBuilder::new()
        .redeclaration(RedeclarationPolicy::Overwrite)
        .build();
    let graph = parse_declarations(&text, relaxed.parse.redeclaration).unwrap();
    assert_eq!(graph.direct_dependencies("A").unwrap(), &["E".to_string()]);
}

#[test]
fn unknown_library_flag_is_library_not_found() {
    init_tracing();

    let path = fixture("complex.txt");
    let mut out = Vec::new();
    let result = run_with(
        &cli_args(&[path.to_str().unwrap(), "--library", "H"]),
        &RealFileSystem,
        &mut out,
    );

    match result {
        Err(DepclosureError::LibraryNotFound(name)) => assert_eq!(name, "H"),
        other => panic!("Expected LibraryNotFound, got: {:?}", other),
    }
    assert!(out.is_empty());
}

#[test]
fn bad_config_value_is_reported() {
    init_tracing();

    let fs = MockFileSystem::new()
        .with_file("deps.txt", "A depends on B\n")
        .with_file("bad.toml", "[output]\nseparator = \"\"\n");
    let mut out = Vec::new();
    let result = run_with(&cli_args(&["deps.txt", "--config", "bad.toml"]), &fs, &mut out);

    assert!(matches!(result, Err(DepclosureError::ConfigError(_))));
}
