//! End-to-end tests for the registry build
//!
//! These tests lay out address book trees in a temporary directory, run the
//! build job against them, and inspect the written artifact.

mod common;

use serde_json::json;

use chain_registry_builder::domain::models::chain::ChainStatus;
use chain_registry_builder::infrastructure::driving_adapters::build_job;
use chain_registry_builder::shared::errors::{DomainError, RepositoryError, UseCaseError};

use common::{chain, ethereum, TestWorkspace};

// ============================================================================
// Merge semantics
// ============================================================================

#[test]
fn test_override_directory_wins_on_shared_keys() {
    let ws = TestWorkspace::new();
    ws.primary_book(1, "VaultAddresses.json", r#"{"factory": "0xAAA"}"#)
        .override_book(1, "VaultAddresses.json", r#"{"factory": "0xBBB", "lens": "0xCCC"}"#);

    build_job::run_with_chains(&ws.config, vec![ethereum()]).unwrap();

    let artifact = ws.output_json();
    assert_eq!(
        artifact,
        json!([{
            "chainId": 1,
            "name": "ethereum",
            "safeBaseUrl": "https://app.safe.global",
            "safeAddressPrefix": "eth",
            "status": "production",
            "addresses": {
                "vaultAddrs": {"factory": "0xBBB", "lens": "0xCCC"}
            }
        }])
    );
}

#[test]
fn test_shallow_merge_keeps_non_conflicting_keys() {
    let ws = TestWorkspace::new();
    ws.primary_book(1, "XAddresses.json", r#"{"a": "0x1", "b": "0x2"}"#)
        .override_book(1, "XAddresses.json", r#"{"b": "0x3", "c": "0x4"}"#);

    build_job::run_with_chains(&ws.config, vec![ethereum()]).unwrap();

    assert_eq!(
        ws.output_json()[0]["addresses"]["xAddrs"],
        json!({"a": "0x1", "b": "0x3", "c": "0x4"})
    );
}

#[test]
fn test_nested_objects_are_replaced_wholesale() {
    let ws = TestWorkspace::new();
    ws.primary_book(1, "XAddresses.json", r#"{"a": {"x": 1, "y": 2}}"#)
        .override_book(1, "XAddresses.json", r#"{"a": {"y": 3}}"#);

    build_job::run_with_chains(&ws.config, vec![ethereum()]).unwrap();

    assert_eq!(ws.output_json()[0]["addresses"]["xAddrs"], json!({"a": {"y": 3}}));
}

#[test]
fn test_files_in_one_directory_form_separate_sections() {
    let ws = TestWorkspace::new();
    ws.primary_book(1, "VaultAddresses.json", r#"{"factory": "0xAAA"}"#)
        .primary_book(1, "OracleAddresses.json", r#"{"router": "0xDDD"}"#)
        .primary_book(1, "EVKFactoryAddresses.json", r#"{"perspective": "0xEEE"}"#)
        .primary_book(1, "README.md", "# not an address book");

    build_job::run_with_chains(&ws.config, vec![ethereum()]).unwrap();

    let addresses = &ws.output_json()[0]["addresses"];
    assert_eq!(addresses["vaultAddrs"], json!({"factory": "0xAAA"}));
    assert_eq!(addresses["oracleAddrs"], json!({"router": "0xDDD"}));
    assert_eq!(addresses["eVKFactoryAddrs"], json!({"perspective": "0xEEE"}));
    assert_eq!(addresses.as_object().unwrap().len(), 3);
}

#[test]
fn test_chain_without_directories_has_empty_addresses() {
    let ws = TestWorkspace::new();
    ws.primary_book(1, "VaultAddresses.json", r#"{"factory": "0xAAA"}"#);

    build_job::run_with_chains(&ws.config, vec![ethereum(), chain(8453, "base", ChainStatus::Production)]).unwrap();

    let artifact = ws.output_json();
    assert_eq!(artifact[1]["chainId"], json!(8453));
    assert_eq!(artifact[1]["addresses"], json!({}));
}

// ============================================================================
// Artifact properties
// ============================================================================

#[test]
fn test_rebuild_is_byte_identical() {
    let ws = TestWorkspace::new();
    ws.primary_book(1, "VaultAddresses.json", r#"{"factory": "0xAAA", "lens": "0x1"}"#)
        .primary_book(1, "OracleAddresses.json", r#"{"router": "0xDDD"}"#)
        .override_book(1, "VaultAddresses.json", r#"{"lens": "0x2"}"#)
        .primary_book(10, "VaultAddresses.json", r#"{"factory": "0xFFF"}"#);
    let chains = || vec![ethereum(), chain(10, "optimism", ChainStatus::Testing)];

    build_job::run_with_chains(&ws.config, chains()).unwrap();
    let first = ws.output_bytes();
    build_job::run_with_chains(&ws.config, chains()).unwrap();
    let second = ws.output_bytes();

    assert_eq!(first, second);
}

#[test]
fn test_artifact_is_minified_and_preserves_key_order() {
    let ws = TestWorkspace::new();
    ws.primary_book(1, "VaultAddresses.json", "{\n  \"zeta\": \"0x1\",\n  \"alpha\": \"0x2\"\n}\n");

    build_job::run_with_chains(&ws.config, vec![ethereum()]).unwrap();

    let raw = String::from_utf8(ws.output_bytes()).unwrap();
    assert!(raw.ends_with(r#""addresses":{"vaultAddrs":{"zeta":"0x1","alpha":"0x2"}}}]"#));
    assert!(!raw.contains('\n'));
}

#[test]
fn test_full_catalog_builds_with_no_address_books() {
    let ws = TestWorkspace::new();

    let entries = build_job::run(&ws.config).unwrap();

    let artifact = ws.output_json();
    let records = artifact.as_array().unwrap();
    assert_eq!(records.len(), entries.len());
    assert_eq!(records[0]["viemName"], json!("mainnet"));
    assert!(records[1].get("viemName").is_none());
    assert!(records.iter().all(|r| r["addresses"] == json!({})));
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_malformed_json_aborts_without_output() {
    let ws = TestWorkspace::new();
    ws.primary_book(1, "VaultAddresses.json", r#"{"factory": "0xAAA"}"#)
        .override_book(1, "OracleAddresses.json", r#"{"router": "#);

    let result = build_job::run_with_chains(&ws.config, vec![ethereum()]);

    assert!(matches!(result, Err(UseCaseError::Repository(RepositoryError::Json { .. }))));
    assert!(!ws.output_exists());
}

#[test]
fn test_failed_build_leaves_prior_artifact_untouched() {
    let ws = TestWorkspace::new();
    ws.primary_book(1, "VaultAddresses.json", r#"{"factory": "0xAAA"}"#);
    build_job::run_with_chains(&ws.config, vec![ethereum()]).unwrap();
    let before = ws.output_bytes();

    ws.override_book(1, "VaultAddresses.json", "not json");
    let result = build_job::run_with_chains(&ws.config, vec![ethereum()]);

    assert!(result.is_err());
    assert_eq!(ws.output_bytes(), before);
}

#[test]
fn test_file_in_place_of_chain_directory_aborts_without_output() {
    let ws = TestWorkspace::new();
    std::fs::create_dir_all(&ws.config.addresses.primary_dir).unwrap();
    std::fs::write(ws.config.addresses.primary_dir.join("1"), "{}").unwrap();

    let result = build_job::run_with_chains(&ws.config, vec![ethereum()]);

    assert!(matches!(result, Err(UseCaseError::Repository(RepositoryError::Io { .. }))));
    assert!(!ws.output_exists());
}

#[test]
fn test_unreadable_book_aborts_without_output() {
    let ws = TestWorkspace::new();
    ws.primary_book(1, "OracleAddresses.json", r#"{"router": "0xDDD"}"#);
    std::fs::create_dir_all(ws.config.addresses.override_dir.join("1/VaultAddresses.json")).unwrap();

    let result = build_job::run_with_chains(&ws.config, vec![ethereum()]);

    assert!(matches!(result, Err(UseCaseError::Repository(RepositoryError::Io { .. }))));
    assert!(!ws.output_exists());
}

#[test]
fn test_non_object_book_aborts_without_output() {
    let ws = TestWorkspace::new();
    ws.primary_book(1, "VaultAddresses.json", r#"["0xAAA"]"#);

    let result = build_job::run_with_chains(&ws.config, vec![ethereum()]);

    assert!(matches!(
        result,
        Err(UseCaseError::Domain(DomainError::NonObjectAddressBook { .. }))
    ));
    assert!(!ws.output_exists());
}

#[test]
fn test_duplicate_chain_ids_abort_without_output() {
    let ws = TestWorkspace::new();

    let result = build_job::run_with_chains(&ws.config, vec![ethereum(), ethereum()]);

    assert!(matches!(result, Err(UseCaseError::Domain(DomainError::ChainIdConflict(_)))));
    assert!(!ws.output_exists());
}
