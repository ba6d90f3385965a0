//! Tests for the git2-backed configuration source against real repositories.
//!
//! Every test queries a section that only exists in the test repository, so
//! the machine's own global and system configuration cannot interfere.

use gcm_git::{ConfigSource, ConfigTier, Error, GitConfiguration};
use gcm_test_utils::TestRepo;
use pretty_assertions::assert_eq;

#[test]
fn test_query_returns_local_unscoped_value() {
    let repo = TestRepo::new();
    repo.set_config("gcmtest.bar", "Hello, World!");

    let entries = GitConfiguration::new()
        .query(Some(&repo.git_dir()), "gcmtest", "bar")
        .unwrap();

    assert_eq!(entries.len(), 1, "config:\n{}", repo.config_text());
    assert_eq!(entries[0].value, "Hello, World!");
    assert_eq!(entries[0].tier, ConfigTier::Repository);
    assert_eq!(entries[0].scope(), None);
}

#[test]
fn test_query_accepts_working_tree_path() {
    let repo = TestRepo::new();
    repo.set_config("gcmtest.bar", "value");

    let entries = GitConfiguration::new()
        .query(Some(repo.root()), "gcmtest", "bar")
        .unwrap();

    assert_eq!(entries.len(), 1);
}

#[test]
fn test_query_returns_every_scope_in_declaration_order() {
    let repo = TestRepo::new();
    repo.append_config(
        r#"[gcmtest "http://example.com"]
	bar = Second value
[gcmtest "example.com"]
	bar = Third value
[gcmtest]
	bar = Last value
	baz = Unrelated"#,
    );

    let entries = GitConfiguration::new()
        .query(Some(&repo.git_dir()), "gcmtest", "bar")
        .unwrap();

    let found: Vec<_> = entries
        .iter()
        .map(|e| (e.scope().map(str::to_string), e.value.clone()))
        .collect();

    assert_eq!(
        found,
        vec![
            (Some("http://example.com".to_string()), "Second value".to_string()),
            (Some("example.com".to_string()), "Third value".to_string()),
            (None, "Last value".to_string()),
        ]
    );
}

#[test]
fn test_query_matches_section_and_property_case_insensitively() {
    let repo = TestRepo::new();
    repo.append_config("[GcmTest]\n\tHttpsProxy = http://proxy.example.com");

    let entries = GitConfiguration::new()
        .query(Some(&repo.git_dir()), "gcmtest", "httpsProxy")
        .unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].value, "http://proxy.example.com");
}

#[test]
fn test_query_reports_bare_key_as_true() {
    let repo = TestRepo::new();
    repo.append_config("[gcmtest]\n\tdebug");

    let entries = GitConfiguration::new()
        .query(Some(&repo.git_dir()), "gcmtest", "debug")
        .unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].value, "true");
}

#[test]
fn test_query_unset_returns_empty() {
    let repo = TestRepo::new();

    let entries = GitConfiguration::new()
        .query(Some(&repo.git_dir()), "gcmtest", "bar")
        .unwrap();

    assert!(entries.is_empty());
}

#[test]
fn test_query_outside_repository_is_an_error() {
    let temp = tempfile::TempDir::new().unwrap();

    let result = GitConfiguration::new().query(Some(temp.path()), "gcmtest", "bar");

    assert!(
        matches!(result, Err(Error::RepositoryNotFound { .. })),
        "expected RepositoryNotFound, got {result:?}"
    );
}
