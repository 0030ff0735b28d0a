use std::path::PathBuf;
use tato_core::*;
use tempfile::TempDir;

#[test]
fn test_resolve_data_path_with_explicit() {
    let result = resolve_data_path(Some("/explicit/data")).unwrap();
    assert_eq!(result, PathBuf::from("/explicit/data"));
}

#[test]
fn test_resolve_data_path_expands_explicit_tilde() {
    let Some(home) = dirs::home_dir() else {
        return;
    };
    let result = resolve_data_path(Some("~/.tato")).unwrap();
    assert_eq!(result, home.join(".tato"));
}

#[test]
fn test_expand_tilde_leaves_plain_paths() {
    assert_eq!(expand_tilde("/var/lib/tato"), PathBuf::from("/var/lib/tato"));
    assert_eq!(expand_tilde("relative/dir"), PathBuf::from("relative/dir"));
    assert_eq!(expand_tilde("not~/tilde"), PathBuf::from("not~/tilde"));
}

#[test]
fn test_ensure_dir_creates_nested_directories() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("a").join("b");

    let created = ensure_dir(&nested).unwrap();

    assert_eq!(created, nested.as_path());
    assert!(nested.is_dir());

    // Calling twice is fine
    ensure_dir(&nested).unwrap();
}
