use assert_cmd::prelude::*;

use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn sofia_cmd(dir: &TempDir) -> Command {
  let mut cmd = Command::cargo_bin("sofia").expect("binary exists");
  cmd.current_dir(dir.path());
  cmd.env("NO_COLOR", "1");
  cmd
}

fn write(dir: &TempDir, rel: &str, content: &str) {
  let path = dir.path().join(rel);
  fs::create_dir_all(path.parent().unwrap()).unwrap();
  fs::write(path, content).unwrap();
}

fn project() -> TempDir {
  let temp = TempDir::new().unwrap();
  write(&temp, "app/components/shop/Cart.vue", "<script>\nexport default { mixins: [m] }\n</script>");
  write(&temp, "app/components/shop/Item.vue", "<script setup>\nconst a = ref(1)\n</script>");
  write(&temp, "app/views/Home.vue", "<template><h1>Home</h1></template>");
  write(&temp, "app/dist/Built.vue", "<script>\nexport default {}\n</script>");
  temp
}

#[test]
fn test_basic_report() {
  let temp = project();
  sofia_cmd(&temp)
    .args(["--folder=app", "--blacklist=dist"])
    .assert()
    .success()
    .stdout(
      contains("Total SFCs: 3")
        .and(contains("Options API SFCs: 1 (33.33%)"))
        .and(contains("Composition API SFCs: 1 (33.33%)"))
        .and(contains("Template-only SFCs: 1 (33.33%)"))
        .and(contains("Complexity Analysis").not()),
    );
}

#[test]
fn test_complexity_report() {
  let temp = project();
  sofia_cmd(&temp)
    .args(["--folder", "app", "--blacklist", "dist", "--complexity"])
    .assert()
    .success()
    .stdout(
      contains("High Complexity: 1 (100.00%)")
        .and(contains("    shop: 1 (100.00%)"))
        .and(contains("File: Cart.vue"))
        .and(contains(" - Uses mixins")),
    );
}

#[test]
fn test_unclassified_diagnostics_go_to_stderr() {
  let temp = TempDir::new().unwrap();
  write(&temp, "src/Odd.vue", "<script>\nwindow.answer = 42\n</script>");
  sofia_cmd(&temp)
    .args(["--folder=src"])
    .assert()
    .success()
    .stdout(contains("Example unclassified SFC:").and(contains("window.answer").not()))
    .stderr(contains("Unclassified SFC").and(contains("window.answer = 42")));
}

#[test]
fn test_unreadable_file_is_reported_with_its_path() {
  let temp = TempDir::new().unwrap();
  write(&temp, "src/Good.vue", "<script>\nexport default {}\n</script>");
  fs::write(temp.path().join("src/Bad.vue"), [0xff, 0xfe, 0x00]).unwrap();
  sofia_cmd(&temp)
    .args(["--folder=src"])
    .assert()
    .success()
    .stdout(contains("Total SFCs: 1"))
    .stderr(contains("Error reading file").and(contains("Bad.vue")));
}

#[cfg(unix)]
#[test]
fn test_broken_symlink_is_reported_and_skipped() {
  let temp = TempDir::new().unwrap();
  write(&temp, "src/Good.vue", "<script>\nexport default {}\n</script>");
  std::os::unix::fs::symlink(temp.path().join("src/gone.vue"), temp.path().join("src/Broken.vue")).unwrap();
  sofia_cmd(&temp)
    .args(["--folder=src"])
    .assert()
    .success()
    .stdout(contains("Total SFCs: 1"))
    .stderr(contains("Skipping unreadable entry"));
}

#[test]
fn test_json_output() {
  let temp = project();
  let output = sofia_cmd(&temp).args(["--folder=app", "--format=json"]).output().unwrap();
  assert!(output.status.success());
  let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(value["total"], 4);
  assert_eq!(value["options_count"], 2);
}

#[test]
fn test_config_file_blacklist_and_complexity() {
  let temp = project();
  write(&temp, ".sofia.json", r#"{ "blacklist": ["dist"], "complexity": true }"#);
  sofia_cmd(&temp)
    .args(["--folder=app"])
    .assert()
    .success()
    .stdout(contains("Total SFCs: 3").and(contains("Complexity Analysis")));
}

#[test]
fn test_invalid_config_fails() {
  let temp = project();
  write(&temp, "broken.json", "{ nope");
  sofia_cmd(&temp)
    .args(["--folder=app", "--config=broken.json"])
    .assert()
    .failure()
    .stderr(contains("Failed to load configuration"));
}

#[test]
fn test_missing_folder_fails() {
  let temp = TempDir::new().unwrap();
  sofia_cmd(&temp)
    .args(["--folder=does-not-exist"])
    .assert()
    .failure()
    .stderr(contains("Cannot scan root"));
}
