//! Integration tests for the CSV extraction mode.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("aomerge").expect("binary builds");
    cmd.current_dir(dir.path());
    cmd
}

const EXPORT: &str = r#"<XmlState><ScreenSetup><screens>
  <DmxScreen name="Wall"><layers>
    <DmxSlice width="1" height="1" colorFormat="RGB">
      <InputRect><v x="0" y="0"/><v x="10" y="0"/><v x="10" y="10"/><v x="0" y="10"/></InputRect>
    </DmxSlice>
    <DmxSlice width="1" height="1" colorFormat="RGB">
      <InputRect><v x="20" y="0"/><v x="30" y="0"/><v x="30" y="10"/><v x="20" y="10"/></InputRect>
    </DmxSlice>
    <DmxSlice width="1" height="1" colorFormat="RGB"/>
  </layers></DmxScreen>
  <DmxScreen name="Floor"><layers>
    <DmxSlice width="1" height="1" colorFormat="RGB">
      <InputRect><v x="0" y="0"/><v x="5" y="0"/><v x="5" y="5"/><v x="0" y="5"/></InputRect>
    </DmxSlice>
  </layers></DmxScreen>
</screens></ScreenSetup></XmlState>"#;

#[test]
fn extract_writes_one_csv_per_screen() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("show.xml"), EXPORT).unwrap();

    cmd(&dir)
        .args(["--extractcsv", "show.xml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wall"))
        .stdout(predicate::str::contains("Floor"));

    let wall = std::fs::read_to_string(dir.path().join("output").join("csv").join("Wall.csv")).unwrap();
    // Header plus the two four-corner fixtures; the rect-less slice is skipped.
    assert_eq!(wall, "x, y\n5, 5\n25, 5\n");

    let floor =
        std::fs::read_to_string(dir.path().join("output").join("csv").join("Floor.csv")).unwrap();
    assert_eq!(floor, "x, y\n3, 3\n");
}

#[test]
fn extract_takes_precedence_over_merge_flags() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("show.xml"), EXPORT).unwrap();

    // --name alongside --extractcsv still runs the extraction.
    cmd(&dir)
        .args(["--extractcsv", "show.xml", "--name", "Ignored"])
        .assert()
        .success();
    assert!(dir.path().join("output").join("csv").join("Wall.csv").exists());
    assert!(!dir.path().join("output").join("xml").exists());
}

#[test]
fn document_without_screens_is_fatal() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("empty.xml"), "<XmlState/>").unwrap();

    cmd(&dir)
        .args(["--extractcsv", "empty.xml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no DmxScreen elements"));
}

#[test]
fn missing_document_is_fatal() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["--extractcsv", "absent.xml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("absent.xml"));
}
