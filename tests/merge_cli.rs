//! Integration tests for the merge flow.
//!
//! These drive the real binary against temporary export directories,
//! scripting the interactive prompts through stdin.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Workspace with an AOFiles directory and a template, like a venue
/// operator's working directory.
struct Rig {
    dir: TempDir,
}

impl Rig {
    fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        std::fs::create_dir(dir.path().join("AOFiles")).unwrap();
        std::fs::write(
            dir.path().join("template.xml"),
            "<XmlState name=\"[NAME]\">\n<ScreenSetup>\n<screens>\n[SCREENS]\n</screens>\n</ScreenSetup>\n</XmlState>\n",
        )
        .unwrap();
        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn add_export(&self, file: &str, screens: &str) {
        let content = format!(
            "<XmlState><ScreenSetup><screens>{}</screens></ScreenSetup></XmlState>",
            screens
        );
        std::fs::write(self.path().join("AOFiles").join(file), content).unwrap();
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("aomerge").expect("binary builds");
        cmd.current_dir(self.path());
        cmd
    }

    fn output_xml(&self, base: &str) -> String {
        std::fs::read_to_string(self.path().join("output").join("xml").join(format!("{}.xml", base)))
            .expect("output file exists")
    }
}

const WALL: &str = r#"<DmxScreen name="Wall"><layers>
    <DmxSlice width="10" height="1" colorFormat="RGB" inputChannel="77"/>
  </layers></DmxScreen>"#;

const FLOOR: &str = r#"<DmxScreen name="Floor"><layers>
    <DmxSlice width="5" height="1" colorFormat="RGB" inputChannel="301"/>
  </layers></DmxScreen>"#;

#[test]
fn no_arguments_prints_usage_and_succeeds() {
    let rig = Rig::new();
    rig.cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("--extractcsv"));
}

#[test]
fn help_flag_exits_zero() {
    let rig = Rig::new();
    rig.cmd().arg("-h").assert().success();
}

#[test]
fn non_interactive_merge_takes_all_screens_with_default_channels() {
    let rig = Rig::new();
    rig.add_export("a.xml", WALL);
    rig.add_export("b.xml", FLOOR);

    rig.cmd()
        .args(["--name", "Club Rig", "--no-interactive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wall: channels 1-30"))
        .stdout(predicate::str::contains("Floor: channels 31-45"));

    let xml = rig.output_xml("Club_Rig");
    assert!(xml.contains("name=\"Club Rig\""));
    assert!(xml.contains("LumiverseId=\"1\""));
    assert!(xml.contains("LumiverseId=\"2\""));
    // Authored channels were rewritten by the allocator.
    assert!(xml.contains("inputChannel=\"1\""));
    assert!(xml.contains("inputChannel=\"31\""));
    assert!(!xml.contains("inputChannel=\"77\""));
}

#[test]
fn default_name_writes_new_xml() {
    let rig = Rig::new();
    rig.add_export("a.xml", WALL);

    rig.cmd().arg("--no-interactive").assert().success();
    let xml = rig.output_xml("new");
    assert!(xml.contains("name=\"New File\""));
}

#[test]
fn interactive_accepting_defaults_packs_ranges() {
    let rig = Rig::new();
    rig.add_export("a.xml", WALL);
    rig.add_export("b.xml", FLOOR);

    // Select everything, then accept both suggested start channels.
    rig.cmd()
        .args(["--name", "Show"])
        .write_stdin("all\n\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Floor: channels 31-45"));
}

#[test]
fn interactive_custom_start_channel_is_honored() {
    let rig = Rig::new();
    rig.add_export("a.xml", WALL);
    rig.add_export("b.xml", FLOOR);

    // Only screen 2 (Floor), starting at channel 100.
    rig.cmd()
        .args(["--name", "Floor Only"])
        .write_stdin("2\n100\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Floor: channels 100-114"));

    let xml = rig.output_xml("Floor_Only");
    assert!(xml.contains("Floor"));
    assert!(!xml.contains("Wall"));
    assert!(xml.contains("inputChannel=\"100\""));
}

#[test]
fn invalid_channel_replies_are_reprompted() {
    let rig = Rig::new();
    rig.add_export("a.xml", WALL);

    rig.cmd()
        .args(["--name", "Retry"])
        .write_stdin("all\nabc\n999999\n\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("not a number"))
        .stderr(predicate::str::contains("between 1 and 131072"))
        .stdout(predicate::str::contains("Wall: channels 1-30"));
}

#[test]
fn selecting_none_writes_nothing_and_exits_zero() {
    let rig = Rig::new();
    rig.add_export("a.xml", WALL);

    rig.cmd()
        .args(["--name", "Empty"])
        .write_stdin("none\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to write"));

    assert!(!rig.path().join("output").join("xml").join("Empty.xml").exists());
}

#[test]
fn out_of_range_selection_tokens_are_skipped_with_warnings() {
    let rig = Rig::new();
    rig.add_export("a.xml", WALL);
    rig.add_export("b.xml", FLOOR);

    rig.cmd()
        .args(["--name", "Partial"])
        .write_stdin("9,1\n\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("out of range"))
        .stdout(predicate::str::contains("Wall: channels 1-30"));
}

#[test]
fn duplicate_screens_keep_first_occurrence() {
    let rig = Rig::new();
    rig.add_export("a.xml", WALL);
    rig.add_export(
        "b.xml",
        r#"<DmxScreen name="Wall"><layers>
             <DmxSlice width="99" height="1" colorFormat="RGBW"/>
           </layers></DmxScreen>"#,
    );

    rig.cmd()
        .args(["--name", "Dedup", "--no-interactive"])
        .assert()
        .success()
        // First occurrence is the 30-channel wall, not the 396-channel one.
        .stdout(predicate::str::contains("Wall: channels 1-30"));

    let xml = rig.output_xml("Dedup");
    assert_eq!(xml.matches("<DmxScreen").count(), 1);
}

#[test]
fn existing_output_file_is_fatal() {
    let rig = Rig::new();
    rig.add_export("a.xml", WALL);
    std::fs::create_dir_all(rig.path().join("output").join("xml")).unwrap();
    std::fs::write(rig.path().join("output").join("xml").join("Taken.xml"), "old").unwrap();

    rig.cmd()
        .args(["--name", "Taken", "--no-interactive"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    // The pre-existing file is untouched.
    let content =
        std::fs::read_to_string(rig.path().join("output").join("xml").join("Taken.xml")).unwrap();
    assert_eq!(content, "old");
}

#[test]
fn empty_input_directory_is_fatal() {
    let rig = Rig::new();
    rig.cmd()
        .args(["--name", "Nothing", "--no-interactive"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no XML documents"));
}

#[test]
fn missing_input_directory_is_fatal() {
    let rig = Rig::new();
    rig.cmd()
        .args(["--name", "X", "--no-interactive", "--input-dir", "nowhere"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("nowhere"));
}

#[test]
fn malformed_export_is_fatal() {
    let rig = Rig::new();
    std::fs::write(rig.path().join("AOFiles").join("bad.xml"), "<XmlState><oops>").unwrap();

    rig.cmd()
        .args(["--name", "Bad", "--no-interactive"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("bad.xml"));
}

#[test]
fn json_report_lists_assignments() {
    let rig = Rig::new();
    rig.add_export("a.xml", WALL);

    // --quiet leaves the JSON report as the only stdout content.
    let assert = rig
        .cmd()
        .args(["--name", "Json", "--quiet", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report[0]["name"], "Wall");
    assert_eq!(report[0]["start"], 1);
    assert_eq!(report[0]["end"], 30);
}
