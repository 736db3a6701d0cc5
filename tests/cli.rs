//! Runs the batch binary end to end.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const MODEL: &str = "\
# Blender 4.0
mtllib model.mtl
o Crate
v 0 0 0
vt 0 0
vn 0 0 1
usemtl Wood
s 1
f 1/1/1 2/2/1 3/3/1
f 3/3/1 4/4/1 5/5/1
f 6/6/1 7/7/1 8/8/1
";

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_automaterials"))
        .current_dir(dir)
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn writes_default_output_pair() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("model.obj"), MODEL).unwrap();

    let output = run(dir.path(), &["model.obj"]);
    assert!(output.status.success());

    let obj = fs::read_to_string(dir.path().join("output.obj")).unwrap();
    let mtl = fs::read_to_string(dir.path().join("output.mtl")).unwrap();

    let expected_obj = "\
# SED Auto Materials v1.0 OBJ File
mtllib output.mtl
o Crate
v 0 0 0
vt 0 0
vn 0 0 1
usemtl Material.0
s off
f 1/1/1 2/2/1 3/3/1
f 3/3/1 4/4/1 5/5/1
usemtl Material.1
s off
f 6/6/1 7/7/1 8/8/1
";
    assert_eq!(obj, expected_obj);

    assert!(mtl.starts_with(
        "# SED Auto Materials v1.0 MTL File\n# Material Count: 2\n\nnewmtl Material.0\n"
    ));
    assert_eq!(mtl.matches("newmtl ").count(), 2);
}

#[test]
fn named_output_and_per_polygon_mode() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("model.obj"), MODEL).unwrap();
    fs::create_dir(dir.path().join("out")).unwrap();

    let output = run(dir.path(), &["model.obj", "out/crate", "--mode", "per-polygon"]);
    assert!(output.status.success());

    let obj = fs::read_to_string(dir.path().join("out/crate.obj")).unwrap();
    let mtl = fs::read_to_string(dir.path().join("out/crate.mtl")).unwrap();

    assert!(obj.contains("\nmtllib crate.mtl\n"));
    assert_eq!(obj.matches("usemtl Material.").count(), 3);
    assert!(mtl.contains("# Material Count: 3\n"));
}

#[test]
fn missing_argument_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();

    let output = run(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "No file provided.");
}

#[test]
fn unreadable_file_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();

    let output = run(dir.path(), &["nope.obj"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Can't open file"));
    assert!(!dir.path().join("output.obj").exists());
}

#[test]
fn file_without_faces_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("points.obj"), "v 0 0 0\nv 1 1 1\n").unwrap();

    let output = run(dir.path(), &["points.obj"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Can't read polygon data"));
    assert!(!dir.path().join("output.obj").exists());
    assert!(!dir.path().join("output.mtl").exists());
}

#[test]
fn failed_write_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("model.obj"), MODEL).unwrap();

    let output = run(dir.path(), &["model.obj", "missing_dir/out"]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Can't open file"));
    assert!(stdout.contains("for writing"));
    assert!(!dir.path().join("missing_dir").exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn regenerated_faces_parse_back_identically() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("model.obj"), MODEL).unwrap();

    assert!(run(dir.path(), &["model.obj", "first"]).status.success());
    assert!(run(dir.path(), &["first.obj", "second"]).status.success());

    let first = fs::read_to_string(dir.path().join("first.obj")).unwrap();
    let second = fs::read_to_string(dir.path().join("second.obj")).unwrap();

    assert_eq!(
        first.replace("mtllib first.mtl", ""),
        second.replace("mtllib second.mtl", "")
    );
}
