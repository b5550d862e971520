//! Integration tests for sort command

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{um_cmd, write_corpus};

#[test]
fn test_sort_source_file_by_key() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("key.txt"), "03.bar.md\n01.foo.md\n").unwrap();
    fs::write(
        temp.path().join("list.txt"),
        "01.foo.md\n02.foo.md\n03.bar.md\n",
    )
    .unwrap();

    um_cmd()
        .current_dir(temp.path())
        .args(["sort", "--key", "key.txt", "--source", "list.txt"])
        .assert()
        .success()
        .stdout("03.bar.md\n01.foo.md\n02.foo.md\n");
}

#[test]
fn test_sort_reads_source_from_stdin() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("key.txt"), "02.foo.md\n01.foo.md\n").unwrap();

    um_cmd()
        .current_dir(temp.path())
        .args(["sort", "-k", "key.txt"])
        .write_stdin("01.foo.md\n02.foo.md\n")
        .assert()
        .success()
        .stdout("02.foo.md\n01.foo.md\n");
}

#[test]
fn test_sort_write_back_to_key() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("key.txt"), "02.foo.md\n01.foo.md\n").unwrap();

    um_cmd()
        .current_dir(temp.path())
        .args(["sort", "-k", "key.txt", "-w"])
        .write_stdin("04.qux.md\n01.foo.md\n02.foo.md\n")
        .assert()
        .success()
        .stdout("");

    assert_eq!(
        fs::read_to_string(temp.path().join("key.txt")).unwrap(),
        "02.foo.md\n01.foo.md\n04.qux.md\n"
    );
}

#[test]
fn test_tag_sort_cat_pipeline() {
    let temp = TempDir::new().unwrap();
    write_corpus(temp.path());
    fs::write(temp.path().join("key.txt"), "03.bar.md\n02.foo.md\n").unwrap();

    let listed = um_cmd()
        .current_dir(temp.path())
        .args(["tag", "science"])
        .output()
        .unwrap();

    let sorted = um_cmd()
        .current_dir(temp.path())
        .args(["sort", "-k", "key.txt"])
        .write_stdin(listed.stdout)
        .output()
        .unwrap();
    assert_eq!(
        String::from_utf8(sorted.stdout.clone()).unwrap(),
        "03.bar.md\n02.foo.md\n04.qux.md\n"
    );

    um_cmd()
        .current_dir(temp.path())
        .arg("cat")
        .write_stdin(sorted.stdout)
        .assert()
        .success()
        .stdout("Third.\n\n---\n\nSecond.\n\n---\n\nFourth.\n");
}

#[test]
fn test_sort_missing_key_file() {
    let temp = TempDir::new().unwrap();

    um_cmd()
        .current_dir(temp.path())
        .args(["sort", "-k", "none.txt"])
        .write_stdin("01.foo.md\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("none.txt"));
}

#[test]
fn test_sort_without_source_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("key.txt"), "01.foo.md\n").unwrap();

    um_cmd()
        .current_dir(temp.path())
        .args(["sort", "-k", "key.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No filelist"));

    assert_eq!(
        fs::read_to_string(temp.path().join("key.txt")).unwrap(),
        "01.foo.md\n"
    );
}
