//! Integration tests for tag command

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{um_cmd, write_corpus};

#[test]
fn test_tag_single() {
    let temp = TempDir::new().unwrap();
    write_corpus(temp.path());

    um_cmd()
        .current_dir(temp.path())
        .args(["tag", "bar"])
        .assert()
        .success()
        .stdout("01.foo.md\n02.foo.md\n03.bar.md\n");
}

#[test]
fn test_tag_and() {
    let temp = TempDir::new().unwrap();
    write_corpus(temp.path());

    um_cmd()
        .current_dir(temp.path())
        .args(["tag", "bar+science"])
        .assert()
        .success()
        .stdout("02.foo.md\n03.bar.md\n");
}

#[test]
fn test_tag_or() {
    let temp = TempDir::new().unwrap();
    write_corpus(temp.path());

    um_cmd()
        .current_dir(temp.path())
        .args(["tag", "foo,qux"])
        .assert()
        .success()
        .stdout("01.foo.md\n04.qux.md\n06.qux.md\n");
}

#[test]
fn test_tag_empty_query_lists_tagged_files() {
    let temp = TempDir::new().unwrap();
    write_corpus(temp.path());

    um_cmd()
        .current_dir(temp.path())
        .arg("tag")
        .assert()
        .success()
        .stdout("01.foo.md\n02.foo.md\n03.bar.md\n04.qux.md\n06.qux.md\n");
}

#[test]
fn test_tag_invert_empty_query_lists_untagged_files() {
    let temp = TempDir::new().unwrap();
    write_corpus(temp.path());

    um_cmd()
        .current_dir(temp.path())
        .args(["tag", "--invert"])
        .assert()
        .success()
        .stdout("05.baz.md\n");
}

#[test]
fn test_tag_unknown_tag_is_not_an_error() {
    let temp = TempDir::new().unwrap();
    write_corpus(temp.path());

    um_cmd()
        .current_dir(temp.path())
        .args(["tag", "qaz"])
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn test_tag_mixed_separators_warn() {
    let temp = TempDir::new().unwrap();
    write_corpus(temp.path());

    um_cmd()
        .current_dir(temp.path())
        .args(["tag", "bar+science,foo"])
        .assert()
        .success()
        .stdout("01.foo.md\n")
        .stderr(predicate::str::contains("mixes"));
}

#[test]
fn test_tag_verbose_report() {
    let temp = TempDir::new().unwrap();
    write_corpus(temp.path());

    let expected = "\
[files]
01.foo.md
02.foo.md
03.bar.md

[tags]
bar                 = 3

[adjacencies]
foo                 = 1   : 1
science             = 2   : 3

[sums]
files               = 3   : 6
adjacencies         = 2   : 4

";

    um_cmd()
        .current_dir(temp.path())
        .args(["tag", "bar", "--verbose"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_tag_verbose_report_three_entries() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("01.foo.md"),
        "# 01.foo.md\n: 2024.09.25\n+ bar\n+ foo\n\nFoo.\n",
    )
    .unwrap();
    fs::write(temp.path().join("02.foo.md"), "# 02.foo.md\n+ bar\n+ science\n\n").unwrap();
    fs::write(temp.path().join("03.bar.md"), "# 03.bar.md\n+ bar\n+ science\n\n").unwrap();

    let expected = "\
[files]
01.foo.md
02.foo.md
03.bar.md

[tags]
bar                 = 3

[adjacencies]
foo                 = 1   : 1
science             = 2   : 2

[sums]
files               = 3   : 3
adjacencies         = 2   : 3

";

    um_cmd()
        .current_dir(temp.path())
        .args(["tag", "bar", "-v"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_tag_verbose_empty_result() {
    let temp = TempDir::new().unwrap();
    write_corpus(temp.path());

    um_cmd()
        .current_dir(temp.path())
        .args(["tag", "qaz", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[files]\n\n\n[tags]\n"));
}

#[test]
fn test_tag_date_range() {
    let temp = TempDir::new().unwrap();
    write_corpus(temp.path());

    um_cmd()
        .current_dir(temp.path())
        .args(["tag", "bar", "-d", "2024.09.26-2024.10.01"])
        .assert()
        .success()
        .stdout("02.foo.md\n03.bar.md\n");
}

#[test]
fn test_tag_single_date() {
    let temp = TempDir::new().unwrap();
    write_corpus(temp.path());

    um_cmd()
        .current_dir(temp.path())
        .args(["tag", "-d", "2024.09.25"])
        .assert()
        .success()
        .stdout("01.foo.md\n");
}

#[test]
fn test_tag_bad_date_range_warns() {
    let temp = TempDir::new().unwrap();
    write_corpus(temp.path());

    um_cmd()
        .current_dir(temp.path())
        .args(["tag", "-d", "yesterday"])
        .assert()
        .success()
        .stdout("06.qux.md\n")
        .stderr(predicate::str::contains("unparsable date"));
}

#[test]
fn test_tag_short_year_is_not_a_date() {
    let temp = TempDir::new().unwrap();
    write_corpus(temp.path());

    um_cmd()
        .current_dir(temp.path())
        .args(["tag", "-d", "24.09.25"])
        .assert()
        .success()
        .stdout("06.qux.md\n")
        .stderr(predicate::str::contains("unparsable date '24.09.25'"));
}

#[test]
fn test_tag_reads_filelist_from_stdin() {
    let temp = TempDir::new().unwrap();
    write_corpus(temp.path());

    um_cmd()
        .current_dir(temp.path())
        .args(["tag", "bar"])
        .write_stdin("03.bar.md\n04.qux.md\n")
        .assert()
        .success()
        .stdout("03.bar.md\n");
}

#[test]
fn test_tag_ignores_non_entry_files() {
    let temp = TempDir::new().unwrap();
    write_corpus(temp.path());
    fs::write(temp.path().join("README.md"), "+ bar\n").unwrap();

    um_cmd()
        .current_dir(temp.path())
        .args(["tag", "bar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("README.md").not());
}

#[test]
fn test_tag_uses_um_root() {
    let temp = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    write_corpus(temp.path());

    um_cmd()
        .current_dir(elsewhere.path())
        .env("UM_ROOT", temp.path())
        .args(["tag", "foo"])
        .assert()
        .success()
        .stdout("01.foo.md\n");
}

#[test]
fn test_tag_missing_piped_file_fails() {
    let temp = TempDir::new().unwrap();

    um_cmd()
        .current_dir(temp.path())
        .arg("tag")
        .write_stdin("99.missing.md\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error opening file"))
        .stderr(predicate::str::contains("99.missing.md"));
}

#[test]
fn test_tag_empty_directory() {
    let temp = TempDir::new().unwrap();

    um_cmd()
        .current_dir(temp.path())
        .arg("tag")
        .assert()
        .success()
        .stdout("\n");
}
