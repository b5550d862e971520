#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn um_cmd() -> Command {
    let mut cmd = Command::cargo_bin("um").unwrap();
    cmd.env_remove("UM_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd
}

/// Six entries, four tags: `05.baz.md` is untagged, `06.qux.md` undated
pub fn write_corpus(dir: &Path) {
    let entries = [
        ("01.foo.md", "# 01.foo.md\n: 2024.09.25\n+ bar\n+ foo\n\nFoo bar.\n"),
        ("02.foo.md", "# 02.foo.md\n: 2024.09.26\n+ bar\n+ science\n\nSecond.\n"),
        ("03.bar.md", "# 03.bar.md\n: 2024.10.01\n+ bar\n+ science\n\nThird.\n"),
        ("04.qux.md", "# 04.qux.md\n: 2024.10.15\n+ science\n+ qux\n\nFourth.\n"),
        ("05.baz.md", "# 05.baz.md\n: 2024.11.01\n\nNo tags here.\n"),
        ("06.qux.md", "# 06.qux.md\n+ qux\n\nUndated.\n"),
    ];
    for (name, content) in entries {
        fs::write(dir.join(name), content).unwrap();
    }
}
