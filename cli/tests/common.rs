use std::{fs, path::Path};

use assert_cmd::{assert::Assert, Command};

// Runs the gitlet binary in `dir` and asserts that it exited normally.
// gitlet reports every failure on stdout with exit status 0.
#[allow(dead_code)]
pub fn gitlet(dir: &Path, args: &[&str]) -> Assert {
    Command::cargo_bin("gitlet")
        .unwrap()
        .current_dir(dir)
        .env_remove("GITLET_LOG")
        .args(args)
        .assert()
        .success()
        .stderr("")
}

// Like `gitlet`, but returns stdout as a string.
#[allow(dead_code)]
pub fn gitlet_stdout(dir: &Path, args: &[&str]) -> String {
    let output = gitlet(dir, args).get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[allow(dead_code)]
pub fn write_file(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

#[allow(dead_code)]
pub fn read_file(dir: &Path, name: &str) -> Option<String> {
    fs::read_to_string(dir.join(name)).ok()
}

// Stages and commits one file, expecting no output.
#[allow(dead_code)]
pub fn commit_file(dir: &Path, name: &str, content: &str, message: &str) {
    write_file(dir, name, content);
    gitlet(dir, &["add", name]).stdout("");
    gitlet(dir, &["commit", message]).stdout("");
}
