mod common;
use common::*;

#[test]
fn nested_file_cant_be_tracked() {
    let dir = tempfile::tempdir().unwrap();
    let dir = dir.path();
    gitlet(dir, &["init"]);
    std::fs::create_dir(dir.join("sub")).unwrap();
    write_file(dir, "sub/f.txt", "tracked on other");

    gitlet(dir, &["add", "sub/f.txt"]).stdout("File does not exist.\n");
    gitlet(dir, &["rm", "sub/f.txt"]).stdout("No reason to remove the file.\n");
    gitlet(dir, &["commit", "nested"]).stdout("No changes added to the commit.\n");
    assert_eq!(read_file(dir, "sub/f.txt").as_deref(), Some("tracked on other"));
}

#[test]
fn untracked_nested_file_survives_checkout() {
    let dir = tempfile::tempdir().unwrap();
    let dir = dir.path();
    gitlet(dir, &["init"]);
    gitlet(dir, &["branch", "other"]);
    gitlet(dir, &["checkout", "other"]).stdout("");
    commit_file(dir, "f.txt", "tracked on other", "add f");
    gitlet(dir, &["checkout", "master"]).stdout("");

    std::fs::create_dir(dir.join("sub")).unwrap();
    write_file(dir, "sub/f.txt", "MY UNTRACKED WORK");
    gitlet(dir, &["checkout", "other"]).stdout("");

    assert_eq!(read_file(dir, "sub/f.txt").as_deref(), Some("MY UNTRACKED WORK"));
    assert_eq!(read_file(dir, "f.txt").as_deref(), Some("tracked on other"));
}

#[test]
fn repository_metadata_cant_be_tracked() {
    let dir = tempfile::tempdir().unwrap();
    let dir = dir.path();
    gitlet(dir, &["init"]);

    gitlet(dir, &["add", ".gitlet/CURRENT_BRANCH"]).stdout("File does not exist.\n");
    gitlet(dir, &["add", ".gitlet"]).stdout("File does not exist.\n");
    gitlet(dir, &["commit", "oops"]).stdout("No changes added to the commit.\n");
}

#[test]
fn branch_name_cant_leave_the_repository() {
    let dir = tempfile::tempdir().unwrap();
    let dir = dir.path();
    gitlet(dir, &["init"]);

    gitlet(dir, &["branch", "../../../escaped"]).stdout("Invalid branch name.\n");
    assert_eq!(read_file(dir, "escaped"), None);

    gitlet(dir, &["checkout", "../../HEAD"]).stdout("No such branch exists.\n");
    gitlet(dir, &["merge", "../../HEAD"]).stdout("A branch with that name does not exist.\n");

    let status = gitlet_stdout(dir, &["status"]);
    assert!(status.starts_with("=== Branches ===\n*master\n\n"));
    assert!(!status.contains("escaped"));
}
