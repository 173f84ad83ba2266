use std::fs;

use super::super::*;

use crate::TempRepo;

fn some_commit(r: &mut OnDiskRepo) -> Id {
    let head = r.head().unwrap();
    let c = Commit::child_of(&head, &r.commit(&head).unwrap(), "another");
    r.put_commit(&c).unwrap()
}

#[test]
fn head_and_current_branch() {
    let tr = TempRepo::new();
    let mut r = tr.repo();
    let id = some_commit(&mut r);

    r.set_head(&id).unwrap();
    r.set_current_branch("other").unwrap();

    let r = tr.repo();
    assert_eq!(r.head().unwrap(), id);
    assert_eq!(r.current_branch().unwrap(), "other");
}

#[test]
fn nested_remote_tracking_branches() {
    let tr = TempRepo::new();
    let mut r = tr.repo();
    let master = r.head().unwrap();
    let id = some_commit(&mut r);

    r.set_branch("origin/master", &id).unwrap();
    r.set_branch("other", &master).unwrap();

    assert!(tr.gitlet_dir().join("refs/branches/origin/master").is_file());

    let branches = r.branches().unwrap();
    assert_eq!(
        branches.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["master", "origin/master", "other"]
    );
    assert_eq!(r.branch("origin/master").unwrap(), Some(id));
    assert_eq!(r.branch("origin").unwrap(), None);

    r.remove_branch("origin/master").unwrap();
    assert_eq!(r.branch("origin/master").unwrap(), None);
    assert_eq!(r.branches().unwrap().len(), 2);
}

#[test]
fn refs_are_replaced_whole() {
    let tr = TempRepo::new();
    let mut r = tr.repo();
    let id = some_commit(&mut r);
    r.set_branch("master", &id).unwrap();

    let text = fs::read_to_string(tr.gitlet_dir().join("refs/branches/master")).unwrap();
    assert_eq!(text, id.to_string());

    // No temp files are left behind.
    let names: Vec<_> = fs::read_dir(tr.gitlet_dir().join("refs/branches"))
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names.len(), 1);
}

#[test]
fn corrupt_reference() {
    let tr = TempRepo::new();
    fs::write(tr.gitlet_dir().join("HEAD"), "not an id").unwrap();

    match tr.repo().head().unwrap_err() {
        Error::CorruptObject(_) => (),
        err => panic!("Unexpected error {:?}", err),
    }
}

#[test]
fn branch_names_stay_inside_the_reference_store() {
    let tr = TempRepo::new();
    let mut r = tr.repo();
    let head = r.head().unwrap();

    match r.set_branch("../../../escaped", &head).unwrap_err() {
        Error::InvalidBranchName => (),
        err => panic!("Unexpected error {:?}", err),
    }
    assert!(!tr.path().join("escaped").exists());

    // Lookups that would resolve outside refs/branches find nothing.
    assert_eq!(r.branch("../../HEAD").unwrap(), None);
    assert_eq!(r.branch("").unwrap(), None);

    match r.set_current_branch("../HEAD").unwrap_err() {
        Error::InvalidBranchName => (),
        err => panic!("Unexpected error {:?}", err),
    }
    assert_eq!(r.current_branch().unwrap(), "master");
}
