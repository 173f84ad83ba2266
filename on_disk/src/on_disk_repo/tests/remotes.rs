use std::path::PathBuf;

use super::super::*;

use crate::TempRepo;

#[test]
fn add_and_remove() {
    let tr = TempRepo::new();
    let r = tr.repo();

    r.add_remote("origin", "../other/.gitlet").unwrap();
    let remotes = r.remotes().unwrap();
    assert_eq!(remotes.len(), 1);
    assert_eq!(
        remotes["origin"],
        ["..", "other", ".gitlet"].iter().collect::<PathBuf>()
    );

    match r.add_remote("origin", "elsewhere/.gitlet").unwrap_err() {
        Error::RemoteExists => (),
        err => panic!("Unexpected error {:?}", err),
    }

    r.remove_remote("origin").unwrap();
    assert!(r.remotes().unwrap().is_empty());

    match r.remove_remote("origin").unwrap_err() {
        Error::RemoteDoesntExist => (),
        err => panic!("Unexpected error {:?}", err),
    }
}

#[test]
fn open_remote_by_relative_path() {
    let parent = tempfile::tempdir().unwrap();
    let local = TempRepo::new_at_path(parent.path().join("local"));
    let remote = TempRepo::new_at_path(parent.path().join("remote"));

    let r = local.repo();
    r.add_remote("origin", "../remote/.gitlet").unwrap();

    let opened = r.open_remote("origin").unwrap();
    assert_eq!(
        opened.work_dir().canonicalize().unwrap(),
        remote.path().canonicalize().unwrap()
    );
    assert_eq!(opened.head().unwrap(), remote.repo().head().unwrap());
}

#[test]
fn remote_dir_not_found() {
    let tr = TempRepo::new();
    let r = tr.repo();

    match r.open_remote("origin").unwrap_err() {
        Error::RemoteDirNotFound => (),
        err => panic!("Unexpected error {:?}", err),
    }

    r.add_remote("origin", "../does-not-exist/.gitlet").unwrap();
    match r.open_remote("origin").unwrap_err() {
        Error::RemoteDirNotFound => (),
        err => panic!("Unexpected error {:?}", err),
    }
}

#[test]
fn remote_names_stay_inside_the_remotes_directory() {
    let tr = TempRepo::new();
    let r = tr.repo();

    match r.add_remote("../escaped", "../other/.gitlet").unwrap_err() {
        Error::InvalidRemoteName => (),
        err => panic!("Unexpected error {:?}", err),
    }
    assert!(!tr.gitlet_dir().join("escaped").exists());

    match r.remove_remote("../HEAD").unwrap_err() {
        Error::RemoteDoesntExist => (),
        err => panic!("Unexpected error {:?}", err),
    }
    assert!(tr.gitlet_dir().join("HEAD").is_file());
}
