use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::OnDiskRepo;

/// A `TempRepo` creates a temporary gitlet repository with an empty
/// working directory. It is used by unit and integration tests.
///
/// Because this struct is intended for testing, its functions
/// panic instead of returning Result structs.
#[derive(Default)]
pub struct TempRepo {
    #[allow(dead_code)] // tempdir is only used for RAII
    tempdir: Option<tempfile::TempDir>,
    path: PathBuf,
}

impl TempRepo {
    // Create a new repo in a temporary directory.
    // This directory will be deleted when the struct is dropped.
    pub fn new() -> TempRepo {
        let tempdir = tempfile::tempdir().unwrap();
        let path: PathBuf = tempdir.path().to_path_buf();
        OnDiskRepo::init(&path).unwrap();

        TempRepo {
            tempdir: Some(tempdir),
            path,
        }
    }

    // Create a new repo at the specified location.
    // WARNING: This will erase any content already at that path.
    // Use this only when you need to manually inspect the results
    // of the test run.
    pub fn new_at_path<P: Into<PathBuf>>(p: P) -> TempRepo {
        let path = p.into();
        fs::remove_dir_all(&path).unwrap_or(());
        fs::create_dir_all(&path).unwrap();
        OnDiskRepo::init(&path).unwrap();

        TempRepo {
            tempdir: None,
            path,
        }
    }

    // Return the path for this repo's root (working directory).
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    // Path of this repo's `.gitlet` directory.
    pub fn gitlet_dir(&self) -> PathBuf {
        self.path.join(crate::GITLET_DIR)
    }

    // Open the repo.
    pub fn repo(&self) -> OnDiskRepo {
        OnDiskRepo::new(&self.path).unwrap()
    }

    // Write a file in the working directory and return self for chaining.
    pub fn write_file(&mut self, name: &str, content: &str) -> &mut TempRepo {
        fs::write(self.path.join(name), content).unwrap();
        self
    }

    // Read a working file, or None if it doesn't exist.
    pub fn read_file(&self, name: &str) -> Option<String> {
        fs::read_to_string(self.path.join(name)).ok()
    }
}
