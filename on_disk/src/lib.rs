//! This crate provides a gitlet repository that stores content on the local file system.
//!
//! Repository metadata lives in a `.gitlet` directory inside the working
//! directory; see `OnDiskRepo` for the layout. Besides the `Repo`
//! implementation itself, this crate owns the pieces that only make sense
//! on disk: the configuration file, the repository lock, and remote records.

#![deny(warnings)]

mod config;
pub use config::{Config, CoreConfig, InitConfig, FORMAT_VERSION};

mod lock;
pub use lock::RepoLock;

mod on_disk_repo;
pub use on_disk_repo::{OnDiskRepo, GITLET_DIR};

mod temp_repo;
pub use temp_repo::TempRepo;
