//! This crate implements the core data model and porcelain for a gitlet
//! repository: content-addressed objects, the commit graph, the staging index,
//! the three-way merge engine, working tree reconciliation, and remote
//! synchronization.
//!
//! Storage is abstracted behind the [`Repo`](repo/trait.Repo.html) trait. Every
//! operation in this crate is written against that trait, so the same code runs
//! against an on-disk repository, an in-memory one, or two repositories at once
//! (as push and fetch do).

#![deny(warnings)]

pub mod branch;
pub mod graph;
pub mod history;
pub mod index;
pub mod merge;
pub mod names;
pub mod object;
pub mod repo;
pub mod status;
pub mod sync;
pub mod worktree;
