//! Walks the commit graph: ancestry, split points, and the set of commits one
//! history has that another lacks.
//!
//! All walks are iterative (an explicit work list plus a visited set keyed by
//! commit ID), so long histories don't grow the call stack.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::trace;

use crate::object::Id;
use crate::repo::{Repo, Result};

/// Every ancestor of a commit (the commit itself included) together with its
/// distance, in parent links, from that commit.
///
/// The walk is breadth-first, so when an ancestor is reachable along several
/// paths through merge commits, the recorded distance is the shortest one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ancestry {
    distances: HashMap<Id, usize>,
    order: Vec<Id>,
}

impl Ancestry {
    pub fn contains(&self, id: &Id) -> bool {
        self.distances.contains_key(id)
    }

    /// Distance from the starting commit, or `None` if `id` isn't an ancestor.
    pub fn distance(&self, id: &Id) -> Option<usize> {
        self.distances.get(id).copied()
    }

    /// Ancestor IDs in the order they were reached (nearest first).
    pub fn ids(&self) -> &[Id] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Collects `start` and all of its ancestors, following first and second parents.
pub fn ancestors<R: Repo + ?Sized>(repo: &R, start: &Id) -> Result<Ancestry> {
    let mut ancestry = Ancestry::default();
    let mut queue = VecDeque::new();

    ancestry.distances.insert(*start, 0);
    ancestry.order.push(*start);
    queue.push_back((*start, 0));

    while let Some((id, distance)) = queue.pop_front() {
        let commit = repo.commit(&id)?;
        for parent in commit.parents() {
            if !ancestry.distances.contains_key(parent) {
                ancestry.distances.insert(*parent, distance + 1);
                ancestry.order.push(*parent);
                queue.push_back((*parent, distance + 1));
            }
        }
    }

    trace!(start = %start, count = ancestry.len(), "walked ancestors");
    Ok(ancestry)
}

/// Finds the merge base of `a` and `b`: the common ancestor nearest to `a`.
///
/// Ties on distance from `a` go to the candidate nearest to `b`, then to the
/// smaller ID. Returns `None` only if the two histories are unrelated.
pub fn split_point<R: Repo + ?Sized>(repo: &R, a: &Id, b: &Id) -> Result<Option<Id>> {
    let from_a = ancestors(repo, a)?;
    let from_b = ancestors(repo, b)?;

    let split = from_a
        .ids()
        .iter()
        .filter_map(|id| {
            let da = from_a.distance(id)?;
            let db = from_b.distance(id)?;
            Some((da, db, *id))
        })
        .min()
        .map(|(_, _, id)| id);

    trace!(a = %a, b = %b, split = ?split.map(|id| id.to_string()), "split point");
    Ok(split)
}

/// Returns true if `candidate` is `commit` or one of its ancestors.
pub fn is_ancestor<R: Repo + ?Sized>(repo: &R, candidate: &Id, commit: &Id) -> Result<bool> {
    let mut seen = HashSet::new();
    let mut work = vec![*commit];

    while let Some(id) = work.pop() {
        if id == *candidate {
            return Ok(true);
        }
        if seen.insert(id) {
            work.extend(repo.commit(&id)?.parents().copied());
        }
    }

    Ok(false)
}

/// Lists the commits reachable from `tip` that are not reachable from `base`
/// (`base` may be `None` for "nothing"), parents before children.
///
/// This is exactly the set of commits a repository positioned at `base` is
/// missing in order to hold `tip`'s history.
pub fn missing_commits<R: Repo + ?Sized>(repo: &R, tip: &Id, base: Option<&Id>) -> Result<Vec<Id>> {
    let have = match base {
        Some(base) => ancestors(repo, base)?,
        None => Ancestry::default(),
    };

    let from_tip = ancestors(repo, tip)?;
    let mut missing: Vec<(usize, Id)> = from_tip
        .ids()
        .iter()
        .filter(|id| !have.contains(id))
        .filter_map(|id| from_tip.distance(id).map(|d| (d, *id)))
        .collect();

    // Stable starting order; the topological pass puts parents first.
    missing.sort();
    let ids: Vec<Id> = missing.into_iter().map(|(_, id)| id).collect();
    topological(repo, ids)
}

/// Orders `ids` so that every commit comes after those of its parents that are
/// also in `ids`.
fn topological<R: Repo + ?Sized>(repo: &R, ids: Vec<Id>) -> Result<Vec<Id>> {
    let members: HashSet<Id> = ids.iter().copied().collect();
    let mut placed: HashSet<Id> = HashSet::new();
    let mut ordered = Vec::with_capacity(ids.len());

    for id in ids {
        // Depth-first over unplaced parents, with an explicit stack.
        let mut stack = vec![(id, false)];
        while let Some((current, expanded)) = stack.pop() {
            if placed.contains(&current) {
                continue;
            }
            if expanded {
                placed.insert(current);
                ordered.push(current);
                continue;
            }
            stack.push((current, true));
            for parent in repo.commit(&current)?.parents() {
                if members.contains(parent) && !placed.contains(parent) {
                    stack.push((*parent, false));
                }
            }
        }
    }

    Ok(ordered)
}
