use std::io::Write;

use clap::{App, Arg, ArgMatches, SubCommand};
use gitlet_core::merge;

use super::operand;
use crate::{find_repo, Result};

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("merge")
        .about("Merge another branch into the current branch")
        .arg(Arg::with_name("branch").required(true).help("The branch to merge"))
}

pub(crate) fn run(app: &mut crate::App, matches: &ArgMatches) -> Result<()> {
    let branch = operand(matches, "branch")?;
    let (mut repo, _lock) = find_repo::open_locked(&app.work_dir)?;

    let outcome = merge::merge(&mut repo, branch)?;
    if let Some(message) = outcome.message() {
        writeln!(app, "{}", message)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::App;

    use gitlet_on_disk::TempRepo;

    fn commit_file(tr: &mut TempRepo, name: &str, content: &str, message: &str) {
        tr.write_file(name, content);
        App::run_with_args(tr.path(), vec!["add", name]).unwrap();
        App::run_with_args(tr.path(), vec!["commit", message]).unwrap();
    }

    #[test]
    fn conflict() {
        let mut tr = TempRepo::new();
        commit_file(&mut tr, "f.txt", "base\n", "add f");
        App::run_with_args(tr.path(), vec!["branch", "other"]).unwrap();
        commit_file(&mut tr, "f.txt", "x\n", "master edit");
        App::run_with_args(tr.path(), vec!["checkout", "other"]).unwrap();
        commit_file(&mut tr, "f.txt", "y\n", "other edit");
        App::run_with_args(tr.path(), vec!["checkout", "master"]).unwrap();

        let stdout = App::run_with_args(tr.path(), vec!["merge", "other"]).unwrap();
        assert_eq!(stdout, b"Encountered a merge conflict.\n");
        assert_eq!(
            tr.read_file("f.txt").as_deref(),
            Some("<<<<<<< HEAD\nx\n=======\ny\n>>>>>>>\n")
        );

        let log = String::from_utf8(App::run_with_args(tr.path(), vec!["log"]).unwrap()).unwrap();
        assert!(log.starts_with("===\ncommit "));
        assert!(log.contains("\nMerge: "));
        assert!(log.contains("\nMerged other into master.\n"));
    }

    #[test]
    fn fast_forward_and_ancestor() {
        let mut tr = TempRepo::new();
        App::run_with_args(tr.path(), vec!["branch", "other"]).unwrap();
        commit_file(&mut tr, "f.txt", "a", "add f");

        let stdout = App::run_with_args(tr.path(), vec!["merge", "other"]).unwrap();
        assert_eq!(stdout, b"Given branch is an ancestor of the current branch.\n");

        App::run_with_args(tr.path(), vec!["checkout", "other"]).unwrap();
        let stdout = App::run_with_args(tr.path(), vec!["merge", "master"]).unwrap();
        assert_eq!(stdout, b"Current branch fast-forwarded.\n");
        assert_eq!(tr.read_file("f.txt").as_deref(), Some("a"));
    }

    #[test]
    fn preconditions() {
        let mut tr = TempRepo::new();

        let err = App::run_with_args(tr.path(), vec!["merge", "master"]).unwrap_err();
        assert_eq!(err.to_string(), "Cannot merge a branch with itself.");

        let err = App::run_with_args(tr.path(), vec!["merge", "nope"]).unwrap_err();
        assert_eq!(err.to_string(), "A branch with that name does not exist.");

        tr.write_file("f.txt", "a");
        App::run_with_args(tr.path(), vec!["add", "f.txt"]).unwrap();
        let err = App::run_with_args(tr.path(), vec!["merge", "master"]).unwrap_err();
        assert_eq!(err.to_string(), "You have uncommitted changes.");
    }
}
