use std::io::Write;

use clap::{App, Arg, ArgMatches, SubCommand};
use gitlet_core::sync;

use super::operand;
use crate::{find_repo, Result};

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("pull")
        .about("Fetch a remote branch and merge it into the current branch")
        .arg(Arg::with_name("remote").required(true).help("The remote to pull from"))
        .arg(Arg::with_name("branch").required(true).help("The remote branch to merge"))
}

pub(crate) fn run(app: &mut crate::App, matches: &ArgMatches) -> Result<()> {
    let remote_name = operand(matches, "remote")?;
    let branch = operand(matches, "branch")?;

    let (mut repo, _lock) = find_repo::open_locked(&app.work_dir)?;
    let remote = repo.open_remote(remote_name)?;

    let outcome = sync::pull(&mut repo, &remote, remote_name, branch)?;
    if let Some(message) = outcome.message() {
        writeln!(app, "{}", message)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::App;

    use gitlet_on_disk::TempRepo;

    #[test]
    fn pull_fast_forwards() {
        let parent = tempfile::tempdir().unwrap();
        let local = TempRepo::new_at_path(parent.path().join("local"));
        let mut remote = TempRepo::new_at_path(parent.path().join("remote"));

        remote.write_file("wug.txt", "remote");
        App::run_with_args(remote.path(), vec!["add", "wug.txt"]).unwrap();
        App::run_with_args(remote.path(), vec!["commit", "remote work"]).unwrap();

        App::run_with_args(local.path(), vec!["add-remote", "origin", "../remote/.gitlet"]).unwrap();
        let stdout = App::run_with_args(local.path(), vec!["pull", "origin", "master"]).unwrap();
        assert_eq!(stdout, b"Current branch fast-forwarded.\n");
        assert_eq!(local.read_file("wug.txt").as_deref(), Some("remote"));
    }
}
