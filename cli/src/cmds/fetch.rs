use clap::{App, Arg, ArgMatches, SubCommand};
use gitlet_core::sync;

use super::operand;
use crate::{find_repo, Result};

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("fetch")
        .about("Copy a remote branch's history into <remote>/<branch>")
        .arg(Arg::with_name("remote").required(true).help("The remote to fetch from"))
        .arg(Arg::with_name("branch").required(true).help("The remote branch to fetch"))
}

pub(crate) fn run(app: &mut crate::App, matches: &ArgMatches) -> Result<()> {
    let remote_name = operand(matches, "remote")?;
    let branch = operand(matches, "branch")?;

    let (mut repo, _lock) = find_repo::open_locked(&app.work_dir)?;
    let remote = repo.open_remote(remote_name)?;
    sync::fetch(&mut repo, &remote, remote_name, branch)?;
    Ok(())
}
