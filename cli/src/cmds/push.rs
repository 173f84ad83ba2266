use clap::{App, Arg, ArgMatches, SubCommand};
use gitlet_core::sync;
use tracing::info;

use super::operand;
use crate::{find_repo, Result};

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("push")
        .about("Send the current history to a remote branch")
        .arg(Arg::with_name("remote").required(true).help("The remote to push to"))
        .arg(Arg::with_name("branch").required(true).help("The remote branch to update"))
}

pub(crate) fn run(app: &mut crate::App, matches: &ArgMatches) -> Result<()> {
    let remote_name = operand(matches, "remote")?;
    let branch = operand(matches, "branch")?;

    let (repo, _lock) = find_repo::open_locked(&app.work_dir)?;
    let mut remote = repo.open_remote(remote_name)?;
    let _remote_lock = remote.lock()?;

    let sent = sync::push(&repo, &mut remote, branch)?;
    info!(remote = remote_name, branch, sent, "push complete");
    Ok(())
}
