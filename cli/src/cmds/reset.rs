use clap::{App, Arg, ArgMatches, SubCommand};
use gitlet_core::worktree;

use super::operand;
use crate::{find_repo, Result};

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("reset")
        .about("Check out a commit and move the current branch to it")
        .arg(Arg::with_name("commit").required(true).help("The (possibly abbreviated) commit ID"))
}

pub(crate) fn run(app: &mut crate::App, matches: &ArgMatches) -> Result<()> {
    let commit = operand(matches, "commit")?;
    let (mut repo, _lock) = find_repo::open_locked(&app.work_dir)?;
    worktree::reset(&mut repo, commit)?;
    Ok(())
}
