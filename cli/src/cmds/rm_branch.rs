use clap::{App, Arg, ArgMatches, SubCommand};
use gitlet_core::branch;

use super::operand;
use crate::{find_repo, Result};

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("rm-branch")
        .about("Delete a branch pointer (its commits are kept)")
        .arg(Arg::with_name("name").required(true).help("The branch to delete"))
}

pub(crate) fn run(app: &mut crate::App, matches: &ArgMatches) -> Result<()> {
    let name = operand(matches, "name")?;
    let (mut repo, _lock) = find_repo::open_locked(&app.work_dir)?;
    branch::delete(&mut repo, name)?;
    Ok(())
}
