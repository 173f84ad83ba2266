use clap::{App, Arg, ArgMatches, SubCommand};

use super::operand;
use crate::{find_repo, Result};

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("rm-remote")
        .about("Forget a remote")
        .arg(Arg::with_name("name").required(true).help("The remote to forget"))
}

pub(crate) fn run(app: &mut crate::App, matches: &ArgMatches) -> Result<()> {
    let name = operand(matches, "name")?;
    let (repo, _lock) = find_repo::open_locked(&app.work_dir)?;
    repo.remove_remote(name)?;
    Ok(())
}
