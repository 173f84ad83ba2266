use clap::{App, Arg, ArgMatches, SubCommand};
use gitlet_core::index;

use super::operand;
use crate::{find_repo, Result};

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("rm")
        .about("Unstage a file, or stage a tracked file for removal")
        .arg(Arg::with_name("file").required(true).help("The file to remove"))
}

pub(crate) fn run(app: &mut crate::App, matches: &ArgMatches) -> Result<()> {
    let file = operand(matches, "file")?;
    let (mut repo, _lock) = find_repo::open_locked(&app.work_dir)?;
    index::remove(&mut repo, file)?;
    Ok(())
}
