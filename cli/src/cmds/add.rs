use clap::{App, Arg, ArgMatches, SubCommand};
use gitlet_core::index;

use super::operand;
use crate::{find_repo, Result};

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("add")
        .about("Stage a file for the next commit")
        .arg(Arg::with_name("file").required(true).help("The file to stage"))
}

pub(crate) fn run(app: &mut crate::App, matches: &ArgMatches) -> Result<()> {
    let file = operand(matches, "file")?;
    let (mut repo, _lock) = find_repo::open_locked(&app.work_dir)?;
    index::add(&mut repo, file)?;
    Ok(())
}
