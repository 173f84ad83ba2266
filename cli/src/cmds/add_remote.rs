use clap::{App, Arg, ArgMatches, SubCommand};

use super::operand;
use crate::{find_repo, Result};

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("add-remote")
        .about("Record another repository under a name")
        .arg(Arg::with_name("name").required(true).help("The name for the remote"))
        .arg(
            Arg::with_name("path")
                .required(true)
                .help("Path to the remote's .gitlet directory, using / as separator"),
        )
}

pub(crate) fn run(app: &mut crate::App, matches: &ArgMatches) -> Result<()> {
    let name = operand(matches, "name")?;
    let path = operand(matches, "path")?;
    let (repo, _lock) = find_repo::open_locked(&app.work_dir)?;
    repo.add_remote(name, path)?;
    Ok(())
}
