use std::io::Write;

use clap::{App, ArgMatches, SubCommand};
use gitlet_core::status;

use crate::{find_repo, Result};

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("status").about("Show branches, staged files, and working directory changes")
}

pub(crate) fn run(app: &mut crate::App, _matches: &ArgMatches) -> Result<()> {
    let (repo, _lock) = find_repo::open_locked(&app.work_dir)?;
    write!(app, "{}", status::status(&repo)?)?;
    Ok(())
}
