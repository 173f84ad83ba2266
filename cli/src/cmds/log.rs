use std::io::Write;

use clap::{App, ArgMatches, SubCommand};
use gitlet_core::history;

use crate::{find_repo, Result};

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("log").about("Show the current branch's history")
}

pub(crate) fn run(app: &mut crate::App, _matches: &ArgMatches) -> Result<()> {
    let (repo, _lock) = find_repo::open_locked(&app.work_dir)?;
    for (id, commit) in history::log(&repo)? {
        write!(app, "{}", history::format_entry(&id, &commit))?;
    }
    Ok(())
}
