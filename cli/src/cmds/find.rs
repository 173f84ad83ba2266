use std::io::Write;

use clap::{App, Arg, ArgMatches, SubCommand};
use gitlet_core::history;

use super::operand;
use crate::{find_repo, Result};

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("find")
        .about("Print the IDs of all commits with the given message")
        .arg(Arg::with_name("message").required(true).help("The exact commit message"))
}

pub(crate) fn run(app: &mut crate::App, matches: &ArgMatches) -> Result<()> {
    let message = operand(matches, "message")?;
    let (repo, _lock) = find_repo::open_locked(&app.work_dir)?;
    for id in history::find(&repo, message)? {
        writeln!(app, "{}", id)?;
    }
    Ok(())
}
