use clap::{App, Arg, ArgMatches, SubCommand};
use gitlet_core::history;

use crate::{find_repo, Result};

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("commit")
        .about("Record the staged changes")
        .arg(Arg::with_name("message").help("The commit message"))
}

pub(crate) fn run(app: &mut crate::App, matches: &ArgMatches) -> Result<()> {
    // A missing message is reported by `history::commit`, not as a usage error.
    let message = matches.value_of("message").unwrap_or("");
    let (mut repo, _lock) = find_repo::open_locked(&app.work_dir)?;
    history::commit(&mut repo, message)?;
    Ok(())
}
