use clap::{App, Arg, ArgMatches, SubCommand};
use gitlet_core::worktree;

use crate::{app::UsageError, find_repo, Result};

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("checkout")
        .about("Switch branches or restore a file")
        .usage(
            "gitlet checkout -- <file>\n    \
             gitlet checkout <commit> -- <file>\n    \
             gitlet checkout <branch>",
        )
        .arg(Arg::with_name("target").help("A branch name, or the commit to restore <file> from"))
        .arg(
            Arg::with_name("file")
                .last(true)
                .help("The file to restore"),
        )
}

pub(crate) fn run(app: &mut crate::App, matches: &ArgMatches) -> Result<()> {
    let target = matches.value_of("target");
    let file = matches.value_of("file");

    let (mut repo, _lock) = find_repo::open_locked(&app.work_dir)?;

    match (target, file) {
        (None, Some(file)) => worktree::checkout_head_file(&mut repo, file)?,
        (Some(commit), Some(file)) => worktree::checkout_commit_file(&mut repo, commit, file)?,
        (Some(branch), None) => worktree::checkout_branch(&mut repo, branch)?,
        (None, None) => return Err(UsageError::IncorrectOperands.into()),
    }

    Ok(())
}
