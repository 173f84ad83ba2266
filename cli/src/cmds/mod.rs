use crate::{app::UsageError, App, Result};

mod add;
mod add_remote;
mod branch;
mod checkout;
mod commit;
mod fetch;
mod find;
mod global_log;
mod init;
mod log;
mod merge;
mod pull;
mod push;
mod reset;
mod rm;
mod rm_branch;
mod rm_remote;
mod status;

pub(crate) fn add_subcommands<'a, 'b>(app: clap::App<'a, 'b>) -> clap::App<'a, 'b> {
    app.subcommand(add::subcommand())
        .subcommand(add_remote::subcommand())
        .subcommand(branch::subcommand())
        .subcommand(checkout::subcommand())
        .subcommand(commit::subcommand())
        .subcommand(fetch::subcommand())
        .subcommand(find::subcommand())
        .subcommand(global_log::subcommand())
        .subcommand(init::subcommand())
        .subcommand(log::subcommand())
        .subcommand(merge::subcommand())
        .subcommand(pull::subcommand())
        .subcommand(push::subcommand())
        .subcommand(reset::subcommand())
        .subcommand(rm::subcommand())
        .subcommand(rm_branch::subcommand())
        .subcommand(rm_remote::subcommand())
        .subcommand(status::subcommand())
}

pub(crate) fn dispatch(app: &mut App) -> Result<()> {
    let matches = app.arg_matches.clone();
    // ^^ Ugh. Need an independent copy of matches so we can still pass
    // the App struct through to subcommand imps.

    match matches.subcommand() {
        ("add", Some(m)) => add::run(app, &m),
        ("add-remote", Some(m)) => add_remote::run(app, &m),
        ("branch", Some(m)) => branch::run(app, &m),
        ("checkout", Some(m)) => checkout::run(app, &m),
        ("commit", Some(m)) => commit::run(app, &m),
        ("fetch", Some(m)) => fetch::run(app, &m),
        ("find", Some(m)) => find::run(app, &m),
        ("global-log", Some(m)) => global_log::run(app, &m),
        ("init", Some(m)) => init::run(app, &m),
        ("log", Some(m)) => log::run(app, &m),
        ("merge", Some(m)) => merge::run(app, &m),
        ("pull", Some(m)) => pull::run(app, &m),
        ("push", Some(m)) => push::run(app, &m),
        ("reset", Some(m)) => reset::run(app, &m),
        ("rm", Some(m)) => rm::run(app, &m),
        ("rm-branch", Some(m)) => rm_branch::run(app, &m),
        ("rm-remote", Some(m)) => rm_remote::run(app, &m),
        ("status", Some(m)) => status::run(app, &m),
        // Anything else arrives here as an external subcommand.
        _ => Err(UsageError::NoSuchCommand.into()),
    }
}

// Value of a required positional argument. clap has already rejected
// the command line if it is missing.
fn operand<'a>(matches: &'a clap::ArgMatches, name: &str) -> Result<&'a str> {
    matches
        .value_of(name)
        .ok_or_else(|| UsageError::IncorrectOperands.into())
}
