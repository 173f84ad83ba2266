#![deny(warnings)]

use std::io::Write;
use std::path::PathBuf;

#[cfg(test)]
use std::{ffi::OsString, path::Path};

use crate::{cmds, Result};

use clap::{crate_version, AppSettings, ArgMatches, ErrorKind};
use thiserror::Error;

pub(crate) fn clap_app<'a, 'b>() -> clap::App<'a, 'b> {
    let app = clap::App::new("gitlet")
        .version(crate_version!())
        .setting(AppSettings::SubcommandRequired)
        .setting(AppSettings::AllowExternalSubcommands)
        .setting(AppSettings::VersionlessSubcommands)
        .setting(AppSettings::DisableHelpSubcommand);

    cmds::add_subcommands(app)
}

/// Command-line mistakes, reported the same way as any other failure.
#[derive(Debug, Error)]
pub(crate) enum UsageError {
    #[error("Please enter a command.")]
    NoCommand,

    #[error("No command with that name exists.")]
    NoSuchCommand,

    #[error("Incorrect operands.")]
    IncorrectOperands,
}

impl UsageError {
    /// Translates a clap parse failure. Returns `None` for `--help` and
    /// `--version`, which clap should be allowed to print itself.
    pub fn from_clap(err: &clap::Error) -> Option<UsageError> {
        match err.kind {
            ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => None,
            ErrorKind::MissingSubcommand | ErrorKind::MissingArgumentOrSubcommand => {
                Some(UsageError::NoCommand)
            }
            ErrorKind::InvalidSubcommand | ErrorKind::UnrecognizedSubcommand => {
                Some(UsageError::NoSuchCommand)
            }
            _ => Some(UsageError::IncorrectOperands),
        }
    }
}

pub(crate) struct App<'a> {
    pub arg_matches: ArgMatches<'a>,
    pub work_dir: PathBuf,
    pub stdout: &'a mut dyn Write,
}

impl<'a> App<'a> {
    pub fn run(&mut self) -> Result<()> {
        cmds::dispatch(self)
    }

    #[cfg(test)]
    pub fn run_with_args<I, T>(work_dir: &Path, args: I) -> Result<Vec<u8>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut args: Vec<OsString> = args.into_iter().map(|x| x.into()).collect();
        args.insert(0, OsString::from("gitlet"));

        let arg_matches = match clap_app().get_matches_from_safe(args) {
            Ok(m) => m,
            Err(err) => match UsageError::from_clap(&err) {
                Some(usage) => return Err(usage.into()),
                None => return Err(err.into()),
            },
        };

        let mut stdout = Vec::new();

        App {
            arg_matches,
            work_dir: work_dir.to_path_buf(),
            stdout: &mut stdout,
        }
        .run()?;

        Ok(stdout)
    }
}

impl<'a> Write for App<'a> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.stdout.write(buf)
    }

    #[cfg(not(tarpaulin_include))]
    fn flush(&mut self) -> std::io::Result<()> {
        self.stdout.flush()
    }
}
