#![deny(warnings)]

use std::{
    env,
    error::Error,
    io::{self, Write},
};

use tracing_subscriber::EnvFilter;

mod app;
pub(crate) use app::App;

mod cmds;
mod find_repo;

pub(crate) type Result<T> = std::result::Result<T, Box<dyn Error>>;

/// Diagnostics go to stderr, filtered by `GITLET_LOG` (default `warn`), so
/// they never mix with command output.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("GITLET_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

#[allow(unused_must_use)]
#[cfg(not(tarpaulin_include))]
fn main() {
    // The actual gitlet executable (main fn) doesn't seem to be reachable via Tarpaulin.
    // We put as little as possible into this function so we can reach the rest via
    // other test coverage.

    init_tracing();

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    let arg_matches = match app::clap_app().get_matches_safe() {
        Ok(m) => m,
        Err(err) => match app::UsageError::from_clap(&err) {
            Some(usage) => {
                writeln!(stdout, "{}", usage);
                return;
            }
            None => err.exit(),
        },
    };

    let work_dir = match env::current_dir() {
        Ok(dir) => dir,
        Err(err) => {
            writeln!(stdout, "{}", err);
            return;
        }
    };

    let mut app = App {
        arg_matches,
        work_dir,
        stdout: &mut stdout,
    };

    let r = app.run();

    // Every outcome, failures included, is reported on stdout and the exit
    // status is always 0.
    if let Err(err) = r {
        writeln!(app, "{}", err);
    }

    app.flush();
    // Intentionally ignoring the result of this flush.
}
