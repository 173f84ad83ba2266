use clap::{App, ArgMatches, SubCommand};
use gitlet_on_disk::OnDiskRepo;

use crate::Result;

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("init").about("Create an empty gitlet repository in the current directory")
}

pub(crate) fn run(app: &mut crate::App, _matches: &ArgMatches) -> Result<()> {
    OnDiskRepo::init(&app.work_dir)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::App;

    use gitlet_on_disk::TempRepo;

    #[test]
    fn matches_temp_repo() {
        let tr = TempRepo::new();

        let dir = tempfile::tempdir().unwrap();
        let stdout = App::run_with_args(dir.path(), vec!["init"]).unwrap();

        assert_eq!(stdout, b"");
        assert!(!dir_diff::is_different(tr.path(), dir.path()).unwrap());
    }

    #[test]
    fn error_already_initialized() {
        let tr = TempRepo::new();
        let err = App::run_with_args(tr.path(), vec!["init"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "A Gitlet version-control system already exists in the current directory."
        );
    }

    #[test]
    fn error_too_many_args() {
        let dir = tempfile::tempdir().unwrap();
        let err = App::run_with_args(dir.path(), vec!["init", "here"]).unwrap_err();
        assert_eq!(err.to_string(), "Incorrect operands.");
    }
}
