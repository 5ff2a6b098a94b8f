//! `composer init` invocation
//!
//! The initializer writes the package manifest. Its output is not parsed; only the exit
//! status is observed, and a failure never undoes or fails the scaffolding.

use crate::package::PackageName;
use std::ffi::OsString;
use std::fmt;
use std::future::Future;
use std::io;
use std::path::Path;
use std::process::ExitStatus;
use tokio::process::Command as TokioCommand;

/// Runs an external program to completion
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[OsString])
        -> impl Future<Output = io::Result<ExitStatus>>;
}

/// Runs commands as child processes sharing this terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    async fn run(&self, program: &str, args: &[OsString]) -> io::Result<ExitStatus> {
        TokioCommand::new(program).args(args).status().await
    }
}

/// What happened when the initializer ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitializerOutcome {
    Completed,
    /// Exited with a non-zero status; `None` when killed by a signal
    Failed { code: Option<i32> },
    /// Could not be started at all
    Unavailable { reason: String },
}

impl InitializerOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, InitializerOutcome::Completed)
    }
}

impl fmt::Display for InitializerOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitializerOutcome::Completed => write!(f, "completed"),
            InitializerOutcome::Failed { code: Some(code) } => {
                write!(f, "exited with code {}", code)
            }
            InitializerOutcome::Failed { code: None } => write!(f, "terminated by signal"),
            InitializerOutcome::Unavailable { reason } => write!(f, "not run: {}", reason),
        }
    }
}

/// A single initializer command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Initializer {
    program: String,
    args: Vec<OsString>,
}

impl Initializer {
    /// `<program> init --name <name> --working-dir <target>`
    pub fn new(program: impl Into<String>, name: &PackageName, target_dir: &Path) -> Self {
        Self {
            program: program.into(),
            args: vec![
                "init".into(),
                "--name".into(),
                name.as_str().into(),
                "--working-dir".into(),
                target_dir.as_os_str().to_os_string(),
            ],
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// The command as the user would type it, for display only
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().map(|arg| arg.to_string_lossy().into_owned()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run the initializer and wait for it to exit
    pub async fn run<R: CommandRunner>(&self, runner: &R) -> InitializerOutcome {
        match runner.run(&self.program, &self.args).await {
            Ok(status) if status.success() => InitializerOutcome::Completed,
            Ok(status) => InitializerOutcome::Failed {
                code: status.code(),
            },
            Err(e) => InitializerOutcome::Unavailable {
                reason: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;

    /// Records invocations and replays a canned result
    struct FakeRunner {
        calls: RefCell<Vec<(String, Vec<OsString>)>>,
        result: fn() -> io::Result<ExitStatus>,
    }

    impl FakeRunner {
        fn new(result: fn() -> io::Result<ExitStatus>) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                result,
            }
        }
    }

    impl CommandRunner for FakeRunner {
        async fn run(&self, program: &str, args: &[OsString]) -> io::Result<ExitStatus> {
            self.calls
                .borrow_mut()
                .push((program.to_string(), args.to_vec()));
            (self.result)()
        }
    }

    #[cfg(unix)]
    fn exit_status(code: i32) -> ExitStatus {
        use std::os::unix::process::ExitStatusExt;
        ExitStatus::from_raw(code << 8)
    }

    fn initializer() -> Initializer {
        let name = PackageName::parse("acme/widget").unwrap();
        Initializer::new("composer", &name, &PathBuf::from("out/acme-widget"))
    }

    #[test]
    fn test_command_line() {
        let init = initializer();
        assert_eq!(init.program(), "composer");
        let args: Vec<_> = init.args().iter().map(|a| a.to_str().unwrap()).collect();
        assert_eq!(
            args,
            vec!["init", "--name", "acme/widget", "--working-dir", "out/acme-widget"]
        );
        assert_eq!(
            init.command_line(),
            "composer init --name acme/widget --working-dir out/acme-widget"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_working_dir_keeps_non_utf8_bytes() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let name = PackageName::parse("acme/widget").unwrap();
        let dir = Path::new(OsStr::from_bytes(b"/tmp/caf\xe9/acme-widget"));
        let init = Initializer::new("composer", &name, dir);

        assert_eq!(Path::new(&init.args()[4]), dir);
        assert_eq!(init.args()[4].as_bytes(), b"/tmp/caf\xe9/acme-widget");
        assert!(init.command_line().contains("--working-dir /tmp/caf"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_success() {
        let runner = FakeRunner::new(|| Ok(exit_status(0)));
        let outcome = initializer().run(&runner).await;

        assert_eq!(outcome, InitializerOutcome::Completed);
        let calls = runner.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "composer");
        assert_eq!(calls[0].1[2], "acme/widget");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_nonzero_exit() {
        let runner = FakeRunner::new(|| Ok(exit_status(2)));
        let outcome = initializer().run(&runner).await;

        assert_eq!(outcome, InitializerOutcome::Failed { code: Some(2) });
        assert!(!outcome.is_success());
        assert_eq!(outcome.to_string(), "exited with code 2");
    }

    #[tokio::test]
    async fn test_run_spawn_failure() {
        let runner = FakeRunner::new(|| Err(io::Error::new(io::ErrorKind::NotFound, "no such file")));
        let outcome = initializer().run(&runner).await;

        assert!(matches!(outcome, InitializerOutcome::Unavailable { .. }));
        assert!(outcome.to_string().contains("no such file"));
    }

    #[tokio::test]
    async fn test_system_runner_missing_binary() {
        let name = PackageName::parse("acme/widget").unwrap();
        let init = Initializer::new(
            "package-builder-definitely-missing-tool",
            &name,
            &PathBuf::from("."),
        );
        let outcome = init.run(&SystemRunner).await;
        assert!(matches!(outcome, InitializerOutcome::Unavailable { .. }));
    }
}
