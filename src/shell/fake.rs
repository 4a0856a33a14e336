//! Scripted process invoker for tests.
//!
//! `FakeInvoker` implements [`ProcessInvoker`] without spawning anything.
//! Responses are keyed by program name; every call is recorded for later
//! assertion.
//!
//! # Example
//!
//! ```
//! use devdoctor::shell::{FakeInvoker, ProcessInvoker};
//!
//! let invoker = FakeInvoker::new();
//! invoker.set_output("node", 0, "v20.11.0\n", "");
//!
//! let out = invoker.exec(&["node", "-v"], None).unwrap();
//! assert_eq!(out.stdout.trim(), "v20.11.0");
//! assert!(invoker.exec(&["docker", "--version"], None).is_err());
//! assert_eq!(invoker.calls().len(), 2);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use super::command::{ExecError, ExecOutput, ProcessInvoker, DEFAULT_TIMEOUT};

#[derive(Debug, Clone)]
enum FakeResponse {
    Output(ExecOutput),
    NotFound,
    LaunchFailure(String),
    Timeout,
}

/// Process invoker with canned responses.
///
/// Programs without a configured response behave as if not installed.
#[derive(Debug, Default)]
pub struct FakeInvoker {
    responses: RefCell<HashMap<String, FakeResponse>>,
    calls: RefCell<Vec<Vec<String>>>,
    cwds: RefCell<Vec<Option<PathBuf>>>,
}

impl FakeInvoker {
    /// Create an invoker where every program is missing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond to `program` with an exit code and captured output.
    pub fn set_output(&self, program: &str, exit_code: i32, stdout: &str, stderr: &str) {
        self.responses.borrow_mut().insert(
            program.to_string(),
            FakeResponse::Output(ExecOutput::new(exit_code, stdout, stderr)),
        );
    }

    /// Make `program` fail to launch as not found.
    pub fn set_not_found(&self, program: &str) {
        self.responses
            .borrow_mut()
            .insert(program.to_string(), FakeResponse::NotFound);
    }

    /// Make `program` fail to launch with a message.
    pub fn set_launch_failure(&self, program: &str, message: &str) {
        self.responses.borrow_mut().insert(
            program.to_string(),
            FakeResponse::LaunchFailure(message.to_string()),
        );
    }

    /// Make `program` time out.
    pub fn set_timeout(&self, program: &str) {
        self.responses
            .borrow_mut()
            .insert(program.to_string(), FakeResponse::Timeout);
    }

    /// Every argv passed to `exec`, in call order.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    /// Every argv with the working directory it was run in, in call order.
    pub fn calls_with_cwd(&self) -> Vec<(Vec<String>, Option<PathBuf>)> {
        self.calls
            .borrow()
            .iter()
            .cloned()
            .zip(self.cwds.borrow().iter().cloned())
            .collect()
    }

    /// Whether a call with exactly this argv was made.
    pub fn was_called_with(&self, argv: &[&str]) -> bool {
        self.calls
            .borrow()
            .iter()
            .any(|call| call.iter().map(String::as_str).eq(argv.iter().copied()))
    }
}

impl ProcessInvoker for FakeInvoker {
    fn exec(&self, argv: &[&str], cwd: Option<&Path>) -> Result<ExecOutput, ExecError> {
        let (program, _) = argv.split_first().ok_or(ExecError::EmptyCommand)?;
        self.calls
            .borrow_mut()
            .push(argv.iter().map(|s| s.to_string()).collect());
        self.cwds.borrow_mut().push(cwd.map(Path::to_path_buf));

        let response = self.responses.borrow().get(*program).cloned();
        match response {
            Some(FakeResponse::Output(out)) => Ok(out),
            Some(FakeResponse::LaunchFailure(message)) => Err(ExecError::LaunchFailure {
                program: program.to_string(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, message),
            }),
            Some(FakeResponse::Timeout) => Err(ExecError::Timeout {
                program: program.to_string(),
                timeout: DEFAULT_TIMEOUT,
            }),
            Some(FakeResponse::NotFound) | None => Err(ExecError::NotFound {
                program: program.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_program_is_not_found() {
        let invoker = FakeInvoker::new();
        let err = invoker.exec(&["git", "--version"], None).unwrap_err();
        assert!(matches!(err, ExecError::NotFound { .. }));
    }

    #[test]
    fn configured_output_is_returned() {
        let invoker = FakeInvoker::new();
        invoker.set_output("git", 0, "git version 2.43.0", "");
        let out = invoker.exec(&["git", "--version"], None).unwrap();
        assert!(out.success());
        assert_eq!(out.stdout, "git version 2.43.0");
    }

    #[test]
    fn timeout_and_launch_failure_are_typed() {
        let invoker = FakeInvoker::new();
        invoker.set_timeout("java");
        invoker.set_launch_failure("docker", "permission denied");

        assert!(matches!(
            invoker.exec(&["java", "-version"], None),
            Err(ExecError::Timeout { .. })
        ));
        assert!(matches!(
            invoker.exec(&["docker", "--version"], None),
            Err(ExecError::LaunchFailure { .. })
        ));
    }

    #[test]
    fn calls_are_recorded_in_order() {
        let invoker = FakeInvoker::new();
        let _ = invoker.exec(&["python", "--version"], None);
        let _ = invoker.exec(&["python3", "--version"], None);

        assert_eq!(
            invoker.calls(),
            vec![
                vec!["python".to_string(), "--version".to_string()],
                vec!["python3".to_string(), "--version".to_string()],
            ]
        );
        assert!(invoker.was_called_with(&["python3", "--version"]));
        assert!(!invoker.was_called_with(&["python3"]));
    }

    #[test]
    fn working_directory_is_recorded() {
        let invoker = FakeInvoker::new();
        invoker.set_output("npm", 0, "", "");
        let _ = invoker.exec(&["node", "-v"], None);
        let _ = invoker.exec(&["npm", "ci"], Some(Path::new("/work/app")));

        let calls = invoker.calls_with_cwd();
        assert_eq!(calls[0].1, None);
        assert_eq!(calls[1].0, vec!["npm".to_string(), "ci".to_string()]);
        assert_eq!(calls[1].1, Some(PathBuf::from("/work/app")));
    }

    #[test]
    fn empty_argv_is_rejected_and_not_recorded() {
        let invoker = FakeInvoker::new();
        assert!(matches!(
            invoker.exec(&[], None),
            Err(ExecError::EmptyCommand)
        ));
        assert!(invoker.calls().is_empty());
        assert!(invoker.calls_with_cwd().is_empty());
    }
}
