//! Bounded external process execution.
//!
//! Every tool probe and every applied fix goes through a [`ProcessInvoker`].
//! The system implementation runs the program directly (no shell), drains
//! stdout and stderr on their own threads while the parent waits, and kills
//! the child once the timeout elapses. It never retries and never interprets
//! exit codes.

use std::io::{self, Read};
use std::path::Path;
use std::rc::Rc;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, warn};

/// Hard bound on how long a single invocation may run.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// How often the parent polls the child for exit.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// How long to wait for the drain threads after the child exits.
/// A grandchild holding the pipe open must not stall the caller.
const DRAIN_GRACE: Duration = Duration::from_secs(1);

/// Captured result of a finished process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,
}

impl ExecOutput {
    /// Create an output with an exit code.
    pub fn new(exit_code: i32, stdout: &str, stderr: &str) -> Self {
        Self {
            exit_code: Some(exit_code),
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        }
    }

    /// Whether the process exited with code 0.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Why a process produced no exit code.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The argv was empty.
    #[error("Cannot run an empty command")]
    EmptyCommand,

    /// The executable is not on PATH.
    #[error("{program}: command not found")]
    NotFound { program: String },

    /// The executable exists but could not be started.
    #[error("Failed to start {program}: {source}")]
    LaunchFailure {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The process did not exit in time and was killed.
    #[error("{program} timed out after {} seconds", timeout.as_secs())]
    Timeout { program: String, timeout: Duration },

    /// Waiting on the process failed.
    #[error("I/O error while running {program}: {source}")]
    Io {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// Runs external commands on behalf of checks and fix application.
pub trait ProcessInvoker {
    /// Run `argv` (program followed by arguments), optionally in `cwd`.
    fn exec(&self, argv: &[&str], cwd: Option<&Path>) -> Result<ExecOutput, ExecError>;
}

impl<T: ProcessInvoker + ?Sized> ProcessInvoker for Rc<T> {
    fn exec(&self, argv: &[&str], cwd: Option<&Path>) -> Result<ExecOutput, ExecError> {
        (**self).exec(argv, cwd)
    }
}

/// [`ProcessInvoker`] backed by real child processes.
#[derive(Debug, Clone)]
pub struct SystemInvoker {
    timeout: Duration,
}

impl Default for SystemInvoker {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemInvoker {
    /// Create an invoker with the default 5 second bound.
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create an invoker with a custom bound.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// The configured bound.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[derive(Debug, Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

impl ProcessInvoker for SystemInvoker {
    fn exec(&self, argv: &[&str], cwd: Option<&Path>) -> Result<ExecOutput, ExecError> {
        let (program, args) = argv.split_first().ok_or(ExecError::EmptyCommand)?;

        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        debug!("exec {:?} (cwd: {:?})", argv, cwd);

        let mut child = cmd.spawn().map_err(|e| launch_error(program, e))?;

        let (tx, rx) = mpsc::channel();
        if let Some(stdout) = child.stdout.take() {
            spawn_drain(Stream::Stdout, stdout, tx.clone());
        }
        if let Some(stderr) = child.stderr.take() {
            spawn_drain(Stream::Stderr, stderr, tx.clone());
        }
        drop(tx);

        let status = match wait_with_deadline(&mut child, self.timeout) {
            Ok(status) => status,
            Err(source) => {
                kill_and_reap(&mut child);
                warn!("Lost track of {}: {}, killed", program, source);
                return Err(ExecError::Io {
                    program: program.to_string(),
                    source,
                });
            }
        };

        let Some(status) = status else {
            kill_and_reap(&mut child);
            warn!("{} timed out after {:?}, killed", program, self.timeout);
            return Err(ExecError::Timeout {
                program: program.to_string(),
                timeout: self.timeout,
            });
        };

        let (stdout, stderr) = collect_output(&rx, DRAIN_GRACE);
        debug!("{} exited with {:?}", program, status.code());

        Ok(ExecOutput {
            exit_code: status.code(),
            stdout,
            stderr,
        })
    }
}

fn launch_error(program: &str, source: io::Error) -> ExecError {
    if source.kind() == io::ErrorKind::NotFound {
        ExecError::NotFound {
            program: program.to_string(),
        }
    } else {
        ExecError::LaunchFailure {
            program: program.to_string(),
            source,
        }
    }
}

fn kill_and_reap(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

fn spawn_drain<R>(stream: Stream, mut reader: R, tx: Sender<(Stream, String)>)
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = reader.read_to_end(&mut buf);
        let _ = tx.send((stream, String::from_utf8_lossy(&buf).into_owned()));
    });
}

fn wait_with_deadline(child: &mut Child, timeout: Duration) -> io::Result<Option<ExitStatus>> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

fn collect_output(rx: &Receiver<(Stream, String)>, grace: Duration) -> (String, String) {
    let deadline = Instant::now() + grace;
    let mut stdout = String::new();
    let mut stderr = String::new();

    for _ in 0..2 {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match rx.recv_timeout(remaining) {
            Ok((Stream::Stdout, text)) => stdout = text,
            Ok((Stream::Stderr, text)) => stderr = text,
            Err(RecvTimeoutError::Timeout) => {
                // A grandchild still holds a pipe; its stream stays empty.
                debug!("Output drain grace of {:?} expired", grace);
                break;
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    (stdout, stderr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_argv_is_rejected() {
        let invoker = SystemInvoker::new();
        let err = invoker.exec(&[], None).unwrap_err();
        assert!(matches!(err, ExecError::EmptyCommand));
    }

    #[test]
    fn missing_program_is_not_found() {
        let invoker = SystemInvoker::new();
        let err = invoker
            .exec(&["devdoctor-definitely-not-a-real-tool"], None)
            .unwrap_err();
        assert!(matches!(err, ExecError::NotFound { .. }));
    }

    #[test]
    fn default_timeout_is_five_seconds() {
        assert_eq!(SystemInvoker::default().timeout(), Duration::from_secs(5));
    }

    #[test]
    fn exec_output_success_requires_zero() {
        assert!(ExecOutput::new(0, "", "").success());
        assert!(!ExecOutput::new(1, "", "").success());
        let killed = ExecOutput {
            exit_code: None,
            stdout: String::new(),
            stderr: String::new(),
        };
        assert!(!killed.success());
    }

    #[test]
    fn drain_keeps_finished_stream_when_grace_expires() {
        let (tx, rx) = mpsc::channel();
        tx.send((Stream::Stdout, "git version 2.43.0".to_string()))
            .unwrap();

        let start = Instant::now();
        let (stdout, stderr) = collect_output(&rx, Duration::from_millis(50));
        drop(tx);

        assert_eq!(stdout, "git version 2.43.0");
        assert!(stderr.is_empty());
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn drain_collects_both_streams_in_any_order() {
        let (tx, rx) = mpsc::channel();
        tx.send((Stream::Stderr, "warning".to_string())).unwrap();
        tx.send((Stream::Stdout, "ok".to_string())).unwrap();
        drop(tx);

        let (stdout, stderr) = collect_output(&rx, DRAIN_GRACE);
        assert_eq!(stdout, "ok");
        assert_eq!(stderr, "warning");
    }

    #[test]
    fn rc_invoker_delegates() {
        let fake = Rc::new(crate::shell::FakeInvoker::new());
        fake.set_output("node", 0, "v20.11.0", "");

        let shared: Box<dyn ProcessInvoker> = Box::new(Rc::clone(&fake));
        let out = shared.exec(&["node", "-v"], None).unwrap();
        assert_eq!(out.stdout, "v20.11.0");
        assert!(fake.was_called_with(&["node", "-v"]));
    }

    #[cfg(unix)]
    #[test]
    fn kill_and_reap_leaves_no_running_child() {
        let mut child = Command::new("sleep").arg("30").spawn().unwrap();
        kill_and_reap(&mut child);
        assert!(child.try_wait().unwrap().is_some());
    }

    #[cfg(unix)]
    #[test]
    fn captures_stdout_and_exit_code() {
        let invoker = SystemInvoker::new();
        let out = invoker.exec(&["sh", "-c", "echo hello"], None).unwrap();
        assert!(out.success());
        assert_eq!(out.stdout.trim(), "hello");
    }

    #[cfg(unix)]
    #[test]
    fn captures_stderr_separately() {
        let invoker = SystemInvoker::new();
        let out = invoker
            .exec(&["sh", "-c", "echo oops >&2; exit 3"], None)
            .unwrap();
        assert_eq!(out.exit_code, Some(3));
        assert_eq!(out.stderr.trim(), "oops");
        assert!(out.stdout.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn large_output_does_not_deadlock() {
        let invoker = SystemInvoker::new();
        let script = "head -c 200000 /dev/zero | tr '\\000' a; head -c 200000 /dev/zero | tr '\\000' b >&2";
        let out = invoker.exec(&["sh", "-c", script], None).unwrap();
        assert!(out.success());
        assert_eq!(out.stdout.len(), 200000);
        assert_eq!(out.stderr.len(), 200000);
    }

    #[cfg(unix)]
    #[test]
    fn slow_process_times_out() {
        let invoker = SystemInvoker::with_timeout(Duration::from_millis(200));
        let start = Instant::now();
        let err = invoker.exec(&["sleep", "5"], None).unwrap_err();
        assert!(matches!(err, ExecError::Timeout { .. }));
        assert!(start.elapsed() < Duration::from_secs(4));
    }

    #[cfg(unix)]
    #[test]
    fn runs_in_working_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        let invoker = SystemInvoker::new();
        let out = invoker.exec(&["pwd"], Some(temp.path())).unwrap();
        let name = temp.path().file_name().unwrap().to_string_lossy().to_string();
        assert!(out.stdout.trim().ends_with(&name));
    }
}
