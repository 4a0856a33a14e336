//! External process execution and host platform queries.

pub mod command;
pub mod fake;
pub mod platform;

pub use command::{ExecError, ExecOutput, ProcessInvoker, SystemInvoker, DEFAULT_TIMEOUT};
pub use fake::FakeInvoker;
pub use platform::Platform;
