//! Configuration for record finalization
//!
//! Process-wide values (invocation name, pid, host name) and the stack walker
//! are injected here instead of being read from ambient globals, so the
//! finalize step is deterministic under test.

use super::stack::{BacktraceWalker, StackWalker};
use std::fmt;
use std::io;
use std::sync::Arc;

/// Resolves the local host name
pub type HostResolver = Arc<dyn Fn() -> io::Result<String> + Send + Sync>;

/// Receives operational diagnostics that must not reach the logging caller
pub type DiagnosticCallback = Arc<dyn Fn(&str) + Send + Sync>;

#[derive(Clone)]
pub struct LoggerConfig {
    /// Explicit application name; the invocation name is used when unset
    pub application: Option<String>,
    pub pid: u32,
    pub host_resolver: HostResolver,
    pub on_diagnostic: DiagnosticCallback,
    pub stack_walker: Arc<dyn StackWalker>,
}

impl LoggerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            application: None,
            pid: std::process::id(),
            host_resolver: Arc::new(system_host_name),
            on_diagnostic: Arc::new(stderr_diagnostic),
            stack_walker: Arc::new(BacktraceWalker),
        }
    }

    #[must_use]
    pub fn builder() -> LoggerConfigBuilder {
        LoggerConfigBuilder::new()
    }

    /// Application name to stamp on records that did not set one.
    pub fn application_name(&self) -> String {
        self.application.clone().unwrap_or_else(invocation_name)
    }

    pub fn resolve_host_name(&self) -> io::Result<String> {
        (self.host_resolver)()
    }

    pub fn diagnostic(&self, message: &str) {
        (self.on_diagnostic)(message);
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerConfig")
            .field("application", &self.application)
            .field("pid", &self.pid)
            .finish_non_exhaustive()
    }
}

/// First process argument, as the program was invoked.
pub fn invocation_name() -> String {
    std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Host name from the operating system.
pub fn system_host_name() -> io::Result<String> {
    hostname::get().map(|name| name.to_string_lossy().into_owned())
}

pub(crate) fn stderr_diagnostic(message: &str) {
    eprintln!("[LOGGER WARNING] {}", message);
}

/// Builder for [`LoggerConfig`]
///
/// # Example
/// ```
/// use rust_semantic_logger::prelude::*;
/// use std::sync::Arc;
///
/// let config = LoggerConfig::builder()
///     .application("billing")
///     .host_name("worker-7")
///     .stack_walker(Arc::new(NoopWalker))
///     .build();
/// assert_eq!(config.application_name(), "billing");
/// ```
pub struct LoggerConfigBuilder {
    config: LoggerConfig,
}

impl LoggerConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::new(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn application(mut self, application: impl Into<String>) -> Self {
        self.config.application = Some(application.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn pid(mut self, pid: u32) -> Self {
        self.config.pid = pid;
        self
    }

    /// Use a fixed host name instead of asking the operating system
    #[must_use = "builder methods return a new value"]
    pub fn host_name(mut self, host_name: impl Into<String>) -> Self {
        let host_name = host_name.into();
        self.config.host_resolver = Arc::new(move || Ok(host_name.clone()));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn host_resolver(mut self, resolver: HostResolver) -> Self {
        self.config.host_resolver = resolver;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn on_diagnostic(mut self, callback: DiagnosticCallback) -> Self {
        self.config.on_diagnostic = callback;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn stack_walker(mut self, walker: Arc<dyn StackWalker>) -> Self {
        self.config.stack_walker = walker;
        self
    }

    pub fn build(self) -> LoggerConfig {
        self.config
    }
}

impl Default for LoggerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
