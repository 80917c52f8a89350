//! Network sink for remote log shipping
//!
//! Sends each record as one JSON line over TCP, for a collector that loads
//! records into a central store.

use crate::core::config::stderr_diagnostic;
use crate::core::{DiagnosticCallback, LogRecord, LoggerError, Result, Sink};
use parking_lot::Mutex;
use std::io::Write;
use std::net::{TcpStream, ToSocketAddrs};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

const IO_TIMEOUT: Duration = Duration::from_secs(5);

/// Network sink that ships JSON records to a remote TCP collector
///
/// # Example
///
/// ```no_run
/// use rust_semantic_logger::prelude::*;
/// use rust_semantic_logger::NetworkSink;
///
/// let sink = NetworkSink::new("127.0.0.1:8080")
///     .expect("Failed to connect to log collector")
///     .with_table("service_logs");
///
/// let dispatcher = MultiSink::builder().sink(sink).build();
/// dispatcher.log(
///     LogLevel::Info,
///     "shipped",
///     LogRecord::new(LogLevel::Info, "shipped", &[]),
/// );
/// ```
pub struct NetworkSink {
    stream: Mutex<Option<TcpStream>>,
    address: String,
    reconnect_on_error: bool,
    table: String,
    uuid: String,
    on_diagnostic: DiagnosticCallback,
}

impl NetworkSink {
    /// Connect to `addr` (e.g. "localhost:8080")
    ///
    /// # Errors
    ///
    /// Returns error if connection fails
    pub fn new(addr: impl ToSocketAddrs + ToString) -> Result<Self> {
        let address = addr.to_string();
        if address.is_empty() {
            return Err(LoggerError::config("NetworkSink", "empty address"));
        }
        let stream = Self::connect(&address)?;

        Ok(Self {
            stream: Mutex::new(Some(stream)),
            address,
            reconnect_on_error: true,
            table: String::new(),
            uuid: Uuid::new_v4().to_string(),
            on_diagnostic: Arc::new(stderr_diagnostic),
        })
    }

    /// Enable or disable one reconnect attempt after a failed write
    ///
    /// Default: enabled
    #[must_use]
    pub fn with_reconnect(mut self, enable: bool) -> Self {
        self.reconnect_on_error = enable;
        self
    }

    #[must_use]
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    #[must_use]
    pub fn with_diagnostics(mut self, callback: DiagnosticCallback) -> Self {
        self.on_diagnostic = callback;
        self
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    fn connect(address: &str) -> Result<TcpStream> {
        let stream = TcpStream::connect(address)?;
        stream.set_write_timeout(Some(IO_TIMEOUT))?;
        stream.set_read_timeout(Some(IO_TIMEOUT))?;
        stream.set_nodelay(true)?;
        Ok(stream)
    }

    fn send(&self, payload: &[u8]) -> Result<()> {
        let mut guard = self.stream.lock();

        let result = match guard.as_mut() {
            Some(stream) => stream.write_all(payload),
            None if self.reconnect_on_error => {
                Err(std::io::Error::from(std::io::ErrorKind::NotConnected))
            }
            None => return Err(LoggerError::writer("Network stream not connected")),
        };

        match result {
            Ok(()) => Ok(()),
            Err(e) => {
                *guard = None;
                if !self.reconnect_on_error {
                    return Err(e.into());
                }

                let mut stream = Self::connect(&self.address).map_err(|reconnect_err| {
                    LoggerError::writer(format!(
                        "Failed to send log and reconnect: {} (reconnect: {})",
                        e, reconnect_err
                    ))
                })?;
                stream.write_all(payload)?;
                *guard = Some(stream);
                Ok(())
            }
        }
    }
}

impl Sink for NetworkSink {
    fn log(&self, record: &LogRecord) {
        let result = record
            .stamped(self.name(), &self.uuid, &self.table)
            .to_json()
            .map_err(LoggerError::from)
            .and_then(|mut line| {
                line.push('\n');
                self.send(line.as_bytes())
            });

        if let Err(e) = result {
            (self.on_diagnostic)(&format!("NetworkSink to {} failed: {}", self.address, e));
        }
    }

    fn name(&self) -> &str {
        "NetworkSink"
    }

    fn uuid(&self) -> &str {
        &self.uuid
    }

    fn table(&self) -> &str {
        &self.table
    }

    fn flush(&self) -> Result<()> {
        if let Some(stream) = self.stream.lock().as_mut() {
            stream.flush()?;
        }
        Ok(())
    }
}
