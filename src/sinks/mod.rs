//! Sink implementations

#[cfg(feature = "console")]
pub mod console;
#[cfg(feature = "file")]
pub mod file;
#[cfg(feature = "file")]
pub mod json;
pub mod memory;
#[cfg(feature = "network")]
pub mod network;

#[cfg(feature = "console")]
pub use console::ConsoleSink;
#[cfg(feature = "file")]
pub use file::FileSink;
#[cfg(feature = "file")]
pub use json::JsonSink;
pub use memory::{MemorySink, NullSink};
#[cfg(feature = "network")]
pub use network::NetworkSink;

pub use crate::core::Sink;
