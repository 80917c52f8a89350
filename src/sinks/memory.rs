//! In-memory sink, mainly a test double

use crate::core::{LogRecord, Sink};
use parking_lot::Mutex;
use std::sync::Arc;
use uuid::Uuid;

/// Keeps every stamped record in arrival order.
///
/// Clones share the same storage, so a clone can be handed to a dispatcher
/// while the original is used for inspection.
#[derive(Clone)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<LogRecord>>>,
    uuid: Arc<str>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            uuid: Uuid::new_v4().to_string().into(),
        }
    }

    /// Snapshot of the records received so far
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for MemorySink {
    fn log(&self, record: &LogRecord) {
        let stamped = record.stamped(self.name(), &self.uuid, self.table());
        self.records.lock().push(stamped);
    }

    fn name(&self) -> &str {
        "MemorySink"
    }

    fn uuid(&self) -> &str {
        &self.uuid
    }
}

/// Discards everything it is given.
#[derive(Debug, Clone)]
pub struct NullSink {
    uuid: String,
}

impl NullSink {
    pub fn new() -> Self {
        Self {
            uuid: Uuid::new_v4().to_string(),
        }
    }
}

impl Default for NullSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for NullSink {
    fn log(&self, _record: &LogRecord) {}

    fn name(&self) -> &str {
        "NullSink"
    }

    fn uuid(&self) -> &str {
        &self.uuid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;

    #[test]
    fn test_clones_share_storage() {
        let memory = MemorySink::new();
        let handle = memory.clone();

        handle.log(&LogRecord::new(LogLevel::Info, "kept", &[]));

        assert_eq!(memory.len(), 1);
        let record = &memory.records()[0];
        assert_eq!(record.name, "MemorySink");
        assert_eq!(record.uuid, memory.uuid());

        memory.clear();
        assert!(handle.is_empty());
    }

    #[test]
    fn test_null_sink() {
        let sink = NullSink::new();
        sink.log(&LogRecord::new(LogLevel::Info, "gone", &[]));
        assert_eq!(sink.name(), "NullSink");
        assert!(!sink.uuid().is_empty());
    }
}
