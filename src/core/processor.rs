use std::io::Write;

pub const PROCESSING_PREFIX: &str = "Processing: ";

/// Stateless per-item worker. Emits one line per call to the given sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemProcessor;

impl ItemProcessor {
    pub fn new() -> Self {
        Self
    }

    pub fn process<W: Write + ?Sized>(&self, item: &str, sink: &mut W) {
        tracing::debug!("Processing item ({} bytes)", item.len());
        // One write per line so a failing sink never leaves a partial line.
        let line = format!("{}{}\n", PROCESSING_PREFIX, item);
        if let Err(e) = sink.write_all(line.as_bytes()) {
            tracing::warn!("Failed to emit item to sink: {}", e);
        }
    }
}
