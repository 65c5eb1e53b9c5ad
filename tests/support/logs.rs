use std::io;
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// In-memory sink for JSON log lines emitted by the crate.
#[derive(Clone, Default)]
pub struct CapturedLogs {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    /// Install a JSON subscriber writing into this sink for the current thread.
    ///
    /// Events are only captured while the returned guard is alive, so tests
    /// using this must run on a current-thread runtime.
    pub fn install(&self) -> DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_env_filter(EnvFilter::new("marathon_client=debug"))
            .with_writer(self.clone())
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Every captured event, parsed.
    pub fn events(&self) -> Vec<Value> {
        let buffer = self.buffer.lock();
        String::from_utf8_lossy(&buffer)
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).expect("log line is JSON"))
            .collect()
    }

    /// The `fields` object of every event at `level` (e.g. `"ERROR"`).
    pub fn fields_at(&self, level: &str) -> Vec<Value> {
        self.events()
            .into_iter()
            .filter(|event| event["level"] == level)
            .map(|event| event["fields"].clone())
            .collect()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
