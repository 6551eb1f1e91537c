use std::io;
use std::sync::Mutex;

/// A writable destination for fully formatted log text.
///
/// Implementations take `&self`; any sink shared across threads must be
/// internally synchronized (locked console handles, datagram sockets, the
/// syslog channel all are).
pub trait Sink: Send + Sync {
    fn write_message(&self, message: &str) -> io::Result<()>;
}

/// In-memory capture sink. Mainly used by tests to assert on exact output
/// bytes, but also usable to buffer a backend's output directly.
#[derive(Debug, Default)]
pub struct BufferSink {
    buf: Mutex<String>,
}

impl BufferSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns everything written so far.
    #[must_use]
    pub fn contents(&self) -> String {
        self.buf.lock().map(|b| b.clone()).unwrap_or_default()
    }
}

impl Sink for BufferSink {
    fn write_message(&self, message: &str) -> io::Result<()> {
        let mut buf = self
            .buf
            .lock()
            .map_err(|_| io::Error::other("buffer sink poisoned"))?;
        buf.push_str(message);
        Ok(())
    }
}
