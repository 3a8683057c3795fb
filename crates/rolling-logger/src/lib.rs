//! Rolling Logger
//!
//! `tracing-subscriber` fmt layer whose writer keeps the most recent lines
//! in a circular buffer and mirrors each line to the browser console
//! (stderr off wasm). `log` records are bridged in through `tracing-log`.

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex, OnceLock};

use tracing::{Level, Metadata, Subscriber};
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

pub use tracing_subscriber::filter::LevelFilter;

static RING: OnceLock<RingBuffer> = OnceLock::new();

/// Shared circular buffer of formatted lines
#[derive(Clone)]
pub struct RingBuffer {
    capacity: usize,
    lines: Arc<Mutex<VecDeque<String>>>,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
        }
    }

    /// Buffered lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(buf) => buf.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    fn push(&self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if let Ok(mut buf) = self.lines.lock() {
            while buf.len() >= self.capacity {
                buf.pop_front();
            }
            buf.push_back(line);
        }
    }
}

/// Collects one formatted event; flushes it to the ring on drop
pub struct RingWriter {
    ring: RingBuffer,
    level: Level,
    bytes: Vec<u8>,
}

impl io::Write for RingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for RingWriter {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.bytes);
        let line = text.trim_end();
        if line.is_empty() {
            return;
        }
        mirror(self.level, line);
        self.ring.push(line.to_string());
    }
}

impl<'a> MakeWriter<'a> for RingBuffer {
    type Writer = RingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        RingWriter {
            ring: self.clone(),
            level: Level::INFO,
            bytes: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        RingWriter {
            ring: self.clone(),
            level: *meta.level(),
            bytes: Vec::new(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn mirror(level: Level, line: &str) {
    match level {
        Level::ERROR => web_sys::console::error_1(&line.into()),
        Level::WARN => web_sys::console::warn_1(&line.into()),
        _ => web_sys::console::log_1(&line.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn mirror(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Subscriber writing every event at or above `level` into `ring`
pub fn subscriber(ring: RingBuffer, level: LevelFilter) -> impl Subscriber + Send + Sync {
    let layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_timer(ChronoUtc::new("%H:%M:%S%.3f".to_string()))
        .with_writer(ring)
        .with_filter(level);
    tracing_subscriber::registry().with(layer)
}

/// Install the global subscriber (and the `log` bridge).
/// Fails if another subscriber is already set.
pub fn init(level: LevelFilter, capacity: usize) -> Result<RingBuffer, String> {
    let ring = RING.get_or_init(|| RingBuffer::new(capacity)).clone();
    subscriber(ring.clone(), level)
        .try_init()
        .map_err(|e| format!("logger already installed: {}", e))?;
    Ok(ring)
}

/// Lines held by the installed logger (empty if none installed)
pub fn recent_lines() -> Vec<String> {
    RING.get().map(|r| r.recent()).unwrap_or_default()
}
