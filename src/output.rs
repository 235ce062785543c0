//! Output destinations for operation lines.
//!
//! Flyweights format their line and hand it to a writer in one piece. Whether
//! concurrent lines stay whole is up to the destination: the standard streams
//! are locked for the duration of a line, and [`SharedBuffer`] appends each
//! write under its own lock.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};
use crate::error::FlyweightError;
use crate::traits::{ExtrinsicState, Flyweight};

/// Names the kind of an [`OutputSink`], as used in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "config", derive(Serialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum SinkKind {
    /// Process standard output
    #[default]
    Stdout,
    /// Process standard error
    Stderr,
    /// In-memory [`SharedBuffer`]
    Buffer,
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkKind::Stdout => f.write_str("stdout"),
            SinkKind::Stderr => f.write_str("stderr"),
            SinkKind::Buffer => f.write_str("buffer"),
        }
    }
}

impl FromStr for SinkKind {
    type Err = FlyweightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stdout" => Ok(SinkKind::Stdout),
            "stderr" => Ok(SinkKind::Stderr),
            "buffer" => Ok(SinkKind::Buffer),
            _ => Err(FlyweightError::Config(format!("unknown sink: {}", s))),
        }
    }
}

// Accepts any case, like the environment path.
#[cfg(feature = "config")]
impl<'de> Deserialize<'de> for SinkKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Cloneable in-memory destination.
///
/// Clones share the same bytes. Every `write` call appends under one lock, so
/// a line written with a single `write_all` is never interleaved with lines
/// from other threads.
///
/// # Examples
///
/// ```
/// use flyweight_unshared::{Flyweight, SharedBuffer, UnsharedConcreteFlyweight};
///
/// let buffer = SharedBuffer::new();
/// let mut writer = buffer.clone();
///
/// let flyweight = UnsharedConcreteFlyweight::new();
/// flyweight.write_operation(1, &mut writer).unwrap();
/// flyweight.write_operation(2, &mut writer).unwrap();
///
/// assert_eq!(
///     buffer.lines(),
///     vec!["UnsharedConcreteFlyweight: 1", "UnsharedConcreteFlyweight: 2"]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave a half-appended line behind,
    // so poisoned data is still usable.
    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.bytes.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    /// Written lines without their terminators.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    /// Number of bytes written.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True when nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Discards everything written so far.
    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Where an [`OperationContext`](crate::OperationContext) sends lines.
#[derive(Debug, Clone, Default)]
pub enum OutputSink {
    /// Process standard output, the destination `Flyweight::operation` uses
    #[default]
    Stdout,
    /// Process standard error
    Stderr,
    /// In-memory buffer shared with the caller
    Buffer(SharedBuffer),
}

impl OutputSink {
    /// Creates a sink of the given kind. `SinkKind::Buffer` gets a fresh buffer.
    pub fn from_kind(kind: SinkKind) -> Self {
        match kind {
            SinkKind::Stdout => OutputSink::Stdout,
            SinkKind::Stderr => OutputSink::Stderr,
            SinkKind::Buffer => OutputSink::Buffer(SharedBuffer::new()),
        }
    }

    /// Kind of this sink.
    pub fn kind(&self) -> SinkKind {
        match self {
            OutputSink::Stdout => SinkKind::Stdout,
            OutputSink::Stderr => SinkKind::Stderr,
            OutputSink::Buffer(_) => SinkKind::Buffer,
        }
    }

    /// The backing buffer, for buffer sinks.
    pub fn buffer(&self) -> Option<&SharedBuffer> {
        match self {
            OutputSink::Buffer(buffer) => Some(buffer),
            _ => None,
        }
    }

    /// Writes one operation line of `flyweight` to this sink.
    pub(crate) fn emit(&self, flyweight: &dyn Flyweight, extrinsic_state: ExtrinsicState) -> io::Result<()> {
        match self {
            OutputSink::Stdout => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                flyweight.write_operation(extrinsic_state, &mut handle)
            }
            OutputSink::Stderr => {
                let stderr = io::stderr();
                let mut handle = stderr.lock();
                flyweight.write_operation(extrinsic_state, &mut handle)
            }
            OutputSink::Buffer(buffer) => {
                let mut writer = buffer.clone();
                flyweight.write_operation(extrinsic_state, &mut writer)
            }
        }
    }
}

impl From<SharedBuffer> for OutputSink {
    fn from(buffer: SharedBuffer) -> Self {
        OutputSink::Buffer(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UnsharedConcreteFlyweight;

    #[test]
    fn sink_kind_parses_case_insensitively() {
        assert_eq!("STDOUT".parse::<SinkKind>().unwrap(), SinkKind::Stdout);
        assert_eq!(" stderr ".parse::<SinkKind>().unwrap(), SinkKind::Stderr);
        assert_eq!("Buffer".parse::<SinkKind>().unwrap(), SinkKind::Buffer);
    }

    #[test]
    fn unknown_sink_kind_is_config_error() {
        let err = "file".parse::<SinkKind>().unwrap_err();
        assert_eq!(err, FlyweightError::Config("unknown sink: file".to_string()));
    }

    #[test]
    fn unknown_sink_kind_reports_value_as_given() {
        let err = "FILE".parse::<SinkKind>().unwrap_err();
        assert_eq!(err, FlyweightError::Config("unknown sink: FILE".to_string()));
    }

    #[test]
    fn buffer_sink_emits_into_shared_bytes() {
        let buffer = SharedBuffer::new();
        let sink = OutputSink::from(buffer.clone());
        assert_eq!(sink.kind(), SinkKind::Buffer);

        sink.emit(&UnsharedConcreteFlyweight, 5).unwrap();
        assert_eq!(buffer.contents(), "UnsharedConcreteFlyweight: 5\n");
        assert_eq!(buffer.len(), "UnsharedConcreteFlyweight: 5\n".len());

        buffer.clear();
        assert!(buffer.is_empty());
        assert!(sink.buffer().unwrap().is_empty());
    }

    #[test]
    fn from_kind_round_trips() {
        for kind in [SinkKind::Stdout, SinkKind::Stderr, SinkKind::Buffer] {
            assert_eq!(OutputSink::from_kind(kind).kind(), kind);
        }
        assert!(OutputSink::default().buffer().is_none());
    }
}
