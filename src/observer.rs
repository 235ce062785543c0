//! Diagnostic observers for flyweight invocations.
//!
//! Flyweights are stateless, so anything that watches them lives next to the
//! caller: an [`OperationContext`](crate::OperationContext) notifies its
//! observers before and after every line it writes.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use crate::error::FlyweightError;
use crate::traits::ExtrinsicState;

/// Observer trait for flyweight invocation events.
///
/// Calls are made synchronously on the invoking thread. Keep implementations
/// lightweight; they run once per emitted line.
///
/// # Examples
///
/// ```
/// use flyweight_unshared::{
///     ExtrinsicState, FlyweightError, FlyweightObserver, OperationContext, SharedBuffer,
///     UnsharedConcreteFlyweight,
/// };
/// use std::sync::{Arc, Mutex};
/// use std::time::Duration;
///
/// #[derive(Default)]
/// struct Recorder {
///     seen: Mutex<Vec<ExtrinsicState>>,
/// }
///
/// impl FlyweightObserver for Recorder {
///     fn operating(&self, _flyweight: &'static str, extrinsic_state: ExtrinsicState) {
///         self.seen.lock().unwrap().push(extrinsic_state);
///     }
///
///     fn emitted(&self, _flyweight: &'static str, _extrinsic_state: ExtrinsicState, _elapsed: Duration) {}
///
///     fn write_failed(&self, _flyweight: &'static str, _extrinsic_state: ExtrinsicState, _error: &FlyweightError) {}
/// }
///
/// let recorder = Arc::new(Recorder::default());
/// let context = OperationContext::new()
///     .with_sink(SharedBuffer::new())
///     .with_observer(recorder.clone());
///
/// context.invoke(&UnsharedConcreteFlyweight, 3).unwrap();
/// context.invoke(&UnsharedConcreteFlyweight, 4).unwrap();
/// assert_eq!(*recorder.seen.lock().unwrap(), vec![3, 4]);
/// ```
pub trait FlyweightObserver: Send + Sync {
    /// Called before the line is written.
    fn operating(&self, flyweight: &'static str, extrinsic_state: ExtrinsicState);

    /// Called after the line was written and flushed.
    ///
    /// * `elapsed` - Time spent writing the line
    fn emitted(&self, flyweight: &'static str, extrinsic_state: ExtrinsicState, elapsed: Duration);

    /// Called when the destination rejected the line.
    ///
    /// The same error is returned to the caller afterwards.
    fn write_failed(&self, flyweight: &'static str, extrinsic_state: ExtrinsicState, error: &FlyweightError);
}

/// Container for registered observers.
#[derive(Default, Clone)]
pub(crate) struct Observers {
    observers: Vec<Arc<dyn FlyweightObserver>>,
}

impl Observers {
    pub(crate) fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    pub(crate) fn add(&mut self, observer: Arc<dyn FlyweightObserver>) {
        self.observers.push(observer);
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.observers.len()
    }

    #[inline]
    pub(crate) fn operating(&self, flyweight: &'static str, extrinsic_state: ExtrinsicState) {
        for observer in &self.observers {
            observer.operating(flyweight, extrinsic_state);
        }
    }

    #[inline]
    pub(crate) fn emitted(&self, flyweight: &'static str, extrinsic_state: ExtrinsicState, elapsed: Duration) {
        for observer in &self.observers {
            observer.emitted(flyweight, extrinsic_state, elapsed);
        }
    }

    #[inline]
    pub(crate) fn write_failed(&self, flyweight: &'static str, extrinsic_state: ExtrinsicState, error: &FlyweightError) {
        for observer in &self.observers {
            observer.write_failed(flyweight, extrinsic_state, error);
        }
    }
}

/// Built-in observer that logs events to stderr.
///
/// Stdout carries the operation lines themselves, so diagnostics go to the
/// other stream.
///
/// # Examples
///
/// ```
/// use flyweight_unshared::{LoggingObserver, OperationContext, SharedBuffer, UnsharedConcreteFlyweight};
/// use std::sync::Arc;
///
/// let context = OperationContext::new()
///     .with_sink(SharedBuffer::new())
///     .with_observer(Arc::new(LoggingObserver::with_prefix("[demo]")));
///
/// // Logs "[demo] Operating: UnsharedConcreteFlyweight(42)" and the result to stderr
/// context.invoke(&UnsharedConcreteFlyweight, 42).unwrap();
/// ```
pub struct LoggingObserver {
    prefix: String,
}

impl LoggingObserver {
    /// Creates a new logging observer with the default `[flyweight]` prefix.
    pub fn new() -> Self {
        Self {
            prefix: "[flyweight]".to_string(),
        }
    }

    /// Creates a new logging observer with a custom prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The prefix put in front of every log line.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl FlyweightObserver for LoggingObserver {
    fn operating(&self, flyweight: &'static str, extrinsic_state: ExtrinsicState) {
        eprintln!("{} Operating: {}({})", self.prefix, flyweight, extrinsic_state);
    }

    fn emitted(&self, flyweight: &'static str, extrinsic_state: ExtrinsicState, elapsed: Duration) {
        eprintln!("{} Emitted: {}({}) in {:?}",
            self.prefix, flyweight, extrinsic_state, elapsed);
    }

    fn write_failed(&self, flyweight: &'static str, extrinsic_state: ExtrinsicState, error: &FlyweightError) {
        eprintln!("{} WRITE FAILED in {}({}): {}",
            self.prefix, flyweight, extrinsic_state, error);
    }
}

/// Observer that counts invocations and accumulates write time.
///
/// # Examples
///
/// ```
/// use flyweight_unshared::{MetricsObserver, OperationContext, SharedBuffer, UnsharedConcreteFlyweight};
/// use std::sync::Arc;
///
/// let metrics = Arc::new(MetricsObserver::new());
/// let context = OperationContext::new()
///     .with_sink(SharedBuffer::new())
///     .with_observer(metrics.clone());
///
/// context.invoke_all(&UnsharedConcreteFlyweight, [1, 2, 3]).unwrap();
/// assert_eq!(metrics.operation_count(), 3);
/// assert_eq!(metrics.emitted_count(), 3);
/// assert_eq!(metrics.failure_count(), 0);
/// ```
#[derive(Debug)]
pub struct MetricsObserver {
    operation_count: AtomicU64,
    emitted_count: AtomicU64,
    failure_count: AtomicU64,
    total_emit_nanos: AtomicU64,
}

impl MetricsObserver {
    /// Creates a new metrics observer.
    pub fn new() -> Self {
        Self {
            operation_count: AtomicU64::new(0),
            emitted_count: AtomicU64::new(0),
            failure_count: AtomicU64::new(0),
            total_emit_nanos: AtomicU64::new(0),
        }
    }

    /// Number of invocations started.
    pub fn operation_count(&self) -> u64 {
        self.operation_count.load(Ordering::Relaxed)
    }

    /// Number of lines written successfully.
    pub fn emitted_count(&self) -> u64 {
        self.emitted_count.load(Ordering::Relaxed)
    }

    /// Number of lines the destination rejected.
    pub fn failure_count(&self) -> u64 {
        self.failure_count.load(Ordering::Relaxed)
    }

    /// Total time spent writing successful lines.
    pub fn total_emit_time(&self) -> Duration {
        Duration::from_nanos(self.total_emit_nanos.load(Ordering::Relaxed))
    }

    /// Average time per successful line, if any were written.
    pub fn average_emit_time(&self) -> Option<Duration> {
        let count = self.emitted_count();
        if count == 0 {
            return None;
        }
        Some(Duration::from_nanos(self.total_emit_nanos.load(Ordering::Relaxed) / count))
    }

    /// Resets all counters.
    pub fn reset(&self) {
        self.operation_count.store(0, Ordering::Relaxed);
        self.emitted_count.store(0, Ordering::Relaxed);
        self.failure_count.store(0, Ordering::Relaxed);
        self.total_emit_nanos.store(0, Ordering::Relaxed);
    }
}

impl Default for MetricsObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl FlyweightObserver for MetricsObserver {
    fn operating(&self, _flyweight: &'static str, _extrinsic_state: ExtrinsicState) {
        self.operation_count.fetch_add(1, Ordering::Relaxed);
    }

    fn emitted(&self, _flyweight: &'static str, _extrinsic_state: ExtrinsicState, elapsed: Duration) {
        self.emitted_count.fetch_add(1, Ordering::Relaxed);
        // Saturates after ~584 years of accumulated write time.
        let nanos = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
        self.total_emit_nanos.fetch_add(nanos, Ordering::Relaxed);
    }

    fn write_failed(&self, _flyweight: &'static str, _extrinsic_state: ExtrinsicState, _error: &FlyweightError) {
        self.failure_count.fetch_add(1, Ordering::Relaxed);
    }
}
