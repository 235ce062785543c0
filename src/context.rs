//! Invocation context for flyweights.
//!
//! A flyweight holds no state, so the destination of its output and whoever
//! watches it are owned by the caller. `OperationContext` bundles both and
//! turns write failures into [`FlyweightError`]s instead of dropping them.

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Instant;
use crate::config::OperationConfig;
use crate::error::{FlyweightError, FlyweightResult};
use crate::observer::{FlyweightObserver, LoggingObserver, Observers};
use crate::output::OutputSink;
use crate::traits::{ExtrinsicState, Flyweight};

/// Caller-side context that runs flyweight operations against a sink.
///
/// The context is `Send + Sync` and can be shared between threads; every
/// invocation writes its line in one piece.
///
/// # Examples
///
/// ```
/// use flyweight_unshared::{OperationContext, SharedBuffer, UnsharedConcreteFlyweight};
///
/// let buffer = SharedBuffer::new();
/// let context = OperationContext::new().with_sink(buffer.clone());
///
/// context.invoke(&UnsharedConcreteFlyweight, 42).unwrap();
/// context.invoke_all(&UnsharedConcreteFlyweight, [0, -7]).unwrap();
///
/// assert_eq!(
///     buffer.lines(),
///     vec![
///         "UnsharedConcreteFlyweight: 42",
///         "UnsharedConcreteFlyweight: 0",
///         "UnsharedConcreteFlyweight: -7",
///     ]
/// );
/// ```
#[derive(Clone, Default)]
pub struct OperationContext {
    sink: OutputSink,
    observers: Observers,
}

impl fmt::Debug for OperationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationContext")
            .field("sink", &self.sink.kind())
            .field("observers", &format!("{} observers", self.observers.len()))
            .finish()
    }
}

impl OperationContext {
    /// Creates a context that writes to stdout with no observers.
    pub fn new() -> Self {
        Self {
            sink: OutputSink::Stdout,
            observers: Observers::new(),
        }
    }

    /// Creates a context from configuration.
    ///
    /// A [`LoggingObserver`] with the configured prefix is attached when
    /// `log_operations` is set.
    pub fn from_config(config: &OperationConfig) -> Self {
        let mut context = Self::new().with_sink(OutputSink::from_kind(config.sink));
        if config.log_operations {
            context.add_observer(Arc::new(LoggingObserver::with_prefix(config.log_prefix.clone())));
        }
        context
    }

    /// Replaces the output sink.
    pub fn with_sink(mut self, sink: impl Into<OutputSink>) -> Self {
        self.sink = sink.into();
        self
    }

    /// Adds an observer and returns the context.
    pub fn with_observer(mut self, observer: Arc<dyn FlyweightObserver>) -> Self {
        self.add_observer(observer);
        self
    }

    /// Adds an observer. Observers are notified in the order they were added.
    pub fn add_observer(&mut self, observer: Arc<dyn FlyweightObserver>) {
        self.observers.add(observer);
    }

    /// The current output sink.
    pub fn sink(&self) -> &OutputSink {
        &self.sink
    }

    /// Number of attached observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Runs one operation of `flyweight` against the sink.
    ///
    /// Observers see `operating` first, then either `emitted` or
    /// `write_failed`. A failed write is returned as
    /// [`FlyweightError::Output`].
    pub fn invoke(&self, flyweight: &dyn Flyweight, extrinsic_state: ExtrinsicState) -> FlyweightResult<()> {
        self.observe(flyweight.name(), extrinsic_state, || self.sink.emit(flyweight, extrinsic_state))
    }

    /// Runs one operation of `flyweight` against `out` instead of the sink.
    ///
    /// Observers are notified exactly as for [`invoke`](Self::invoke). Line
    /// atomicity is whatever `out` provides.
    pub fn invoke_into(
        &self,
        flyweight: &dyn Flyweight,
        extrinsic_state: ExtrinsicState,
        out: &mut dyn Write,
    ) -> FlyweightResult<()> {
        self.observe(flyweight.name(), extrinsic_state, || flyweight.write_operation(extrinsic_state, out))
    }

    fn observe<F>(&self, name: &'static str, extrinsic_state: ExtrinsicState, write: F) -> FlyweightResult<()>
    where
        F: FnOnce() -> io::Result<()>,
    {
        self.observers.operating(name, extrinsic_state);

        let start = Instant::now();
        match write() {
            Ok(()) => {
                self.observers.emitted(name, extrinsic_state, start.elapsed());
                Ok(())
            }
            Err(io_err) => {
                let err = FlyweightError::output(name, &io_err);
                self.observers.write_failed(name, extrinsic_state, &err);
                Err(err)
            }
        }
    }

    /// Runs one operation per state, in iteration order.
    ///
    /// Stops at the first failed write and returns its error; lines written
    /// before it stay written.
    pub fn invoke_all<I>(&self, flyweight: &dyn Flyweight, extrinsic_states: I) -> FlyweightResult<()>
    where
        I: IntoIterator<Item = ExtrinsicState>,
    {
        for extrinsic_state in extrinsic_states {
            self.invoke(flyweight, extrinsic_state)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{SharedBuffer, SinkKind};
    use crate::UnsharedConcreteFlyweight;

    #[test]
    fn from_config_attaches_logging_when_enabled() {
        let quiet = OperationContext::from_config(&OperationConfig::default());
        assert_eq!(quiet.sink().kind(), SinkKind::Stdout);
        assert_eq!(quiet.observer_count(), 0);

        let config = OperationConfig {
            sink: SinkKind::Buffer,
            log_operations: true,
            ..OperationConfig::default()
        };
        let logged = OperationContext::from_config(&config);
        assert_eq!(logged.sink().kind(), SinkKind::Buffer);
        assert_eq!(logged.observer_count(), 1);
    }

    #[test]
    fn clones_share_the_buffer() {
        let buffer = SharedBuffer::new();
        let context = OperationContext::new().with_sink(buffer.clone());
        let copy = context.clone();

        context.invoke(&UnsharedConcreteFlyweight, 1).unwrap();
        copy.invoke(&UnsharedConcreteFlyweight, 2).unwrap();

        assert_eq!(buffer.lines().len(), 2);
    }

    #[test]
    fn debug_hides_observer_internals() {
        let context = OperationContext::new();
        let rendered = format!("{:?}", context);
        assert!(rendered.contains("Stdout"));
        assert!(rendered.contains("0 observers"));
    }
}
