//! # flyweight-unshared
//!
//! The unshared concrete participant of the Flyweight structural pattern.
//!
//! ## Features
//!
//! - **Single-level capability**: the object-safe [`Flyweight`] trait, usable
//!   behind `Box<dyn Flyweight>` alongside any shared variants a client writes
//! - **Stateless variant**: [`UnsharedConcreteFlyweight`] holds nothing, so
//!   every call is independent and idempotent
//! - **Total operation**: [`Flyweight::operation`] never panics and never fails
//! - **Explicit destinations**: [`OperationContext`] writes to stdout, stderr
//!   or a line-atomic [`SharedBuffer`] and reports write failures
//! - **Observability**: [`FlyweightObserver`] hooks with built-in logging and
//!   metrics observers
//!
//! ## Quick Start
//!
//! ```rust
//! use flyweight_unshared::{Flyweight, UnsharedConcreteFlyweight};
//!
//! let flyweight = UnsharedConcreteFlyweight::new();
//!
//! // Prints "UnsharedConcreteFlyweight: 42" on stdout.
//! flyweight.operation(42);
//! ```
//!
//! ## Capturing Output
//!
//! ```rust
//! use flyweight_unshared::{MetricsObserver, OperationContext, SharedBuffer, UnsharedConcreteFlyweight};
//! use std::sync::Arc;
//!
//! let buffer = SharedBuffer::new();
//! let metrics = Arc::new(MetricsObserver::new());
//! let context = OperationContext::new()
//!     .with_sink(buffer.clone())
//!     .with_observer(metrics.clone());
//!
//! context.invoke_all(&UnsharedConcreteFlyweight, [1, 2]).unwrap();
//!
//! assert_eq!(buffer.contents(), "UnsharedConcreteFlyweight: 1\nUnsharedConcreteFlyweight: 2\n");
//! assert_eq!(metrics.emitted_count(), 2);
//! ```

// Module declarations
pub mod config;
pub mod context;
pub mod error;
pub mod observer;
pub mod output;
pub mod sharing;
pub mod traits;
pub mod unshared;

// Re-export core types
pub use config::OperationConfig;
pub use context::OperationContext;
pub use error::{FlyweightError, FlyweightResult};
pub use observer::{FlyweightObserver, LoggingObserver, MetricsObserver};
pub use output::{OutputSink, SharedBuffer, SinkKind};
pub use sharing::Sharing;
pub use traits::{ExtrinsicState, Flyweight};
pub use unshared::{UnsharedConcreteFlyweight, LABEL};
