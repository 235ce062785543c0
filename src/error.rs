//! Error types for flyweight invocation and configuration.

use std::fmt;
use std::io;

/// Flyweight errors
///
/// `Flyweight::operation` itself never fails. These errors surface from the
/// fallible layer around it: writing to an explicit sink through an
/// [`OperationContext`](crate::OperationContext), or loading configuration.
///
/// # Examples
///
/// ```rust
/// use flyweight_unshared::FlyweightError;
/// use std::io::ErrorKind;
///
/// let output = FlyweightError::Output {
///     flyweight: "UnsharedConcreteFlyweight",
///     kind: ErrorKind::BrokenPipe,
///     message: "pipe closed".to_string(),
/// };
/// assert_eq!(
///     output.to_string(),
///     "Output failed on UnsharedConcreteFlyweight (BrokenPipe): pipe closed"
/// );
///
/// let config = FlyweightError::Config("unknown sink: file".to_string());
/// assert_eq!(config.to_string(), "Invalid configuration: unknown sink: file");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlyweightError {
    /// Writing an operation line to the output destination failed
    Output {
        /// Name of the flyweight variant that was writing
        flyweight: &'static str,
        /// Kind of the underlying I/O error
        kind: io::ErrorKind,
        /// Message of the underlying I/O error
        message: String,
    },
    /// A configuration value could not be parsed
    Config(String),
}

impl FlyweightError {
    /// Wraps an I/O error raised while `flyweight` was writing.
    pub fn output(flyweight: &'static str, err: &io::Error) -> Self {
        FlyweightError::Output {
            flyweight,
            kind: err.kind(),
            message: err.to_string(),
        }
    }

    /// Returns the I/O error kind for output failures.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            FlyweightError::Output { kind, .. } => Some(*kind),
            FlyweightError::Config(_) => None,
        }
    }
}

impl fmt::Display for FlyweightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlyweightError::Output { flyweight, kind, message } => {
                write!(f, "Output failed on {} ({:?}): {}", flyweight, kind, message)
            }
            FlyweightError::Config(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for FlyweightError {}

/// Result type for flyweight operations
///
/// A convenience alias for `Result<T, FlyweightError>`.
///
/// # Examples
///
/// ```rust
/// use flyweight_unshared::{FlyweightError, FlyweightResult};
///
/// fn parse_flag(raw: &str) -> FlyweightResult<bool> {
///     match raw {
///         "true" => Ok(true),
///         "false" => Ok(false),
///         other => Err(FlyweightError::Config(format!("not a bool: {}", other))),
///     }
/// }
///
/// assert!(parse_flag("true").unwrap());
/// assert!(parse_flag("maybe").is_err());
/// ```
pub type FlyweightResult<T> = Result<T, FlyweightError>;
