//! The flyweight capability.

use std::io::{self, Write};
use crate::sharing::Sharing;

/// Caller-supplied state passed to a flyweight on every call.
///
/// Any value is accepted, including zero, negatives and the extremes of the
/// range.
pub type ExtrinsicState = i32;

/// Object-safe capability shared by every flyweight variant.
///
/// A flyweight produces one line of output per call from the extrinsic state
/// it is handed. Variants differ in their text and in whether they may be
/// shared between clients; callers only see this trait, so shared and
/// unshared variants are interchangeable behind `Box<dyn Flyweight>` or
/// `Arc<dyn Flyweight>`.
///
/// Implementors provide [`name`](Flyweight::name),
/// [`sharing`](Flyweight::sharing) and [`render`](Flyweight::render). The
/// writing methods are provided.
///
/// # Examples
///
/// ```
/// use flyweight_unshared::{ExtrinsicState, Flyweight, Sharing, UnsharedConcreteFlyweight};
///
/// struct ConcreteFlyweight {
///     symbol: char,
/// }
///
/// impl Flyweight for ConcreteFlyweight {
///     fn name(&self) -> &'static str {
///         "ConcreteFlyweight"
///     }
///
///     fn sharing(&self) -> Sharing {
///         Sharing::Shared
///     }
///
///     fn render(&self, extrinsic_state: ExtrinsicState) -> String {
///         format!("ConcreteFlyweight({}): {}", self.symbol, extrinsic_state)
///     }
/// }
///
/// let flyweights: Vec<Box<dyn Flyweight>> = vec![
///     Box::new(ConcreteFlyweight { symbol: 'X' }),
///     Box::new(UnsharedConcreteFlyweight::new()),
/// ];
///
/// let mut out = Vec::new();
/// for flyweight in &flyweights {
///     flyweight.write_operation(7, &mut out).unwrap();
/// }
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "ConcreteFlyweight(X): 7\nUnsharedConcreteFlyweight: 7\n"
/// );
/// ```
pub trait Flyweight: Send + Sync {
    /// Stable name of the variant, used in diagnostics and errors.
    fn name(&self) -> &'static str;

    /// Whether this variant may be shared between clients.
    fn sharing(&self) -> Sharing;

    /// Text of the operation line for `extrinsic_state`, without a terminator.
    fn render(&self, extrinsic_state: ExtrinsicState) -> String;

    /// Writes the operation line, terminated by `\n`, to `out`.
    ///
    /// The whole line goes out in a single `write_all` call so destinations
    /// that lock per write never split it. `out` is flushed afterwards.
    fn write_operation(&self, extrinsic_state: ExtrinsicState, out: &mut dyn Write) -> io::Result<()> {
        let mut line = self.render(extrinsic_state);
        line.push('\n');
        out.write_all(line.as_bytes())?;
        out.flush()
    }

    /// Emits the operation line on standard output.
    ///
    /// This never panics and never reports an error. A failed write to stdout
    /// (for example a closed pipe) is dropped. Use
    /// [`OperationContext::invoke`](crate::OperationContext::invoke) to
    /// observe such failures.
    fn operation(&self, extrinsic_state: ExtrinsicState) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        let _ = self.write_operation(extrinsic_state, &mut handle);
    }
}
