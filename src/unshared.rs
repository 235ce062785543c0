//! The unshared concrete flyweight.

use crate::sharing::Sharing;
use crate::traits::{ExtrinsicState, Flyweight};

/// Fixed label that prefixes every line this variant emits.
pub const LABEL: &str = "UnsharedConcreteFlyweight: ";

/// Flyweight variant that is never shared.
///
/// Holds no intrinsic state, so every call is independent of every other and
/// of the instance it is made on. Clients create one whenever they need it;
/// nothing pools or caches it.
///
/// # Examples
///
/// ```
/// use flyweight_unshared::{Flyweight, UnsharedConcreteFlyweight};
///
/// let flyweight = UnsharedConcreteFlyweight::new();
/// assert_eq!(flyweight.render(42), "UnsharedConcreteFlyweight: 42");
///
/// // Prints "UnsharedConcreteFlyweight: -7" on stdout.
/// flyweight.operation(-7);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct UnsharedConcreteFlyweight;

impl UnsharedConcreteFlyweight {
    /// Creates a new instance.
    pub const fn new() -> Self {
        Self
    }
}

impl Flyweight for UnsharedConcreteFlyweight {
    fn name(&self) -> &'static str {
        "UnsharedConcreteFlyweight"
    }

    fn sharing(&self) -> Sharing {
        Sharing::Unshared
    }

    fn render(&self, extrinsic_state: ExtrinsicState) -> String {
        format!("{}{}", LABEL, extrinsic_state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_has_no_terminator() {
        let line = UnsharedConcreteFlyweight.render(1);
        assert_eq!(line, "UnsharedConcreteFlyweight: 1");
        assert!(!line.ends_with('\n'));
    }

    #[test]
    fn extremes_render_in_full() {
        let flyweight = UnsharedConcreteFlyweight::new();
        assert_eq!(flyweight.render(i32::MIN), "UnsharedConcreteFlyweight: -2147483648");
        assert_eq!(flyweight.render(i32::MAX), "UnsharedConcreteFlyweight: 2147483647");
    }

    #[test]
    fn name_matches_label() {
        let flyweight = UnsharedConcreteFlyweight::new();
        assert_eq!(format!("{}: ", flyweight.name()), LABEL);
        assert_eq!(flyweight.sharing(), Sharing::Unshared);
    }
}
