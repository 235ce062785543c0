//! Sharing descriptors for flyweight variants.

use std::fmt;

/// Whether a flyweight variant may be handed to several clients
///
/// Shared flyweights carry intrinsic state that is identical for every client,
/// so one instance can serve all of them. Unshared flyweights are created by
/// each client that needs one and are never pooled.
///
/// # Examples
///
/// ```rust
/// use flyweight_unshared::{Flyweight, Sharing, UnsharedConcreteFlyweight};
///
/// let flyweight = UnsharedConcreteFlyweight::new();
/// assert_eq!(flyweight.sharing(), Sharing::Unshared);
/// assert!(!flyweight.sharing().is_shared());
/// assert_eq!(Sharing::Shared.to_string(), "shared");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sharing {
    /// One instance may serve every client
    ///
    /// Intrinsic state lives inside the instance; extrinsic state is passed in
    /// on each call.
    Shared,
    /// Each client owns its own instance
    ///
    /// The variant takes part in the flyweight interface without being
    /// shared, typically because it has no intrinsic state worth sharing.
    Unshared,
}

impl Sharing {
    /// Returns true for [`Sharing::Shared`].
    pub fn is_shared(self) -> bool {
        matches!(self, Sharing::Shared)
    }
}

impl fmt::Display for Sharing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sharing::Shared => f.write_str("shared"),
            Sharing::Unshared => f.write_str("unshared"),
        }
    }
}
