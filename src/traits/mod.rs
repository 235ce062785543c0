//! Core traits for flyweight variants.

mod flyweight;

pub use flyweight::{ExtrinsicState, Flyweight};
