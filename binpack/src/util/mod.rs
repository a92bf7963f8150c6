/// Consistency checks on packed bins, evaluated inside `debug_assert!`.
pub mod assertions;

/// Deterministic selection and ordering helpers shared by both packers.
pub mod selection;

mod config;

#[doc(inline)]
pub use config::Backend;
