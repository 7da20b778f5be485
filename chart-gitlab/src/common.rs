/// Contains the error handling tooling.
pub mod error;

/// Contains the scoped temporary clone directory guard.
pub mod scratch;
