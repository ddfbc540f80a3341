//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! theatrical billing test suite.
//!
//! # Modules
//!
//! - `fixtures`: The sample play catalog and invoices with known statements
//! - `builders`: Builder patterns for test data construction
//! - `assertions`: Custom assertion helpers for statement types
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
