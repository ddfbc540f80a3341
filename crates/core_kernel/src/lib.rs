//! Core Kernel - Foundational types for theatrical billing
//!
//! This crate provides the building blocks shared by the statement domain
//! and its collaborators:
//! - Money types with precise decimal arithmetic and localized display
//! - String-backed catalog identifiers
//! - Common error types

pub mod money;
pub mod identifiers;
pub mod error;

pub use money::{Money, Currency};
pub use identifiers::PlayId;
pub use error::CoreError;
