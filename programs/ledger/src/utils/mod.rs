//! Utility Modules
//!
//! Helper functions used across all processors.
//!
//! # Modules
//!
//! - `allocation`: Rent-funded account allocation through the System Program
//! - `assertions`: Common validation checks and record loading
//! - `authority`: Signer validation against a required authority

pub mod allocation;
pub mod assertions;
pub mod authority;

pub use allocation::*;
pub use assertions::*;
pub use authority::*;
