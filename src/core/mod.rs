//! Core document model, code tables, and compliance validation.
//!
//! The canonical document types follow the MyInvois e-Invoice data
//! model; validation appends coded findings instead of failing fast so
//! callers always receive the complete issue list.

mod builder;
mod config;
pub mod countries;
pub mod currencies;
mod error;
pub mod identifiers;
mod readiness;
pub mod states;
pub mod tax_types;
mod types;
pub mod units;
mod validation;

pub use builder::*;
pub use config::*;
pub use error::*;
pub use identifiers::{validate_brn, validate_tin};
pub use readiness::*;
pub use types::*;
pub use validation::{severity_for, validate};
