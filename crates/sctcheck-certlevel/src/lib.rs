//! Validation level (DV/OV/EV) classification
//!
//! Classifies a certificate by the certificate policy OIDs it asserts, using
//! static tables of CA/Browser Forum and CA-specific policies, with a subject
//! name heuristic for DV certificates that carry no recognised policy.

pub mod classify;
pub mod error;
pub mod level;
pub mod oids;

pub use classify::{level_for_policies, validation_level, validation_level_der};
pub use error::{Error, Result};
pub use level::ValidationLevel;
