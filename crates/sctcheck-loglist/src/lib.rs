//! Certificate Transparency log list and log registry
//!
//! This crate turns a log list (the v3 JSON schema published by browser
//! vendors) into a [`LogRegistry`]: an immutable index of logs keyed by their
//! log ID, which is what SCT verification consults.
//!
//! The registry is built once and then shared by reference. [`LazyLogRegistry`]
//! defers that single construction until first use, with concurrent first
//! callers all observing the same instance.
//!
//! # Example
//!
//! ```no_run
//! use sctcheck_loglist::{LazyLogRegistry, LogRegistry};
//!
//! // Eager
//! let registry = LogRegistry::from_file("log_list.json").unwrap();
//!
//! // Lazy, built on the first `get()`
//! static REGISTRY: LazyLogRegistry =
//!     LazyLogRegistry::new(|| LogRegistry::from_file("log_list.json"));
//! let registry = REGISTRY.get().unwrap();
//! ```

pub mod error;
pub mod lazy;
pub mod log_list;
pub mod registry;

pub use error::{Error, Result};
pub use lazy::LazyLogRegistry;
pub use log_list::{
    FinalTreeHead, LogEntry, LogList, LogState, Operator, TemporalInterval, TiledLogEntry,
};
pub use registry::{Log, LogRegistry};
