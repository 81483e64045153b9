//! Transformation module.
//!
//! This module turns raw export records into clean exercises:
//! - Resolver: localization and category lookups per record
//! - Sort: output ordering
//! - Pipeline: load, resolve, sort and write in one call

pub mod pipeline;
pub mod resolver;
pub mod sort;

pub use pipeline::*;
pub use resolver::*;
pub use sort::*;
