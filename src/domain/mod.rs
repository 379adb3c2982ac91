//! Domain layer containing core business logic.
//!
//! This module contains:
//! - Event and decision types
//! - The filter evaluation engine (conditions, operator registry, FilterSpec)
//! - Logger with rotation

mod error;
pub mod filter;
pub mod logger;
mod types;

pub use filter::FilterSpec;
pub use types::{Decision, Event};

// Allow unused for potential future use / library API
#[allow(unused)]
pub use error::GateError;

#[allow(unused)]
pub use filter::{Condition, PropertyType};
