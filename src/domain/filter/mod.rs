//! Filter evaluation engine.
//!
//! Conditions are validated once against the typed operator registry when the
//! FilterSpec is built; per-event decisions are pure lookups after that.

mod condition;
mod operators;
mod spec;

pub use condition::Condition;
pub use operators::PropertyType;
pub use spec::FilterSpec;

#[allow(unused)]
pub use condition::RawCondition;
#[allow(unused)]
pub use operators::registered_operators;
