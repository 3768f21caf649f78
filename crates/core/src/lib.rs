//! Request payload types and the validation schemas the Nestre SDK checks
//! them against before anything is sent over the wire.

pub mod assessment;
pub mod cogex;
pub mod content;
pub mod frame;
pub mod login;
pub mod search;
pub mod utility;
pub mod validation;

pub use validation::{FieldRule, Schema, SchemaViolation};
