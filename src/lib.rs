//! Typed access to environment configuration.
//!
//! [`Env`] reads raw string values from an [`EnvStore`] (the process
//! environment by default) and coerces them to integers, floats, booleans,
//! JSON, comma-separated arrays, or byte buffers. Absent keys resolve to a
//! caller-supplied default of any type, returned untouched.

pub mod coerce;
mod env;
mod error;
mod value;

pub use coerce::Encoding;
pub use env::{Builder, Env, EnvStore, Layered, ProcessEnv};
pub use error::Error;
pub use value::{Parsed, Resolved};
