//! Environment stores and the typed reader over them.

mod builder;
mod reader;
mod source;

pub use builder::Builder;
pub use reader::Env;
pub use source::{EnvStore, Layered, ProcessEnv};
