use super::reader::Env;
use super::source::{EnvStore, Layered, ProcessEnv};

/// Builder for a reader over several stores.
///
/// Stores are searched in reverse registration order, so later stores
/// override earlier ones. A store that holds a key shadows every store
/// beneath it, even when the value is empty.
///
/// ## Example
///
/// ```
/// use std::collections::HashMap;
/// use envaid::Env;
///
/// let defaults: HashMap<String, String> =
///     [("MYAPP_LOG_LEVEL".to_string(), "info".to_string())].into();
///
/// // defaults -> process environment overrides
/// let env = Env::builder()
///     .with_store(defaults)
///     .with_process_env()
///     .with_prefix("MYAPP_")
///     .build();
///
/// assert_eq!(env.prefix(), "MYAPP_");
/// assert!(env.get("LOG_LEVEL").is_some());
/// ```
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .build() is called"]
pub struct Builder {
    layers: Layered,
    prefix: String,
}

impl Builder {
    /// Adds an injected store on top of the ones already registered.
    pub fn with_store(mut self, store: impl EnvStore + 'static) -> Self {
        self.layers.push(store);
        self
    }

    /// Adds the process environment on top of the stores already registered.
    pub fn with_process_env(self) -> Self {
        self.with_store(ProcessEnv)
    }

    /// Sets a prefix prepended to every key before lookup.
    ///
    /// With prefix `MYAPP_`, reading `PORT` looks up `MYAPP_PORT`.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Builds the reader. With no stores registered every key is absent.
    pub fn build(self) -> Env<Layered> {
        tracing::trace!(
            layers = self.layers.len(),
            prefix = %self.prefix,
            "building environment reader"
        );
        Env::with_prefix(self.layers, self.prefix)
    }
}
