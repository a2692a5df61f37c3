use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use super::builder::Builder;
use super::source::{EnvStore, Layered, ProcessEnv};
use crate::coerce::{parse_bool, parse_float, parse_int, split_array, Encoding};
use crate::{Error, Parsed, Resolved};

/// Typed reader over an environment store.
///
/// Every accessor looks the key up on each call; nothing is cached. When the
/// key is absent the `*_or` accessors return the caller's default untouched,
/// whatever its type, and the plain accessors return `None`.
///
/// ## Example
///
/// ```
/// use std::collections::BTreeMap;
/// use envaid::{Env, Parsed, Resolved};
///
/// let store: BTreeMap<String, String> = [
///     ("PORT".to_string(), "8080".to_string()),
///     ("DEBUG".to_string(), "yes".to_string()),
///     ("HOSTS".to_string(), "[a.local, b.local]".to_string()),
/// ]
/// .into_iter()
/// .collect();
///
/// let env = Env::new(store);
///
/// assert_eq!(env.int("PORT"), Some(Parsed::Number(8080)));
/// assert_eq!(env.bool("DEBUG"), Some(true));
/// assert_eq!(env.array("HOSTS"), Some(vec!["a.local".to_string(), "b.local".to_string()]));
/// assert_eq!(env.float_or("RATIO", "unset"), Resolved::Default("unset"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Env<S = ProcessEnv> {
    store: S,
    prefix: String,
}

impl Env<ProcessEnv> {
    /// Creates a reader over the process environment.
    pub fn process() -> Self {
        Self::new(ProcessEnv)
    }
}

impl Env<Layered> {
    /// Creates a builder for a reader over layered stores.
    pub fn builder() -> Builder {
        Builder::default()
    }
}

impl<S: EnvStore> Env<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            prefix: String::new(),
        }
    }

    pub(crate) fn with_prefix(store: S, prefix: String) -> Self {
        Self { store, prefix }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Prefix prepended to every key before lookup. Empty by default.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn raw(&self, key: &str) -> Option<String> {
        if self.prefix.is_empty() {
            self.store.lookup(key)
        } else {
            self.store.lookup(&format!("{}{}", self.prefix, key))
        }
    }

    fn resolve<T, D>(
        &self,
        key: &str,
        default: D,
        coerce: impl FnOnce(String) -> T,
    ) -> Resolved<T, D> {
        match self.raw(key) {
            Some(raw) => Resolved::Present(coerce(raw)),
            None => {
                tracing::trace!(key, prefix = %self.prefix, "key absent, using default");
                Resolved::Default(default)
            }
        }
    }

    /// Returns the raw value of `key`.
    pub fn get(&self, key: &str) -> Option<String> {
        self.raw(key)
    }

    pub fn get_or<D>(&self, key: &str, default: D) -> Resolved<String, D> {
        self.resolve(key, default, |raw| raw)
    }

    /// Parses `key` as a base-10 integer.
    ///
    /// A present value without leading digits yields [`Parsed::NaN`] rather
    /// than an error.
    pub fn int(&self, key: &str) -> Option<Parsed<i64>> {
        self.int_or(key, ()).present()
    }

    pub fn int_or<D>(&self, key: &str, default: D) -> Resolved<Parsed<i64>, D> {
        self.resolve(key, default, |raw| {
            let parsed = parse_int(&raw);
            if parsed.is_nan() {
                tracing::trace!(key, "value is not an integer");
            }
            parsed
        })
    }

    /// Parses `key` as a float. A present value without a numeric prefix
    /// yields `f64::NAN`.
    pub fn float(&self, key: &str) -> Option<f64> {
        self.float_or(key, ()).present()
    }

    pub fn float_or<D>(&self, key: &str, default: D) -> Resolved<f64, D> {
        self.resolve(key, default, |raw| {
            let parsed = parse_float(&raw);
            if parsed.is_nan() {
                tracing::trace!(key, "value is not a float");
            }
            parsed
        })
    }

    /// Reads `key` as a boolean token (see [`crate::coerce::LEXICON`]).
    ///
    /// An unrecognized token is treated as if the key were absent.
    pub fn bool(&self, key: &str) -> Option<bool> {
        self.bool_or(key, ()).present()
    }

    pub fn bool_or<D>(&self, key: &str, default: D) -> Resolved<bool, D> {
        match self.raw(key).map(|raw| (parse_bool(&raw), raw)) {
            Some((Some(value), _)) => Resolved::Present(value),
            Some((None, _)) => {
                tracing::trace!(key, "unrecognized boolean token, using default");
                Resolved::Default(default)
            }
            None => {
                tracing::trace!(key, prefix = %self.prefix, "key absent, using default");
                Resolved::Default(default)
            }
        }
    }

    /// Parses `key` as a JSON document.
    ///
    /// Fails with [`Error::Json`] when the present value is not valid JSON.
    pub fn json(&self, key: &str) -> Result<Option<Value>, Error> {
        self.json_or(key, ()).map(Resolved::present)
    }

    pub fn json_or<D>(&self, key: &str, default: D) -> Result<Resolved<Value, D>, Error> {
        self.json_as_or(key, default)
    }

    /// Deserializes the JSON in `key` straight into `T`.
    pub fn json_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, Error> {
        self.json_as_or(key, ()).map(Resolved::present)
    }

    pub fn json_as_or<T: DeserializeOwned, D>(
        &self,
        key: &str,
        default: D,
    ) -> Result<Resolved<T, D>, Error> {
        match self.resolve(key, default, |raw| parse_json(&raw)) {
            Resolved::Present(parsed) => parsed
                .map(Resolved::Present)
                .map_err(|source| Error::Json {
                    key: key.to_string(),
                    source,
                }),
            Resolved::Default(default) => Ok(Resolved::Default(default)),
        }
    }

    /// Splits `key` on commas, trimming the value and every element.
    pub fn array(&self, key: &str) -> Option<Vec<String>> {
        self.array_with(key, true)
    }

    pub fn array_or<D>(&self, key: &str, default: D) -> Resolved<Vec<String>, D> {
        self.array_or_with(key, default, true)
    }

    /// Splits `key` on commas; `trim` controls whitespace trimming.
    ///
    /// One pair of enclosing brackets is removed first, so `[a,b]` and `a,b`
    /// read the same.
    pub fn array_with(&self, key: &str, trim: bool) -> Option<Vec<String>> {
        self.array_or_with(key, (), trim).present()
    }

    pub fn array_or_with<D>(
        &self,
        key: &str,
        default: D,
        trim: bool,
    ) -> Resolved<Vec<String>, D> {
        self.resolve(key, default, |raw| split_array(&raw, trim))
    }

    /// Returns the UTF-8 bytes of `key`.
    pub fn buffer(&self, key: &str) -> Option<Vec<u8>> {
        self.buffer_or(key, ()).present()
    }

    pub fn buffer_or<D>(&self, key: &str, default: D) -> Resolved<Vec<u8>, D> {
        self.resolve(key, default, String::into_bytes)
    }

    /// Converts `key` to bytes using the named encoding.
    ///
    /// The name is only checked when the key is present; an unrecognized name
    /// fails with [`Error::UnknownEncoding`].
    pub fn buffer_with(&self, key: &str, encoding: &str) -> Result<Option<Vec<u8>>, Error> {
        self.buffer_or_with(key, (), encoding).map(Resolved::present)
    }

    pub fn buffer_or_with<D>(
        &self,
        key: &str,
        default: D,
        encoding: &str,
    ) -> Result<Resolved<Vec<u8>, D>, Error> {
        match self.resolve(key, default, |raw| raw) {
            Resolved::Present(raw) => {
                let encoding: Encoding = encoding.parse()?;
                Ok(Resolved::Present(encoding.to_bytes(&raw)))
            }
            Resolved::Default(default) => Ok(Resolved::Default(default)),
        }
    }
}

/// Parses a complete JSON document without a nesting limit. Deep documents
/// grow the stack on demand instead of overflowing it.
fn parse_json<T: DeserializeOwned>(raw: &str) -> Result<T, serde_json::Error> {
    let mut de = serde_json::Deserializer::from_str(raw);
    de.disable_recursion_limit();
    let value = T::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}
