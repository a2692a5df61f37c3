//! Result shapes returned by the typed accessors.

/// Outcome of an accessor called with a default.
///
/// The default's type `D` is independent of the coerced type `T`. A default
/// is handed back exactly as supplied and is never coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolved<T, D> {
    /// The key was present and its value was coerced.
    Present(T),
    /// The key was absent (or, for booleans, held an unrecognized token).
    Default(D),
}

impl<T, D> Resolved<T, D> {
    pub fn is_present(&self) -> bool {
        matches!(self, Resolved::Present(_))
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Resolved::Default(_))
    }

    /// Returns the coerced value, discarding a default.
    pub fn present(self) -> Option<T> {
        match self {
            Resolved::Present(value) => Some(value),
            Resolved::Default(_) => None,
        }
    }

    /// Returns the default, discarding a coerced value.
    pub fn into_default(self) -> Option<D> {
        match self {
            Resolved::Present(_) => None,
            Resolved::Default(default) => Some(default),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Resolved<U, D> {
        match self {
            Resolved::Present(value) => Resolved::Present(f(value)),
            Resolved::Default(default) => Resolved::Default(default),
        }
    }

    pub fn map_default<E, F: FnOnce(D) -> E>(self, f: F) -> Resolved<T, E> {
        match self {
            Resolved::Present(value) => Resolved::Present(value),
            Resolved::Default(default) => Resolved::Default(f(default)),
        }
    }

    /// Collapses both sides into `T`. With `D = T` this simply unwraps.
    pub fn into_value(self) -> T
    where
        D: Into<T>,
    {
        match self {
            Resolved::Present(value) => value,
            Resolved::Default(default) => default.into(),
        }
    }
}

/// An integer parse result: a number, or the not-a-number sentinel when the
/// raw value held no digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parsed<T> {
    Number(T),
    NaN,
}

impl<T> Parsed<T> {
    pub fn is_nan(&self) -> bool {
        matches!(self, Parsed::NaN)
    }

    pub fn number(self) -> Option<T> {
        match self {
            Parsed::Number(value) => Some(value),
            Parsed::NaN => None,
        }
    }
}

impl From<Parsed<i64>> for f64 {
    /// Widens to a float, mapping the sentinel to `f64::NAN`.
    fn from(parsed: Parsed<i64>) -> Self {
        match parsed {
            Parsed::Number(value) => value as f64,
            Parsed::NaN => f64::NAN,
        }
    }
}
