//! Outcome types shared by every query.
//!
//! A miss is a value, not an `Err`: callers match on [`Lookup`] or
//! [`Composition`] before touching fields. On the wire both serialise
//! untagged, so a failure is recognised by its `error` key.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// An identifier that did not resolve, plus every key that would have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFound {
    pub error: String,
    /// Wire name of the alternatives list, e.g. `available_types`.
    pub alternatives_key: &'static str,
    pub alternatives: Vec<String>,
}

impl NotFound {
    pub fn new(
        error: impl Into<String>,
        alternatives_key: &'static str,
        alternatives: Vec<String>,
    ) -> Self {
        Self {
            error: error.into(),
            alternatives_key,
            alternatives,
        }
    }
}

impl Serialize for NotFound {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("error", &self.error)?;
        map.serialize_entry(self.alternatives_key, &self.alternatives)?;
        map.end()
    }
}

/// A chained lookup inside a composition failed. Carries no candidate lists.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CompositionInvalid {
    pub error: String,
}

impl CompositionInvalid {
    pub const INVALID_AIRCRAFT_OR_ERA: &'static str = "Invalid aircraft type or era";

    pub fn aircraft_or_era() -> Self {
        Self {
            error: Self::INVALID_AIRCRAFT_OR_ERA.to_string(),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize)]
#[serde(untagged)]
pub enum Lookup<T> {
    Found(T),
    NotFound(NotFound),
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn into_found(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound(_) => None,
        }
    }

    pub fn not_found(&self) -> Option<&NotFound> {
        match self {
            Lookup::Found(_) => None,
            Lookup::NotFound(miss) => Some(miss),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Lookup<U> {
        match self {
            Lookup::Found(value) => Lookup::Found(f(value)),
            Lookup::NotFound(miss) => Lookup::NotFound(miss),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize)]
#[serde(untagged)]
pub enum Composition<T> {
    Built(T),
    Invalid(CompositionInvalid),
}

impl<T> Composition<T> {
    pub fn is_built(&self) -> bool {
        matches!(self, Composition::Built(_))
    }

    pub fn into_built(self) -> Option<T> {
        match self {
            Composition::Built(value) => Some(value),
            Composition::Invalid(_) => None,
        }
    }

    pub fn invalid(&self) -> Option<&CompositionInvalid> {
        match self {
            Composition::Built(_) => None,
            Composition::Invalid(err) => Some(err),
        }
    }
}
