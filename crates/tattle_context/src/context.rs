//! The key/value + metadata bag owned by one failure instance.

use crate::location::SourceLocation;
use crate::value::{FromValue, Value};
use serde::Serialize;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

/// Diagnostic context carried by a single failure.
///
/// A `Context` owns a type tag fixed at construction, the source location of
/// the construction site, and an ordered mapping from string keys to
/// [`Value`]s. Keys are unique (the last write for a key wins) and
/// iteration is in key-sort order so that rendering is deterministic across
/// runs for the same key set.
///
/// No two failures share a `Context`: it is built and consumed sequentially
/// by the thread that raised and is handling the failure, and it is dropped
/// with the failure object.
#[derive(Clone, Debug, Serialize)]
pub struct Context {
    type_name: &'static str,
    location: SourceLocation,
    data: BTreeMap<String, Value>,
}

impl Context {
    /// The reserved key that [`Context::set_message`] writes to.
    pub const MESSAGE_KEY: &'static str = "message";

    /// Creates an empty context tagged with `type_name`, capturing the
    /// caller's source location.
    #[track_caller]
    pub fn new(type_name: &'static str) -> Self {
        Self::at(type_name, SourceLocation::capture())
    }

    /// Creates an empty context tagged with `type_name` at an explicit
    /// location.
    pub fn at(type_name: &'static str, location: SourceLocation) -> Self {
        Self {
            type_name,
            location,
            data: BTreeMap::new(),
        }
    }

    /// Stores `value` under `key`, overwriting any prior value for that key.
    ///
    /// This is the mutation primitive behind the fluent `with` chaining on
    /// failure types.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.data.insert(key.into(), value.into());
    }

    /// Stores the payload-less flag marker under `key`.
    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.data.insert(key.into(), Value::Empty);
    }

    /// Renders `args` and stores the result under the reserved
    /// [`MESSAGE_KEY`](Self::MESSAGE_KEY).
    pub fn set_message(&mut self, args: fmt::Arguments<'_>) {
        self.data
            .insert(Self::MESSAGE_KEY.to_string(), Value::Str(args.to_string()));
    }

    /// Looks up the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Returns `true` if `key` has been set on this context.
    pub fn contains(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Typed lookup of the value stored under `key`.
    ///
    /// An exact alternative match returns the value unchanged; `String`
    /// accepts any alternative via [`Value::to_text`]; numeric targets
    /// accept any numeric alternative via a cast. Everything else, and any
    /// missing key, yields `None` without raising.
    pub fn get_as<T: FromValue>(&self, key: &str) -> Option<T> {
        self.data.get(key).and_then(T::from_value)
    }

    /// Read-only iteration over the data in key-sort order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.data.iter()
    }

    /// The number of keys set on this context.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if no keys have been set.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The concrete failure type's fixed name.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The source location captured at construction.
    pub fn location(&self) -> SourceLocation {
        self.location
    }
}

impl<'a> IntoIterator for &'a Context {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
