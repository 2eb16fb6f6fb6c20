// File: crates/plotline-core/src/record.rs
// Summary: Opaque flat records and the typed values accessors pull out of them.

use chrono::NaiveDateTime;
use serde_json::{Map, Value as Json};

/// One row of a dataset: a flat field -> JSON value map.
///
/// Records carry no schema. Accessors are the only typed view into them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    fields: Map<String, Json>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(fields: Map<String, Json>) -> Self {
        Self { fields }
    }

    /// Builder-style insert, handy for tests and synthetic data.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Json>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Json>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&Json> {
        self.fields.get(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A value extracted by an accessor.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Time(NaiveDateTime),
    Category(String),
}

