// File: crates/plotline-core/src/accessor.rs
// Summary: Field accessors: the typed boundary between raw records and scales.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

use crate::error::{ChartError, Result};
use crate::record::{Record, Value};

/// How a field's raw JSON value is interpreted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AccessorKind {
    Number,
    /// Date or date-time string in chrono `strftime` syntax, e.g. `%Y-%m-%d`.
    Time { format: String },
    Category,
}

/// Extracts one semantic value from a record. Never mutates the record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accessor {
    pub field: String,
    #[serde(flatten)]
    pub kind: AccessorKind,
}

impl Accessor {
    pub fn number(field: impl Into<String>) -> Self {
        Self { field: field.into(), kind: AccessorKind::Number }
    }

    pub fn time(field: impl Into<String>, format: impl Into<String>) -> Self {
        Self { field: field.into(), kind: AccessorKind::Time { format: format.into() } }
    }

    pub fn category(field: impl Into<String>) -> Self {
        Self { field: field.into(), kind: AccessorKind::Category }
    }

    pub fn is_time(&self) -> bool {
        matches!(self.kind, AccessorKind::Time { .. })
    }

    fn raw<'r>(&self, record: &'r Record) -> Result<&'r Json> {
        match record.get(&self.field) {
            None | Some(Json::Null) => Err(ChartError::MissingField {
                field: self.field.clone(),
                index: 0,
            }),
            Some(v) => Ok(v),
        }
    }

    /// Extract the value according to this accessor's kind.
    pub fn value(&self, record: &Record) -> Result<Value> {
        match &self.kind {
            AccessorKind::Number => self.number_of(record).map(Value::Number),
            AccessorKind::Time { .. } => self.datetime(record).map(Value::Time),
            AccessorKind::Category => self.category_of(record).map(Value::Category),
        }
    }

    /// Numeric view: numbers as-is, time fields as epoch milliseconds.
    pub fn numeric(&self, record: &Record) -> Result<f64> {
        match &self.kind {
            AccessorKind::Time { .. } => self
                .datetime(record)
                .map(|t| t.and_utc().timestamp_millis() as f64),
            _ => self.number_of(record),
        }
    }

    fn number_of(&self, record: &Record) -> Result<f64> {
        let mismatch = || ChartError::TypeMismatch {
            field: self.field.clone(),
            index: 0,
            expected: "number",
        };
        let n = match self.raw(record)? {
            Json::Number(n) => n.as_f64().ok_or_else(mismatch)?,
            // CSV input and some JSON exports store numbers as strings.
            Json::String(s) => s.trim().parse::<f64>().map_err(|_| mismatch())?,
            _ => return Err(mismatch()),
        };
        if n.is_finite() { Ok(n) } else { Err(mismatch()) }
    }

    /// Parse the field with the declared date format.
    pub fn datetime(&self, record: &Record) -> Result<NaiveDateTime> {
        let AccessorKind::Time { format } = &self.kind else {
            return Err(ChartError::TypeMismatch {
                field: self.field.clone(),
                index: 0,
                expected: "date",
            });
        };
        let Json::String(s) = self.raw(record)? else {
            return Err(ChartError::TypeMismatch {
                field: self.field.clone(),
                index: 0,
                expected: "date string",
            });
        };
        parse_time(s, format).ok_or_else(|| ChartError::DateParse {
            field: self.field.clone(),
            index: 0,
            value: s.clone(),
            format: format.clone(),
        })
    }

    fn category_of(&self, record: &Record) -> Result<String> {
        match self.raw(record)? {
            Json::String(s) => Ok(s.clone()),
            Json::Number(n) => Ok(n.to_string()),
            Json::Bool(b) => Ok(b.to_string()),
            _ => Err(ChartError::TypeMismatch {
                field: self.field.clone(),
                index: 0,
                expected: "category",
            }),
        }
    }

    /// Category label for the record.
    pub fn label(&self, record: &Record) -> Result<String> {
        self.category_of(record)
    }
}

/// Parse a date or date-time; date-only formats land on midnight.
pub fn parse_time(s: &str, format: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, format)
        .ok()
        .or_else(|| NaiveDate::parse_from_str(s, format).ok().map(|d| d.and_time(NaiveTime::MIN)))
}

/// Apply a numeric accessor to every record, failing on the first bad one.
pub fn extract_all(accessor: &Accessor, records: &[Record]) -> Result<Vec<f64>> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| accessor.numeric(r).map_err(|e| e.at_index(i)))
        .collect()
}

/// Apply a category accessor to every record.
pub fn extract_labels(accessor: &Accessor, records: &[Record]) -> Result<Vec<String>> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| accessor.label(r).map_err(|e| e.at_index(i)))
        .collect()
}

/// Named accessors for one chart (`x`, `y`, `color`, ...).
#[derive(Clone, Debug, Default)]
pub struct AccessorSet {
    by_name: BTreeMap<String, Accessor>,
}

impl AccessorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, accessor: Accessor) -> Self {
        self.insert(name, accessor);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, accessor: Accessor) {
        self.by_name.insert(name.into(), accessor);
    }

    pub fn get(&self, name: &str) -> Result<&Accessor> {
        self.by_name
            .get(name)
            .ok_or_else(|| ChartError::UnknownAccessor(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.by_name.keys().map(String::as_str)
    }
}
