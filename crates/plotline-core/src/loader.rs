// File: crates/plotline-core/src/loader.rs
// Summary: Dataset loading from JSON arrays of flat objects or headered CSV files.

use std::path::Path;

use log::{debug, info};
use serde_json::{Map, Value as Json};

use crate::error::{ChartError, Result};
use crate::record::Record;

/// Load a dataset, choosing the parser from the file extension.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "json" => load_json(path),
        "csv" => load_csv(path),
        other => Err(ChartError::Parse(format!(
            "unsupported dataset extension '{}' for {}",
            other,
            path.display()
        ))),
    }
}

/// Read a JSON file whose root is an array of flat objects.
pub fn load_json(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ChartError::DataFetch {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_json(&text)?;
    info!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Parse an in-memory JSON document into records.
pub fn parse_json(text: &str) -> Result<Vec<Record>> {
    let root: Json = serde_json::from_str(text).map_err(|e| ChartError::Parse(e.to_string()))?;
    let Json::Array(items) = root else {
        return Err(ChartError::Parse("dataset root must be an array".into()));
    };
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Json::Object(fields) => Ok(Record::from_map(fields)),
            other => Err(ChartError::Parse(format!(
                "element {} is not an object (found {})",
                i,
                json_kind(&other)
            ))),
        })
        .collect()
}

/// Read a headered CSV file. Cells that parse as numbers become numbers,
/// empty cells are left out so accessors report them as missing.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| ChartError::DataFetch {
        path: path.to_path_buf(),
        source,
    })?;
    let records = read_csv(file)?;
    info!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// CSV parsing over any reader.
pub fn read_csv<R: std::io::Read>(reader: R) -> Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers = rdr
        .headers()
        .map_err(|e| ChartError::Parse(e.to_string()))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect::<Vec<_>>();
    debug!("csv headers: {:?}", headers);

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec.map_err(|e| ChartError::Parse(format!("row {}: {}", row, e)))?;
        let mut fields = Map::new();
        for (name, cell) in headers.iter().zip(rec.iter()) {
            let cell = cell.trim();
            if cell.is_empty() {
                continue;
            }
            let value = match cell.parse::<f64>() {
                Ok(n) if n.is_finite() => serde_json::Number::from_f64(n)
                    .map(Json::Number)
                    .unwrap_or_else(|| Json::String(cell.to_string())),
                _ => Json::String(cell.to_string()),
            };
            fields.insert(name.clone(), value);
        }
        out.push(Record::from_map(fields));
    }
    Ok(out)
}

fn json_kind(v: &Json) -> &'static str {
    match v {
        Json::Null => "null",
        Json::Bool(_) => "bool",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}
