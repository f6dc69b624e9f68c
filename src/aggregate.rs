use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::document::Document;
use crate::error::{MetadataError, Result};
use crate::extract::Dialect;
use crate::telemetry::{self};
use crate::telemetry::ops::parse::Phase as ParsePhase;
use crate::value::{MetadataMap, Value};

/// Successful dialect results, in registry order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateResult {
    entries: Vec<(Dialect, Value)>,
}

impl AggregateResult {
    pub fn get(&self, dialect: Dialect) -> Option<&Value> {
        self.entries.iter().find(|(d, _)| *d == dialect).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn dialects(&self) -> impl Iterator<Item = Dialect> + '_ {
        self.entries.iter().map(|(d, _)| *d)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dialect, &Value)> {
        self.entries.iter().map(|(d, v)| (*d, v))
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl Serialize for AggregateResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (d, v) in &self.entries {
            map.serialize_entry(d.key(), v)?;
        }
        map.end()
    }
}

/// Runs every registered dialect over `doc` and keeps what succeeded.
///
/// A failing dialect never stops the others; its error is only logged.
pub fn parse_all(doc: &Document) -> Result<AggregateResult> {
    let log = telemetry::parse();
    let _g = log.root_span_kv([("dialects", Dialect::ALL.len().to_string())]).entered();

    let mut out = AggregateResult::default();
    for dialect in Dialect::ALL {
        let _s = log.span(&ParsePhase::Dialect(dialect)).entered();
        match dialect.parse(doc) {
            Ok(value) if !value.is_empty() => out.entries.push((dialect, value)),
            Ok(_) => log.debug_kv("empty result", [("dialect", dialect.key().to_string())]),
            Err(e) if e.is_not_found() => log.debug_kv("absent", [("dialect", dialect.key().to_string()), ("reason", e.to_string())]),
            Err(e) => log.warn_kv("dialect failed", [("dialect", dialect.key().to_string()), ("error", e.to_string())]),
        }
    }

    if out.is_empty() {
        return Err(MetadataError::not_found("No metadata found in page"));
    }
    log.debug_kv("parsed", [("found", out.len().to_string())]);
    Ok(out)
}

/// Runs a single dialect; unlike [`parse_all`] its error is returned as is.
pub fn parse_dialect(doc: &Document, dialect: Dialect) -> Result<Value> {
    let log = telemetry::parse();
    let _s = log.span(&ParsePhase::Dialect(dialect)).entered();
    dialect.parse(doc)
}

/// Flattens every map-shaped dialect result into one map.
///
/// Each property collects the values of every dialect that reported it, in
/// registry order, always as a list. Dialects whose result is not a map
/// (COinS, JSON-LD, microdata) do not take part.
pub fn parse_all_merged(doc: &Document) -> Result<MetadataMap> {
    let all = parse_all(doc)?;
    let log = telemetry::parse();
    let _s = log.span(&ParsePhase::Merge).entered();

    let mut merged = MetadataMap::new();
    for (_, value) in all.iter() {
        let Some(group) = value.as_group() else { continue };
        for (name, v) in group.iter() {
            let incoming = match v {
                Value::List(items) => items.clone(),
                other => vec![other.clone()],
            };
            match merged.get_mut(name) {
                Some(Value::List(items)) => items.extend(incoming),
                _ => {
                    merged.insert(name, Value::List(incoming));
                }
            }
        }
    }

    if merged.is_empty() {
        return Err(MetadataError::not_found("No metadata found in page"));
    }
    Ok(merged)
}
