use serde::ser::{Serialize, SerializeMap, Serializer};

/// One extracted metadata value.
///
/// Scalars, sub-property groups and repeated properties are separate variants
/// so that the promotion rules (`Value::upgrade`) are plain functions over the
/// shape instead of runtime type checks. `Json` holds payloads that arrive
/// already structured (JSON-LD blocks, microdata item trees).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Group(MetadataMap),
    List(Vec<Value>),
    Json(serde_json::Value),
}

impl Value {
    /// Scalar-to-list upgrade: the first occurrence is stored as is, the
    /// second turns the slot into a list, later ones append.
    pub fn upgrade(existing: Option<Value>, incoming: Value) -> Value {
        match existing {
            None => incoming,
            Some(Value::List(mut items)) => {
                items.push(incoming);
                Value::List(items)
            }
            Some(prev) => Value::List(vec![prev, incoming]),
        }
    }

    pub fn text(s: impl Into<String>) -> Self { Value::Text(s.into()) }

    pub fn as_text(&self) -> Option<&str> {
        match self { Value::Text(s) => Some(s), _ => None }
    }

    pub fn as_group(&self) -> Option<&MetadataMap> {
        match self { Value::Group(m) => Some(m), _ => None }
    }

    pub fn as_group_mut(&mut self) -> Option<&mut MetadataMap> {
        match self { Value::Group(m) => Some(m), _ => None }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self { Value::List(v) => Some(v), _ => None }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Value::Text(s) => s.is_empty(),
            Value::Group(m) => m.is_empty(),
            Value::List(v) => v.is_empty(),
            Value::Json(j) => match j {
                serde_json::Value::Null => true,
                serde_json::Value::String(s) => s.is_empty(),
                serde_json::Value::Array(a) => a.is_empty(),
                serde_json::Value::Object(o) => o.is_empty(),
                _ => false,
            },
        }
    }

    /// Lowercases text in place, including every text item of a list.
    pub fn lowercase(&mut self) {
        match self {
            Value::Text(s) => *s = s.to_lowercase(),
            Value::List(items) => items.iter_mut().for_each(Value::lowercase),
            _ => {}
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self { Value::Text(s.to_string()) }
}

impl From<String> for Value {
    fn from(s: String) -> Self { Value::Text(s) }
}

impl From<MetadataMap> for Value {
    fn from(m: MetadataMap) -> Self { Value::Group(m) }
}

impl From<serde_json::Value> for Value {
    fn from(j: serde_json::Value) -> Self { Value::Json(j) }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Text(s) => serializer.serialize_str(s),
            Value::Group(m) => m.serialize(serializer),
            Value::List(items) => items.serialize(serializer),
            Value::Json(j) => j.serialize(serializer),
        }
    }
}

/// Property name -> value, kept in first-seen order.
///
/// Metadata maps are small (tens of keys), so a vector with linear lookup
/// keeps insertion order without pulling in an ordered-map crate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataMap {
    entries: Vec<(String, Value)>,
}

impl MetadataMap {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.iter_mut().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool { self.get(key).is_some() }

    /// Sets `key`, replacing an existing value in its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.get_mut(&key) {
            Some(slot) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Adds `value` under `key` following the scalar-to-list upgrade rule.
    pub fn upgrade(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.get_mut(&key) {
            Some(slot) => {
                let prev = std::mem::replace(slot, Value::List(Vec::new()));
                *slot = Value::upgrade(Some(prev), value);
            }
            None => self.entries.push((key, value)),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl IntoIterator for MetadataMap {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter { self.entries.into_iter() }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for MetadataMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = MetadataMap::new();
        for (k, v) in iter { map.insert(k, v); }
        map
    }
}

impl Serialize for MetadataMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
