use tracing::debug;

use crate::document::Document;
use crate::error::{MetadataError, Result};
use crate::value::{MetadataMap, Value};

const REASON: &str = "No twitter metadata found in page";

/// Properties that can be a plain value or a group, and the field the plain
/// value moves to once the group appears (`twitter:image` then
/// `twitter:image:width`).
const DUAL_STATE: [(&str, &str); 3] = [("image", "url"), ("player", "url"), ("creator", "@username")];

/// Parses Twitter Card tags (`<meta name="twitter:*">`).
///
/// Nested names build nested groups: `twitter:app:id:iphone` becomes
/// `{app: {id: {iphone: ..}}}`. Groups are updated in place by later tags of
/// the same property rather than being turned into lists.
pub fn parse_twitter(doc: &Document) -> Result<MetadataMap> {
    let tags = doc.query("meta")?;
    let mut meta = MetadataMap::new();

    for el in &tags {
        let (Some(name), Some(content)) = (el.non_empty_attr("name"), el.non_empty_attr("content")) else {
            continue;
        };
        let lowered = name.to_lowercase();
        let parts: Vec<&str> = lowered.split(':').collect();
        if parts[0] != "twitter" {
            continue;
        }
        match parts.as_slice() {
            [_, property] if !property.is_empty() => meta.upgrade(*property, content),
            [_, property, path @ ..] if !property.is_empty() && path.len() <= 2 => {
                attach(&mut meta, property, path, content)
            }
            _ => debug!(name, "discarding malformed twitter property"),
        }
    }

    if meta.is_empty() {
        return Err(MetadataError::not_found(REASON));
    }
    Ok(meta)
}

fn attach(meta: &mut MetadataMap, property: &str, path: &[&str], content: &str) {
    if let Some(node) = latest_group(meta, property) {
        set_path(node, path, content);
        return;
    }

    if !meta.contains_key(property) {
        let mut node = MetadataMap::new();
        set_path(&mut node, path, content);
        meta.insert(property, node);
        return;
    }
    let Some(slot) = meta.get_mut(property) else { return };
    // only dual-state properties may turn a plain value into a group
    let Some(field) = dual_state_field(property) else {
        debug!(property, "plain value blocks nested twitter property");
        return;
    };
    let last = match slot {
        Value::List(items) => items.last_mut(),
        other => Some(other),
    };
    if let Some(last) = last {
        promote(last, field, path, content);
    }
}

/// Turns a plain value into `{field: value}` in place and sets `path` on it.
fn promote(slot: &mut Value, field: &str, path: &[&str], content: &str) {
    if let Value::Text(prev) = slot {
        let mut node = MetadataMap::new();
        node.insert(field, std::mem::take(prev));
        set_path(&mut node, path, content);
        *slot = Value::Group(node);
    }
}

fn dual_state_field(property: &str) -> Option<&'static str> {
    DUAL_STATE.iter().find(|(p, _)| *p == property).map(|(_, field)| *field)
}

fn latest_group<'m>(meta: &'m mut MetadataMap, property: &str) -> Option<&'m mut MetadataMap> {
    match meta.get_mut(property)? {
        Value::Group(node) => Some(node),
        Value::List(items) => items.last_mut()?.as_group_mut(),
        _ => None,
    }
}

fn set_path(node: &mut MetadataMap, path: &[&str], content: &str) {
    match path {
        [field] => {
            node.insert(*field, content);
        }
        [field, leaf] => {
            if let Some(child) = child_group(node, field) {
                child.insert(*leaf, content);
            }
        }
        _ => {}
    }
}

/// Group at `node[field]`, created on demand. A plain `stream` value becomes
/// the group's `url`; any other plain value blocks the nested field.
fn child_group<'m>(node: &'m mut MetadataMap, field: &str) -> Option<&'m mut MetadataMap> {
    let replacement = match node.get(field) {
        Some(Value::Group(_)) => None,
        Some(Value::Text(prev)) if field == "stream" => {
            let mut wrapped = MetadataMap::new();
            wrapped.insert("url", prev.clone());
            Some(wrapped)
        }
        Some(_) => return None,
        None => Some(MetadataMap::new()),
    };
    if let Some(group) = replacement {
        node.insert(field, group);
    }
    node.get_mut(field).and_then(Value::as_group_mut)
}
