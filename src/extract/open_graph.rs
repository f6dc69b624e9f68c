use tracing::debug;

use crate::document::Document;
use crate::error::{MetadataError, Result};
use crate::value::{MetadataMap, Value};

const REASON: &str = "No openGraph metadata found in page";

/// Properties whose tags open a group that later `<group>:<field>` tags extend.
const GROUPED: [&str; 3] = ["image", "video", "audio"];

/// Parses OpenGraph protocol tags (`<meta property="og:*">`).
///
/// Besides `og:` and `fb:`, a `og:type` declaration such as `video.movie`
/// admits the `video:` prefix for every tag that follows it. Tags of a
/// vertical that appear before its type declaration are ignored.
///
/// `og:image`, `og:video` and `og:audio` each create a `{url}` group; the
/// structured properties that follow (`og:image:width`, ...) attach to the
/// most recent group of that kind, first value wins.
pub fn parse_open_graph(doc: &Document) -> Result<MetadataMap> {
    let tags = doc.query("meta")?;
    if tags.is_empty() {
        return Err(MetadataError::not_found(REASON));
    }

    let mut state = OpenGraphState::new();
    for el in &tags {
        let (Some(property), Some(content)) = (el.non_empty_attr("property"), el.non_empty_attr("content")) else {
            continue;
        };
        state.accept(property, content);
    }
    state.finish()
}

/// Per-call parser state: accepted prefixes, open groups and the result.
struct OpenGraphState {
    namespace: Vec<String>,
    roots: Vec<&'static str>,
    meta: MetadataMap,
}

impl OpenGraphState {
    fn new() -> Self {
        OpenGraphState {
            namespace: vec!["og".to_string(), "fb".to_string()],
            roots: Vec::new(),
            meta: MetadataMap::new(),
        }
    }

    fn accept(&mut self, property: &str, content: &str) {
        let lowered = property.to_lowercase();
        let parts: Vec<&str> = lowered.split(':').collect();
        if !self.namespace.iter().any(|ns| ns == parts[0]) {
            return;
        }
        match parts.as_slice() {
            [_, name] if !name.is_empty() => self.top_level(name, content),
            [_, group, field] if !field.is_empty() => self.structured(group, field, content),
            _ => debug!(property, "discarding malformed OpenGraph property"),
        }
    }

    fn top_level(&mut self, name: &str, content: &str) {
        if let Some(group) = GROUPED.iter().copied().find(|g| *g == name) {
            let mut root = MetadataMap::new();
            root.insert("url", content);
            self.meta.upgrade(name, root);
            if !self.roots.contains(&group) {
                self.roots.push(group);
            }
        } else {
            self.meta.upgrade(name, content);
        }

        if name == "type" {
            let vertical = content.split('.').next().unwrap_or_default().to_lowercase();
            if !vertical.is_empty() && !self.namespace.contains(&vertical) {
                self.namespace.push(vertical);
            }
        }
    }

    fn structured(&mut self, group: &str, field: &str, content: &str) {
        if !self.roots.iter().any(|g| *g == group) {
            return;
        }
        if let Some(root) = self.latest_root(group) {
            if !root.contains_key(field) {
                root.insert(field, content);
            }
        }
    }

    /// The newest group stored under `group`; older ones are closed.
    fn latest_root(&mut self, group: &str) -> Option<&mut MetadataMap> {
        match self.meta.get_mut(group)? {
            Value::Group(root) => Some(root),
            Value::List(items) => items.last_mut()?.as_group_mut(),
            _ => None,
        }
    }

    fn finish(mut self) -> Result<MetadataMap> {
        if self.meta.is_empty() {
            return Err(MetadataError::not_found(REASON));
        }
        if let Some(kind) = self.meta.get_mut("type") {
            kind.lowercase();
        }
        Ok(self.meta)
    }
}
