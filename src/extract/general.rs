use crate::document::{Document, Element};
use crate::error::{MetadataError, Result};
use crate::value::{MetadataMap, Value};

/// Single-valued fields: output key, selector, attribute holding the value.
const FIELDS: [(&str, &str, &str); 7] = [
    ("author", "meta[name=author]", "content"),
    ("authorlink", "link[rel=author]", "href"),
    ("canonical", "link[rel=canonical]", "href"),
    ("description", "meta[name=description]", "content"),
    ("publisher", "link[rel=publisher]", "href"),
    ("robots", "meta[name=robots]", "content"),
    ("shortlink", "link[rel=shortlink]", "href"),
];

const ICON_ATTRS: [&str; 3] = ["href", "sizes", "type"];

/// Plain HTML head metadata that belongs to no particular vocabulary.
pub fn parse_general(doc: &Document) -> Result<MetadataMap> {
    let mut meta = MetadataMap::new();

    for (key, selector, attr) in FIELDS {
        if let Some(value) = doc.first(selector)?.and_then(|el| el.non_empty_attr(attr)) {
            meta.insert(key, value);
        }
    }

    // kept as written; whitespace-only titles count as absent
    if let Some(title) = doc.first("title")?.map(|el| el.text()) {
        if !title.trim().is_empty() {
            meta.insert("title", title);
        }
    }

    let root = doc.root();
    if let Some(lang) = root.non_empty_attr("lang").or_else(|| root.non_empty_attr("xml:lang")) {
        meta.insert("lang", lang);
    }
    if let Some(dir) = root.non_empty_attr("dir") {
        meta.insert("dir", dir);
    }

    let apple = icons(doc, "link[rel=apple-touch-icon], link[rel=apple-touch-icon-precomposed]")?;
    if !apple.is_empty() {
        meta.insert("appleTouchIcons", Value::List(apple));
    }
    let plain = icons(doc, r#"link[rel="shortcut icon"], link[rel=icon]"#)?;
    if !plain.is_empty() {
        meta.insert("icons", Value::List(plain));
    }

    if meta.is_empty() {
        return Err(MetadataError::not_found("No general metadata found in page"));
    }
    Ok(meta)
}

fn icons(doc: &Document, selector: &str) -> Result<Vec<Value>> {
    Ok(doc.query(selector)?.iter().filter_map(icon).collect())
}

fn icon(el: &Element<'_>) -> Option<Value> {
    let group: MetadataMap = ICON_ATTRS
        .iter()
        .filter_map(|name| el.non_empty_attr(name).map(|v| (*name, v)))
        .collect();
    (!group.is_empty()).then(|| Value::Group(group))
}
