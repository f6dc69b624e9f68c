use serde_json::{json, Map, Value as Json};
use tracing::debug;

use crate::document::{Document, Element};
use crate::error::{MetadataError, Result};

/// Nested `itemscope` depth past which properties are no longer collected.
const MAX_DEPTH: usize = 16;

/// Extracts HTML microdata (schema.org vocabularies and others).
///
/// Output follows the microdata JSON shape:
/// `{"items": [{"type": [..], "id": .., "properties": {name: [values]}}]}`.
pub fn parse_schema_org(doc: &Document) -> Result<Json> {
    let scopes = doc.query("[itemscope]")?;
    let items: Vec<Json> = scopes
        .iter()
        .filter(|el| !el.has_attr("itemprop"))
        .map(|el| item(doc, *el, &mut Vec::new()))
        .collect();

    if items.is_empty() {
        return Err(MetadataError::not_found("No schema.org metadata found in page"));
    }
    Ok(json!({ "items": items }))
}

/// Serializes the item rooted at `scope`. `path` holds the enclosing items;
/// a property that would nest one of them again is skipped.
fn item<'a>(doc: &'a Document, scope: Element<'a>, path: &mut Vec<Element<'a>>) -> Json {
    let mut out = Map::new();
    let types: Vec<&str> = scope.attr("itemtype").map(|t| t.split_whitespace().collect()).unwrap_or_default();
    if !types.is_empty() {
        out.insert("type".to_string(), json!(types));
    }
    if let Some(id) = scope.non_empty_attr("itemid") {
        out.insert("id".to_string(), json!(id));
    }

    let mut props = Map::new();
    path.push(scope);
    if path.len() <= MAX_DEPTH {
        let mut crawled = Vec::new();
        for el in pending(doc, scope) {
            visit(doc, el, path, &mut crawled, &mut props);
        }
    }
    path.pop();

    out.insert("properties".to_string(), Json::Object(props));
    Json::Object(out)
}

/// Children of `scope` followed by its distinct `itemref` targets.
fn pending<'a>(doc: &'a Document, scope: Element<'a>) -> Vec<Element<'a>> {
    let mut pending: Vec<Element<'a>> = scope.children().collect();
    let mut ids: Vec<&str> = Vec::new();
    for id in scope.attr("itemref").unwrap_or_default().split_whitespace() {
        if ids.contains(&id) {
            continue;
        }
        ids.push(id);
        match doc.element_by_id(id) {
            Some(target) => pending.push(target),
            None => debug!(itemref = id, "itemref target missing"),
        }
    }
    pending
}

/// Records `el` if it names properties, then descends unless it starts a
/// nested item (whose properties belong to that item). Each element is
/// crawled at most once per item.
fn visit<'a>(
    doc: &'a Document,
    el: Element<'a>,
    path: &mut Vec<Element<'a>>,
    crawled: &mut Vec<Element<'a>>,
    props: &mut Map<String, Json>,
) {
    if crawled.contains(&el) {
        return;
    }
    crawled.push(el);

    if let Some(names) = el.attr("itemprop") {
        if el.has_attr("itemscope") && path.contains(&el) {
            debug!(itemprop = names, "skipping itemscope that contains itself");
        } else {
            let value = property_value(doc, el, path);
            for name in names.split_whitespace() {
                if let Json::Array(values) = props.entry(name).or_insert_with(|| Json::Array(Vec::new())) {
                    values.push(value.clone());
                }
            }
        }
    }
    if !el.has_attr("itemscope") {
        for child in el.children() {
            visit(doc, child, path, crawled, props);
        }
    }
}

fn property_value<'a>(doc: &'a Document, el: Element<'a>, path: &mut Vec<Element<'a>>) -> Json {
    if el.has_attr("itemscope") {
        return item(doc, el, path);
    }
    let attr = |name: &str| el.attr(name).unwrap_or_default().trim().to_string();
    let value = match el.tag_name() {
        "meta" => attr("content"),
        "audio" | "embed" | "iframe" | "img" | "source" | "track" | "video" => attr("src"),
        "a" | "area" | "link" => attr("href"),
        "object" => attr("data"),
        "data" | "meter" => attr("value"),
        "time" => match el.attr("datetime") {
            Some(dt) => dt.trim().to_string(),
            None => collapse_whitespace(&el.text()),
        },
        _ => collapse_whitespace(&el.text()),
    };
    Json::String(value)
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_items_and_value_rules() {
        let doc = Document::parse(r#"<body>
            <div itemscope itemtype="https://schema.org/Movie" itemid="urn:isan:1">
              <h1 itemprop="name">Turtles of
                the Jungle</h1>
              <meta itemprop="duration" content="PT2H">
              <img itemprop="image" src="http://example.com/turtle.jpg">
              <a itemprop="url sameAs" href="http://example.com/turtles">site</a>
              <time itemprop="datePublished" datetime="2008-01-01">January 2008</time>
              <div itemprop="director" itemscope itemtype="https://schema.org/Person">
                <span itemprop="name">Phil the Turtle</span>
              </div>
              <span itemprop="genre">Nature</span><span itemprop="genre">Drama</span>
            </div>
            </body>"#);
        let got = parse_schema_org(&doc).unwrap();
        assert_eq!(got, json!({"items": [{
            "type": ["https://schema.org/Movie"],
            "id": "urn:isan:1",
            "properties": {
                "name": ["Turtles of the Jungle"],
                "duration": ["PT2H"],
                "image": ["http://example.com/turtle.jpg"],
                "url": ["http://example.com/turtles"],
                "sameAs": ["http://example.com/turtles"],
                "datePublished": ["2008-01-01"],
                "director": [{
                    "type": ["https://schema.org/Person"],
                    "properties": {"name": ["Phil the Turtle"]},
                }],
                "genre": ["Nature", "Drama"],
            }
        }]}));
    }

    #[test]
    fn follows_itemref() {
        let doc = Document::parse(r#"<body>
            <div itemscope itemtype="https://schema.org/Book" itemref="extra missing extra"><span itemprop="name">Shells</span></div>
            <p id="extra"><span itemprop="author">Turtle Lvr</span></p>
            </body>"#);
        let got = parse_schema_org(&doc).unwrap();
        assert_eq!(got["items"][0]["properties"], json!({"name": ["Shells"], "author": ["Turtle Lvr"]}));
        assert_eq!(got["items"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn self_referencing_itemref_terminates() {
        let doc = Document::parse(r#"<div id="loop" itemprop="part" itemscope itemref="loop"></div>
            <div itemscope itemref="loop"></div>"#);
        assert!(parse_schema_org(&doc).is_ok());
    }

    #[test]
    fn fanned_out_itemref_cycle_stays_bounded() {
        let doc = Document::parse(r#"<div id="l" itemprop="p" itemscope itemref="l l l"></div>
            <div itemscope itemref="l"></div>"#);
        let got = parse_schema_org(&doc).unwrap();
        assert_eq!(got, json!({"items": [{"properties": {"p": [{"properties": {}}]}}]}));
    }

    #[test]
    fn itemref_into_own_subtree_is_crawled_once() {
        let doc = Document::parse(r#"<div itemscope itemref="inner">
            <p id="inner"><span itemprop="name">Shells</span></p>
            </div>"#);
        let got = parse_schema_org(&doc).unwrap();
        assert_eq!(got["items"][0]["properties"], json!({"name": ["Shells"]}));
    }

    #[test]
    fn not_found_without_items() {
        let doc = Document::parse(r#"<body><span itemprop="name">orphan</span></body>"#);
        assert!(parse_schema_org(&doc).unwrap_err().is_not_found());
    }
}
