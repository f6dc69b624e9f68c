use tracing::debug;

use crate::document::Document;
use crate::error::{MetadataError, Result};
use crate::value::{MetadataMap, Value};

/// rft fields that may repeat; always reported as lists.
const MULTI_VALUED: [&str; 5] = ["au", "isbn", "issn", "eissn", "aucorp"];

/// Collects every COinS span (`<span class="Z3988" title="...">`) on the page.
pub fn parse_coins(doc: &Document) -> Result<Vec<MetadataMap>> {
    let spans = doc.query("span[class=Z3988]")?;
    let mut found = Vec::new();
    for span in &spans {
        let decoded = span
            .attr("title")
            .ok_or_else(|| MetadataError::invalid("COinS span has no title attribute"))
            .and_then(parse_coins_title);
        match decoded {
            Ok(meta) => found.push(meta),
            Err(e) => debug!(error = %e, "skipping COinS span"),
        }
    }

    if found.is_empty() {
        return Err(MetadataError::not_found("No COinS metadata found"));
    }
    Ok(found)
}

/// Decodes the OpenURL ContextObject carried in a COinS `title` attribute.
///
/// Accepts the raw attribute text as well (`&amp;` separators). Keys are
/// lowercased; `rft.*` keys go into a nested `rft` group and any other dotted
/// key is dropped.
pub fn parse_coins_title(title: &str) -> Result<MetadataMap> {
    let title = title.replace("&amp;", "&");
    let mut meta = MetadataMap::new();
    let mut rft = MetadataMap::new();

    for pair in title.split('&') {
        let mut kv = pair.split('=');
        let (Some(key), Some(raw), None) = (kv.next(), kv.next(), kv.next()) else {
            continue;
        };
        if key.is_empty() {
            continue;
        }
        let key = key.to_lowercase();
        let Some(value) = decode_value(raw) else {
            debug!(key = %key, "undecodable COinS value");
            continue;
        };

        let segments: Vec<&str> = key.split('.').collect();
        match segments.as_slice() {
            [field] => {
                meta.insert(*field, value);
            }
            ["rft", field] if !field.is_empty() => {
                if MULTI_VALUED.contains(field) {
                    push_multi(&mut rft, field, value);
                } else {
                    rft.insert(*field, value);
                }
            }
            _ => {}
        }
    }

    if !rft.is_empty() {
        if let Some(genre) = rft.get_mut("genre") {
            genre.lowercase();
        }
        meta.insert("rft", rft);
    }

    if meta.is_empty() {
        return Err(MetadataError::not_found("No COinS in provided string"));
    }
    Ok(meta)
}

/// A literal `+` is an encoded space; `%2B` stays a plus sign.
fn decode_value(raw: &str) -> Option<String> {
    urlencoding::decode(&raw.replace('+', "%20")).ok().map(|v| v.into_owned())
}

fn push_multi(rft: &mut MetadataMap, field: &str, value: String) {
    match rft.get_mut(field) {
        Some(Value::List(items)) => items.push(Value::Text(value)),
        _ => {
            rft.insert(field, Value::List(vec![Value::Text(value)]));
        }
    }
}
