use tracing::debug;

use crate::document::{Document, Element};
use crate::error::{MetadataError, Result};
use crate::value::MetadataMap;

/// Walks every element matching `selectors` and folds the (property, content)
/// pairs derived by the two closures into one map.
///
/// Elements for which either closure returns `None` are not part of the
/// dialect and are skipped. Repeated properties follow the scalar-to-list
/// upgrade rule, in document order.
pub fn scrape_base<P, C>(
    doc: &Document,
    selectors: &[&str],
    reason: &str,
    property_of: P,
    content_of: C,
) -> Result<MetadataMap>
where
    P: Fn(&Element<'_>) -> Option<String>,
    C: Fn(&Element<'_>) -> Option<String>,
{
    let tags = doc.query(&selectors.join(","))?;
    if tags.is_empty() {
        return Err(MetadataError::not_found(reason));
    }

    let mut meta = MetadataMap::new();
    for el in &tags {
        let Some(property) = property_of(el) else { continue };
        let Some(content) = content_of(el) else { continue };
        meta.upgrade(property, content);
    }

    if meta.is_empty() {
        return Err(MetadataError::not_found(reason));
    }
    debug!(tags = tags.len(), properties = meta.len(), "scraped");
    Ok(meta)
}

/// ASCII case-insensitive `strip_prefix`.
pub(crate) fn strip_prefix_ci<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) { Some(&s[prefix.len()..]) } else { None }
}

pub(crate) fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub(crate) fn content_attr(el: &Element<'_>) -> Option<String> {
    el.non_empty_attr("content").map(str::to_string)
}
