use crate::document::Document;
use crate::error::Result;
use crate::value::MetadataMap;

use super::base::{content_attr, lower_first, scrape_base};

/// PRISM (Publishing Requirements for Industry Standard Metadata) tags,
/// e.g. `<meta name="prism.publicationName">`.
pub fn parse_prism(doc: &Document) -> Result<MetadataMap> {
    scrape_base(
        doc,
        &["meta"],
        "No PRISM metadata found in page",
        |el| {
            let mut parts = el.attr("name")?.split('.');
            if !parts.next()?.eq_ignore_ascii_case("prism") {
                return None;
            }
            let property = parts.next().filter(|p| !p.is_empty())?;
            Some(lower_first(property))
        },
        content_attr,
    )
}
