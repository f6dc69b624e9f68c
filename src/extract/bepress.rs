use crate::document::Document;
use crate::error::Result;
use crate::value::MetadataMap;

use super::base::{content_attr, scrape_base, strip_prefix_ci};

pub fn parse_bepress(doc: &Document) -> Result<MetadataMap> {
    scrape_base(
        doc,
        &["meta"],
        "No BE Press metadata found in page",
        |el| {
            let rest = strip_prefix_ci(el.attr("name")?, "bepress_citation_")?;
            Some(rest.to_lowercase())
        },
        content_attr,
    )
}
