use crate::document::{Document, Element};
use crate::error::Result;
use crate::value::MetadataMap;

use super::base::{lower_first, scrape_base, strip_prefix_ci};

/// Dublin Core terms from `<meta name="DC.*">` and `<link rel="DC.*">`,
/// including the `DCTERMS.` prefix.
pub fn parse_dublin_core(doc: &Document) -> Result<MetadataMap> {
    scrape_base(
        doc,
        &["meta", "link"],
        "No Dublin Core metadata found in page",
        |el| {
            let name = el.attr(if is_link(el) { "rel" } else { "name" })?;
            if strip_prefix_ci(name, "DC.").is_none() && strip_prefix_ci(name, "DCTERMS.").is_none() {
                return None;
            }
            // DC.date.issued -> issued
            let property = &name[name.rfind('.')? + 1..];
            if property.is_empty() { None } else { Some(lower_first(property)) }
        },
        |el| {
            el.non_empty_attr(if is_link(el) { "href" } else { "content" })
                .map(str::to_string)
        },
    )
}

fn is_link(el: &Element<'_>) -> bool {
    el.tag_name() == "link"
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn meta_and_link_terms() {
        let doc = Document::parse(r#"<html><head>
            <meta name="DC.title" content="Turtles of the Jungle">
            <link rel="DC.creator" href="http://www.example.com/turtlelvr">
            <meta name="DCTERMS.Created" content="2012-02-04">
            <meta name="DC.date.issued" content="2012-02-04 12:00:00">
            <meta name="DC.type" content="Image.Moving">
            <meta name="description" content="not dublin core">
            </head></html>"#);
        let dc = parse_dublin_core(&doc).unwrap();
        assert_eq!(dc.to_json(), json!({
            "title": "Turtles of the Jungle",
            "creator": "http://www.example.com/turtlelvr",
            "created": "2012-02-04",
            "issued": "2012-02-04 12:00:00",
            "type": "Image.Moving",
        }));
    }

    #[test]
    fn prefix_is_case_insensitive_and_repeats_list() {
        let doc = Document::parse(r#"<head>
            <meta name="dc.Subject" content="turtles">
            <meta name="Dc.subject" content="jungle">
            </head>"#);
        let dc = parse_dublin_core(&doc).unwrap();
        assert_eq!(dc.to_json(), json!({"subject": ["turtles", "jungle"]}));
    }

    #[test]
    fn rejects_pages_without_terms() {
        let doc = Document::parse(r#"<head><meta name="dcx.title" content="no"><link rel="stylesheet" href="a.css"></head>"#);
        assert!(parse_dublin_core(&doc).unwrap_err().is_not_found());
    }
}
