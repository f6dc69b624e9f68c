use crate::document::Document;
use crate::error::Result;
use crate::value::MetadataMap;

use super::base::{content_attr, scrape_base, strip_prefix_ci};

/// Highwire Press `citation_*` tags, as read by Google Scholar.
pub fn parse_highwire_press(doc: &Document) -> Result<MetadataMap> {
    scrape_base(
        doc,
        &["meta"],
        "No Highwire Press metadata found in page",
        |el| {
            let rest = strip_prefix_ci(el.attr("name")?, "citation_")?;
            Some(rest.to_lowercase())
        },
        content_attr,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn citation_fields() {
        let doc = Document::parse(r#"<head>
            <meta name="citation_journal_title" content="Microbiology">
            <meta name="citation_author" content="Jacqueline M. Reimers">
            <meta name="citation_author" content="Karen H. Schmidt">
            <meta name="Citation_DOI" content="10.1099/mic.0.26954-0">
            <meta name="citation_author_institution" content="Ohio State">
            </head>"#);
        let meta = parse_highwire_press(&doc).unwrap();
        assert_eq!(meta.to_json(), json!({
            "journal_title": "Microbiology",
            "author": ["Jacqueline M. Reimers", "Karen H. Schmidt"],
            "doi": "10.1099/mic.0.26954-0",
            "author_institution": "Ohio State",
        }));
    }

    #[test]
    fn bepress_names_are_not_highwire() {
        let doc = Document::parse(r#"<head><meta name="bepress_citation_title" content="x"></head>"#);
        assert!(parse_highwire_press(&doc).unwrap_err().is_not_found());
    }
}
