use crate::document::Document;
use crate::error::Result;
use crate::value::MetadataMap;

use super::base::{content_attr, scrape_base, strip_prefix_ci};

pub fn parse_eprints(doc: &Document) -> Result<MetadataMap> {
    let mut meta = scrape_base(
        doc,
        &["meta"],
        "No EPrints metadata found in page",
        |el| {
            let name = el.attr("name")?;
            strip_prefix_ci(name, "eprints.")?;
            Some(name[name.rfind('.')? + 1..].to_lowercase())
        },
        content_attr,
    )?;
    if let Some(kind) = meta.get_mut("type") {
        kind.lowercase();
    }
    Ok(meta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn eprints_fields_and_type_normalized() {
        let doc = Document::parse(r#"<head>
            <meta name="eprints.eprintid" content="113711">
            <meta name="eprints.creators_name" content="Gatherer, Derek">
            <meta name="eprints.creators_name" content="Kohl, Alain">
            <meta name="eprints.type" content="Article">
            <meta name="EPrints.ISSN" content="1234-5678">
            </head>"#);
        let meta = parse_eprints(&doc).unwrap();
        assert_eq!(meta.to_json(), json!({
            "eprintid": "113711",
            "creators_name": ["Gatherer, Derek", "Kohl, Alain"],
            "type": "article",
            "issn": "1234-5678",
        }));
    }

    #[test]
    fn none_without_prefix() {
        let doc = Document::parse(r#"<head><meta name="eprint.type" content="x"></head>"#);
        assert!(parse_eprints(&doc).unwrap_err().is_not_found());
    }
}
