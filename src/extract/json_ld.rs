use tracing::debug;

use crate::document::Document;
use crate::error::{MetadataError, Result};

/// Parses every `<script type="application/ld+json">` block.
///
/// Malformed blocks are skipped. One valid block is returned as is, several
/// come back as an array in document order.
pub fn parse_json_ld(doc: &Document) -> Result<serde_json::Value> {
    let scripts = doc.query(r#"script[type="application/ld+json"]"#)?;
    let mut blocks = Vec::new();
    for (idx, script) in scripts.iter().enumerate() {
        match parse_block(&script.text()) {
            Ok(block) => blocks.push(block),
            Err(e) => debug!(block = idx, error = %e, "skipping malformed JSON-LD"),
        }
    }

    match blocks.len() {
        0 => Err(MetadataError::not_found("No JSON-LD valid script tags present on page")),
        1 => Ok(blocks.remove(0)),
        _ => Ok(serde_json::Value::Array(blocks)),
    }
}

fn parse_block(text: &str) -> Result<serde_json::Value> {
    Ok(serde_json::from_str(text.trim())?)
}
