//! Entry points that turn raw HTML, a file or a URL into a [`Document`] and
//! run the aggregator over it.

pub mod fetch;

use std::path::Path;

use crate::aggregate::{parse_all, AggregateResult};
use crate::document::Document;
use crate::error::{MetadataError, Result};
use crate::telemetry::{self};
use crate::telemetry::ops::load::Phase as LoadPhase;

pub use fetch::FetchConfig;

pub fn document_from_string(html: &str) -> Result<Document> {
    if html.trim().is_empty() {
        return Err(MetadataError::invalid("empty HTML document"));
    }
    let log = telemetry::load();
    let _s = log.span_kv(&LoadPhase::ParseHtml, [("bytes", html.len().to_string())]).entered();
    Ok(Document::parse(html))
}

pub fn document_from_file(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    let log = telemetry::load();
    let html = {
        let _s = log.span_kv(&LoadPhase::Read, [("path", path.display().to_string())]).entered();
        std::fs::read_to_string(path)?
    };
    document_from_string(&html)
}

pub async fn document_from_url(url: &str, cfg: &FetchConfig) -> Result<Document> {
    let log = telemetry::load();
    let client = fetch::client(cfg)?;
    // span guards are !Send, so the fetch span is only entered around the log line
    log.span_kv(&LoadPhase::Fetch, [("url", url.to_string())]).in_scope(|| log.debug("fetching"));
    let html = fetch::fetch_page(&client, url).await?;
    log.debug_kv("fetched", [("url", url.to_string()), ("bytes", html.len().to_string())]);
    document_from_string(&html)
}

pub fn load_from_string(html: &str) -> Result<AggregateResult> {
    parse_all(&document_from_string(html)?)
}

pub fn load_from_file(path: impl AsRef<Path>) -> Result<AggregateResult> {
    parse_all(&document_from_file(path)?)
}

pub async fn load_from_url(url: &str, cfg: &FetchConfig) -> Result<AggregateResult> {
    let doc = document_from_url(url, cfg).await?;
    parse_all(&doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::Dialect;
    use crate::testing::TURTLE_ARTICLE;

    #[test]
    fn loads_from_string() {
        let all = load_from_string(TURTLE_ARTICLE).unwrap();
        assert_eq!(all.len(), Dialect::ALL.len());
    }

    #[test]
    fn empty_string_is_invalid() {
        assert!(matches!(load_from_string("  \n"), Err(MetadataError::InvalidArgument(_))));
    }

    #[test]
    fn loads_from_file() {
        let path = std::env::temp_dir().join(format!("html-metadata-{}.html", uuid::Uuid::new_v4()));
        std::fs::write(&path, TURTLE_ARTICLE).unwrap();
        let loaded = load_from_file(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded.unwrap(), load_from_string(TURTLE_ARTICLE).unwrap());
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = std::env::temp_dir().join(format!("html-metadata-missing-{}.html", uuid::Uuid::new_v4()));
        assert!(matches!(load_from_file(&path), Err(MetadataError::Io(_))));
    }

    #[tokio::test]
    async fn bad_url_is_invalid() {
        let err = load_from_url("::nope", &FetchConfig::default()).await.unwrap_err();
        assert!(matches!(err, MetadataError::InvalidArgument(_)));
    }
}
