//! Extracts structured metadata embedded in HTML pages: Dublin Core,
//! OpenGraph, Twitter Cards, schema.org microdata, JSON-LD, COinS, Highwire
//! Press, BE Press, EPrints, PRISM and plain head tags.
//!
//! ```no_run
//! let all = html_metadata::load_from_string("<meta property=\"og:title\" content=\"Shells\">")?;
//! println!("{}", all.to_json());
//! # Ok::<(), html_metadata::MetadataError>(())
//! ```

pub mod aggregate;
pub mod document;
pub mod error;
pub mod extract;
pub mod load;
pub mod output;
pub mod telemetry;
pub mod value;

#[cfg(test)]
mod testing;

pub use aggregate::{parse_all, parse_all_merged, parse_dialect, AggregateResult};
pub use document::{Document, Element};
pub use error::{MetadataError, Result};
pub use extract::Dialect;
pub use load::{load_from_file, load_from_string, load_from_url, FetchConfig};
pub use value::{MetadataMap, Value};
