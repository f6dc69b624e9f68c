//! One parser per metadata dialect, plus the registry that names them.
//!
//! Every parser takes a borrowed [`Document`] and either returns what it
//! found or `MetadataError::NotFound` when the page carries none of its
//! markers. Parsers never share state, so they can run in any order.

pub mod base;
pub mod bepress;
pub mod coins;
pub mod dublin_core;
pub mod eprints;
pub mod general;
pub mod highwire;
pub mod json_ld;
pub mod open_graph;
pub mod prism;
pub mod schema_org;
pub mod twitter;

use std::fmt;
use std::str::FromStr;

use crate::document::Document;
use crate::error::{MetadataError, Result};
use crate::value::Value;

pub use base::scrape_base;
pub use bepress::parse_bepress;
pub use coins::{parse_coins, parse_coins_title};
pub use dublin_core::parse_dublin_core;
pub use eprints::parse_eprints;
pub use general::parse_general;
pub use highwire::parse_highwire_press;
pub use json_ld::parse_json_ld;
pub use open_graph::parse_open_graph;
pub use prism::parse_prism;
pub use schema_org::parse_schema_org;
pub use twitter::parse_twitter;

/// A supported metadata vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    BePress,
    Coins,
    DublinCore,
    Eprints,
    General,
    HighwirePress,
    JsonLd,
    OpenGraph,
    SchemaOrg,
    Twitter,
    Prism,
}

impl Dialect {
    /// Registry order; aggregate output and merged mode follow it.
    pub const ALL: [Dialect; 11] = [
        Dialect::BePress,
        Dialect::Coins,
        Dialect::DublinCore,
        Dialect::Eprints,
        Dialect::General,
        Dialect::HighwirePress,
        Dialect::JsonLd,
        Dialect::OpenGraph,
        Dialect::SchemaOrg,
        Dialect::Twitter,
        Dialect::Prism,
    ];

    /// Key under which this dialect's result is reported.
    pub fn key(&self) -> &'static str {
        match self {
            Dialect::BePress => "bePress",
            Dialect::Coins => "coins",
            Dialect::DublinCore => "dublinCore",
            Dialect::Eprints => "eprints",
            Dialect::General => "general",
            Dialect::HighwirePress => "highwirePress",
            Dialect::JsonLd => "jsonLd",
            Dialect::OpenGraph => "openGraph",
            Dialect::SchemaOrg => "schemaOrg",
            Dialect::Twitter => "twitter",
            Dialect::Prism => "prism",
        }
    }

    /// Case-insensitive lookup by key.
    pub fn from_key(key: &str) -> Option<Dialect> {
        Dialect::ALL.into_iter().find(|d| d.key().eq_ignore_ascii_case(key))
    }

    pub fn parse(&self, doc: &Document) -> Result<Value> {
        let value: Value = match self {
            Dialect::BePress => parse_bepress(doc)?.into(),
            Dialect::Coins => Value::List(parse_coins(doc)?.into_iter().map(Value::Group).collect()),
            Dialect::DublinCore => parse_dublin_core(doc)?.into(),
            Dialect::Eprints => parse_eprints(doc)?.into(),
            Dialect::General => parse_general(doc)?.into(),
            Dialect::HighwirePress => parse_highwire_press(doc)?.into(),
            Dialect::JsonLd => parse_json_ld(doc)?.into(),
            Dialect::OpenGraph => parse_open_graph(doc)?.into(),
            Dialect::SchemaOrg => parse_schema_org(doc)?.into(),
            Dialect::Twitter => parse_twitter(doc)?.into(),
            Dialect::Prism => parse_prism(doc)?.into(),
        };
        Ok(value)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Dialect {
    type Err = MetadataError;

    fn from_str(s: &str) -> Result<Self> {
        Dialect::from_key(s).ok_or_else(|| MetadataError::invalid(format!("unknown dialect: {s}")))
    }
}
