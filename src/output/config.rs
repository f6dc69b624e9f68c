use std::env;

pub const FORMAT_VAR: &str = "HTML_METADATA_OUTPUT_FORMAT";
pub const PRETTY_VAR: &str = "HTML_METADATA_OUTPUT_PRETTY";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl OutputConfig {
    pub fn from_env() -> Self {
        Self::from_values(env::var(FORMAT_VAR).ok().as_deref(), env::var(PRETTY_VAR).ok().as_deref())
    }

    fn from_values(format: Option<&str>, pretty: Option<&str>) -> Self {
        let format = match format {
            Some(v) if v.eq_ignore_ascii_case("text") => OutputFormat::Text,
            _ => OutputFormat::Json,
        };
        let pretty = match pretty {
            Some(v) => v == "1" || v.eq_ignore_ascii_case("true") || v.eq_ignore_ascii_case("yes"),
            None => false,
        };
        OutputConfig { format, pretty }
    }
}
