use tracing::Span;
use tracing::info_span;

use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Load;

#[derive(Copy, Clone, Debug)]
pub enum Phase { Fetch, Read, ParseHtml }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self {
        Phase::Fetch => "fetch",
        Phase::Read => "read",
        Phase::ParseHtml => "parse_html",
    }}
    fn span(&self) -> Span { match self {
        Phase::Fetch => info_span!("fetch"),
        Phase::Read => info_span!("read"),
        Phase::ParseHtml => info_span!("parse_html"),
    }}
}

impl OpMarker for Load {
    const NAME: &'static str = "load";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("load") }
}
