use tracing::Span;
use tracing::info_span;

use crate::extract::Dialect;
use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Parse;

#[derive(Copy, Clone, Debug)]
pub enum Phase { Dialect(Dialect), Merge }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self {
        Phase::Dialect(d) => d.key(),
        Phase::Merge => "merge",
    }}
    fn span(&self) -> Span { match self {
        Phase::Dialect(d) => info_span!("dialect", key = d.key()),
        Phase::Merge => info_span!("merge"),
    }}
}

impl OpMarker for Parse {
    const NAME: &'static str = "parse";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("parse") }
}
