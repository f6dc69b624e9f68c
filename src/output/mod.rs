pub mod config;
pub mod presenter;
pub mod types;

pub use config::{OutputConfig, OutputFormat};
pub use presenter::Emitter;
pub use types::{Envelope, Meta};
