use std::io::{self, Write};

use super::config::{OutputConfig, OutputFormat};
use super::types::Envelope;

pub trait Presenter: Send + Sync {
    fn emit(&self, env: &Envelope, w: &mut dyn Write) -> io::Result<()>;
}

pub struct JsonPresenter { pub pretty: bool }
impl Presenter for JsonPresenter {
    fn emit(&self, env: &Envelope, w: &mut dyn Write) -> io::Result<()> {
        if self.pretty { serde_json::to_writer_pretty(&mut *w, env).map_err(to_io)? } else { serde_json::to_writer(&mut *w, env).map_err(to_io)? }
        writeln!(w)
    }
}

/// Human-oriented rendering: a status line, then one block per dialect.
pub struct TextPresenter { pub pretty: bool }
impl Presenter for TextPresenter {
    fn emit(&self, env: &Envelope, w: &mut dyn Write) -> io::Result<()> {
        if !env.ok {
            return writeln!(w, "Error ({}): {}", env.op, env.error.as_deref().unwrap_or("unknown error"));
        }
        writeln!(w, "Result: {}", env.op)?;
        match &env.result {
            Some(serde_json::Value::Object(sections)) => {
                for (key, value) in sections {
                    writeln!(w, "[{key}]")?;
                    self.write_value(value, w)?;
                }
            }
            Some(other) => self.write_value(other, w)?,
            None => {}
        }
        Ok(())
    }
}

impl TextPresenter {
    fn write_value(&self, value: &serde_json::Value, w: &mut dyn Write) -> io::Result<()> {
        if self.pretty { serde_json::to_writer_pretty(&mut *w, value).map_err(to_io)? } else { serde_json::to_writer(&mut *w, value).map_err(to_io)? }
        writeln!(w)
    }
}

pub struct Emitter {
    presenter: Box<dyn Presenter>,
}

impl Emitter {
    pub fn from_env(cfg: OutputConfig) -> Self {
        let presenter: Box<dyn Presenter> = match cfg.format {
            OutputFormat::Json => Box::new(JsonPresenter { pretty: cfg.pretty }),
            OutputFormat::Text => Box::new(TextPresenter { pretty: cfg.pretty }),
        };
        Emitter { presenter }
    }

    pub fn emit(&self, env: &Envelope) -> io::Result<()> {
        let mut out = io::stdout();
        self.presenter.emit(env, &mut out)?;
        out.flush()
    }
}

fn to_io(e: serde_json::Error) -> io::Error { io::Error::other(e) }
