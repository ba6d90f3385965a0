//! Trace output and secret masking
//!
//! `GCM_TRACE` decides whether a `tracing` subscriber is installed and where
//! it writes: a truthy word sends output to stderr, an absolute path appends
//! to that file. `RUST_LOG` overrides the default `debug` filter.
//!
//! Secrets are masked in trace output unless secret tracing is enabled.

use std::fmt;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing_subscriber::{EnvFilter, fmt as fmt_layer, prelude::*};
use url::Url;

use crate::settings::{Settings, TraceSetting, is_truthy_word};
use crate::{Error, Result};

/// Replacement text for masked secrets.
pub const SECRET_MASK: &str = "********";

static SECRET_TRACING: AtomicBool = AtomicBool::new(false);

/// Allow secrets to appear unmasked in trace output.
pub fn set_secret_tracing(enabled: bool) {
    SECRET_TRACING.store(enabled, Ordering::Relaxed);
}

pub fn is_secret_tracing() -> bool {
    SECRET_TRACING.load(Ordering::Relaxed)
}

/// Displays its value only when secret tracing is enabled.
#[derive(Clone, Copy)]
pub struct Secret<'a>(&'a str);

impl<'a> Secret<'a> {
    pub fn new(value: &'a str) -> Self {
        Self(value)
    }
}

impl fmt::Display for Secret<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if is_secret_tracing() {
            f.write_str(self.0)
        } else {
            f.write_str(SECRET_MASK)
        }
    }
}

impl fmt::Debug for Secret<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}

/// Render `url` with its password masked, unless secret tracing is enabled.
pub fn redact_url(url: &Url) -> String {
    if url.password().is_none() || is_secret_tracing() {
        return url.to_string();
    }
    let mut redacted = url.clone();
    // Only fails for URLs that cannot carry credentials, which have no password.
    let _ = redacted.set_password(Some(SECRET_MASK));
    redacted.to_string()
}

/// Where trace output is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceTarget {
    Stderr,
    File(PathBuf),
}

impl TraceTarget {
    /// Interpret the trace-enable setting; `None` when tracing is off.
    ///
    /// Values that are neither a truthy word nor an absolute path still
    /// enable tracing, to stderr.
    pub fn from_setting(setting: &TraceSetting) -> Option<Self> {
        if !setting.enabled {
            return None;
        }
        let value = setting.value.as_deref()?;
        if !is_truthy_word(value) && Path::new(value).is_absolute() {
            Some(TraceTarget::File(PathBuf::from(value)))
        } else {
            Some(TraceTarget::Stderr)
        }
    }
}

/// Configure secret masking and install a subscriber as `settings` dictate.
///
/// Returns the target written to, or `None` when tracing is disabled.
pub fn init(settings: &Settings<'_>) -> Result<Option<TraceTarget>> {
    set_secret_tracing(settings.is_secret_tracing_enabled()?);

    let Some(target) = TraceTarget::from_setting(&settings.tracing_enabled()) else {
        return Ok(None);
    };
    install(&target)?;
    tracing::debug!(?target, secrets = is_secret_tracing(), "Tracing enabled");
    Ok(Some(target))
}

/// Install a global subscriber writing to `target`.
///
/// Fails if a global subscriber is already installed.
pub fn install(target: &TraceTarget) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("debug"))
        .map_err(|e| Error::TraceInit {
            message: e.to_string(),
        })?;

    let result = match target {
        TraceTarget::Stderr => {
            let layer = fmt_layer::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .compact();
            tracing_subscriber::registry().with(filter).with(layer).try_init()
        }
        TraceTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| Error::TraceTarget {
                    path: path.clone(),
                    source,
                })?;
            let layer = fmt_layer::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true);
            tracing_subscriber::registry().with(filter).with(layer).try_init()
        }
    };

    result.map_err(|e| Error::TraceInit {
        message: e.to_string(),
    })
}
