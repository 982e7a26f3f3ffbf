use std::sync::LazyLock;

use chrono::Utc;
use clap::Args;
use log::debug;
use serde::Serialize;

use crate::{
    constant::{BUILD_TAG, DEFAULT_LOCALE, EMPTY_LINE, STARTED, TIMESTAMP_FORMAT, VERSION},
    error::Result,
    locale::set_locale,
    pattern::Engine,
};

/// Startup settings that can be overridden from the command line or the
/// environment.
#[derive(Args, Debug, Clone)]
pub struct Settings {
    /// Locale applied to all categories before processing starts.
    #[arg(long, global = true, env = "PPGEN_LOCALE", default_value = DEFAULT_LOCALE)]
    pub locale: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

/// What the bootstrap fixed for the rest of the process.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub version: &'static str,
    pub build_tag: &'static str,
    pub engine: Engine,
    pub engine_flag: &'static str,
    pub locale: String,
    pub started: &'static str,
}

/// Prepares process-wide state: locale first, then the regex engine, the
/// start timestamp and the version identifier.
///
/// A locale the host cannot provide aborts the bootstrap. Every other value
/// is computed once per process, so calling this again only re-applies the
/// locale.
pub fn bootstrap(settings: &Settings) -> Result<Environment> {
    let locale = set_locale(&settings.locale)?;
    debug!("Locale set to {} (requested {})", locale, settings.locale);

    let engine = Engine::active();
    debug!("Regex engine: {}", engine.name());

    let started = STARTED.as_str();
    debug!("Start time: {}", started);

    let version = VERSION.as_str();
    debug!("Version: {}", version);

    LazyLock::force(&EMPTY_LINE);

    Ok(Environment {
        version,
        build_tag: BUILD_TAG,
        engine,
        engine_flag: engine.flag(),
        locale,
        started,
    })
}

pub fn capture_timestamp() -> String {
    Utc::now().format(TIMESTAMP_FORMAT).to_string()
}
