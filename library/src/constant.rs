use std::sync::LazyLock;

use crate::{environment::capture_timestamp, pattern::Engine, pattern::Pattern};

pub const BUILD_TAG: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_LOCALE: &str = "en_US.UTF-8";

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S GMT";

pub static VERSION: LazyLock<String> =
    LazyLock::new(|| format!("{}{}", BUILD_TAG, Engine::active().flag()));

/// UTC wall-clock time of the first read, embedded in generated output.
pub static STARTED: LazyLock<String> = LazyLock::new(capture_timestamp);

pub static EMPTY_LINE: LazyLock<Pattern> =
    LazyLock::new(|| Pattern::new("^$").expect("Failed to compile empty line pattern"));

/// A line whose first non-blank token is a dot followed by a command name.
pub static DIRECTIVE_LINE: LazyLock<Pattern> = LazyLock::new(|| {
    Pattern::new(r"^\s*\.[[:alpha:]]").expect("Failed to compile directive line pattern")
});
