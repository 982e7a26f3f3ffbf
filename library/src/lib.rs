pub mod constant;
pub mod diagnostic;
pub mod environment;
pub mod error;
pub mod locale;
pub mod pattern;
pub mod source;

pub use constant::{BUILD_TAG, DEFAULT_LOCALE, EMPTY_LINE, STARTED, VERSION};
pub use environment::{Environment, Settings, bootstrap};
pub use error::{Error, Result};
pub use pattern::{Engine, Pattern};
pub use source::{Source, SourceStats};
