use std::fs;

use anyhow::Result;
use ppgen_library::{
    BUILD_TAG, EMPTY_LINE, Engine, Error, STARTED, Settings, Source, SourceStats, VERSION,
    bootstrap, lineno,
};
use tempfile::tempdir;

fn settings(locale: &str) -> Settings {
    Settings {
        locale: locale.to_string(),
    }
}

// Locale changes are process-wide, so every bootstrap check lives in one test.
#[test]
fn test_bootstrap() -> Result<()> {
    let first = bootstrap(&settings("C"))?;
    let second = bootstrap(&settings("C"))?;

    assert_eq!(first, second);
    assert_eq!(first.locale, "C");
    assert_eq!(first.build_tag, BUILD_TAG);
    assert_eq!(first.engine, Engine::active());
    assert_eq!(first.engine_flag, Engine::active().flag());
    assert_eq!(first.version, format!("{}{}", BUILD_TAG, first.engine_flag));
    assert_eq!(first.version, VERSION.as_str());
    assert_eq!(first.started, STARTED.as_str());
    assert!(first.started.ends_with(" GMT"));

    let err = bootstrap(&settings("xx_NOWHERE.bogus")).unwrap_err();
    assert!(matches!(err, Error::Locale { .. }));
    assert!(err.to_string().contains("xx_NOWHERE.bogus"));

    assert_eq!(bootstrap(&settings("C"))?, first);

    Ok(())
}

#[test]
fn test_default_settings_use_english_utf8() {
    let locale = Settings::default().locale;

    assert!(locale.starts_with("en_"));
    assert!(locale.ends_with("UTF-8"));
}

#[test]
fn test_empty_line_pattern() -> Result<()> {
    assert!(EMPTY_LINE.is_match("")?);
    assert!(!EMPTY_LINE.is_match(" ")?);

    Ok(())
}

#[test]
fn test_lineno_macro_accepts_format_arguments() {
    lineno!("{} of {}", 1, 2);
    lineno!("");
}

#[test]
fn test_read_source_file() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("book.txt");

    fs::write(&path, ".dt Sample\n\n.h1\nTITLE\n\n.pb\nText.\n")?;

    let stats = Source::read(&path)?.stats()?;

    assert_eq!(
        stats,
        SourceStats {
            lines: 7,
            empty: 2,
            directives: 3,
        }
    );

    Ok(())
}

#[test]
fn test_read_missing_source() -> Result<()> {
    let dir = tempdir()?;

    let err = Source::read(&dir.path().join("missing.txt")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));

    Ok(())
}
