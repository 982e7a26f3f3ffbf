use std::{fs, path::Path, str};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    constant::{DIRECTIVE_LINE, EMPTY_LINE},
    error::{Error, Result},
};

const BOM: &[u8] = b"\xEF\xBB\xBF";

/// A pp source loaded into lines with trailing whitespace removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Source {
    lines: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceStats {
    pub lines: usize,
    pub empty: usize,
    pub directives: usize,
}

impl Source {
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)?;
        debug!("Read {} bytes from {}", bytes.len(), path.display());

        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let bytes = bytes.strip_prefix(BOM).unwrap_or(bytes);

        let text = str::from_utf8(bytes).map_err(|e| Error::Encoding {
            line: bytes[..e.valid_up_to()]
                .iter()
                .filter(|&&b| b == b'\n')
                .count()
                + 1,
        })?;

        Ok(Self::from_text(text))
    }

    pub fn from_text(text: &str) -> Self {
        Source {
            lines: text.lines().map(|line| line.trim_end().to_string()).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn stats(&self) -> Result<SourceStats> {
        let mut stats = SourceStats {
            lines: self.lines.len(),
            ..Default::default()
        };

        for line in &self.lines {
            if EMPTY_LINE.is_match(line)? {
                stats.empty += 1;
            } else if DIRECTIVE_LINE.is_match(line)? {
                stats.directives += 1;
            }
        }

        Ok(stats)
    }
}
