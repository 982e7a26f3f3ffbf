use std::path::Path;

use ppgen_library::SourceStats;
use serde::Serialize;

pub mod cli;
pub mod constant;
pub mod logging;
pub mod table;

#[derive(Serialize)]
pub struct ScanReport<'a> {
    pub path: &'a Path,
    #[serde(flatten)]
    pub stats: SourceStats,
}
