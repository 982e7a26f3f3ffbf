use std::path::Path;

use console::style;
use ppgen_library::{Environment, SourceStats};
use tabled::{
    builder::Builder,
    settings::{Style, Theme},
};

pub fn print_environment_table(environment: &Environment) {
    let engine = format!("{} ({:?})", environment.engine.name(), environment.engine);

    print_table(
        ["Property", "Value"],
        vec![
            row("Version", environment.version),
            row("Build Tag", environment.build_tag),
            row("Regex Engine", engine),
            row("Engine Flag", format!("{:?}", environment.engine_flag)),
            row("Locale", &environment.locale),
            row("Started", environment.started),
        ],
    );
}

pub fn print_stats_table(path: &Path, stats: &SourceStats) {
    print_table(
        ["Source", "Lines", "Empty", "Directives"],
        vec![[
            path.display().to_string(),
            stats.lines.to_string(),
            stats.empty.to_string(),
            stats.directives.to_string(),
        ]],
    );
}

fn row(key: &str, value: impl ToString) -> [String; 2] {
    [key.to_string(), value.to_string()]
}

fn print_table<const N: usize>(header: [&str; N], records: Vec<[String; N]>) {
    let header = header
        .iter()
        .map(|s| style(s).green().bold().to_string())
        .collect::<Vec<String>>();

    let mut builder = Builder::default();
    builder.push_record(header);

    for record in records {
        builder.push_record(record);
    }

    let mut table = builder.build();

    let mut style = Theme::from_style(Style::markdown());
    style.remove_borders_horizontal();

    table.with(style);

    println!("{}", table);
}
