use indoc::indoc;

pub const AFTER_HELP: &str = indoc! {"
    Every command first sets the process locale (default en_US.UTF-8).
    Use --locale or PPGEN_LOCALE when the host spells the tag differently.
    Set RUST_LOG for finer control over log output than -v gives.
"};

pub const SCAN_AFTER_HELP: &str = indoc! {"
    Lines are counted after trailing whitespace is removed. A directive line
    starts, after optional indentation, with a dot followed by a letter.
"};
