mod library;

use library::cli::run;

fn main() -> anyhow::Result<()> {
    run()
}
