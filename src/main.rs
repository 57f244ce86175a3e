use clap::Parser;
use tracing_subscriber::EnvFilter;

use version_check::checker::Checker;
use version_check::report;

/// The check consumes no flags or arguments; clap only provides
/// `--help` and `--version`.
#[derive(Parser)]
#[command(name = "version-check")]
#[command(version, about = "Checks that version declarations stay consistent across project files")]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    // Verdict lines go to stdout; logging stays on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let verdict = Checker::new(std::env::current_dir()?).run();
    for line in report::render(&verdict) {
        println!("{line}");
    }

    if !verdict.passed() {
        std::process::exit(1);
    }
    Ok(())
}
