#![warn(clippy::pedantic)]

mod cli;
mod summary;

use anyhow::{Context, Result as AnyResult};
use clap::Parser;

use cli::{Args, Command};

fn setup_logger() {
    let has_term = std::io::IsTerminal::is_terminal(&std::io::stdin());
    // Log to a terminal, if available. Else, log to "glimmer.log" in the working directory.
    if has_term {
        env_logger::builder()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .init();
    } else {
        let _ = simple_logging::log_to_file("glimmer.log", log::LevelFilter::Info);
    }
}

fn info(path: &std::path::Path, legacy: Option<glimmer_core::io::LegacyRevision>) -> AnyResult<()> {
    let art = glimmer_core::io::load_art(path, cli::format(legacy))
        .with_context(|| format!("failed to load {}", path.display()))?;
    print!("{}", summary::Summary(&art));
    Ok(())
}

fn convert(
    input: &std::path::Path,
    output: &std::path::Path,
    legacy: Option<glimmer_core::io::LegacyRevision>,
    to_legacy: Option<glimmer_core::io::LegacyRevision>,
    kind: Option<glimmer_core::ArtKind>,
) -> AnyResult<()> {
    let art = glimmer_core::io::load_art(input, cli::format(legacy))
        .with_context(|| format!("failed to load {}", input.display()))?;
    let from = art.kind();
    let to = cli::target_kind(kind, output, &art);
    let art = art
        .convert(to)
        .with_context(|| format!("failed to convert {from} to {to}"))?;
    glimmer_core::io::save_art(&art, output, cli::format(to_legacy))
        .with_context(|| format!("failed to save {}", output.display()))?;
    log::info!("converted {from} {} to {to} {}", input.display(), output.display());
    Ok(())
}

fn main() -> AnyResult<()> {
    let args = Args::parse();
    setup_logger();

    match args.command {
        Command::Info { path, legacy } => info(&path, legacy),
        Command::Convert {
            input,
            output,
            legacy,
            to_legacy,
            kind,
        } => convert(&input, &output, legacy, to_legacy, kind),
    }
}
