use clap::Parser;
use kitshelf::*;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config()?;
    let source = catalog_source(cli.catalog.as_deref(), &config);
    let catalog = load_catalog(&source)?;
    log::debug!(
        "catalog `{}` from {}: {} kits, {} scripts",
        catalog.name,
        source,
        catalog.kits.len(),
        catalog.scripts.len()
    );

    if handle_quiz_commands(&cli, &config, &catalog)? {
        return Ok(());
    }
    handle_browse_commands(&cli, &config, &catalog, &source)
}
