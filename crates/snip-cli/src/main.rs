// crates/snip-cli/src/main.rs - CLI entry point
//
// Parses arguments, wires up logging and the application context, and
// dispatches to the command handlers. Expected user-facing failures are
// printed by the handlers themselves (red message, exit code 1); anything
// that comes back here as an Err is an actual fault and goes through
// anyhow's reporting.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod context;
mod render;
mod services;
mod stdin;

use cli::{Cli, Commands};
use context::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging();

    let ctx = Context::new(cli.dir)?;

    match cli.command {
        Commands::Add {
            name,
            language,
            tags,
        } => commands::add::handle(&ctx, name, language, tags),
        Commands::Get { name, copy } => commands::get::handle(&ctx, name, copy),
        Commands::List { language, tag } => commands::list::handle(&ctx, language, tag),
        Commands::Search { query } => commands::search::handle(&ctx, query),
        Commands::Delete { name, force } => commands::delete::handle(&ctx, name, force),
        Commands::Export { name, dest } => commands::export::handle(&ctx, name, dest),
        Commands::Import {
            file,
            name,
            language,
            tags,
        } => commands::import::handle(&ctx, file, name, language, tags),
        Commands::Run { name, args } => commands::run::handle(&ctx, name, args),
        Commands::Path => commands::path::handle(&ctx),
        Commands::Edit {
            name,
            language,
            tags,
            add_tags,
            remove_tags,
        } => commands::edit::handle(&ctx, name, language, tags, add_tags, remove_tags),
    }
}

/// Logging goes to stderr so stdout stays clean for piping. Silent unless
/// RUST_LOG asks for more; warnings (e.g. a corrupt metadata file skipped
/// during a listing) always show.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
