// crates/snip-cli/src/commands/export.rs - Export a snippet's code to a file

use std::fs;
use std::path::PathBuf;

use anyhow::{Context as AnyhowContext, Result};
use console::style;
use snip_core::{extension_for, sanitize_name};

use crate::context::Context;

/// Write a snippet's code to a file. Without a destination the file lands
/// in the current directory as `<sanitized name><extension>`. Only the
/// code is exported; metadata stays in the store.
pub fn handle(ctx: &Context, name: String, dest: Option<PathBuf>) -> Result<()> {
    let Some(snippet) = ctx.store.get(&name)? else {
        eprintln!("{}", style(format!("Snippet '{}' not found", name)).red());
        std::process::exit(1);
    };

    let dest = dest.unwrap_or_else(|| {
        PathBuf::from(format!(
            "{}{}",
            sanitize_name(&name),
            extension_for(&snippet.meta.language)
        ))
    });

    fs::write(&dest, &snippet.code)
        .with_context(|| format!("Failed to write {}", dest.display()))?;

    println!(
        "{}",
        style(format!("Exported '{}' to {}", name, dest.display())).green()
    );
    Ok(())
}
