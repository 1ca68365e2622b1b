// crates/snip-cli/src/commands/list.rs - List snippets with optional filters

use anyhow::Result;
use console::{Style, style};

use crate::context::Context;
use crate::render::{self, Table};

/// List all snippets, optionally filtered by exact language or tag (both
/// case-insensitive). Filters are exact matches, not substrings; fuzzy
/// lookup is what `search` is for.
pub fn handle(ctx: &Context, language: Option<String>, tag: Option<String>) -> Result<()> {
    let mut snippets = ctx.store.list_all()?;

    if snippets.is_empty() {
        println!("{}", style("No snippets saved yet.").dim());
        return Ok(());
    }

    if let Some(language) = &language {
        let wanted = language.to_lowercase();
        snippets.retain(|_, meta| meta.language.to_lowercase() == wanted);
    }
    if let Some(tag) = &tag {
        let wanted = tag.to_lowercase();
        snippets.retain(|_, meta| meta.tags.iter().any(|t| t.to_lowercase() == wanted));
    }

    if snippets.is_empty() {
        println!("{}", style("No snippets match the filters.").dim());
        return Ok(());
    }

    let mut table = Table::new("Saved Snippets");
    table.add_column("Name", Style::new().cyan());
    table.add_column("Language", Style::new().green());
    table.add_column("Tags", Style::new().yellow());
    table.add_column("Created", Style::new().dim());

    for meta in snippets.values() {
        table.add_row(vec![
            meta.name.clone(),
            meta.language.clone(),
            render::join_tags(&meta.tags),
            meta.created
                .map(|c| c.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        ]);
    }
    table.print();

    Ok(())
}
