// crates/snip-cli/src/commands/search.rs - Search snippets by substring

use anyhow::Result;
use console::{Style, style};

use crate::context::Context;
use crate::render::{self, Table};

/// Case-insensitive substring search over names, languages, and tags.
/// Matching happens on metadata only; snippet bodies are never read.
pub fn handle(ctx: &Context, query: String) -> Result<()> {
    let results = ctx.store.search(&query)?;

    if results.is_empty() {
        println!(
            "{}",
            style(format!("No snippets matching '{}'", query)).dim()
        );
        return Ok(());
    }

    let mut table = Table::new(format!("Search Results: '{}'", query));
    table.add_column("Name", Style::new().cyan());
    table.add_column("Language", Style::new().green());
    table.add_column("Tags", Style::new().yellow());

    for meta in results.values() {
        table.add_row(vec![
            meta.name.clone(),
            meta.language.clone(),
            render::join_tags(&meta.tags),
        ]);
    }
    table.print();

    println!(
        "\n{}",
        style("Use 'snip get <name>' to view a snippet").dim()
    );
    Ok(())
}
