// crates/snip-cli/src/commands/add.rs - Save a new snippet from stdin

use anyhow::Result;
use console::style;
use snip_core::{UNNAMED, sanitize_name};

use crate::context::Context;
use crate::stdin;

/// Save a new snippet, reading the body from stdin.
///
/// Validation happens before anything touches disk: a name with no usable
/// characters and a body that is empty or only whitespace are both
/// rejected. An existing snippet with the same name is overwritten.
pub fn handle(ctx: &Context, name: String, language: String, tags: Vec<String>) -> Result<()> {
    if sanitize_name(&name) == UNNAMED {
        eprintln!("{}", style("Error: Invalid snippet name").red());
        eprintln!(
            "{}",
            style("Name must contain at least one alphanumeric character").dim()
        );
        std::process::exit(1);
    }

    if stdin::is_interactive() {
        eprintln!(
            "{}",
            style("Enter your code snippet (Ctrl+D when done):").yellow()
        );
    }

    let code = stdin::read_body()?;
    if code.trim().is_empty() {
        eprintln!("{}", style("Error: Empty snippet").red());
        std::process::exit(1);
    }

    ctx.store.add(&name, &code, &language, tags)?;
    println!("{}", style(format!("Snippet '{}' saved!", name)).green());
    Ok(())
}
