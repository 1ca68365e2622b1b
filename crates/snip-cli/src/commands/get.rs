// crates/snip-cli/src/commands/get.rs - Display a snippet

use anyhow::Result;
use console::style;

use crate::context::Context;
use crate::render;

/// Print a snippet: header line, tags if any, then the body through the
/// highlighter. `--copy` additionally puts the code on the clipboard; a
/// clipboard failure (headless session, no display server) downgrades to
/// a warning rather than failing the whole command.
pub fn handle(ctx: &Context, name: String, copy: bool) -> Result<()> {
    let Some(snippet) = ctx.store.get(&name)? else {
        eprintln!("{}", style(format!("Snippet '{}' not found", name)).red());
        std::process::exit(1);
    };

    println!(
        "{} ({})",
        style(&snippet.meta.name).cyan().bold(),
        snippet.meta.language
    );
    if !snippet.meta.tags.is_empty() {
        println!(
            "{}",
            style(format!("Tags: {}", snippet.meta.tags.join(", "))).dim()
        );
    }
    println!();

    render::print_code(&snippet.code, &snippet.meta.language);

    if copy {
        match copy_to_clipboard(&snippet.code) {
            Ok(()) => println!("\n{}", style("Copied to clipboard!").green()),
            Err(e) => eprintln!(
                "\n{}",
                style(format!("Could not copy to clipboard ({})", e)).yellow()
            ),
        }
    }

    Ok(())
}

fn copy_to_clipboard(code: &str) -> Result<(), arboard::Error> {
    arboard::Clipboard::new()?.set_text(code.to_string())
}
