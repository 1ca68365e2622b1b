// crates/snip-cli/src/commands/delete.rs - Delete a snippet

use std::io::{self, BufRead, IsTerminal};

use anyhow::Result;
use console::style;
use dialoguer::Confirm;

use crate::context::Context;

/// Delete a snippet after confirmation. `--force` skips the prompt;
/// declining prints "Cancelled" and exits cleanly.
pub fn handle(ctx: &Context, name: String, force: bool) -> Result<()> {
    if ctx.store.locate(&name)?.is_none() {
        eprintln!("{}", style(format!("Snippet '{}' not found", name)).red());
        std::process::exit(1);
    }

    if !force && !confirmed(&name)? {
        println!("{}", style("Cancelled").dim());
        return Ok(());
    }

    ctx.store.delete(&name)?;
    println!("{}", style(format!("Snippet '{}' deleted", name)).green());
    Ok(())
}

/// Interactive runs get a dialoguer prompt. With stdin piped the prompt
/// falls back to reading one line and accepting y/yes, so scripted
/// `echo y | snip delete ...` works.
fn confirmed(name: &str) -> Result<bool> {
    if io::stdin().is_terminal() {
        Ok(Confirm::new()
            .with_prompt(format!("Delete snippet '{}'?", name))
            .default(false)
            .interact()?)
    } else {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        let answer = line.trim().to_lowercase();
        Ok(answer == "y" || answer == "yes")
    }
}
