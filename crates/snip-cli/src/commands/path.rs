// crates/snip-cli/src/commands/path.rs - Print the snippet storage directory

use anyhow::Result;

use crate::context::Context;

/// Print the resolved storage directory, unstyled, for use in shell
/// substitution like `cd $(snip path)`.
pub fn handle(ctx: &Context) -> Result<()> {
    println!("{}", ctx.store.root().display());
    Ok(())
}
