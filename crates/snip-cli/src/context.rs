// crates/snip-cli/src/context.rs - Application context and dependency injection

use std::env;
use std::path::PathBuf;

use anyhow::{Context as AnyhowContext, Result};
use snip_core::SnippetStore;

/// Shared state passed to every command handler.
///
/// Owns the store handle so handlers never compute storage paths
/// themselves. Directory resolution happens exactly once, here.
pub struct Context {
    pub store: SnippetStore,
}

impl Context {
    /// Build the context, resolving the base directory with the usual
    /// precedence: `--dir` flag, then `SNIP_HOME`, then `~/.snip`.
    ///
    /// A relative base is anchored to the current directory, so `path`
    /// always prints an absolute location.
    ///
    /// Snippets live in a `snippets/` subdirectory of the base so the base
    /// can later hold config or other state without mixing files.
    pub fn new(dir: Option<PathBuf>) -> Result<Self> {
        let base = match dir.or_else(|| env::var("SNIP_HOME").ok().map(PathBuf::from)) {
            Some(base) => base,
            None => dirs::home_dir()
                .context("Could not determine home directory (set SNIP_HOME or pass --dir)")?
                .join(".snip"),
        };

        let base = if base.is_absolute() {
            base
        } else {
            env::current_dir()
                .context("Could not determine current directory")?
                .join(base)
        };

        Ok(Self {
            store: SnippetStore::new(base.join("snippets")),
        })
    }
}
