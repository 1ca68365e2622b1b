// crates/snip-cli/src/commands/run.rs - Execute a snippet with its interpreter

use anyhow::Result;
use console::style;

use crate::context::Context;
use crate::services::RunnerService;

/// Run a snippet through the interpreter for its stored language and exit
/// with the child's status code. Languages without an interpreter mapping
/// are rejected up front.
pub fn handle(ctx: &Context, name: String, args: Vec<String>) -> Result<()> {
    let Some(snippet) = ctx.store.get(&name)? else {
        eprintln!("{}", style(format!("Snippet '{}' not found", name)).red());
        std::process::exit(1);
    };

    let lang = snippet.meta.language.to_lowercase();
    let Some(runner) = RunnerService::for_language(&lang) else {
        eprintln!(
            "{}",
            style(format!("Cannot execute '{}' snippets directly", lang)).red()
        );
        eprintln!(
            "{}",
            style("Supported: python, bash, sh, zsh, node/javascript/js, ruby, perl").dim()
        );
        std::process::exit(1);
    };

    let status = match runner.run(&snippet.code, &args) {
        Ok(status) => status,
        Err(e) => {
            eprintln!("{}", style(format!("Error: {:#}", e)).red());
            std::process::exit(1);
        }
    };

    std::process::exit(status.code().unwrap_or(1));
}
