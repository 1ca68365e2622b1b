// crates/snip-cli/src/commands/import.rs - Import a file as a new snippet

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use console::style;
use snip_core::{UNNAMED, language_for_extension, sanitize_name};

use crate::context::Context;

/// Create a snippet from a file. The name defaults to the file stem and
/// the language is detected from the extension (first table match wins,
/// `text` when nothing matches); both can be overridden with flags.
pub fn handle(
    ctx: &Context,
    file: PathBuf,
    name: Option<String>,
    language: Option<String>,
    tags: Vec<String>,
) -> Result<()> {
    let code = match fs::read_to_string(&file) {
        Ok(code) => code,
        Err(e) => {
            eprintln!(
                "{}",
                style(format!("Error: Cannot read '{}': {}", file.display(), e)).red()
            );
            std::process::exit(1);
        }
    };

    let name = name.unwrap_or_else(|| {
        file.file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned()
    });

    if sanitize_name(&name) == UNNAMED {
        eprintln!("{}", style("Error: Invalid snippet name").red());
        eprintln!(
            "{}",
            style("Name must contain at least one alphanumeric character").dim()
        );
        std::process::exit(1);
    }

    let language = language.unwrap_or_else(|| {
        let ext = file
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
            .unwrap_or_default();
        language_for_extension(&ext).to_string()
    });

    ctx.store.add(&name, &code, &language, tags)?;

    let file_name = file
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned();
    println!(
        "{}",
        style(format!("Imported '{}' as snippet '{}'", file_name, name)).green()
    );
    Ok(())
}
