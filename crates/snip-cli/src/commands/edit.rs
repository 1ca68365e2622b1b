// crates/snip-cli/src/commands/edit.rs - Edit a snippet's code or metadata
//
// Two modes. With any metadata flag (-l, -t, --add-tag, --remove-tag) the
// change is applied in place and the editor never opens. Without flags the
// content file opens in the user's editor and the file mtime decides
// whether to report a change.

use std::fs;
use std::io::ErrorKind;
use std::time::SystemTime;

use anyhow::{Context as AnyhowContext, Result};
use console::style;
use snip_core::Snippet;

use crate::context::Context;
use crate::services::EditorService;

pub fn handle(
    ctx: &Context,
    name: String,
    language: Option<String>,
    tags: Vec<String>,
    add_tags: Vec<String>,
    remove_tags: Vec<String>,
) -> Result<()> {
    let Some(snippet) = ctx.store.get(&name)? else {
        eprintln!("{}", style(format!("Snippet '{}' not found", name)).red());
        std::process::exit(1);
    };

    let metadata_mode =
        language.is_some() || !tags.is_empty() || !add_tags.is_empty() || !remove_tags.is_empty();
    if metadata_mode {
        update_metadata(ctx, &name, &snippet, language, tags, add_tags, remove_tags)
    } else {
        open_in_editor(ctx, &name)
    }
}

/// Apply metadata changes. `-t` replaces the tag list wholesale; otherwise
/// additions and removals adjust the current list. A language change moves
/// the content file to the new extension, which goes through delete and
/// re-add so the old file never lingers.
fn update_metadata(
    ctx: &Context,
    name: &str,
    snippet: &Snippet,
    language: Option<String>,
    tags: Vec<String>,
    add_tags: Vec<String>,
    remove_tags: Vec<String>,
) -> Result<()> {
    let new_language = language.unwrap_or_else(|| snippet.meta.language.clone());

    let new_tags = if !tags.is_empty() {
        tags
    } else {
        let mut new_tags = snippet.meta.tags.clone();
        for tag in add_tags {
            if !new_tags.contains(&tag) {
                new_tags.push(tag);
            }
        }
        for tag in &remove_tags {
            if let Some(pos) = new_tags.iter().position(|t| t == tag) {
                new_tags.remove(pos);
            }
        }
        new_tags
    };

    if new_language != snippet.meta.language {
        ctx.store.delete(name)?;
        ctx.store.add(name, &snippet.code, &new_language, new_tags)?;
        println!(
            "{}",
            style(format!("Updated '{}' (language: {})", name, new_language)).green()
        );
    } else {
        ctx.store.update_meta(name, Some(new_tags))?;
        println!("{}", style(format!("Updated '{}' metadata", name)).green());
    }

    Ok(())
}

fn open_in_editor(ctx: &Context, name: &str) -> Result<()> {
    let editor = EditorService::editor_command();

    let files = match ctx.store.locate(name)? {
        Some(files) if files.content.exists() => files,
        _ => {
            eprintln!("{}", style("Snippet file not found").red());
            std::process::exit(1);
        }
    };

    let mtime_before = content_mtime(&files.content)?;

    let status = match EditorService::open_file(&editor, &files.content) {
        Ok(status) => status,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            eprintln!("{}", style(format!("Editor '{}' not found", editor)).red());
            eprintln!(
                "{}",
                style("Set $EDITOR or $VISUAL to a valid editor").dim()
            );
            std::process::exit(1);
        }
        Err(e) => {
            return Err(anyhow::Error::from(e)
                .context(format!("Failed to launch editor '{}'", editor)));
        }
    };

    if !status.success() {
        eprintln!("{}", style("Editor exited with error").red());
        std::process::exit(status.code().unwrap_or(1));
    }

    if content_mtime(&files.content)? > mtime_before {
        println!("{}", style(format!("Snippet '{}' updated", name)).green());
    } else {
        println!("{}", style(format!("No changes made to '{}'", name)).dim());
    }

    Ok(())
}

fn content_mtime(path: &std::path::Path) -> Result<SystemTime> {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .with_context(|| format!("Failed to stat {}", path.display()))
}
