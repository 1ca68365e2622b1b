// crates/snip-core/src/lib.rs - Core library for the snip snippet manager
//
// The filesystem is the database: a snippet is a content file plus a JSON
// metadata sidecar in one flat directory. This crate owns naming, the
// language table and the store itself; the CLI crate layers argument
// parsing and presentation on top.

pub mod language;
pub mod name;
pub mod store;

pub use language::{LANG_EXTENSIONS, extension_for, language_for_extension};
pub use name::{UNNAMED, sanitize_name};
pub use store::{Snippet, SnippetFiles, SnippetMeta, SnippetStore, StoreError, StoreResult};
