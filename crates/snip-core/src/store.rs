// crates/snip-core/src/store.rs - File-pair snippet storage
//
// Every snippet lives in one flat directory as a pair of files sharing a
// sanitized stem: the content file (extension from the language table) and a
// `<stem>.meta.json` sidecar. The filesystem is the database; the sidecar is
// authoritative for existence. Listing and search only ever read sidecars.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::language::extension_for;
use crate::name::sanitize_name;

/// Errors that can occur during store operations
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid metadata in {path}: {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

const META_SUFFIX: &str = ".meta.json";

/// Metadata sidecar for a single snippet.
///
/// Field order matters: serde_json writes keys in declaration order and the
/// sidecars are meant to stay readable and diffable. `name` keeps the
/// original spelling even when the filename stem had to be sanitized.
/// `created` tolerates hand-edited files that dropped the key, and accepts
/// timestamps with no UTC offset (older sidecars wrote them that way).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnippetMeta {
    pub name: String,
    pub language: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_created"
    )]
    pub created: Option<DateTime<Local>>,
}

/// A snippet with its code loaded.
#[derive(Debug, Clone)]
pub struct Snippet {
    pub meta: SnippetMeta,
    pub code: String,
}

/// Resolved on-disk file pair for one snippet.
#[derive(Debug, Clone, PartialEq)]
pub struct SnippetFiles {
    pub content: PathBuf,
    pub meta: PathBuf,
}

/// Flat-directory snippet store.
///
/// An explicit handle over a root directory; there is no global state, so
/// tests isolate themselves by constructing stores over distinct temp roots.
/// Mutating operations create the root lazily; reads treat a missing root as
/// an empty store.
pub struct SnippetStore {
    root: PathBuf,
}

impl SnippetStore {
    /// Create a store over the given directory without touching disk.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding all snippet files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Compute the file pair for a name and language without touching disk.
    pub fn paths_for(&self, name: &str, language: &str) -> SnippetFiles {
        let stem = sanitize_name(name);
        SnippetFiles {
            content: self
                .root
                .join(format!("{}{}", stem, extension_for(language))),
            meta: self.root.join(format!("{}{}", stem, META_SUFFIX)),
        }
    }

    /// Resolve the file pair of an existing snippet via its stored metadata.
    ///
    /// Returns `None` when no sidecar exists. The content path is computed
    /// from the recorded language and may itself be missing on disk.
    pub fn locate(&self, name: &str) -> StoreResult<Option<SnippetFiles>> {
        let Some(meta) = read_meta(&self.meta_path(name))? else {
            return Ok(None);
        };
        Ok(Some(self.paths_for(name, &meta.language)))
    }

    /// Save a snippet, overwriting any existing snippet of the same name.
    ///
    /// The metadata records the name exactly as given; only the filenames
    /// use the sanitized form. Tags are stored in argument order, duplicates
    /// included. Both files are written atomically (temp file + rename) so a
    /// reader never observes a half-written snippet.
    pub fn add(
        &self,
        name: &str,
        code: &str,
        language: &str,
        tags: Vec<String>,
    ) -> StoreResult<()> {
        self.ensure_root()?;

        let files = self.paths_for(name, language);
        let meta = SnippetMeta {
            name: name.to_string(),
            language: language.to_string(),
            tags,
            created: Some(Local::now()),
        };

        write_atomic(&files.content, code)?;
        write_atomic(&files.meta, &render_meta(&meta, &files.meta)?)?;

        debug!(name, path = %files.content.display(), "snippet written");
        Ok(())
    }

    /// Load a snippet by name.
    ///
    /// A missing sidecar means the snippet does not exist. A present sidecar
    /// with a missing content file yields empty code: metadata presence is
    /// what makes a snippet exist.
    pub fn get(&self, name: &str) -> StoreResult<Option<Snippet>> {
        let Some(meta) = read_meta(&self.meta_path(name))? else {
            return Ok(None);
        };

        let content_path = self.paths_for(name, &meta.language).content;
        let code = match fs::read_to_string(&content_path) {
            Ok(code) => code,
            Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
            Err(source) => {
                return Err(StoreError::Io {
                    path: content_path,
                    source,
                });
            }
        };

        Ok(Some(Snippet { meta, code }))
    }

    /// Delete a snippet. Returns `false` when it does not exist.
    ///
    /// Whichever of the two files exist are removed; an already-missing
    /// content file does not stop the sidecar from being removed.
    pub fn delete(&self, name: &str) -> StoreResult<bool> {
        let Some(files) = self.locate(name)? else {
            return Ok(false);
        };

        remove_if_exists(&files.content)?;
        remove_if_exists(&files.meta)?;

        debug!(name, "snippet deleted");
        Ok(true)
    }

    /// Replace a snippet's tags, leaving name, language and `created` alone.
    ///
    /// Returns `false` when the snippet does not exist. `None` keeps the
    /// current tags. Changing the language is deliberately not supported
    /// here: it would detach the sidecar from its content file. Callers
    /// rename by deleting and re-adding instead.
    pub fn update_meta(&self, name: &str, tags: Option<Vec<String>>) -> StoreResult<bool> {
        let meta_path = self.meta_path(name);
        let Some(mut meta) = read_meta(&meta_path)? else {
            return Ok(false);
        };

        if let Some(tags) = tags {
            meta.tags = tags;
        }

        write_atomic(&meta_path, &render_meta(&meta, &meta_path)?)?;
        Ok(true)
    }

    /// All snippet metadata, keyed by recorded name.
    ///
    /// Scans the root (flat, non-recursive) for sidecars in filename order
    /// so the result is deterministic, and never reads content files. A
    /// sidecar that fails to parse is skipped with a warning; one corrupt
    /// file cannot hide the rest of the store. Should two sidecars record
    /// the same name, the later one in filename order wins.
    pub fn list_all(&self) -> StoreResult<IndexMap<String, SnippetMeta>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(IndexMap::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.root.clone(),
                    source,
                });
            }
        };

        let mut sidecars: Vec<PathBuf> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.ends_with(META_SUFFIX))
            })
            .collect();
        sidecars.sort();

        let mut snippets = IndexMap::new();
        for path in sidecars {
            match read_meta(&path) {
                Ok(Some(meta)) => {
                    snippets.insert(meta.name.clone(), meta);
                }
                // Raced removal between the scan and the read; skip.
                Ok(None) => {}
                Err(StoreError::Metadata { path, source }) => {
                    warn!(path = %path.display(), error = %source, "skipping unreadable sidecar");
                }
                Err(e) => return Err(e),
            }
        }

        Ok(snippets)
    }

    /// Case-insensitive substring search over names, languages and tags.
    pub fn search(&self, query: &str) -> StoreResult<IndexMap<String, SnippetMeta>> {
        let query = query.to_lowercase();
        let mut results = self.list_all()?;
        results.retain(|name, meta| {
            name.to_lowercase().contains(&query)
                || meta.language.to_lowercase().contains(&query)
                || meta.tags.iter().any(|t| t.to_lowercase().contains(&query))
        });
        Ok(results)
    }

    fn meta_path(&self, name: &str) -> PathBuf {
        self.root
            .join(format!("{}{}", sanitize_name(name), META_SUFFIX))
    }

    fn ensure_root(&self) -> StoreResult<()> {
        fs::create_dir_all(&self.root).map_err(|source| StoreError::Io {
            path: self.root.clone(),
            source,
        })
    }
}

/// Accept both timestamp shapes found in sidecars: RFC 3339 with a UTC
/// offset (what `add` writes) and the offset-less `%Y-%m-%dT%H:%M:%S%.f`
/// form from older sidecars, which reads as local time.
fn deserialize_created<'de, D>(deserializer: D) -> Result<Option<DateTime<Local>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(Some(parsed.with_timezone(&Local)));
    }

    let naive = NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map_err(serde::de::Error::custom)?;

    // A wall time skipped by a DST transition has no local representation;
    // read it as UTC instead.
    Ok(Some(
        naive
            .and_local_timezone(Local)
            .earliest()
            .unwrap_or_else(|| Local.from_utc_datetime(&naive)),
    ))
}

/// Read and parse a sidecar, mapping a missing file to `None`.
fn read_meta(path: &Path) -> StoreResult<Option<SnippetMeta>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let meta = serde_json::from_str(&raw).map_err(|source| StoreError::Metadata {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(meta))
}

/// Pretty-print a sidecar (2-space indent, declaration key order).
fn render_meta(meta: &SnippetMeta, path: &Path) -> StoreResult<String> {
    serde_json::to_string_pretty(meta).map_err(|source| StoreError::Metadata {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a file atomically: write a temp sibling, then rename it over the
/// destination. Readers see either the old content or the new, never a
/// partial write.
fn write_atomic(path: &Path, contents: &str) -> StoreResult<()> {
    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(format!(".tmp.{}", std::process::id()));
    let tmp = path.with_file_name(tmp_name);

    let io_err = |path: &Path, source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    fs::write(&tmp, contents).map_err(|e| io_err(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| io_err(path, e))?;
    Ok(())
}

/// Remove a file, treating "already gone" as success.
fn remove_if_exists(path: &Path) -> StoreResult<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(source) => Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, SnippetStore) {
        let dir = TempDir::new().unwrap();
        // Point at a subdirectory that does not exist yet so lazy root
        // creation gets exercised by every mutating test.
        let store = SnippetStore::new(dir.path().join("snippets"));
        (dir, store)
    }

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_add_creates_file_pair() {
        let (_dir, store) = temp_store();
        store.add("hello", "print('hi')", "python", vec![]).unwrap();

        assert!(store.root().join("hello.py").exists());
        assert!(store.root().join("hello.meta.json").exists());
        assert_eq!(
            fs::read_to_string(store.root().join("hello.py")).unwrap(),
            "print('hi')"
        );
    }

    #[test]
    fn test_add_records_metadata() {
        let (_dir, store) = temp_store();
        store
            .add("greet", "def greet(): pass", "python", tags(&["util", "function"]))
            .unwrap();

        let raw = fs::read_to_string(store.root().join("greet.meta.json")).unwrap();
        let meta: SnippetMeta = serde_json::from_str(&raw).unwrap();
        assert_eq!(meta.name, "greet");
        assert_eq!(meta.language, "python");
        assert_eq!(meta.tags, vec!["util", "function"]);
        assert!(meta.created.is_some());
    }

    #[test]
    fn test_add_uses_language_extension() {
        let (_dir, store) = temp_store();
        store.add("script", "echo hi", "bash", vec![]).unwrap();
        store.add("app", "console.log(1)", "javascript", vec![]).unwrap();
        store.add("note", "plain", "klingon", vec![]).unwrap();

        assert!(store.root().join("script.sh").exists());
        assert!(store.root().join("app.js").exists());
        assert!(store.root().join("note.txt").exists());
    }

    #[test]
    fn test_add_preserves_language_case() {
        let (_dir, store) = temp_store();
        store.add("hello", "print('hi')", "Python", vec![]).unwrap();

        let snippet = store.get("hello").unwrap().unwrap();
        assert_eq!(snippet.meta.language, "Python");
        assert!(store.root().join("hello.py").exists());
    }

    #[test]
    fn test_add_overwrites_existing() {
        let (_dir, store) = temp_store();
        store.add("dup", "old", "python", tags(&["a"])).unwrap();
        store.add("dup", "new", "python", tags(&["b"])).unwrap();

        let snippet = store.get("dup").unwrap().unwrap();
        assert_eq!(snippet.code, "new");
        assert_eq!(snippet.meta.tags, vec!["b"]);
    }

    #[test]
    fn test_add_sanitizes_filenames_only() {
        let (_dir, store) = temp_store();
        store
            .add("my/test:snippet", "code", "python", vec![])
            .unwrap();

        assert!(store.root().join("my_test_snippet.py").exists());
        assert!(store.root().join("my_test_snippet.meta.json").exists());

        let snippet = store.get("my/test:snippet").unwrap().unwrap();
        assert_eq!(snippet.meta.name, "my/test:snippet");
    }

    #[test]
    fn test_add_preserves_duplicate_tags() {
        let (_dir, store) = temp_store();
        store.add("x", "code", "python", tags(&["a", "a"])).unwrap();

        let snippet = store.get("x").unwrap().unwrap();
        assert_eq!(snippet.meta.tags, vec!["a", "a"]);
    }

    #[test]
    fn test_get_round_trips() {
        let (_dir, store) = temp_store();
        store
            .add("fib", "fn fib(n: u64) -> u64 { n }", "rust", tags(&["math"]))
            .unwrap();

        let snippet = store.get("fib").unwrap().unwrap();
        assert_eq!(snippet.meta.name, "fib");
        assert_eq!(snippet.meta.language, "rust");
        assert_eq!(snippet.meta.tags, vec!["math"]);
        assert_eq!(snippet.code, "fn fib(n: u64) -> u64 { n }");
    }

    #[test]
    fn test_get_missing_returns_none() {
        let (_dir, store) = temp_store();
        assert!(store.get("nope").unwrap().is_none());
    }

    #[test]
    fn test_get_with_missing_content_file() {
        let (_dir, store) = temp_store();
        store.add("orphan", "code", "python", vec![]).unwrap();
        fs::remove_file(store.root().join("orphan.py")).unwrap();

        let snippet = store.get("orphan").unwrap().unwrap();
        assert_eq!(snippet.code, "");
        assert_eq!(snippet.meta.language, "python");
    }

    #[test]
    fn test_get_tolerates_sidecar_without_created() {
        let (_dir, store) = temp_store();
        fs::create_dir_all(store.root()).unwrap();
        fs::write(
            store.root().join("legacy.meta.json"),
            r#"{"name": "legacy", "language": "python", "tags": []}"#,
        )
        .unwrap();

        let snippet = store.get("legacy").unwrap().unwrap();
        assert_eq!(snippet.meta.name, "legacy");
        assert!(snippet.meta.created.is_none());
        assert_eq!(snippet.code, "");
    }

    #[test]
    fn test_get_reads_created_without_utc_offset() {
        // Older sidecars recorded local timestamps with no UTC offset.
        let (_dir, store) = temp_store();
        fs::create_dir_all(store.root()).unwrap();
        fs::write(
            store.root().join("hello.meta.json"),
            r#"{
  "name": "hello",
  "language": "python",
  "tags": ["greeting"],
  "created": "2024-06-01T10:30:00.123456"
}"#,
        )
        .unwrap();
        fs::write(
            store.root().join("plain.meta.json"),
            r#"{"name": "plain", "language": "text", "tags": [], "created": "2024-06-01T10:30:00"}"#,
        )
        .unwrap();

        let snippet = store.get("hello").unwrap().unwrap();
        let created = snippet.meta.created.unwrap();
        assert_eq!(
            created.naive_local(),
            NaiveDate::from_ymd_opt(2024, 6, 1)
                .unwrap()
                .and_hms_micro_opt(10, 30, 0, 123_456)
                .unwrap()
        );

        let plain = store.get("plain").unwrap().unwrap();
        assert!(plain.meta.created.is_some());
    }

    #[test]
    fn test_get_corrupt_sidecar_is_an_error() {
        let (_dir, store) = temp_store();
        fs::create_dir_all(store.root()).unwrap();
        fs::write(store.root().join("bad.meta.json"), "not json{").unwrap();

        let err = store.get("bad").unwrap_err();
        assert!(matches!(err, StoreError::Metadata { .. }));
    }

    #[test]
    fn test_delete_removes_both_files() {
        let (_dir, store) = temp_store();
        store.add("gone", "code", "python", vec![]).unwrap();

        assert!(store.delete("gone").unwrap());
        assert!(!store.root().join("gone.py").exists());
        assert!(!store.root().join("gone.meta.json").exists());
    }

    #[test]
    fn test_delete_missing_returns_false() {
        let (_dir, store) = temp_store();
        assert!(!store.delete("nope").unwrap());
    }

    #[test]
    fn test_delete_with_only_sidecar() {
        let (_dir, store) = temp_store();
        store.add("half", "code", "python", vec![]).unwrap();
        fs::remove_file(store.root().join("half.py")).unwrap();

        assert!(store.delete("half").unwrap());
        assert!(!store.root().join("half.meta.json").exists());
    }

    #[test]
    fn test_update_meta_replaces_tags_only() {
        let (_dir, store) = temp_store();
        store.add("keep", "code", "python", tags(&["old"])).unwrap();
        let before = store.get("keep").unwrap().unwrap();

        assert!(store.update_meta("keep", Some(tags(&["new", "tags"]))).unwrap());

        let after = store.get("keep").unwrap().unwrap();
        assert_eq!(after.meta.tags, vec!["new", "tags"]);
        assert_eq!(after.meta.name, before.meta.name);
        assert_eq!(after.meta.language, before.meta.language);
        assert_eq!(after.meta.created, before.meta.created);
        assert_eq!(after.code, "code");
    }

    #[test]
    fn test_update_meta_none_keeps_tags() {
        let (_dir, store) = temp_store();
        store.add("same", "code", "python", tags(&["keep"])).unwrap();

        assert!(store.update_meta("same", None).unwrap());
        assert_eq!(store.get("same").unwrap().unwrap().meta.tags, vec!["keep"]);
    }

    #[test]
    fn test_update_meta_missing_returns_false() {
        let (_dir, store) = temp_store();
        assert!(!store.update_meta("nope", Some(vec![])).unwrap());
    }

    #[test]
    fn test_list_all_empty_store() {
        let (_dir, store) = temp_store();
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_list_all_returns_metadata_only() {
        let (_dir, store) = temp_store();
        store.add("one", "code1", "python", tags(&["a"])).unwrap();
        store.add("two", "code2", "javascript", vec![]).unwrap();

        let all = store.list_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all["one"].language, "python");
        assert_eq!(all["two"].language, "javascript");
    }

    #[test]
    fn test_list_all_keys_by_recorded_name() {
        let (_dir, store) = temp_store();
        store.add("my/snip", "code", "python", vec![]).unwrap();

        let all = store.list_all().unwrap();
        assert!(all.contains_key("my/snip"));
        assert!(!all.contains_key("my_snip"));
    }

    #[test]
    fn test_list_all_is_sorted_by_filename() {
        let (_dir, store) = temp_store();
        store.add("beta", "b", "text", vec![]).unwrap();
        store.add("alpha", "a", "text", vec![]).unwrap();
        store.add("gamma", "c", "text", vec![]).unwrap();

        let all = store.list_all().unwrap();
        let names: Vec<&String> = all.keys().collect();
        assert_eq!(names, ["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_list_all_skips_corrupt_sidecars() {
        let (_dir, store) = temp_store();
        store.add("good", "code", "python", vec![]).unwrap();
        fs::write(store.root().join("bad.meta.json"), "{broken").unwrap();

        let all = store.list_all().unwrap();
        assert_eq!(all.len(), 1);
        assert!(all.contains_key("good"));
    }

    #[test]
    fn test_search_matches_name_language_and_tags() {
        let (_dir, store) = temp_store();
        store.add("hello_world", "x", "python", vec![]).unwrap();
        store.add("deploy", "x", "bash", tags(&["ops"])).unwrap();
        store.add("parse", "x", "rust", tags(&["text"])).unwrap();

        assert!(store.search("hello").unwrap().contains_key("hello_world"));
        assert!(store.search("bash").unwrap().contains_key("deploy"));
        assert!(store.search("ops").unwrap().contains_key("deploy"));
        assert_eq!(store.search("hello").unwrap().len(), 1);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let (_dir, store) = temp_store();
        store.add("Hello", "x", "Python", tags(&["Util"])).unwrap();

        assert_eq!(store.search("HELLO").unwrap().len(), 1);
        assert_eq!(store.search("python").unwrap().len(), 1);
        assert_eq!(store.search("util").unwrap().len(), 1);
    }

    #[test]
    fn test_search_no_matches_is_empty() {
        let (_dir, store) = temp_store();
        store.add("test", "x", "python", vec![]).unwrap();
        assert!(store.search("nonexistent").unwrap().is_empty());
    }

    #[test]
    fn test_paths_for_applies_sanitization_and_extension() {
        let (_dir, store) = temp_store();
        let files = store.paths_for("my test", "python");
        assert_eq!(files.content, store.root().join("my test.py"));
        assert_eq!(files.meta, store.root().join("my test.meta.json"));

        let files = store.paths_for("a/b", "javascript");
        assert_eq!(files.content, store.root().join("a_b.js"));
    }

    #[test]
    fn test_locate_uses_recorded_language() {
        let (_dir, store) = temp_store();
        store.add("x", "code", "rust", vec![]).unwrap();

        let files = store.locate("x").unwrap().unwrap();
        assert_eq!(files.content, store.root().join("x.rs"));
        assert!(store.locate("missing").unwrap().is_none());
    }

    #[test]
    fn test_no_temp_files_left_behind() {
        let (_dir, store) = temp_store();
        store.add("a", "1", "python", vec![]).unwrap();
        store.add("b", "2", "bash", tags(&["t"])).unwrap();
        store.update_meta("a", Some(tags(&["x"]))).unwrap();

        for entry in fs::read_dir(store.root()).unwrap().flatten() {
            let name = entry.file_name();
            assert!(
                !name.to_string_lossy().contains(".tmp"),
                "leftover temp file: {:?}",
                name
            );
        }
    }
}
