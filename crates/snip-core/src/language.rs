// crates/snip-core/src/language.rs - Language/extension mapping

/// Language-to-extension table, lowercase on both sides.
///
/// Single source of truth for both lookup directions. Canonical names come
/// before their aliases so the first match in a reverse scan is the
/// canonical spelling: `.js` resolves to `javascript`, not `js`.
pub const LANG_EXTENSIONS: &[(&str, &str)] = &[
    ("python", ".py"),
    ("javascript", ".js"),
    ("js", ".js"),
    ("typescript", ".ts"),
    ("ts", ".ts"),
    ("rust", ".rs"),
    ("go", ".go"),
    ("c", ".c"),
    ("cpp", ".cpp"),
    ("c++", ".cpp"),
    ("csharp", ".cs"),
    ("c#", ".cs"),
    ("java", ".java"),
    ("kotlin", ".kt"),
    ("scala", ".scala"),
    ("ruby", ".rb"),
    ("php", ".php"),
    ("swift", ".swift"),
    ("perl", ".pl"),
    ("lua", ".lua"),
    ("r", ".r"),
    ("julia", ".jl"),
    ("dart", ".dart"),
    ("haskell", ".hs"),
    ("elixir", ".ex"),
    ("erlang", ".erl"),
    ("clojure", ".clj"),
    ("zig", ".zig"),
    ("nim", ".nim"),
    ("bash", ".sh"),
    ("sh", ".sh"),
    ("shell", ".sh"),
    ("zsh", ".sh"),
    ("fish", ".fish"),
    ("powershell", ".ps1"),
    ("sql", ".sql"),
    ("html", ".html"),
    ("css", ".css"),
    ("scss", ".scss"),
    ("sass", ".sass"),
    ("less", ".less"),
    ("json", ".json"),
    ("yaml", ".yaml"),
    ("yml", ".yaml"),
    ("toml", ".toml"),
    ("xml", ".xml"),
    ("markdown", ".md"),
    ("md", ".md"),
    ("tex", ".tex"),
    ("vim", ".vim"),
    ("dockerfile", ".dockerfile"),
    ("text", ".txt"),
    ("txt", ".txt"),
];

/// Resolve a language name to its file extension (leading dot included).
///
/// Lookup is case-insensitive. Unknown languages fall back to `.txt` so a
/// snippet can always be written somewhere sensible.
pub fn extension_for(language: &str) -> &'static str {
    LANG_EXTENSIONS
        .iter()
        .find(|(lang, _)| lang.eq_ignore_ascii_case(language))
        .map(|(_, ext)| *ext)
        .unwrap_or(".txt")
}

/// Resolve a dot-prefixed file extension back to a language name.
///
/// Scans the same table in declaration order, so canonical names win over
/// aliases. Unknown extensions fall back to `text`.
pub fn language_for_extension(ext: &str) -> &'static str {
    LANG_EXTENSIONS
        .iter()
        .find(|(_, e)| e.eq_ignore_ascii_case(ext))
        .map(|(lang, _)| *lang)
        .unwrap_or("text")
}
