// crates/snip-core/src/name.rs - Snippet name sanitization

/// Characters replaced during sanitization; unsafe in filenames on at least
/// one supported platform.
const UNSAFE_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Fallback stem used when sanitization leaves nothing behind.
pub const UNNAMED: &str = "unnamed";

/// Turn an arbitrary snippet name into a safe filename stem.
///
/// Each filesystem-hostile character becomes an underscore (one per
/// character; runs are not collapsed), then leading and trailing spaces and
/// dots are stripped. Interior spaces and dots survive. A name that
/// sanitizes to nothing becomes `"unnamed"` so the store always has a
/// usable stem.
///
/// The function is total and idempotent: it never fails, never returns an
/// empty string, and running it twice gives the same result as once.
pub fn sanitize_name(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| if UNSAFE_CHARS.contains(&c) { '_' } else { c })
        .collect();

    let trimmed = replaced.trim_matches([' ', '.']);

    if trimmed.is_empty() {
        UNNAMED.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_replaces_unsafe_characters() {
        assert_eq!(sanitize_name("test<>file"), "test__file");
        assert_eq!(sanitize_name("path/to\\file"), "path_to_file");
        assert_eq!(sanitize_name("file:name"), "file_name");
        assert_eq!(sanitize_name("test?*file"), "test__file");
        assert_eq!(sanitize_name("a\"b|c"), "a_b_c");
    }

    #[test]
    fn test_strips_leading_and_trailing_dots_and_spaces() {
        assert_eq!(sanitize_name("...test"), "test");
        assert_eq!(sanitize_name("test..."), "test");
        assert_eq!(sanitize_name("  test  "), "test");
        assert_eq!(sanitize_name("..test.."), "test");
        assert_eq!(sanitize_name(" .test. "), "test");
    }

    #[test]
    fn test_interior_dots_and_spaces_survive() {
        assert_eq!(sanitize_name("  a.b  "), "a.b");
        assert_eq!(sanitize_name("my snippet v2"), "my snippet v2");
    }

    #[test]
    fn test_empty_results_become_unnamed() {
        assert_eq!(sanitize_name(""), UNNAMED);
        assert_eq!(sanitize_name("..."), UNNAMED);
        assert_eq!(sanitize_name("   "), UNNAMED);
        assert_eq!(sanitize_name(" . . "), UNNAMED);
    }

    #[test]
    fn test_ordinary_names_pass_through() {
        assert_eq!(sanitize_name("hello"), "hello");
        assert_eq!(sanitize_name("hello_world"), "hello_world");
        assert_eq!(sanitize_name("fib-memo.v2"), "fib-memo.v2");
    }

    #[test]
    fn test_unicode_passes_through() {
        assert_eq!(sanitize_name("héllo"), "héllo");
        assert_eq!(sanitize_name("日本語"), "日本語");
    }

    proptest! {
        #[test]
        fn sanitize_never_returns_empty(name in ".*") {
            prop_assert!(!sanitize_name(&name).is_empty());
        }

        #[test]
        fn sanitize_is_idempotent(name in ".*") {
            let once = sanitize_name(&name);
            prop_assert_eq!(sanitize_name(&once), once);
        }

        #[test]
        fn sanitized_names_contain_no_unsafe_characters(name in ".*") {
            prop_assert!(!sanitize_name(&name).contains(UNSAFE_CHARS));
        }
    }
}
