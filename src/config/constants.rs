use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const GITHUB_API_BASE: &str = "https://api.github.com";
pub const PAGE_SIZE: u32 = 100;
pub const DEFAULT_OUTPUT_PATH: &str = "loc_report.txt";
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;
pub const USER_AGENT: &str = concat!("gitloc/", env!("CARGO_PKG_VERSION"));

/// Canonical file extension for each language name the CLI accepts in a
/// language filter. Names not listed here pass through unchanged and are
/// treated as extensions themselves.
pub static LANGUAGE_EXTENSIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("c", "c"),
        ("c#", "cs"),
        ("c++", "cpp"),
        ("css", "css"),
        ("dart", "dart"),
        ("elixir", "ex"),
        ("go", "go"),
        ("haskell", "hs"),
        ("html", "html"),
        ("java", "java"),
        ("javascript", "js"),
        ("kotlin", "kt"),
        ("lua", "lua"),
        ("perl", "pl"),
        ("php", "php"),
        ("python", "py"),
        ("r", "r"),
        ("ruby", "rb"),
        ("rust", "rs"),
        ("scala", "scala"),
        ("shell", "sh"),
        ("swift", "swift"),
        ("typescript", "ts"),
        ("zig", "zig"),
    ])
});

/// Map a language name to its canonical extension; unknown names are passed
/// through unchanged.
pub fn extension_for(language: &str) -> String {
    let key = language.to_lowercase();
    LANGUAGE_EXTENSIONS
        .get(key.as_str())
        .map_or(key.clone(), |ext| (*ext).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_language_names_case_insensitively() {
        assert_eq!(extension_for("Rust"), "rs");
        assert_eq!(extension_for("typescript"), "ts");
        assert_eq!(extension_for("C++"), "cpp");
    }

    #[test]
    fn passes_unknown_names_through() {
        assert_eq!(extension_for("vhdl"), "vhdl");
    }
}
