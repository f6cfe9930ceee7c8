//! Language labels offered by the create/edit form.
//!
//! Read from a JSON array of strings (`languages.json`). The list only feeds
//! the dropdown, so a missing or broken file degrades to a built-in list.

use std::path::Path;

use crate::error::{Error, Result};

pub const FALLBACK_LANGUAGES: &[&str] = &[
    "Bash", "C", "C#", "C++", "CSS", "Dart", "Elixir", "Go", "HTML", "Haskell", "Java",
    "JavaScript", "JSON", "Kotlin", "Lua", "Markdown", "PHP", "PowerShell", "Python", "R",
    "Ruby", "Rust", "Scala", "SQL", "Swift", "TOML", "TypeScript", "YAML", "Zig",
];

pub fn load(path: &Path) -> Result<Vec<String>> {
    let data = std::fs::read_to_string(path)?;
    let languages: Vec<String> = serde_json::from_str(&data)
        .map_err(|e| Error::InvalidConfig(format!("{}: {e}", path.display())))?;
    Ok(languages)
}

pub fn load_or_fallback(path: &Path) -> Vec<String> {
    match load(path) {
        Ok(languages) if !languages.is_empty() => languages,
        Ok(_) => {
            log::warn!("{} is empty, using built-in language list", path.display());
            fallback()
        }
        Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("{} not found, using built-in language list", path.display());
            fallback()
        }
        Err(e) => {
            log::warn!("using built-in language list: {e}");
            fallback()
        }
    }
}

pub fn fallback() -> Vec<String> {
    FALLBACK_LANGUAGES.iter().map(|l| l.to_string()).collect()
}

/// Dropdown entries: a blank "no language" option first, then the labels
/// with blanks and duplicates removed.
pub fn options(languages: &[String]) -> Vec<String> {
    let mut options = vec![String::new()];
    for language in languages {
        let language = language.trim();
        if !language.is_empty() && !options.iter().any(|o| o == language) {
            options.push(language.to_string());
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("languages.json");
        std::fs::write(&path, r#"["Go", "Rust"]"#).unwrap();

        assert_eq!(load(&path).unwrap(), vec!["Go", "Rust"]);
        assert_eq!(load_or_fallback(&path), vec!["Go", "Rust"]);
    }

    #[test]
    fn missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        assert!(matches!(load(&path), Err(Error::Io(_))));
        assert_eq!(load_or_fallback(&path), fallback());
    }

    #[test]
    fn malformed_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("languages.json");
        std::fs::write(&path, r#"{"not": "a list"}"#).unwrap();

        assert!(matches!(load(&path), Err(Error::InvalidConfig(_))));
        assert_eq!(load_or_fallback(&path), fallback());
    }

    #[test]
    fn options_start_blank_and_dedupe() {
        let langs = vec!["Rust".to_string(), " ".to_string(), "Rust".to_string(), "Go".to_string()];
        assert_eq!(options(&langs), vec!["", "Rust", "Go"]);
    }
}
