//! JSON output for snippets.
//!
//! Serializes snippets for scripting and piping.

use crate::snippet::Snippet;

pub fn render(snippets: &[Snippet]) -> String {
    serde_json::to_string_pretty(snippets).unwrap_or_else(|_| String::from("[]"))
}

pub fn render_one(snippet: &Snippet) -> String {
    serde_json::to_string_pretty(snippet).unwrap_or_else(|_| String::from("{}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_is_empty_array() {
        assert_eq!(render(&[]), "[]");
    }

    #[test]
    fn language_omitted_when_absent() {
        let snippet = Snippet::new("Fib", "", "math", "def fib(n): ...", None);
        let value: serde_json::Value = serde_json::from_str(&render_one(&snippet)).unwrap();
        assert_eq!(value["title"], "Fib");
        assert!(value.get("language").is_none());

        let with_lang = Snippet::new("Fib", "", "math", "def fib(n): ...", Some("Python"));
        let value: serde_json::Value = serde_json::from_str(&render(&[with_lang])).unwrap();
        assert_eq!(value[0]["language"], "Python");
    }
}
