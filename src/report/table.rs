//! Plain table rendering for snippet lists.
//!
//! One row per snippet: id, title, language, tags. Descriptions and code
//! are left to `show`.

use crate::snippet::Snippet;

const TITLE_WIDTH: usize = 32;
const LANGUAGE_WIDTH: usize = 12;
const TAGS_WIDTH: usize = 24;

pub fn render(snippets: &[Snippet]) -> String {
    if snippets.is_empty() {
        return String::from("No snippets found.\n");
    }

    let mut output = format!(
        "{:<6} {:<tw$} {:<lw$} {}\n",
        "ID",
        "Title",
        "Language",
        "Tags",
        tw = TITLE_WIDTH,
        lw = LANGUAGE_WIDTH
    );
    output.push_str(&"-".repeat(6 + TITLE_WIDTH + LANGUAGE_WIDTH + TAGS_WIDTH + 3));
    output.push('\n');

    for snippet in snippets {
        output.push_str(&format!(
            "{:<6} {:<tw$} {:<lw$} {}\n",
            snippet.id,
            truncate(&snippet.title, TITLE_WIDTH),
            truncate(snippet.language.as_deref().unwrap_or(""), LANGUAGE_WIDTH),
            truncate(&snippet.tags, TAGS_WIDTH),
            tw = TITLE_WIDTH,
            lw = LANGUAGE_WIDTH
        ));
    }

    output.push_str(&format!("\n{} snippet(s)\n", snippets.len()));
    output
}

pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snippet(id: i64, title: &str, language: Option<&str>) -> Snippet {
        let mut s = Snippet::new(title, "", "a,b", "code", language);
        s.id = id;
        s
    }

    #[test]
    fn empty_list_message() {
        assert_eq!(render(&[]), "No snippets found.\n");
    }

    #[test]
    fn rows_in_given_order() {
        let text = render(&[snippet(2, "second", Some("Go")), snippet(1, "first", None)]);
        let second = text.find("second").unwrap();
        let first = text.find("first").unwrap();
        assert!(second < first);
        assert!(text.contains("Go"));
        assert!(text.ends_with("2 snippet(s)\n"));
    }

    #[test]
    fn long_titles_truncated() {
        let long = "x".repeat(100);
        let text = render(&[snippet(1, &long, None)]);
        assert!(text.contains(&format!("{}...", "x".repeat(TITLE_WIDTH - 3))));
        assert!(!text.contains(&long));
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("héllo", 5), "héllo");
        assert_eq!(truncate("héllo wörld", 8), "héllo...");
    }
}
