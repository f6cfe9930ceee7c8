pub mod table;
pub mod json;

use crate::snippet::Snippet;

/// Full view of one snippet, code included.
pub fn detail(snippet: &Snippet) -> String {
    let mut output = format!("[{}] {}\n", snippet.id, snippet.title);

    if let Some(language) = snippet.language.as_deref().filter(|l| !l.is_empty()) {
        output.push_str(&format!("language:    {language}\n"));
    }
    if !snippet.description.is_empty() {
        output.push_str(&format!("description: {}\n", snippet.description));
    }
    let tags = snippet.tag_list();
    if !tags.is_empty() {
        output.push_str(&format!("tags:        {}\n", tags.join(", ")));
    }

    output.push_str(&"-".repeat(40));
    output.push('\n');
    output.push_str(&snippet.code);
    if !snippet.code.ends_with('\n') {
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_skips_empty_fields() {
        let mut snippet = Snippet::new("Fib", "", "math, recursion", "def fib(n): ...", None);
        snippet.id = 1;

        let text = detail(&snippet);
        assert!(text.starts_with("[1] Fib\n"));
        assert!(text.contains("tags:        math, recursion\n"));
        assert!(!text.contains("description"));
        assert!(!text.contains("language"));
        assert!(text.ends_with("def fib(n): ...\n"));
    }
}
