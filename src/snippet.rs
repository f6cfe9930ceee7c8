use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A stored code fragment. `id` is zero until the store assigns one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub tags: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Snippet {
    pub fn new(
        title: &str,
        description: &str,
        tags: &str,
        code: &str,
        language: Option<&str>,
    ) -> Self {
        Snippet {
            id: 0,
            title: title.to_string(),
            description: description.to_string(),
            tags: tags.to_string(),
            code: code.to_string(),
            language: language.map(str::to_string),
        }
    }

    /// Comma-separated tags, trimmed, empties dropped.
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }

    pub fn matches_language(&self, language: &str) -> bool {
        self.language
            .as_deref()
            .is_some_and(|l| l.eq_ignore_ascii_case(language))
    }
}

/// Field values gathered from a form or command flags, before they reach the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetDraft {
    pub title: String,
    pub description: String,
    pub tags: String,
    pub code: String,
    pub language: Option<String>,
}

impl SnippetDraft {
    pub fn from_snippet(snippet: &Snippet) -> Self {
        SnippetDraft {
            title: snippet.title.clone(),
            description: snippet.description.clone(),
            tags: snippet.tags.clone(),
            code: snippet.code.clone(),
            language: snippet.language.clone(),
        }
    }

    /// Rejects empty title or code so the store never sees them.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() || self.code.trim().is_empty() {
            return Err(Error::InvalidInput(
                "Title and/or code cannot be empty!".to_string(),
            ));
        }
        Ok(())
    }

    /// Language as passed to the manager; the blank dropdown entry means none.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref().filter(|l| !l.is_empty())
    }
}
