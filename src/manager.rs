//! Snippet manager.
//!
//! Thin facade over [`Store`]: turns discrete caller parameters into a
//! [`Snippet`] value and forwards. No validation, retries or caching happen
//! here; errors come back exactly as the store reported them.

use crate::error::Result;
use crate::snippet::Snippet;
use crate::store::Store;

pub struct Manager {
    store: Store,
}

impl Manager {
    pub fn new(store: Store) -> Self {
        Manager { store }
    }

    pub fn create_snippet(
        &self,
        title: &str,
        description: &str,
        tags: &str,
        code: &str,
        language: Option<&str>,
    ) -> Result<i64> {
        self.store
            .create(&Snippet::new(title, description, tags, code, language))
    }

    pub fn get_snippet_by_id(&self, id: i64) -> Result<Snippet> {
        self.store.get_by_id(id)
    }

    pub fn search_snippets(&self, keyword: &str) -> Result<Vec<Snippet>> {
        self.store.search(keyword)
    }

    pub fn get_all_snippets(&self) -> Result<Vec<Snippet>> {
        self.store.get_all()
    }

    pub fn update_snippet(
        &self,
        id: i64,
        title: &str,
        description: &str,
        tags: &str,
        code: &str,
        language: Option<&str>,
    ) -> Result<()> {
        let mut snippet = Snippet::new(title, description, tags, code, language);
        snippet.id = id;
        self.store.update(id, &snippet)
    }

    /// Release the underlying store handle.
    pub fn close(self) -> Result<()> {
        self.store.close()
    }
}
