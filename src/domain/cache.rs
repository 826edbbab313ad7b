//! Cache metadata carried by read responses
//!
//! Every read operation accumulates the tags and contexts its result depends
//! on, so a downstream cache can invalidate by tag and vary by context. The
//! merge operation is a union; both lists preserve first-seen order.

/// Cacheability information attached to a computed response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheMetadata {
    /// Invalidation tags, e.g. `taxonomy_term:7` or `taxonomy_term_list`
    tags: Vec<String>,
    /// Variation contexts: request header names, or `query:<param>` entries
    contexts: Vec<String>,
    /// Optional freshness limit in seconds; `None` means unbounded
    max_age: Option<u64>,
}

impl CacheMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag for a single persisted record
    pub fn entity_tag(entity_type: &str, id: &str) -> String {
        format!("{entity_type}:{id}")
    }

    /// List tag covering every record of a type
    pub fn list_tag(entity_type: &str) -> String {
        format!("{entity_type}_list")
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.add_tag(tag);
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.add_context(context);
        self
    }

    pub fn add_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    pub fn add_context(&mut self, context: impl Into<String>) {
        let context = context.into();
        if !self.contexts.contains(&context) {
            self.contexts.push(context);
        }
    }

    pub fn set_max_age(&mut self, seconds: u64) {
        // The union of two bounded lifetimes is the shorter one
        self.max_age = Some(self.max_age.map_or(seconds, |cur| cur.min(seconds)));
    }

    /// Fold another dependency set into this one
    pub fn merge(&mut self, other: &CacheMetadata) {
        for tag in &other.tags {
            self.add_tag(tag.clone());
        }
        for context in &other.contexts {
            self.add_context(context.clone());
        }
        if let Some(age) = other.max_age {
            self.set_max_age(age);
        }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn contexts(&self) -> &[String] {
        &self.contexts
    }

    pub fn max_age(&self) -> Option<u64> {
        self.max_age
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_unions_without_duplicates() {
        let mut a = CacheMetadata::new()
            .with_tag("node:1")
            .with_context("x-viewer-roles");
        let b = CacheMetadata::new()
            .with_tag("node:1")
            .with_tag("taxonomy_term:7")
            .with_context("query:vocabulary");
        a.merge(&b);

        assert_eq!(a.tags(), ["node:1", "taxonomy_term:7"]);
        assert_eq!(a.contexts(), ["x-viewer-roles", "query:vocabulary"]);
    }

    #[test]
    fn merge_keeps_shortest_max_age() {
        let mut a = CacheMetadata::new();
        a.set_max_age(600);
        let mut b = CacheMetadata::new();
        b.set_max_age(60);
        a.merge(&b);
        assert_eq!(a.max_age(), Some(60));

        let mut unbounded = CacheMetadata::new();
        unbounded.merge(&a);
        assert_eq!(unbounded.max_age(), Some(60));
    }
}
