//! Keyword knowledge used to enrich prompts.
//!
//! Facts are `(relation, subject, object)` triples answered by linear scan with
//! exact subject matching. There is no indexing or ranking.

pub mod education;
pub mod resume;

pub use education::EducationKnowledge;
pub use resume::ResumeKnowledge;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Fact {
    relation: &'static str,
    subject: String,
    object: String,
}

/// Ordered collection of facts.
#[derive(Debug, Clone, Default)]
pub struct FactStore {
    facts: Vec<Fact>,
}

impl FactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a fact. Subjects are stored lower-cased; objects verbatim.
    pub fn add_fact(&mut self, relation: &'static str, subject: &str, object: &str) {
        self.facts.push(Fact {
            relation,
            subject: subject.to_lowercase(),
            object: object.to_string(),
        });
    }

    /// Adds one fact per object under the same relation and subject.
    pub fn add_facts(&mut self, relation: &'static str, subject: &str, objects: &[&str]) {
        for object in objects {
            self.add_fact(relation, subject, object);
        }
    }

    /// All objects for `(relation, subject)`, in insertion order.
    pub fn query(&self, relation: &str, subject: &str) -> Vec<String> {
        let subject = subject.trim().trim_matches('"').to_lowercase();
        self.facts
            .iter()
            .filter(|f| f.relation == relation && f.subject == subject)
            .map(|f| f.object.clone())
            .collect()
    }

    /// Distinct subjects recorded under `relation`, in first-seen order.
    pub fn subjects(&self, relation: &str) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for fact in self.facts.iter().filter(|f| f.relation == relation) {
            if !out.contains(&fact.subject.as_str()) {
                out.push(&fact.subject);
            }
        }
        out
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.facts.len()
    }
}

/// Removes duplicates, keeping the first occurrence.
pub(crate) fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_matches_subject_case_insensitively() {
        let mut store = FactStore::new();
        store.add_fact("skill_role", "React", "frontend engineer");
        assert_eq!(store.query("skill_role", "REACT"), vec!["frontend engineer"]);
        assert_eq!(store.query("skill_role", "\"react\""), vec!["frontend engineer"]);
    }

    #[test]
    fn test_query_requires_exact_subject() {
        let mut store = FactStore::new();
        store.add_fact("skill_role", "node", "backend engineer");
        assert!(store.query("skill_role", "node.js").is_empty());
        assert!(store.query("other", "node").is_empty());
    }

    #[test]
    fn test_query_preserves_insertion_order() {
        let mut store = FactStore::new();
        store.add_facts("resource", "sql", &["b", "a", "c"]);
        assert_eq!(store.query("resource", "sql"), vec!["b", "a", "c"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_subjects_are_distinct() {
        let mut store = FactStore::new();
        store.add_facts("subtopic", "x", &["1", "2"]);
        store.add_fact("subtopic", "y", "3");
        assert_eq!(store.subjects("subtopic"), vec!["x", "y"]);
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let items = vec!["a".to_string(), "b".to_string(), "a".to_string()];
        assert_eq!(dedup_preserving_order(items), vec!["a", "b"]);
    }
}
