// Keyword-match response engine

use super::picker::{ResponsePicker, ThreadRngPicker};
use super::table::ResponseTable;
use anyhow::Result;

/// Which tier of the table matched a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// A crisis phrase was found; highest priority.
    Crisis,
    /// An emotion key matched; index into the table's category list.
    Category(usize),
    /// Nothing matched; the default pool is used.
    Default,
}

/// Maps free-text input to a canned supportive response.
///
/// The table is fixed at construction and validated so every branch has a
/// non-empty pool; `respond` is total over all string inputs.
pub struct ResponderEngine {
    table: ResponseTable,
    picker: Box<dyn ResponsePicker>,
}

impl ResponderEngine {
    /// Create an engine over a validated table, using the thread-local RNG.
    pub fn new(table: ResponseTable) -> Result<Self> {
        Self::with_picker(table, Box::new(ThreadRngPicker))
    }

    /// Create an engine with an injected picker (deterministic in tests).
    pub fn with_picker(table: ResponseTable, picker: Box<dyn ResponsePicker>) -> Result<Self> {
        table.validate()?;
        Ok(Self { table, picker })
    }

    /// Classify a message without drawing a response.
    ///
    /// Crisis phrases are checked first and short-circuit everything else.
    /// Emotion keys are then tried in declared order; the first key whose
    /// full text occurs in the lowercased message wins.
    pub fn classify(&self, message: &str) -> MatchKind {
        let message = message.to_lowercase();

        for phrase in &self.table.crisis.phrases {
            if message.contains(&phrase.to_lowercase()) {
                tracing::warn!("Crisis detected: phrase '{}'", phrase);
                return MatchKind::Crisis;
            }
        }

        for (index, category) in self.table.categories.iter().enumerate() {
            if message.contains(&category.key.to_lowercase()) {
                return MatchKind::Category(index);
            }
        }

        MatchKind::Default
    }

    /// Generate a supportive response: classify, then pick uniformly at
    /// random from the winning pool.
    pub fn respond(&self, message: &str) -> &str {
        self.pick(self.classify(message))
    }

    /// Draw a response for an already-classified message. Split out so a
    /// caller that needs the classification for logging does not run the
    /// matching twice.
    pub fn pick(&self, kind: MatchKind) -> &str {
        let pool = match kind {
            MatchKind::Crisis => &self.table.crisis.responses,
            MatchKind::Category(index) => &self.table.categories[index].responses,
            MatchKind::Default => &self.table.default,
        };
        &pool[self.picker.pick(pool.len())]
    }

    /// Human-readable label for a classification (for logging).
    pub fn label(&self, kind: MatchKind) -> &str {
        match kind {
            MatchKind::Crisis => "crisis",
            MatchKind::Category(index) => &self.table.categories[index].key,
            MatchKind::Default => "default",
        }
    }

    /// The underlying table (read-only).
    pub fn table(&self) -> &ResponseTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responder::table::{Category, CrisisSection};

    /// Always picks a fixed index, clamped to the pool.
    struct FixedPicker(usize);

    impl ResponsePicker for FixedPicker {
        fn pick(&self, len: usize) -> usize {
            self.0.min(len - 1)
        }
    }

    fn create_test_engine() -> ResponderEngine {
        ResponderEngine::new(ResponseTable::default()).unwrap()
    }

    #[test]
    fn test_crisis_detection() {
        let engine = create_test_engine();

        assert_eq!(engine.classify("I'm thinking about suicide"), MatchKind::Crisis);
        assert_eq!(engine.classify("I want to kill myself"), MatchKind::Crisis);
        assert_eq!(engine.classify("some days I want to die"), MatchKind::Crisis);
        assert_ne!(engine.classify("What is the meaning of life?"), MatchKind::Crisis);
    }

    #[test]
    fn test_case_insensitive() {
        let engine = create_test_engine();

        assert_eq!(engine.classify("SUICIDE"), MatchKind::Crisis);
        assert_eq!(engine.classify("SuIcIdE"), MatchKind::Crisis);
        assert_eq!(engine.classify("I FEEL SO SAD"), MatchKind::Category(0));
    }

    #[test]
    fn test_crisis_beats_emotion_keys() {
        let engine = create_test_engine();

        // "sad" also occurs, but the crisis phrase wins
        assert_eq!(engine.classify("I'm sad and want to end it all"), MatchKind::Crisis);
    }

    #[test]
    fn test_first_matching_key_wins() {
        let engine = create_test_engine();

        // "sad" is declared before "tired"
        assert_eq!(engine.classify("tired and sad"), MatchKind::Category(0));
        assert_eq!(engine.classify("just tired"), MatchKind::Category(5));
    }

    #[test]
    fn test_unmatched_falls_to_default() {
        let engine = create_test_engine();

        assert_eq!(engine.classify("just checking in"), MatchKind::Default);
        assert_eq!(engine.classify(""), MatchKind::Default);
        assert_eq!(engine.classify("xyzzy 12345 !!"), MatchKind::Default);
    }

    #[test]
    fn test_full_phrase_matching_only() {
        let engine = create_test_engine();

        // A lone word from a multi-word crisis phrase must not trigger it
        assert_eq!(engine.classify("I did it all by myself"), MatchKind::Default);
        assert_eq!(engine.classify("I want to end the meeting"), MatchKind::Default);
    }

    #[test]
    fn test_respond_draws_from_matched_pool() {
        let table = ResponseTable::default();
        let sad_pool = table.categories[0].responses.clone();
        let engine = ResponderEngine::with_picker(table, Box::new(FixedPicker(1))).unwrap();

        assert_eq!(engine.respond("I feel so sad today"), sad_pool[1]);
    }

    #[test]
    fn test_crisis_response_contains_hotline() {
        let engine = create_test_engine();

        for _ in 0..50 {
            let response = engine.respond("I want to kill myself");
            assert!(response.contains("988"), "missing hotline in: {}", response);
        }
    }

    #[test]
    fn test_category_is_deterministic_per_message() {
        let engine = create_test_engine();

        let first = engine.classify("feeling anxious about tomorrow");
        for _ in 0..20 {
            assert_eq!(engine.classify("feeling anxious about tomorrow"), first);
        }
    }

    #[test]
    fn test_label() {
        let engine = create_test_engine();

        assert_eq!(engine.label(MatchKind::Crisis), "crisis");
        assert_eq!(engine.label(MatchKind::Category(2)), "stress");
        assert_eq!(engine.label(MatchKind::Default), "default");
    }

    #[test]
    fn test_invalid_table_rejected() {
        let table = ResponseTable {
            crisis: CrisisSection {
                phrases: vec!["suicide".to_string()],
                responses: vec!["Call 988.".to_string()],
            },
            categories: vec![Category {
                key: "sad".to_string(),
                responses: vec![],
            }],
            default: vec!["I hear you.".to_string()],
        };

        assert!(ResponderEngine::new(table).is_err());
    }
}
