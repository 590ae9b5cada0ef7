//! The prize registry and its editing operations.
//!
//! The registry is an ordered sequence of prizes; order is the tie-break
//! during cumulative selection. Every edit produces the new current snapshot,
//! which the app persists immediately. The draw engine only ever reads.

use super::types::{default_prizes, Prize};
use crate::constants::DEFAULT_PRIZE_PROBABILITY;

/// A single-field edit applied to the prize matching an id.
#[derive(Debug, Clone, PartialEq)]
pub enum PrizeUpdate {
    Name(String),
    Probability(f64),
}

/// Ordered collection of configured prizes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Registry {
    prizes: Vec<Prize>,
}

impl Registry {
    pub fn new(prizes: Vec<Prize>) -> Self {
        Self { prizes }
    }

    /// Registry with the built-in five-prize default set.
    pub fn with_defaults() -> Self {
        Self::new(default_prizes())
    }

    pub fn prizes(&self) -> &[Prize] {
        &self.prizes
    }

    pub fn len(&self) -> usize {
        self.prizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prizes.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Prize> {
        self.prizes.iter().find(|p| p.id == id)
    }

    /// Appends a new prize with a derived id, a placeholder name, and the
    /// default probability. Returns the new id.
    pub fn add(&mut self) -> String {
        let id = next_id(self.prizes.iter().map(|p| p.id.as_str()));
        let name = format!("新奖项 {id}");
        self.prizes
            .push(Prize::new(id.clone(), name, DEFAULT_PRIZE_PROBABILITY));
        id
    }

    /// Replaces one field of the prize matching `id`. Silent no-op when the
    /// id is absent. No validation of the resulting probability sum.
    pub fn update(&mut self, id: &str, update: PrizeUpdate) {
        if let Some(prize) = self.prizes.iter_mut().find(|p| p.id == id) {
            match update {
                PrizeUpdate::Name(name) => prize.name = name,
                PrizeUpdate::Probability(probability) => prize.probability = probability,
            }
        }
    }

    /// Removes the prize matching `id`, preserving the relative order of the
    /// rest. Silent no-op when the id is absent.
    pub fn delete(&mut self, id: &str) {
        self.prizes.retain(|p| p.id != id);
    }
}

/// Derives the id for a newly added prize: max over ids that parse as
/// integers, plus one. Ids that fail to parse are ignored; when none parse
/// (including the empty registry) the derived id is "1".
pub fn next_id<'a>(ids: impl Iterator<Item = &'a str>) -> String {
    let max = ids.filter_map(|id| id.parse::<u64>().ok()).max().unwrap_or(0);
    (max + 1).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_id_is_max_plus_one() {
        assert_eq!(next_id(["1", "2", "3"].into_iter()), "4");
    }

    #[test]
    fn next_id_uses_max_not_count_with_gaps() {
        assert_eq!(next_id(["1", "3"].into_iter()), "4");
    }

    #[test]
    fn next_id_ignores_non_numeric_ids() {
        assert_eq!(next_id(["7", "bonus"].into_iter()), "8");
    }

    #[test]
    fn next_id_falls_back_when_nothing_parses() {
        assert_eq!(next_id(std::iter::empty()), "1");
        assert_eq!(next_id(["a", "b"].into_iter()), "1");
    }

    #[test]
    fn add_appends_with_placeholder_and_default_probability() {
        let mut registry = Registry::with_defaults();
        let id = registry.add();

        assert_eq!(id, "6");
        assert_eq!(registry.len(), 6);
        let added = registry.get("6").expect("new prize present");
        assert_eq!(added.name, "新奖项 6");
        assert!((added.probability - DEFAULT_PRIZE_PROBABILITY).abs() < f64::EPSILON);
    }

    #[test]
    fn update_replaces_single_field() {
        let mut registry = Registry::with_defaults();

        registry.update("3", PrizeUpdate::Name("特别奖".to_string()));
        assert_eq!(registry.get("3").unwrap().name, "特别奖");
        // Probability untouched by a name edit
        assert!((registry.get("3").unwrap().probability - 0.15).abs() < f64::EPSILON);

        registry.update("3", PrizeUpdate::Probability(0.25));
        assert!((registry.get("3").unwrap().probability - 0.25).abs() < f64::EPSILON);
        assert_eq!(registry.get("3").unwrap().name, "特别奖");
    }

    #[test]
    fn update_missing_id_is_silent_noop() {
        let mut registry = Registry::with_defaults();
        let before = registry.clone();
        registry.update("99", PrizeUpdate::Probability(0.9));
        assert_eq!(registry, before);
    }

    #[test]
    fn update_with_same_value_is_idempotent() {
        let mut registry = Registry::with_defaults();
        let before = registry.clone();
        registry.update("2", PrizeUpdate::Name("二等奖".to_string()));
        registry.update("2", PrizeUpdate::Probability(0.1));
        assert_eq!(registry, before, "contents and order should be unchanged");
    }

    #[test]
    fn delete_preserves_relative_order() {
        let mut registry = Registry::with_defaults();
        registry.delete("2");

        assert_eq!(registry.len(), 4);
        assert!(registry.get("2").is_none());
        let names: Vec<&str> = registry.prizes().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["一等奖", "三等奖", "四等奖", "五等奖"]);
    }

    #[test]
    fn delete_missing_id_is_silent_noop() {
        let mut registry = Registry::with_defaults();
        registry.delete("99");
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn no_sum_validation_on_edits() {
        // Overflowing sums are accepted as-is; the draw engine documents the
        // consequence.
        let mut registry = Registry::with_defaults();
        registry.update("1", PrizeUpdate::Probability(5.0));
        assert!((registry.get("1").unwrap().probability - 5.0).abs() < f64::EPSILON);
    }
}
