use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Running tally of material quantities, keyed by material name.
///
/// `tally` is the single combining primitive the whole reporting pipeline
/// relies on: repeated calls are commutative and associative, so the final
/// mapping is independent of call order. Insertion order of first appearance
/// is preserved for deterministic reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialTotals(IndexMap<String, u32>);

impl MaterialTotals {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to the entry for `name`, creating it at 0 if absent.
    pub fn tally(&mut self, name: impl Into<String>, amount: u32) {
        *self.0.entry(name.into()).or_insert(0) += amount;
    }

    /// Tallies every entry of `other` into this mapping.
    pub fn merge(&mut self, other: &MaterialTotals) {
        for (name, amount) in other.iter() {
            self.tally(name, amount);
        }
    }

    /// Quantity recorded for `name`, or `None` if the material never
    /// appeared.
    pub fn get(&self, name: &str) -> Option<u32> {
        self.0.get(name).copied()
    }

    /// Material names in first-insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(name, &amount)| (name.as_str(), amount))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for MaterialTotals {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let mut totals = MaterialTotals::new();
        for (name, amount) in iter {
            totals.tally(name, amount);
        }
        totals
    }
}
