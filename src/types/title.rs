//! Defines the `TitleRegistry` shared by every document of a collection run and the
//! `OrderedTitle` list derived from it.

use indexmap::IndexMap;

/// Priority and unit last observed for a field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleEntry {
    pub priority: i64,
    pub unit: String,
}

/// One column title: a field name with the priority and unit it sorts and prints with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedTitle {
    pub name: String,
    pub priority: i64,
    pub unit: String,
}

impl OrderedTitle {
    pub fn new(name: impl Into<String>, priority: i64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            priority,
            unit: unit.into(),
        }
    }

    /// Header text of the title, `"<name> (<unit>)"`.
    ///
    /// ```
    /// use swob::OrderedTitle;
    ///
    /// assert_eq!(OrderedTitle::new("air_temp", 500, "C").header(), "air_temp (C)");
    /// ```
    pub fn header(&self) -> String {
        format!("{} ({})", self.name, self.unit)
    }
}

/// Accumulates every field name seen during one collection run.
///
/// The registry is updated by every parsed document, in document order. Each time a
/// name is recorded its priority and unit are **overwritten** with the values of that
/// occurrence, so the final entry reflects the *last* document in which the field
/// appeared (last-occurrence-wins). An overwritten name keeps the position at which it
/// was first registered, and names are never removed.
///
/// # Examples
///
/// ```
/// use swob::{OrderedTitle, TitleRegistry};
///
/// let mut registry = TitleRegistry::new();
/// registry.record("temp", 500, "F");
/// registry.record("press", 10, "hPa");
/// registry.record("temp", 500, "C"); // a later document wins
///
/// assert_eq!(
///     registry.ordered_titles(),
///     vec![
///         OrderedTitle::new("press", 10, "hPa"),
///         OrderedTitle::new("temp", 500, "C"),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleRegistry {
    entries: IndexMap<String, TitleEntry>,
}

impl TitleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an occurrence of `name`, replacing any earlier priority and unit.
    pub fn record(&mut self, name: &str, priority: i64, unit: &str) {
        self.entries.insert(
            name.to_string(),
            TitleEntry {
                priority,
                unit: unit.to_string(),
            },
        );
    }

    pub fn get(&self, name: &str) -> Option<&TitleEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All registered titles sorted ascending by priority.
    ///
    /// The sort is stable: titles with equal priority keep registration order.
    pub fn ordered_titles(&self) -> Vec<OrderedTitle> {
        let mut titles: Vec<OrderedTitle> = self
            .entries
            .iter()
            .map(|(name, entry)| OrderedTitle::new(name.as_str(), entry.priority, entry.unit.as_str()))
            .collect();
        titles.sort_by_key(|title| title.priority);
        titles
    }
}
