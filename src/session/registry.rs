//! Feature registry: ordered features addressed by stable ids.

use std::fmt;

use indexmap::IndexMap;

use crate::plotting::{Color, LineId};

/// Opaque handle to a registered feature. Ids are never reused within a
/// session, and removing one feature leaves every other id valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeatureId(u64);

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Bookkeeping for one feature. The line itself lives on the main axes.
#[derive(Debug, Clone)]
pub(crate) struct FeatureEntry {
    pub line: LineId,
    /// Color the feature was registered with; checked back in on removal
    pub color: Color,
    pub in_legend: bool,
}

/// Features in registration order. The legend flag is stored with each
/// entry, so features and legend mask cannot drift out of step.
#[derive(Debug, Default)]
pub(crate) struct FeatureRegistry {
    entries: IndexMap<FeatureId, FeatureEntry>,
    next_id: u64,
}

impl FeatureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: FeatureEntry) -> FeatureId {
        let id = FeatureId(self.next_id);
        self.next_id += 1;
        self.entries.insert(id, entry);
        id
    }

    pub fn get(&self, id: FeatureId) -> Option<&FeatureEntry> {
        self.entries.get(&id)
    }

    pub fn get_mut(&mut self, id: FeatureId) -> Option<&mut FeatureEntry> {
        self.entries.get_mut(&id)
    }

    /// Remove a feature, keeping the order of the rest.
    pub fn remove(&mut self, id: FeatureId) -> Option<FeatureEntry> {
        self.entries.shift_remove(&id)
    }

    pub fn index_of(&self, id: FeatureId) -> Option<usize> {
        self.entries.get_index_of(&id)
    }

    pub fn ids(&self) -> Vec<FeatureId> {
        self.entries.keys().copied().collect()
    }

    pub fn legend_mask(&self) -> Vec<bool> {
        self.entries.values().map(|e| e.in_legend).collect()
    }

    /// Lines of the features whose legend flag is set, in order.
    pub fn legend_lines(&self) -> Vec<LineId> {
        self.entries
            .values()
            .filter(|e| e.in_legend)
            .map(|e| e.line)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::{Axes, Line2D};

    fn entry(axes: &mut Axes, in_legend: bool) -> FeatureEntry {
        let line = axes.add_line(Line2D::new("o", None).unwrap());
        FeatureEntry {
            line,
            color: Color::BLACK,
            in_legend,
        }
    }

    #[test]
    fn test_ids_stable_across_removal() {
        let mut axes = Axes::new();
        let mut registry = FeatureRegistry::new();
        let a = registry.insert(entry(&mut axes, true));
        let b = registry.insert(entry(&mut axes, false));
        let c = registry.insert(entry(&mut axes, true));

        assert!(registry.remove(a).is_some());
        assert!(registry.remove(a).is_none());
        assert_eq!(registry.ids(), vec![b, c]);
        assert_eq!(registry.index_of(c), Some(1));
        assert_eq!(registry.legend_mask(), vec![false, true]);

        let d = registry.insert(entry(&mut axes, true));
        assert!(d > c);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_legend_lines_follow_mask() {
        let mut axes = Axes::new();
        let mut registry = FeatureRegistry::new();
        let hidden = entry(&mut axes, false);
        let shown = entry(&mut axes, true);
        let shown_line = shown.line;
        registry.insert(hidden);
        registry.insert(shown);
        assert_eq!(registry.legend_lines(), vec![shown_line]);
    }
}
