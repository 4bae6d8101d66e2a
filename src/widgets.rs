//! Dashboard widget preferences
//!
//! Ordered collection of widget descriptors with toggle and reorder
//! operations. The layout renders enabled widgets in collection order.

/// A dashboard panel with identity, display name, and visibility flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetDescriptor {
    pub id: String,
    pub name: String,
    pub enabled: bool,
}

impl WidgetDescriptor {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            enabled: true,
        }
    }
}

/// An ordered set of widget descriptors. Order is render order.
///
/// All operations return a new value; callers replace their held copy
/// rather than mutating shared state. Ids are unique within the
/// collection and every operation preserves cardinality.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WidgetPrefs {
    widgets: Vec<WidgetDescriptor>,
}

impl WidgetPrefs {
    pub fn new(widgets: Vec<WidgetDescriptor>) -> Self {
        Self { widgets }
    }

    /// Flip the `enabled` flag of the descriptor matching `id`.
    ///
    /// An unknown id is a silent no-op: the UI only ever passes ids it
    /// rendered, so there is no error path to surface.
    #[must_use]
    pub fn toggle(&self, id: &str) -> Self {
        let widgets = self
            .widgets
            .iter()
            .map(|w| {
                if w.id == id {
                    WidgetDescriptor {
                        enabled: !w.enabled,
                        ..w.clone()
                    }
                } else {
                    w.clone()
                }
            })
            .collect();
        Self { widgets }
    }

    /// Move the dragged descriptor immediately before the target's
    /// current position.
    ///
    /// The dragged descriptor is removed first; the insertion index is
    /// the target's position in the remaining sequence (drop-time
    /// semantics, one call per completed drag). Dragging onto itself or
    /// referencing an absent id is a no-op.
    #[must_use]
    pub fn reorder(&self, dragged_id: &str, target_id: &str) -> Self {
        if dragged_id == target_id {
            return self.clone();
        }
        let Some(dragged_index) = self.position(dragged_id) else {
            return self.clone();
        };
        if self.position(target_id).is_none() {
            return self.clone();
        }

        let mut widgets = self.widgets.clone();
        let dragged = widgets.remove(dragged_index);
        // Target index after removal; the target is known to be present.
        let insert_at = widgets
            .iter()
            .position(|w| w.id == target_id)
            .unwrap_or(widgets.len());
        widgets.insert(insert_at, dragged);
        Self { widgets }
    }

    /// Whether the widget should be shown. Unknown ids default to
    /// visible so newly introduced widgets appear without migration.
    pub fn is_enabled(&self, id: &str) -> bool {
        self.widgets
            .iter()
            .find(|w| w.id == id)
            .map(|w| w.enabled)
            .unwrap_or(true)
    }

    /// Descriptors in render order.
    pub fn iter(&self) -> impl Iterator<Item = &WidgetDescriptor> {
        self.widgets.iter()
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&WidgetDescriptor> {
        self.widgets.get(index)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.widgets.iter().position(|w| w.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs() -> WidgetPrefs {
        WidgetPrefs::new(vec![
            WidgetDescriptor::new("a", "Alpha"),
            WidgetDescriptor::new("b", "Beta"),
            WidgetDescriptor::new("c", "Gamma"),
        ])
    }

    fn ids(p: &WidgetPrefs) -> Vec<&str> {
        p.iter().map(|w| w.id.as_str()).collect()
    }

    #[test]
    // Toggling twice restores the original flag, for every widget.
    fn toggle_twice_is_identity() {
        let original = prefs();
        for id in ["a", "b", "c"] {
            let twice = original.toggle(id).toggle(id);
            assert_eq!(twice, original);
        }
    }

    #[test]
    fn toggle_flips_only_the_named_widget() {
        let toggled = prefs().toggle("b");
        assert!(toggled.is_enabled("a"));
        assert!(!toggled.is_enabled("b"));
        assert!(toggled.is_enabled("c"));
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let original = prefs();
        assert_eq!(original.toggle("missing"), original);
    }

    #[test]
    fn reorder_moves_before_target() {
        // Dragging "a" onto "c": remove "a", insert before "c".
        let reordered = prefs().reorder("a", "c");
        assert_eq!(ids(&reordered), vec!["b", "a", "c"]);
    }

    #[test]
    fn reorder_moves_backwards() {
        let reordered = prefs().reorder("c", "a");
        assert_eq!(ids(&reordered), vec!["c", "a", "b"]);
    }

    #[test]
    // Reorder preserves the multiset of ids and the collection length.
    fn reorder_preserves_cardinality() {
        let original = prefs();
        let reordered = original.reorder("b", "a");
        assert_eq!(reordered.len(), original.len());
        let mut sorted: Vec<&str> = ids(&reordered);
        sorted.sort_unstable();
        assert_eq!(sorted, vec!["a", "b", "c"]);
    }

    #[test]
    fn reorder_onto_self_is_noop() {
        let original = prefs();
        for id in ["a", "b", "c"] {
            assert_eq!(original.reorder(id, id), original);
        }
    }

    #[test]
    fn reorder_with_absent_id_is_noop() {
        let original = prefs();
        assert_eq!(original.reorder("missing", "a"), original);
        assert_eq!(original.reorder("a", "missing"), original);
    }

    #[test]
    fn unknown_widget_defaults_to_visible() {
        assert!(prefs().is_enabled("brand-new-widget"));
    }

    #[test]
    fn iteration_preserves_order_for_the_layout() {
        let p = prefs().toggle("b");
        let visible: Vec<&str> = p
            .iter()
            .filter(|w| p.is_enabled(&w.id))
            .map(|w| w.id.as_str())
            .collect();
        assert_eq!(visible, vec!["a", "c"]);
    }
}
