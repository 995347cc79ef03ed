//! Drag-and-drop target state.
//!
//! # Design
//! - The dragging flag lives with the zone that owns it; no element lookups.
//! - The class list is derived from state on every render.

use tracing::trace;

const IDLE_CLASSES: &str = "border-dashed";
const ACTIVE_CLASSES: &str = "!border-blue-500 !font-bold";

/// Local state of one drop zone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DropZoneState {
    dragging: bool,
}

impl DropZoneState {
    /// Whether a drag is hovering the zone.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Pointer entered or moved over the zone while dragging.
    pub fn drag_over(&mut self) {
        self.dragging = true;
    }

    /// Pointer left the zone.
    pub fn drag_leave(&mut self) {
        self.dragging = false;
    }

    /// Files were released on the zone; returns the ones to forward.
    ///
    /// Only the first file is kept unless `multiple` is set.
    pub fn drop<T>(&mut self, files: Vec<T>, multiple: bool) -> Vec<T> {
        self.dragging = false;
        let total = files.len();
        let forwarded: Vec<T> = if multiple {
            files
        } else {
            files.into_iter().take(1).collect()
        };
        trace!(total, forwarded = forwarded.len(), "files dropped");
        forwarded
    }

    /// Class list for the zone element.
    #[must_use]
    pub const fn classes(&self) -> &'static str {
        if self.dragging {
            ACTIVE_CLASSES
        } else {
            IDLE_CLASSES
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hovering_toggles_the_highlight() {
        let mut zone = DropZoneState::default();
        assert_eq!(zone.classes(), "border-dashed");
        zone.drag_over();
        assert!(zone.is_dragging());
        assert_eq!(zone.classes(), "!border-blue-500 !font-bold");
        zone.drag_leave();
        assert_eq!(zone.classes(), "border-dashed");
    }

    #[test]
    fn single_zones_forward_only_the_first_file() {
        let mut zone = DropZoneState::default();
        zone.drag_over();
        assert_eq!(zone.drop(vec!["a.csv", "b.csv"], false), vec!["a.csv"]);
        assert!(!zone.is_dragging());
        assert_eq!(zone.drop(vec!["a.csv", "b.csv"], true), vec!["a.csv", "b.csv"]);
        assert!(zone.drop(Vec::<&str>::new(), false).is_empty());
    }
}
