//! Per-section "which item is expanded" state
//!
//! Session-only: every section owns its own `Selection` and it starts empty
//! on each mount. Whether a section's modal is open is derived from it.

use tracing::debug;

/// Holds the currently selected item for one section, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<T> {
    current: Option<T>,
    /// Last cleared item, still drawn while its modal fades out
    departing: Option<T>,
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self {
            current: None,
            departing: None,
        }
    }
}

impl<T> Selection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    /// Replace whatever was selected; the previous item's modal closes with it
    pub fn select(&mut self, item: T) {
        if self.current.is_some() {
            debug!("Replacing existing selection");
        }
        self.departing = None;
        self.current = Some(item);
    }

    /// No-op when nothing is selected
    pub fn clear(&mut self) {
        if let Some(item) = self.current.take() {
            self.departing = Some(item);
        }
    }

    /// The item a modal should draw: the selection, or the one just cleared
    pub fn displayed(&self) -> Option<&T> {
        self.current.as_ref().or(self.departing.as_ref())
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let selection: Selection<&str> = Selection::new();
        assert_eq!(selection.current(), None);
        assert!(!selection.is_open());
    }

    #[test]
    fn test_select_then_clear() {
        let mut selection = Selection::new();
        selection.select("GeoPulse");
        assert!(selection.is_open());

        selection.clear();
        assert_eq!(selection.current(), None);
        assert!(!selection.is_open());
    }

    #[test]
    fn test_last_select_wins() {
        let mut selection = Selection::new();
        selection.select("GeoPulse");
        selection.select("MentorConnect");
        assert_eq!(selection.current(), Some(&"MentorConnect"));
    }

    #[test]
    fn test_reselect_same_item() {
        let mut selection = Selection::new();
        selection.select(7);
        selection.select(7);
        assert_eq!(selection.current(), Some(&7));
    }

    #[test]
    fn test_clear_when_empty_is_noop() {
        let mut selection: Selection<u8> = Selection::new();
        selection.clear();
        selection.clear();
        assert_eq!(selection, Selection::new());
    }

    #[test]
    fn test_cleared_item_stays_displayed_until_next_select() {
        let mut selection = Selection::new();
        assert_eq!(selection.displayed(), None);

        selection.select("AWS Cert");
        selection.clear();
        assert!(!selection.is_open());
        assert_eq!(selection.displayed(), Some(&"AWS Cert"));

        selection.select("Docker Badge");
        assert_eq!(selection.displayed(), Some(&"Docker Badge"));
        selection.select("GeoPulse");
        selection.clear();
        assert_eq!(selection.displayed(), Some(&"GeoPulse"));
    }

    #[test]
    fn test_unit_flag_selection() {
        let mut photo: Selection<()> = Selection::new();
        photo.select(());
        assert!(photo.is_open());
        photo.clear();
        assert!(!photo.is_open());
    }
}
