//! Scroll-spy navigation highlighting

/// Tracks which heading the table-of-contents should highlight.
///
/// Constructed with the heading identifiers in document order, fed
/// visibility observations as sections scroll in and out. The active
/// heading is the topmost currently-visible one (document order is the
/// tie-break, so concurrent observations resolve deterministically).
/// When nothing qualifies the previous active heading is retained.
#[derive(Debug)]
pub struct ScrollSpy {
    ids: Vec<String>,
    visible: Vec<bool>,
    active: Option<usize>,
}

impl ScrollSpy {
    /// Create a spy over heading ids in document order.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        let visible = vec![false; ids.len()];
        Self {
            ids,
            visible,
            active: None,
        }
    }

    /// Record that a heading entered or left the qualifying visibility
    /// region. Unknown ids are ignored.
    pub fn observe(&mut self, id: &str, visible: bool) {
        if let Some(idx) = self.ids.iter().position(|i| i == id) {
            self.visible[idx] = visible;
            if let Some(top) = self.visible.iter().position(|v| *v) {
                self.active = Some(top);
            }
            // Nothing visible: keep the last active heading
        }
    }

    /// The currently highlighted heading id, if any observation has
    /// ever qualified.
    pub fn active(&self) -> Option<&str> {
        self.active.map(|idx| self.ids[idx].as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spy() -> ScrollSpy {
        ScrollSpy::new(["intro", "usage", "details", "closing"])
    }

    #[test]
    fn test_starts_with_no_active() {
        assert_eq!(spy().active(), None);
    }

    #[test]
    fn test_single_visible_becomes_active() {
        let mut s = spy();
        s.observe("usage", true);
        assert_eq!(s.active(), Some("usage"));
    }

    #[test]
    fn test_topmost_visible_wins() {
        let mut s = spy();
        // Events arrive in arbitrary order; document order decides
        s.observe("details", true);
        s.observe("intro", true);
        assert_eq!(s.active(), Some("intro"));

        s.observe("intro", false);
        assert_eq!(s.active(), Some("details"));
    }

    #[test]
    fn test_retains_last_active_when_nothing_visible() {
        let mut s = spy();
        s.observe("usage", true);
        s.observe("usage", false);
        assert_eq!(s.active(), Some("usage"));
    }

    #[test]
    fn test_unknown_id_ignored() {
        let mut s = spy();
        s.observe("not-a-heading", true);
        assert_eq!(s.active(), None);
    }

    #[test]
    fn test_scrolling_down_sequence() {
        let mut s = spy();
        s.observe("intro", true);
        assert_eq!(s.active(), Some("intro"));

        s.observe("usage", true);
        // intro is still visible and topmost
        assert_eq!(s.active(), Some("intro"));

        s.observe("intro", false);
        assert_eq!(s.active(), Some("usage"));

        s.observe("usage", false);
        s.observe("details", true);
        assert_eq!(s.active(), Some("details"));
    }
}
