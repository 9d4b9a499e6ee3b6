//! Display window (incremental revealer)
//!
//! A prefix of the filtered result that grows one page at a time.
//!
//! ```text
//!            request_more()             complete(gen)
//!   Idle ─────────────────▶ Extending ─────────────────▶ Idle
//!    ▲  guard: len < total      │  further requests ignored
//!    └──────── reset() ─────────┘  (bumps generation)
//! ```

/// Default number of items revealed per page
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Revealer phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Idle,
    /// Waiting for the delayed completion tagged with `generation`
    Extending { generation: u64 },
}

/// Revealed prefix of the filtered result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayWindow {
    page_size: usize,
    len: usize,
    total: usize,
    generation: u64,
    phase: RevealPhase,
}

impl DisplayWindow {
    /// Empty window; a page size of zero is treated as one
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            len: 0,
            total: 0,
            generation: 0,
            phase: RevealPhase::Idle,
        }
    }

    /// Restart at the first page of a result with `total` items.
    ///
    /// Any extension in flight is abandoned: its completion no longer matches.
    pub fn reset(&mut self, total: usize) {
        self.total = total;
        self.len = self.page_size.min(total);
        self.generation = self.generation.wrapping_add(1);
        self.phase = RevealPhase::Idle;
    }

    /// Sentinel became visible. Returns the generation of the extension to
    /// schedule, or `None` when the guard fails.
    pub fn request_more(&mut self) -> Option<u64> {
        if self.phase != RevealPhase::Idle || !self.has_more() {
            return None;
        }
        self.phase = RevealPhase::Extending {
            generation: self.generation,
        };
        Some(self.generation)
    }

    /// Delay elapsed for the extension tagged `generation`.
    ///
    /// Returns `true` if the window grew.
    pub fn complete(&mut self, generation: u64) -> bool {
        match self.phase {
            RevealPhase::Extending { generation: pending } if pending == generation => {
                self.len = (self.len + self.page_size).min(self.total);
                self.phase = RevealPhase::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_extending(&self) -> bool {
        matches!(self.phase, RevealPhase::Extending { .. })
    }

    /// Whether the sentinel should be shown
    pub fn has_more(&self) -> bool {
        self.len < self.total
    }
}

impl Default for DisplayWindow {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extend(window: &mut DisplayWindow) -> bool {
        match window.request_more() {
            Some(generation) => window.complete(generation),
            None => false,
        }
    }

    #[test]
    fn test_twenty_items_reveal_in_pages() {
        let mut window = DisplayWindow::default();
        window.reset(20);
        assert_eq!(window.len(), 6);

        let mut seen = Vec::new();
        for _ in 0..3 {
            assert!(extend(&mut window));
            seen.push(window.len());
        }
        assert_eq!(seen, [12, 18, 20]);

        assert!(!window.has_more());
        assert_eq!(window.request_more(), None);
        assert_eq!(window.len(), 20);
    }

    #[test]
    fn test_small_result_has_no_more() {
        let mut window = DisplayWindow::default();
        window.reset(4);
        assert_eq!(window.len(), 4);
        assert_eq!(window.request_more(), None);
        assert_eq!(window.phase(), RevealPhase::Idle);
    }

    #[test]
    fn test_requests_while_extending_are_ignored() {
        let mut window = DisplayWindow::default();
        window.reset(20);

        let generation = window.request_more().unwrap();
        assert!(window.is_extending());
        assert_eq!(window.request_more(), None);
        assert_eq!(window.request_more(), None);

        assert!(window.complete(generation));
        assert_eq!(window.len(), 12);
        // A duplicate completion does nothing
        assert!(!window.complete(generation));
        assert_eq!(window.len(), 12);
    }

    #[test]
    fn test_reset_discards_pending_extension() {
        let mut window = DisplayWindow::default();
        window.reset(20);
        let stale = window.request_more().unwrap();

        window.reset(15);
        assert_eq!(window.phase(), RevealPhase::Idle);
        assert!(!window.complete(stale));
        assert_eq!(window.len(), 6);

        let fresh = window.request_more().unwrap();
        assert_ne!(fresh, stale);
        assert!(window.complete(fresh));
        assert_eq!(window.len(), 12);
    }

    #[test]
    fn test_len_never_exceeds_total() {
        for total in 0..30 {
            let mut window = DisplayWindow::new(4);
            window.reset(total);
            assert_eq!(window.len(), total.min(4));
            while extend(&mut window) {
                assert!(window.len() <= window.total());
            }
            assert_eq!(window.len(), total);
        }
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        let mut window = DisplayWindow::new(0);
        window.reset(3);
        assert_eq!(window.page_size(), 1);
        assert_eq!(window.len(), 1);
    }

    #[test]
    fn test_empty_result() {
        let mut window = DisplayWindow::default();
        window.reset(0);
        assert!(window.is_empty());
        assert_eq!(window.request_more(), None);
    }
}
