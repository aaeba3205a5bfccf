/// Per-card like counter
///
/// Lives next to the poster resolver on a card but never interacts with
/// it: likes are mutated only by explicit button clicks and have no bearing
/// on image resolution.

/// Like counter state for one movie card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeState {
    count: u64,
    liked: bool,
    per_click: u64,
}

impl LikeState {
    pub fn new(initial: u64, per_click: u64) -> Self {
        Self {
            count: initial,
            liked: initial > 0,
            per_click,
        }
    }

    /// Register one click and return the new running total
    pub fn click(&mut self) -> u64 {
        self.count += self.per_click;
        self.liked = true;
        self.count
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn liked(&self) -> bool {
        self.liked
    }

    pub fn per_click(&self) -> u64 {
        self.per_click
    }

    /// The numeric badge only appears once there is something to show
    pub fn show_badge(&self) -> bool {
        self.count > 0
    }
}
