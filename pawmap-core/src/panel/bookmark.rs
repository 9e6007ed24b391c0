/// What to do with the local flag if the remote call fails.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkFailurePolicy {
    /// Restore the last confirmed value.
    #[default]
    Rollback,
    /// Keep the optimistic value even though the service rejected it.
    Keep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkStatus {
    Confirmed,
    Pending,
}

/// A toggle that has been applied locally but not yet
/// acknowledged by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingToggle {
    epoch: u64,
    seq: u64,
    pub bookmarked: bool,
}

/// Optimistic bookmark flag of the current place.
///
/// The flag is seeded once from the first fetched snapshot and
/// afterwards only changed by the viewer. Later snapshots never
/// overwrite it.
#[derive(Debug, Clone)]
pub struct BookmarkToggle {
    policy: BookmarkFailurePolicy,
    epoch: u64,
    flag: bool,
    confirmed: bool,
    touched: bool,
    latest_seq: u64,
    confirmed_seq: u64,
    in_flight: usize,
}

impl BookmarkToggle {
    pub const fn new(policy: BookmarkFailurePolicy) -> Self {
        Self {
            policy,
            epoch: 0,
            flag: false,
            confirmed: false,
            touched: false,
            latest_seq: 0,
            confirmed_seq: 0,
            in_flight: 0,
        }
    }

    pub const fn is_bookmarked(&self) -> bool {
        self.flag
    }

    pub const fn status(&self) -> BookmarkStatus {
        if self.in_flight > 0 {
            BookmarkStatus::Pending
        } else {
            BookmarkStatus::Confirmed
        }
    }

    /// Forget everything, e.g. when another place is opened.
    /// Toggles that are still in flight will be ignored.
    pub fn reset(&mut self) {
        *self = Self {
            epoch: self.epoch + 1,
            ..Self::new(self.policy)
        };
    }

    /// Initialize the flag from fetched data unless the viewer
    /// already toggled it.
    pub fn seed(&mut self, bookmarked: bool) {
        if self.touched {
            return;
        }
        self.flag = bookmarked;
        self.confirmed = bookmarked;
    }

    /// Flip the flag immediately.
    pub fn begin(&mut self) -> PendingToggle {
        self.touched = true;
        self.flag = !self.flag;
        self.latest_seq += 1;
        self.in_flight += 1;
        PendingToggle {
            epoch: self.epoch,
            seq: self.latest_seq,
            bookmarked: self.flag,
        }
    }

    pub fn succeed(&mut self, toggle: PendingToggle) {
        if !self.settle(toggle) {
            return;
        }
        if toggle.seq > self.confirmed_seq {
            self.confirmed = toggle.bookmarked;
            self.confirmed_seq = toggle.seq;
        }
    }

    /// Returns `true` if the flag has been rolled back.
    pub fn fail(&mut self, toggle: PendingToggle) -> bool {
        if !self.settle(toggle) {
            return false;
        }
        // A newer toggle owns the flag now.
        if self.policy == BookmarkFailurePolicy::Rollback && toggle.seq == self.latest_seq {
            self.flag = self.confirmed;
            return true;
        }
        false
    }

    fn settle(&mut self, toggle: PendingToggle) -> bool {
        if toggle.epoch != self.epoch {
            return false;
        }
        debug_assert!(self.in_flight > 0);
        self.in_flight = self.in_flight.saturating_sub(1);
        true
    }
}

impl Default for BookmarkToggle {
    fn default() -> Self {
        Self::new(BookmarkFailurePolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_immediately_and_confirm_later() {
        let mut b = BookmarkToggle::default();
        let t = b.begin();
        assert!(b.is_bookmarked());
        assert_eq!(BookmarkStatus::Pending, b.status());
        b.succeed(t);
        assert!(b.is_bookmarked());
        assert_eq!(BookmarkStatus::Confirmed, b.status());
    }

    #[test]
    fn seed_only_before_the_first_toggle() {
        let mut b = BookmarkToggle::default();
        b.seed(true);
        assert!(b.is_bookmarked());
        let t = b.begin();
        b.succeed(t);
        b.seed(true);
        assert!(!b.is_bookmarked());
    }

    #[test]
    fn roll_back_on_failure() {
        let mut b = BookmarkToggle::new(BookmarkFailurePolicy::Rollback);
        let t = b.begin();
        assert!(b.fail(t));
        assert!(!b.is_bookmarked());
        assert_eq!(BookmarkStatus::Confirmed, b.status());
    }

    #[test]
    fn keep_diverged_flag_on_failure() {
        let mut b = BookmarkToggle::new(BookmarkFailurePolicy::Keep);
        let t = b.begin();
        assert!(!b.fail(t));
        assert!(b.is_bookmarked());
    }

    #[test]
    fn failure_of_a_superseded_toggle_does_not_roll_back() {
        let mut b = BookmarkToggle::default();
        let first = b.begin();
        let second = b.begin();
        assert!(!b.is_bookmarked());
        assert!(!b.fail(first));
        assert!(!b.is_bookmarked());
        assert_eq!(BookmarkStatus::Pending, b.status());
        b.succeed(second);
        assert_eq!(BookmarkStatus::Confirmed, b.status());
    }

    #[test]
    fn ignore_toggles_from_before_a_reset() {
        let mut b = BookmarkToggle::default();
        let t = b.begin();
        b.reset();
        b.seed(true);
        assert!(!b.fail(t));
        assert!(b.is_bookmarked());
        assert_eq!(BookmarkStatus::Confirmed, b.status());
    }
}
