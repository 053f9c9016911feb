// SPDX-License-Identifier: MPL-2.0
//! Index controller: sole owner of the position within the item sequence.
//!
//! Every navigation request, whatever its source (arrows, keys, drag,
//! indicator, autoplay), ends up here. Out-of-range requests never fail: they
//! wrap when looping and are ignored otherwise, which is also how arrows end
//! up disabled at the boundaries of a non-looping sequence.

/// Navigation state snapshot.
///
/// `current_index < item_count` whenever `item_count > 0`. With no items the
/// index is meaningless and reported as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigatorState {
    pub current_index: usize,
    pub item_count: usize,
    pub is_looping: bool,
}

/// A committed index change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexChange {
    pub previous: usize,
    pub next: usize,
}

/// Relative navigation intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Previous,
    Next,
}

impl Step {
    fn delta(self) -> isize {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct IndexController {
    state: NavigatorState,
}

impl IndexController {
    /// Creates a controller positioned at `initial_index`, clamped into range.
    #[must_use]
    pub fn new(item_count: usize, initial_index: usize, is_looping: bool) -> Self {
        Self {
            state: NavigatorState {
                current_index: clamp_index(initial_index, item_count),
                item_count,
                is_looping,
            },
        }
    }

    #[must_use]
    pub fn state(&self) -> NavigatorState {
        self.state
    }

    /// Current index, or `None` when there are no items.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        (self.state.item_count > 0).then_some(self.state.current_index)
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.state.item_count
    }

    /// Replaces the item count, clamping the current index into the new range.
    ///
    /// This is a reset, not a navigation: no change is reported.
    pub fn reset(&mut self, item_count: usize, index: usize) {
        self.state.item_count = item_count;
        self.state.current_index = clamp_index(index, item_count);
    }

    /// Resolves a raw target against the wrap/clamp rule.
    ///
    /// Returns `None` when the request must not change anything: empty
    /// sequence, target equal to the current index, or an out-of-range
    /// target on a non-looping sequence.
    #[must_use]
    pub fn resolve(&self, target: isize) -> Option<usize> {
        let count = self.state.item_count;
        if count == 0 {
            return None;
        }
        let count_signed = isize::try_from(count).ok()?;
        let resolved = if (0..count_signed).contains(&target) {
            target.unsigned_abs()
        } else if self.state.is_looping {
            target.rem_euclid(count_signed).unsigned_abs()
        } else {
            return None;
        };
        (resolved != self.state.current_index).then_some(resolved)
    }

    /// Moves to `target`, wrapping or ignoring out-of-range values.
    pub fn go_to(&mut self, target: isize) -> Option<IndexChange> {
        let next = self.resolve(target)?;
        Some(self.commit(next))
    }

    /// Moves one step forward or backward.
    pub fn step(&mut self, step: Step) -> Option<IndexChange> {
        let current = isize::try_from(self.state.current_index).ok()?;
        self.go_to(current + step.delta())
    }

    pub fn go_next(&mut self) -> Option<IndexChange> {
        self.step(Step::Next)
    }

    pub fn go_prev(&mut self) -> Option<IndexChange> {
        self.step(Step::Previous)
    }

    /// Direct jump to an already-validated index (indicator targets).
    ///
    /// Skips the wrap rule entirely; anything outside the range is ignored.
    pub fn jump_to(&mut self, index: usize) -> Option<IndexChange> {
        if index >= self.state.item_count || index == self.state.current_index {
            return None;
        }
        Some(self.commit(index))
    }

    /// Returns true if `step` would change the index.
    #[must_use]
    pub fn can_step(&self, step: Step) -> bool {
        isize::try_from(self.state.current_index)
            .ok()
            .and_then(|current| self.resolve(current + step.delta()))
            .is_some()
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.can_step(Step::Next)
    }

    #[must_use]
    pub fn can_go_prev(&self) -> bool {
        self.can_step(Step::Previous)
    }

    fn commit(&mut self, next: usize) -> IndexChange {
        let previous = self.state.current_index;
        self.state.current_index = next;
        IndexChange { previous, next }
    }
}

fn clamp_index(index: usize, item_count: usize) -> usize {
    index.min(item_count.saturating_sub(1))
}
