// SPDX-License-Identifier: MPL-2.0
//! Keyboard focus trap for the closeup view.
//!
//! Focus cycles through a fixed ring: the media itself, then the previous,
//! next and close controls. Tabbing forward from the last element goes back
//! to the media instead of leaving the closeup.
//!
//! The wraparound is a two-state machine. Landing on the last element arms
//! [`TabPhase::AwaitingWrap`]. The next forward Tab then redirects to the top
//! of the ring and returns to [`TabPhase::Normal`].

use super::closeup::Control;

/// Something that can hold keyboard focus inside the closeup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    /// The media being shown in closeup.
    Media,
    Control(Control),
}

/// Tab order inside the closeup, top to bottom.
pub const FOCUS_RING: [FocusTarget; 4] = [
    FocusTarget::Media,
    FocusTarget::Control(Control::Previous),
    FocusTarget::Control(Control::Next),
    FocusTarget::Control(Control::Close),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabPhase {
    #[default]
    Normal,
    /// Focus sits on the last element; the next forward Tab wraps to the top.
    AwaitingWrap,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusTrap {
    focused: Option<FocusTarget>,
    phase: TabPhase,
}

impl FocusTrap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the trap with focus on the media.
    pub fn enter(&mut self) -> FocusTarget {
        self.focus(FOCUS_RING[0])
    }

    /// Disarms the trap; nothing inside the closeup holds focus any more.
    pub fn release(&mut self) {
        self.focused = None;
        self.phase = TabPhase::Normal;
    }

    #[must_use]
    pub fn focused(&self) -> Option<FocusTarget> {
        self.focused
    }

    #[must_use]
    pub fn phase(&self) -> TabPhase {
        self.phase
    }

    /// Moves focus directly, e.g. when a control is clicked.
    pub fn focus(&mut self, target: FocusTarget) -> FocusTarget {
        self.focused = Some(target);
        self.phase = if Some(target) == FOCUS_RING.last().copied() {
            TabPhase::AwaitingWrap
        } else {
            TabPhase::Normal
        };
        target
    }

    /// Handles Tab. Returns the newly focused element, or `None` when the
    /// trap is not armed.
    pub fn tab_forward(&mut self) -> Option<FocusTarget> {
        let current = self.focused?;

        if self.phase == TabPhase::AwaitingWrap {
            return Some(self.focus(FOCUS_RING[0]));
        }

        let position = ring_position(current);
        let next = FOCUS_RING[(position + 1).min(FOCUS_RING.len() - 1)];
        Some(self.focus(next))
    }

    /// Handles Shift+Tab. Going back from the top lands on the last element.
    pub fn tab_backward(&mut self) -> Option<FocusTarget> {
        let current = self.focused?;

        let position = ring_position(current);
        let previous = if position == 0 {
            FOCUS_RING[FOCUS_RING.len() - 1]
        } else {
            FOCUS_RING[position - 1]
        };
        Some(self.focus(previous))
    }
}

fn ring_position(target: FocusTarget) -> usize {
    FOCUS_RING
        .iter()
        .position(|t| *t == target)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn released_trap_ignores_tab() {
        let mut trap = FocusTrap::new();
        assert_eq!(trap.tab_forward(), None);
        assert_eq!(trap.tab_backward(), None);
    }

    #[test]
    fn enter_focuses_media() {
        let mut trap = FocusTrap::new();
        assert_eq!(trap.enter(), FocusTarget::Media);
        assert_eq!(trap.phase(), TabPhase::Normal);
    }

    #[test]
    fn tab_walks_the_ring_in_order() {
        let mut trap = FocusTrap::new();
        trap.enter();

        assert_eq!(
            trap.tab_forward(),
            Some(FocusTarget::Control(Control::Previous))
        );
        assert_eq!(trap.tab_forward(), Some(FocusTarget::Control(Control::Next)));
        assert_eq!(trap.tab_forward(), Some(FocusTarget::Control(Control::Close)));
    }

    #[test]
    fn reaching_the_last_control_arms_the_wrap() {
        let mut trap = FocusTrap::new();
        trap.enter();
        trap.tab_forward();
        trap.tab_forward();
        assert_eq!(trap.phase(), TabPhase::Normal);

        trap.tab_forward();
        assert_eq!(trap.phase(), TabPhase::AwaitingWrap);
    }

    #[test]
    fn tab_after_last_control_returns_to_media() {
        let mut trap = FocusTrap::new();
        trap.enter();
        trap.focus(FocusTarget::Control(Control::Close));

        assert_eq!(trap.tab_forward(), Some(FocusTarget::Media));
        assert_eq!(trap.phase(), TabPhase::Normal);
    }

    #[test]
    fn shift_tab_from_media_goes_to_close() {
        let mut trap = FocusTrap::new();
        trap.enter();

        assert_eq!(
            trap.tab_backward(),
            Some(FocusTarget::Control(Control::Close))
        );
        assert_eq!(trap.phase(), TabPhase::AwaitingWrap);
        assert_eq!(trap.tab_forward(), Some(FocusTarget::Media));
    }

    #[test]
    fn shift_tab_from_close_disarms_the_wrap() {
        let mut trap = FocusTrap::new();
        trap.enter();
        trap.focus(FocusTarget::Control(Control::Close));

        assert_eq!(trap.tab_backward(), Some(FocusTarget::Control(Control::Next)));
        assert_eq!(trap.phase(), TabPhase::Normal);
    }

    #[test]
    fn release_clears_focus_and_phase() {
        let mut trap = FocusTrap::new();
        trap.enter();
        trap.focus(FocusTarget::Control(Control::Close));
        trap.release();

        assert_eq!(trap.focused(), None);
        assert_eq!(trap.phase(), TabPhase::Normal);
    }
}
