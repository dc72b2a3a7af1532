// SPDX-License-Identifier: MPL-2.0
//! Page-session state shared by the overlays of one screen.
//!
//! A [`PageSession`] is created when a screen is entered and dropped when it
//! is left. It owns the scroll lock and the tab-order counter, so overlays
//! read and mutate explicit fields instead of process-wide flags.

use std::collections::BTreeSet;

/// Which overlay holds the scroll lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LockOwner {
    Lightbox,
    ContactModal,
}

/// Page scroll lock. Scrolling is disabled while at least one owner holds it.
///
/// Locking twice with the same owner is a no-op, so an overlay that reopens
/// without closing first can never leave a stale lock behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollLock {
    holders: BTreeSet<LockOwner>,
}

impl ScrollLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the lock state changed.
    pub fn lock(&mut self, owner: LockOwner) -> bool {
        self.holders.insert(owner)
    }

    /// Returns `true` if the lock state changed.
    pub fn release(&mut self, owner: LockOwner) -> bool {
        self.holders.remove(&owner)
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        !self.holders.is_empty()
    }

    #[must_use]
    pub fn is_held_by(&self, owner: LockOwner) -> bool {
        self.holders.contains(&owner)
    }
}

/// Default first tab index handed out on a page.
pub const DEFAULT_INITIAL_TAB_INDEX: u32 = 1;

/// Sequential tab-index allocator.
///
/// Each call to [`TabOrder::next_index`] returns the next index, starting one
/// past the initial value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabOrder {
    current: u32,
}

impl TabOrder {
    #[must_use]
    pub fn new(initial: u32) -> Self {
        Self { current: initial }
    }

    pub fn next_index(&mut self) -> u32 {
        self.current += 1;
        self.current
    }

    #[must_use]
    pub fn last_issued(&self) -> u32 {
        self.current
    }
}

impl Default for TabOrder {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL_TAB_INDEX)
    }
}

/// Per-screen session object.
#[derive(Debug, Clone, Default)]
pub struct PageSession {
    pub scroll_lock: ScrollLock,
    pub tab_order: TabOrder,
}

impl PageSession {
    #[must_use]
    pub fn new(initial_tab_index: u32) -> Self {
        Self {
            scroll_lock: ScrollLock::new(),
            tab_order: TabOrder::new(initial_tab_index),
        }
    }

    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.scroll_lock.is_locked()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_is_idempotent_per_owner() {
        let mut lock = ScrollLock::new();
        assert!(lock.lock(LockOwner::Lightbox));
        assert!(!lock.lock(LockOwner::Lightbox));
        assert!(lock.is_locked());

        assert!(lock.release(LockOwner::Lightbox));
        assert!(!lock.is_locked());
        assert!(!lock.release(LockOwner::Lightbox));
    }

    #[test]
    fn lock_stays_while_another_owner_holds_it() {
        let mut lock = ScrollLock::new();
        lock.lock(LockOwner::Lightbox);
        lock.lock(LockOwner::ContactModal);
        lock.release(LockOwner::Lightbox);

        assert!(lock.is_locked());
        assert!(lock.is_held_by(LockOwner::ContactModal));
        assert!(!lock.is_held_by(LockOwner::Lightbox));
    }

    #[test]
    fn tab_order_starts_after_initial_index() {
        let mut order = TabOrder::new(2);
        assert_eq!(order.next_index(), 3);
        assert_eq!(order.next_index(), 4);
        assert_eq!(order.last_issued(), 4);
    }

    #[test]
    fn default_tab_order_uses_default_initial_index() {
        let mut order = TabOrder::default();
        assert_eq!(order.next_index(), DEFAULT_INITIAL_TAB_INDEX + 1);
    }

    #[test]
    fn new_session_is_unlocked() {
        let session = PageSession::new(2);
        assert!(!session.scroll_locked());
        assert_eq!(session.tab_order.last_issued(), 2);
    }
}
