//! Hover/focus dropdown menu

use std::time::{Duration, Instant};

/// Observable dropdown states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownState {
    Closed,
    Open,
    /// Open, but a pointer-leave has armed the grace timer
    PendingClose,
}

/// Dropdown menu state machine.
///
/// Opens on pointer-enter or focus-enter. Pointer-leave closes it only
/// after a grace delay, so a pointer crossing the gap between trigger
/// and menu does not flicker the menu shut; re-entering within the
/// delay cancels the pending close. Escape, an outside press, or focus
/// leaving the subtree close it immediately.
///
/// Transitions take an explicit `Instant` so event sequences replay
/// deterministically in tests.
#[derive(Debug)]
pub struct Dropdown {
    grace: Duration,
    open: bool,
    focused: bool,
    close_at: Option<Instant>,
}

impl Dropdown {
    pub fn new(grace: Duration) -> Self {
        Self {
            grace,
            open: false,
            focused: false,
            close_at: None,
        }
    }

    pub fn state(&self) -> DropdownState {
        match (self.open, self.close_at) {
            (false, _) => DropdownState::Closed,
            (true, None) => DropdownState::Open,
            (true, Some(_)) => DropdownState::PendingClose,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Pointer entered the trigger or the menu. Cancels any pending
    /// close from an earlier leave.
    pub fn pointer_enter(&mut self) {
        self.close_at = None;
        self.open = true;
    }

    /// Pointer left the component. Arms the grace timer rather than
    /// closing outright.
    pub fn pointer_leave(&mut self, now: Instant) {
        if self.open {
            self.close_at = Some(now + self.grace);
        }
    }

    /// Keyboard focus entered the trigger or a menu item.
    pub fn focus_enter(&mut self) {
        self.focused = true;
        self.close_at = None;
        self.open = true;
    }

    /// Focus moved; closes only when it left the component's subtree.
    pub fn focus_leave(&mut self, moved_inside: bool) {
        if !moved_inside {
            self.focused = false;
            self.open = false;
            self.close_at = None;
        }
    }

    /// Escape closes the menu and clears focus state.
    pub fn escape(&mut self) {
        self.open = false;
        self.focused = false;
        self.close_at = None;
    }

    /// Pointer press outside the component.
    pub fn outside_press(&mut self) {
        self.open = false;
        self.focused = false;
        self.close_at = None;
    }

    /// Advance time: an expired grace timer closes the menu.
    pub fn poll(&mut self, now: Instant) {
        if let Some(deadline) = self.close_at {
            if now >= deadline {
                self.open = false;
                self.close_at = None;
            }
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }
}
