//! Header menu chrome state.
//!
//! DESIGN
//! ======
//! Kept apart from `session` so menu toggles never touch authentication
//! state. Any navigation closes both menus.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Open/closed state of the header's collapsible menus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub mobile_open: bool,
    pub profile_open: bool,
}

impl MenuState {
    pub fn toggle_mobile(&mut self) {
        self.mobile_open = !self.mobile_open;
    }

    /// The profile dropdown and the mobile menu never show together.
    pub fn toggle_profile(&mut self) {
        self.profile_open = !self.profile_open;
        if self.profile_open {
            self.mobile_open = false;
        }
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }
}
