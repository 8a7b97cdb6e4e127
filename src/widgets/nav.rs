//! Mobile navigation modal.

use crate::dom::Patch;
use crate::dom::selectors::{CLOSE_ICON, MENU_ICON, MOBILE_NAV};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileNav {
    active: bool,
}

impl MobileNav {
    pub fn with_active(active: bool) -> Self {
        Self { active }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Flips the modal and swaps the menu and close icons.
    pub fn toggle(&mut self) -> Vec<Patch> {
        self.active = !self.active;
        let (menu, close) = if self.active {
            ("none", "inline")
        } else {
            ("inline", "none")
        };
        vec![
            Patch::toggle_class(MOBILE_NAV, "active", self.active),
            Patch::style(MENU_ICON, "display", menu),
            Patch::style(CLOSE_ICON, "display", close),
        ]
    }
}
