//! Admin sidebar toggle.

use crate::dom::Patch;
use crate::dom::selectors::{ADMIN_SIDEBAR, BODY, SIDEBAR_BACKDROP, SIDEBAR_TOGGLE};

/// Viewport width from which the sidebar is always laid out inline.
pub const DESKTOP_BREAKPOINT_PX: u32 = 768;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarEvent {
    Toggle,
    BackdropClick,
    KeyDown(Key),
    Resize { width_px: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdminSidebar {
    open: bool,
}

impl AdminSidebar {
    pub fn with_open(open: bool) -> Self {
        Self { open }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Patches wiring the toggles' ARIA attributes on page load.
    pub fn init_patches() -> Vec<Patch> {
        vec![
            Patch::attr(ADMIN_SIDEBAR, "id", "admin-sidebar"),
            Patch::attr(SIDEBAR_TOGGLE, "aria-controls", "admin-sidebar"),
            Patch::attr(SIDEBAR_TOGGLE, "aria-expanded", "false"),
        ]
    }

    /// Applies an event; returns the patches for the new state, or nothing
    /// when the event leaves the state unchanged.
    pub fn handle(&mut self, event: SidebarEvent) -> Vec<Patch> {
        let open = match event {
            SidebarEvent::Toggle => !self.open,
            SidebarEvent::BackdropClick | SidebarEvent::KeyDown(Key::Escape) => false,
            SidebarEvent::KeyDown(Key::Other) => self.open,
            SidebarEvent::Resize { width_px } if width_px >= DESKTOP_BREAKPOINT_PX => false,
            SidebarEvent::Resize { .. } => self.open,
        };

        if open == self.open {
            return Vec::new();
        }
        self.open = open;
        self.patches()
    }

    pub fn patches(&self) -> Vec<Patch> {
        vec![
            Patch::toggle_class(ADMIN_SIDEBAR, "is-open", self.open),
            Patch::toggle_class(BODY, "sidebar-open", self.open),
            Patch::attr(SIDEBAR_TOGGLE, "aria-expanded", self.open.to_string()),
            Patch::style(SIDEBAR_BACKDROP, "display", if self.open { "block" } else { "none" }),
        ]
    }
}
