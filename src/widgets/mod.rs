//! Interaction state machines.
//!
//! Each widget owns its state and answers every transition with the patches
//! that bring the page in line. The bindings in a [`crate::dom::Hydration`]
//! say which widgets to wire; [`interaction::apply`] runs one transition for
//! a page that reports its events.

pub mod accordion;
pub mod carousel;
pub mod interaction;
pub mod nav;
pub mod pager;
pub mod sidebar;

pub use accordion::FaqAccordion;
pub use carousel::{Carousel, CarouselDriver, CarouselEvent, run_carousel, spawn_carousel};
pub use interaction::{Interaction, InteractionOutcome};
pub use nav::MobileNav;
pub use pager::Pager;
pub use sidebar::{AdminSidebar, SidebarEvent};
