//! Server-side widget transitions.
//!
//! The page reports a widget's current state plus one user event and gets
//! back the new state and the patches to apply. Selectors are the fixed ones
//! of the site templates.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::{AdminSidebar, Carousel, FaqAccordion, MobileNav, SidebarEvent};
use crate::dom::Patch;
use crate::dom::selectors::{FAQS, READ_NEXT_DOTS, READ_NEXT_TRACK, SLUG_INPUT};
use crate::forms::SlugField;
use crate::widgets::sidebar::Key;

/// One user event on a widget, with the widget's state before it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "widget", rename_all = "snake_case")]
pub enum Interaction {
    Carousel {
        items: usize,
        #[serde(default)]
        index: usize,
        action: CarouselAction,
    },
    FaqAccordion {
        #[serde(default)]
        open: Vec<u32>,
        toggle: u32,
    },
    AdminSidebar {
        #[serde(default)]
        open: bool,
        event: SidebarInput,
    },
    MobileNav {
        #[serde(default)]
        active: bool,
    },
    SlugAutofill {
        #[serde(default)]
        slug: String,
        #[serde(default)]
        user_edited: bool,
        input: SlugInput,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CarouselAction {
    DotClicked { index: i64 },
    /// Auto-advance tick.
    Advance,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SidebarInput {
    Toggle,
    BackdropClick,
    KeyDown { key: String },
    Resize { width_px: u32 },
}

impl From<SidebarInput> for SidebarEvent {
    fn from(input: SidebarInput) -> Self {
        match input {
            SidebarInput::Toggle => SidebarEvent::Toggle,
            SidebarInput::BackdropClick => SidebarEvent::BackdropClick,
            SidebarInput::KeyDown { key } if key == "Escape" => SidebarEvent::KeyDown(Key::Escape),
            SidebarInput::KeyDown { .. } => SidebarEvent::KeyDown(Key::Other),
            SidebarInput::Resize { width_px } => SidebarEvent::Resize { width_px },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum SlugInput {
    Title(String),
    Slug(String),
}

/// New widget state plus the patches that bring the page in line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractionOutcome {
    pub state: Value,
    pub patches: Vec<Patch>,
}

/// Applies `interaction` and reports where the widget ended up.
pub fn apply(interaction: Interaction) -> InteractionOutcome {
    match interaction {
        Interaction::Carousel {
            items,
            index,
            action,
        } => {
            let mut carousel = Carousel::new(READ_NEXT_TRACK, READ_NEXT_DOTS, items).at(index);
            let patches = match action {
                CarouselAction::DotClicked { index } => carousel.go_to(index),
                CarouselAction::Advance if carousel.auto_advances() => carousel.advance(),
                CarouselAction::Advance => Vec::new(),
            };
            InteractionOutcome {
                state: json!({ "items": items, "index": carousel.index() }),
                patches,
            }
        }
        Interaction::FaqAccordion { open, toggle } => {
            let mut faqs = FaqAccordion::with_open(FAQS, open);
            let patches = faqs.toggle(toggle);
            InteractionOutcome {
                state: json!({ "open": faqs.open_entries() }),
                patches,
            }
        }
        Interaction::AdminSidebar { open, event } => {
            let mut sidebar = AdminSidebar::with_open(open);
            let patches = sidebar.handle(event.into());
            InteractionOutcome {
                state: json!({ "open": sidebar.is_open() }),
                patches,
            }
        }
        Interaction::MobileNav { active } => {
            let mut nav = MobileNav::with_active(active);
            let patches = nav.toggle();
            InteractionOutcome {
                state: json!({ "active": nav.is_active() }),
                patches,
            }
        }
        Interaction::SlugAutofill {
            slug,
            user_edited,
            input,
        } => {
            let mut field = SlugField::restore(slug, user_edited);
            let patches = match input {
                SlugInput::Title(title) => field
                    .title_input(title.trim())
                    .map(|value| vec![Patch::attr(SLUG_INPUT, "value", value)])
                    .unwrap_or_default(),
                SlugInput::Slug(value) => {
                    field.slug_input(&value);
                    Vec::new()
                }
            };
            InteractionOutcome {
                state: json!({ "slug": field.value(), "user_edited": field.is_user_edited() }),
                patches,
            }
        }
    }
}
