//! FAQ accordion.

use std::collections::BTreeSet;

use crate::dom::Patch;
use crate::dom::selectors::{faq_answer, faq_question};

/// Open/closed state of the FAQ entries under `root`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaqAccordion {
    root: String,
    open: BTreeSet<u32>,
}

impl FaqAccordion {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            open: BTreeSet::new(),
        }
    }

    /// Accordion whose `open` entries are already expanded.
    pub fn with_open(root: impl Into<String>, open: impl IntoIterator<Item = u32>) -> Self {
        Self {
            root: root.into(),
            open: open.into_iter().collect(),
        }
    }

    /// Expanded entries, ascending.
    pub fn open_entries(&self) -> Vec<u32> {
        self.open.iter().copied().collect()
    }

    pub fn is_open(&self, index: u32) -> bool {
        self.open.contains(&index)
    }

    /// Toggles entry `index`: `active` on its question, `show` on its answer.
    pub fn toggle(&mut self, index: u32) -> Vec<Patch> {
        let open = if self.open.remove(&index) {
            false
        } else {
            self.open.insert(index);
            true
        };

        vec![
            Patch::toggle_class(faq_question(&self.root, index), "active", open),
            Patch::toggle_class(faq_answer(&self.root, index), "show", open),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::selectors::FAQS;

    #[test]
    fn test_toggle_open_and_close() {
        let mut faqs = FaqAccordion::new(FAQS);

        let opened = faqs.toggle(2);
        assert!(faqs.is_open(2));
        assert_eq!(opened[0], Patch::add_class(faq_question(FAQS, 2), "active"));
        assert_eq!(opened[1], Patch::add_class(faq_answer(FAQS, 2), "show"));

        let closed = faqs.toggle(2);
        assert!(!faqs.is_open(2));
        assert_eq!(closed[1], Patch::remove_class(faq_answer(FAQS, 2), "show"));
    }

    #[test]
    fn test_entries_are_independent() {
        let mut faqs = FaqAccordion::new(FAQS);
        faqs.toggle(1);
        faqs.toggle(3);
        assert!(faqs.is_open(1) && faqs.is_open(3));
        assert!(!faqs.is_open(2));
    }
}
