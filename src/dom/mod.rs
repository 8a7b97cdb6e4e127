//! DOM mutation model.
//!
//! A page is hydrated by applying a [`Hydration`]: an ordered list of
//! [`Patch`]es addressed by CSS selector, followed by the [`Binding`]s that
//! tell the page which interactions to wire. Patches apply to every element
//! matching their selector, in order; a selector matching nothing is a no-op.

pub mod binding;
pub mod patch;
pub mod selectors;

use serde::{Deserialize, Serialize};

pub use binding::{Binding, Bounds, Marker};
pub use patch::Patch;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hydration {
    pub patches: Vec<Patch>,
    pub bindings: Vec<Binding>,
}

impl Hydration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, patch: Patch) -> &mut Self {
        self.patches.push(patch);
        self
    }

    pub fn extend(&mut self, patches: impl IntoIterator<Item = Patch>) -> &mut Self {
        self.patches.extend(patches);
        self
    }

    pub fn bind(&mut self, binding: Binding) -> &mut Self {
        self.bindings.push(binding);
        self
    }

    /// Appends another hydration's patches and bindings.
    pub fn merge(&mut self, other: Hydration) -> &mut Self {
        self.patches.extend(other.patches);
        self.bindings.extend(other.bindings);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.patches.is_empty() && self.bindings.is_empty()
    }

    /// Inner HTML last written to `selector`.
    pub fn html_for(&self, selector: &str) -> Option<&str> {
        self.patches.iter().rev().find_map(|p| match p {
            Patch::SetHtml { selector: s, html } if s == selector => Some(html.as_str()),
            _ => None,
        })
    }

    /// Text last written to `selector`.
    pub fn text_for(&self, selector: &str) -> Option<&str> {
        self.patches.iter().rev().find_map(|p| match p {
            Patch::SetText { selector: s, text } if s == selector => Some(text.as_str()),
            _ => None,
        })
    }

    /// Attribute value last written to `selector`.
    pub fn attr_for(&self, selector: &str, name: &str) -> Option<&str> {
        self.patches.iter().rev().find_map(|p| match p {
            Patch::SetAttr {
                selector: s,
                name: n,
                value,
            } if s == selector && n == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// Every patch addressed to `selector`, in order.
    pub fn patches_for<'a>(&'a self, selector: &'a str) -> impl Iterator<Item = &'a Patch> + 'a {
        self.patches.iter().filter(move |p| p.selector() == selector)
    }
}

impl From<Vec<Patch>> for Hydration {
    fn from(patches: Vec<Patch>) -> Self {
        Self {
            patches,
            bindings: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_uses_last_write() {
        let mut h = Hydration::new();
        h.push(Patch::html(".a", "first"))
            .push(Patch::text(".b", "text"))
            .push(Patch::html(".a", "second"))
            .push(Patch::attr(".img", "src", "/x.png"));

        assert_eq!(h.html_for(".a"), Some("second"));
        assert_eq!(h.text_for(".b"), Some("text"));
        assert_eq!(h.attr_for(".img", "src"), Some("/x.png"));
        assert_eq!(h.attr_for(".img", "alt"), None);
        assert_eq!(h.patches_for(".a").count(), 2);
    }

    #[test]
    fn test_merge_keeps_order() {
        let mut a = Hydration::from(vec![Patch::html(".a", "1")]);
        let mut b = Hydration::from(vec![Patch::html(".b", "2")]);
        b.bind(Binding::FaqAccordion {
            root: ".faq".to_string(),
        });
        a.merge(b);
        assert_eq!(a.patches.len(), 2);
        assert_eq!(a.patches[1].selector(), ".b");
        assert_eq!(a.bindings.len(), 1);
        assert!(!a.is_empty());
        assert!(Hydration::new().is_empty());
    }
}
