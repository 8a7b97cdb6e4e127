//! Blog list pager.

use crate::dom::Patch;
use crate::dom::selectors::{BLOG_NEXT, BLOG_PAGE_LABEL, BLOG_PAGER, BLOG_PREV};
use crate::domain::entities::PageMeta;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub page: u32,
    pub per_page: u32,
    pub pages: u32,
    pub total: u64,
}

impl Pager {
    /// First page of a list not loaded yet.
    pub fn new(per_page: u32) -> Self {
        Self {
            page: 1,
            per_page,
            pages: 1,
            total: 0,
        }
    }

    /// State after loading `requested`; values the response reports win.
    pub fn loaded(mut self, requested: u32, meta: &PageMeta) -> Self {
        self.page = meta.page.unwrap_or(requested);
        self.per_page = meta.per_page.unwrap_or(self.per_page);
        self.pages = meta.pages.unwrap_or(self.pages);
        self.total = meta.total.unwrap_or(self.total);
        self
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.pages)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.pages
    }

    /// Page to load for "previous", if any.
    pub fn prev(&self) -> Option<u32> {
        self.has_prev().then(|| self.page - 1)
    }

    /// Page to load for "next", if any.
    pub fn next(&self) -> Option<u32> {
        self.has_next().then(|| self.page + 1)
    }

    /// Styling classes, label and button states. The pager is always shown.
    pub fn patches(&self) -> Vec<Patch> {
        vec![
            Patch::add_class(BLOG_PAGER, "pager"),
            Patch::add_class(BLOG_PREV, "pager__btn"),
            Patch::add_class(BLOG_NEXT, "pager__btn"),
            Patch::add_class(BLOG_PAGE_LABEL, "pager__label"),
            Patch::text(BLOG_PAGE_LABEL, self.label()),
            Patch::flag_attr(BLOG_PREV, "disabled", !self.has_prev()),
            Patch::flag_attr(BLOG_NEXT, "disabled", !self.has_next()),
            Patch::show(BLOG_PAGER, ""),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(page: u32, pages: u32) -> PageMeta {
        PageMeta {
            page: Some(page),
            per_page: Some(6),
            pages: Some(pages),
            total: Some(pages as u64 * 6),
        }
    }

    #[test]
    fn test_first_page() {
        let pager = Pager::new(6).loaded(1, &meta(1, 4));
        assert_eq!(pager.label(), "Page 1 of 4");
        assert_eq!(pager.prev(), None);
        assert_eq!(pager.next(), Some(2));

        let patches = pager.patches();
        assert!(patches.contains(&Patch::attr(BLOG_PREV, "disabled", "")));
        assert!(patches.contains(&Patch::remove_attr(BLOG_NEXT, "disabled")));
    }

    #[test]
    fn test_last_page() {
        let pager = Pager::new(6).loaded(4, &meta(4, 4));
        assert_eq!(pager.prev(), Some(3));
        assert_eq!(pager.next(), None);
        assert!(pager.patches().contains(&Patch::attr(BLOG_NEXT, "disabled", "")));
    }

    #[test]
    fn test_missing_meta_keeps_request() {
        let pager = Pager::new(6).loaded(3, &PageMeta::default());
        assert_eq!(pager.page, 3);
        assert_eq!(pager.pages, 1);
        assert_eq!(pager.per_page, 6);
        assert_eq!(pager.label(), "Page 3 of 1");
        assert_eq!(pager.next(), None);
    }
}
