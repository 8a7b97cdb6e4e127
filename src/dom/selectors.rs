//! Fixed CSS selectors of the page templates.
//!
//! These mirror the markup the site templates ship; some class names carry
//! historical typos that the templates depend on.

// Article detail
pub const ARTICLE_IMAGE: &str = ".article-img img";
pub const ARTICLE_CATEGORY: &str = ".article-category";
pub const ARTICLE_TITLE: &str = ".article-title";
pub const ARTICLE_META: &str = ".article-meta";
pub const ARTICLE_DATE: &str = ".aricle-date-created";
pub const ASSOC_PRESS: &str = ".section-7-assoc-press";
pub const FAQS: &str = ".section-8-article-faqs";
pub const WATCH_NOW: &str = ".section-4-watch-now";
pub const WATCH_NOW_VIDEO: &str = ".section-4-watch-now .watch-now-video";
pub const COMMENT_COUNT: &str = ".comment-count";
pub const MOST_READ_GRID: &str = ".section-12-most-read .most-read-list";
pub const READ_NEXT: &str = ".section-10-read-next";
pub const READ_NEXT_TRACK: &str = ".section-10-read-next .carousel-track";
pub const READ_NEXT_DOTS: &str = ".section-10-read-next .carousel-dots";
pub const READ_NEXT_WRAPPER: &str = ".section-10-read-next .carousel-wrapper";
pub const RELATED_LIST: &str = ".section-13-related .related-list";

/// Body section containers, paired with their content key.
pub const BODY_SECTIONS: [(&str, &str); 6] = [
    (".section-1-article-deats", "section_1"),
    (".section-2-article-deats", "section_2"),
    (".section-3-article-deats", "section_3"),
    (".section-4-article-deats", "section_4"),
    (".section-5-article-deats", "section_5"),
    (".section-6-article-deats", "section_6_conclusion"),
];

// Blog list
pub const BLOG_LIST: &str = "[data-latest-blog-list]";
pub const BLOG_PAGER: &str = "[data-blog-pager]";
pub const BLOG_PREV: &str = "[data-blog-prev]";
pub const BLOG_NEXT: &str = "[data-blog-next]";
pub const BLOG_PAGE_LABEL: &str = "[data-blog-page-label]";

// News index
pub const NEWS_MOST_READ: &str = "[data-most-read-list]";
pub const NEWS_LATEST: &str = "[data-latest-news-list]";
pub const MAIN_STORY_IMAGE: &str = ".main-story-image img";
pub const MAIN_TITLE: &str = "[data-main-title]";
pub const MAIN_DESC: &str = "[data-main-desc]";
pub const MAIN_LINK: &str = "[data-main-link]";

// Admin
pub const ADMIN_LIST: &str = "[data-admin-list]";
pub const ADMIN_THEAD: &str = ".admin-table thead";
pub const ADMIN_TBODY: &str = ".admin-table tbody";
pub const ADMIN_SIDEBAR: &str = ".admin-sidebar";
pub const SIDEBAR_TOGGLE: &str = ".hamburger-btn";
pub const SIDEBAR_BACKDROP: &str = ".sidebar-backdrop";
pub const BODY: &str = "body";

// Post form
pub const IMAGE_PREVIEW: &str = "[data-image-preview]";
pub const IMAGE_PREVIEW_IMG: &str = "[data-image-preview] img";
pub const SUBMIT_BUTTON: &str = "button[type=\"submit\"]";
pub const FIELD_ERROR: &str = "[data-error-for]";
pub const TITLE_INPUT: &str = "input[name=\"title\"]";
pub const SLUG_INPUT: &str = "input[name=\"slug\"]";
pub const IMAGE_INPUT: &str = "input[name=\"image\"]";

// Search and map
pub const SEARCH_RESULTS: &str = "#search-result-list";
pub const MAP: &str = "#map";

// Home
pub const HOME_NEWS: &str = "#news-container";
pub const HOME_WEATHER: &str = "#weather-container";
pub const MENU_TOGGLE: &str = "#menu-toggle";
pub const MOBILE_NAV: &str = "#mobile-nav-modal";
pub const MENU_ICON: &str = "#menu-icon";
pub const CLOSE_ICON: &str = "#close-icon";

/// Error slot of one form field.
pub fn field_error(field: &str) -> String {
    format!("[data-error-for=\"{field}\"]")
}

/// Carousel dot at `index` inside `dots`.
pub fn dot(dots: &str, index: usize) -> String {
    format!("{dots} .dot[data-index=\"{index}\"]")
}

/// FAQ answer following the question button at `index` inside `root`.
pub fn faq_answer(root: &str, index: u32) -> String {
    format!("{root} .faq-question[data-faq-idx=\"{index}\"] + .faq-answer")
}

pub fn faq_question(root: &str, index: u32) -> String {
    format!("{root} .faq-question[data-faq-idx=\"{index}\"]")
}
