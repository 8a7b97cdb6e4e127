//! View-models decoded from the upstream API.
//!
//! These types live only for the duration of one page hydration. They are
//! deliberately lenient: missing fields decode to `None` or zero, and the
//! two historical content layouts are normalized into [`Content`].
//!
//! # Entity Types
//!
//! - [`Post`] - A blog or news article, with [`Content`] and [`Analytics`]
//! - [`ListPage`] - A page of list items plus [`PageMeta`]
//! - [`NewsMainRow`] - A featured news window and its post
//! - [`Place`] - A search/map place
//! - [`HomeNewsItem`], [`Weather`] - Home page data
//! - [`PostSubmission`] - A post on its way upstream

pub mod content;
pub mod home;
pub mod list_page;
pub mod news_main;
pub mod place;
pub mod post;
pub mod submission;

pub use content::{AssocPress, Content, Faq, Section};
pub use home::{HomeNewsItem, Weather};
pub use list_page::{ListPage, PageMeta};
pub use news_main::{NewsMain, NewsMainRow};
pub use place::Place;
pub use post::{Analytics, Post, PostKind};
pub use submission::{ImageUpload, PostSubmission};
