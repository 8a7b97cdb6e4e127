//! HTTP request handlers.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod forms;
pub mod fragments;
pub mod health;

pub use forms::{
    create_post_handler, form_wiring_handler, image_preview_handler, update_post_handler,
};
pub use fragments::{
    admin_list_handler, blog_detail_handler, blog_list_handler, home_handler,
    interaction_handler, map_handler, news_detail_handler, news_index_handler, search_handler,
};
pub use health::health_handler;
