//! Post form pipeline: slug auto-fill, validation, payload assembly,
//! upstream error placement and double-submit protection.

pub mod field_errors;
pub mod post_form;
pub mod slug;
pub mod submit;

pub use field_errors::{FORM_FIELD, FieldErrors};
pub use post_form::{PostForm, SUCCESS_REDIRECT, data_url, image_preview};
pub use slug::{SlugField, is_url_safe, slugify};
pub use submit::{SubmitGuard, SubmitTarget, SubmitTicket};
