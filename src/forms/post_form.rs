//! Blog post form: field collection, validation and payload assembly.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use regex::Regex;
use serde_json::{Map, Value};
use validator::{Validate, ValidationError};

use super::field_errors::FieldErrors;
use super::slug::{SlugField, is_url_safe};
use crate::dom::selectors::{IMAGE_PREVIEW, IMAGE_PREVIEW_IMG};
use crate::dom::{Hydration, Patch};
use crate::domain::entities::{ImageUpload, PostSubmission};

pub const ALLOWED_IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "webp", "gif"];

/// Where the admin lands after a successful create or update.
pub const SUCCESS_REDIRECT: &str = "/admin/blog-posts";

static CONTENT_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:yt_vid_id|section_[0-9]+(?:_[a-z0-9]+)+|faq_[qa]_[0-9]+)$").unwrap());

fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if slug.is_empty() || is_url_safe(slug) {
        return Ok(());
    }
    Err(ValidationError::new("slug").with_message(Cow::from(
        "Slug may only contain lowercase letters, digits and single hyphens.",
    )))
}

/// Submitted values of the create and update post forms.
#[derive(Debug, Clone, Default, Validate)]
pub struct PostForm {
    #[validate(length(min = 1, max = 255, message = "Title is required (max 255 characters)."))]
    pub title: String,

    #[validate(length(min = 1, max = 255, message = "Slug is required (max 255 characters)."))]
    #[validate(custom(function = "validate_slug"))]
    pub slug: String,

    #[validate(required(message = "Category is required."))]
    pub blog_cat_id: Option<i64>,

    #[validate(required(message = "Author is required."))]
    pub author_id: Option<i64>,

    /// Section, FAQ and video fields, keyed by their flattened names.
    pub content: BTreeMap<String, String>,
}

impl PostForm {
    /// Sorts raw `name=value` pairs into the form.
    ///
    /// Values are trimmed. Ids that do not parse count as missing; blank
    /// content fields are dropped; names the form does not know (CSRF token,
    /// submit button) are ignored.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut form = PostForm::default();
        for (name, value) in fields {
            let name = name.as_ref().trim();
            let value = value.as_ref().trim();
            match name {
                "title" => form.title = value.to_string(),
                "slug" => form.slug = value.to_string(),
                "blog_cat_id" => form.blog_cat_id = value.parse().ok(),
                "author_id" => form.author_id = value.parse().ok(),
                _ if CONTENT_KEY.is_match(name) && !value.is_empty() => {
                    form.content.insert(name.to_string(), value.to_string());
                }
                _ => {}
            }
        }
        form
    }

    /// Fills a blank slug from the title, as the page does on submit.
    pub fn fill_slug(&mut self) {
        let mut field = SlugField::default();
        field.slug_input(&self.slug);
        self.slug = field.fill_if_blank(&self.title).to_string();
    }

    /// Runs the field rules plus the image rules of a create.
    pub fn check(&self, image: Option<&ImageUpload>) -> Result<(), FieldErrors> {
        self.check_with(image, true)
    }

    /// Same as [`Self::check`], except that an update may keep its image.
    pub fn check_update(&self, image: Option<&ImageUpload>) -> Result<(), FieldErrors> {
        self.check_with(image, false)
    }

    fn check_with(&self, image: Option<&ImageUpload>, image_required: bool) -> Result<(), FieldErrors> {
        let mut errors = match self.validate() {
            Ok(()) => FieldErrors::default(),
            Err(e) => FieldErrors::from_validation(&e),
        };

        match image.filter(|img| !img.bytes.is_empty()) {
            None if image_required => errors.add("image", "Image is required."),
            None => {}
            Some(img) => {
                let allowed = img
                    .extension()
                    .is_some_and(|ext| ALLOWED_IMAGE_EXTENSIONS.contains(&ext.as_str()));
                if !allowed {
                    errors.add(
                        "image",
                        format!(
                            "Image must be one of: {}.",
                            ALLOWED_IMAGE_EXTENSIONS.join(", ")
                        ),
                    );
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// JSON payload sent alongside the image; content fields are grouped
    /// under `content`.
    pub fn payload(&self) -> Value {
        let mut payload = Map::new();
        payload.insert("title".into(), Value::from(self.title.clone()));
        payload.insert("slug".into(), Value::from(self.slug.clone()));
        if let Some(id) = self.blog_cat_id {
            payload.insert("blog_cat_id".into(), Value::from(id));
        }
        if let Some(id) = self.author_id {
            payload.insert("author_id".into(), Value::from(id));
        }
        if !self.content.is_empty() {
            let content: Map<String, Value> = self
                .content
                .iter()
                .map(|(k, v)| (k.clone(), Value::from(v.clone())))
                .collect();
            payload.insert("content".into(), Value::Object(content));
        }
        Value::Object(payload)
    }

    /// Fills the slug, validates, and packages a new post.
    pub fn into_submission(mut self, image: Option<ImageUpload>) -> Result<PostSubmission, FieldErrors> {
        self.fill_slug();
        self.check(image.as_ref())?;
        Ok(PostSubmission {
            payload: self.payload(),
            image,
        })
    }

    /// Like [`Self::into_submission`] for an existing post; without a new
    /// image the upstream keeps the current one.
    pub fn into_update(mut self, image: Option<ImageUpload>) -> Result<PostSubmission, FieldErrors> {
        self.fill_slug();
        self.check_update(image.as_ref())?;
        Ok(PostSubmission {
            payload: self.payload(),
            image: image.filter(|img| !img.bytes.is_empty()),
        })
    }
}

/// `data:` URL of an uploaded image.
pub fn data_url(image: &ImageUpload) -> String {
    format!("data:{};base64,{}", image.mime(), STANDARD.encode(&image.bytes))
}

/// Shows the chosen image in the preview box, or hides the box.
pub fn image_preview(image: Option<&ImageUpload>) -> Hydration {
    let patches = match image.filter(|img| !img.bytes.is_empty()) {
        Some(img) => vec![
            Patch::attr(IMAGE_PREVIEW_IMG, "src", data_url(img)),
            Patch::show(IMAGE_PREVIEW, "block"),
        ],
        None => vec![
            Patch::hide(IMAGE_PREVIEW),
            Patch::attr(IMAGE_PREVIEW_IMG, "src", ""),
        ],
    };
    Hydration::from(patches)
}
