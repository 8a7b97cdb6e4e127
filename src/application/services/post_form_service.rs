//! Blog post forms: validation, upstream submission and page wiring.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::dom::selectors::{FIELD_ERROR, IMAGE_INPUT, IMAGE_PREVIEW, SLUG_INPUT, TITLE_INPUT};
use crate::dom::{Binding, Hydration, Patch};
use crate::domain::entities::{ImageUpload, PostSubmission};
use crate::domain::repositories::ContentRepository;
use crate::error::{FetchError, FormError};
use crate::forms::{FieldErrors, PostForm, SUCCESS_REDIRECT, SubmitGuard, SubmitTarget, image_preview};

/// Result of an accepted submission.
#[derive(Debug, Serialize)]
pub struct SubmitOutcome {
    /// Page the admin is sent to next.
    pub redirect: String,
    /// Upstream response body for the created or updated post.
    pub post: Value,
    pub hydration: Hydration,
}

pub struct PostFormService<R: ContentRepository> {
    repository: Arc<R>,
    guard: SubmitGuard,
}

impl<R: ContentRepository> PostFormService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            guard: SubmitGuard::new(),
        }
    }

    /// Validates and creates a post.
    ///
    /// # Errors
    ///
    /// - [`FormError::Invalid`] when local validation fails
    /// - [`FormError::InFlight`] while the same post is already being created
    /// - [`FormError::Rejected`] when the API answers 4xx; its error body is
    ///   mapped onto the form fields
    /// - [`FormError::Fetch`] for any other upstream failure
    pub async fn submit<I, K, V>(
        &self,
        fields: I,
        image: Option<ImageUpload>,
    ) -> Result<SubmitOutcome, FormError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let submission = PostForm::from_fields(fields)
            .into_submission(image)
            .map_err(FormError::Invalid)?;
        self.send(SubmitTarget::Create, &submission).await
    }

    /// Validates and updates post `post_id`. The image is optional.
    ///
    /// # Errors
    ///
    /// Same as [`Self::submit`]; [`FormError::InFlight`] while an update of
    /// the same post is running.
    pub async fn update<I, K, V>(
        &self,
        post_id: i64,
        fields: I,
        image: Option<ImageUpload>,
    ) -> Result<SubmitOutcome, FormError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let submission = PostForm::from_fields(fields)
            .into_update(image)
            .map_err(FormError::Invalid)?;
        self.send(SubmitTarget::Update(post_id), &submission).await
    }

    async fn send(
        &self,
        target: SubmitTarget,
        submission: &PostSubmission,
    ) -> Result<SubmitOutcome, FormError> {
        let slug = submission.payload["slug"].as_str().unwrap_or_default();
        let ticket = self.guard.begin(target.key(slug))?;
        tracing::info!(slug, ?target, "Submitting blog post");

        let result = match target {
            SubmitTarget::Create => self.repository.create_post(submission).await,
            SubmitTarget::Update(id) => self.repository.update_post(id, submission).await,
        };

        match result {
            Ok(post) => {
                let mut hydration = Hydration::new();
                hydration
                    .push(ticket.disable_patch())
                    .push(Patch::text(FIELD_ERROR, ""));
                Ok(SubmitOutcome {
                    redirect: SUCCESS_REDIRECT.to_string(),
                    post,
                    hydration,
                })
            }
            Err(FetchError::Status { url, status, body }) if (400..500).contains(&status) => {
                tracing::warn!(%url, status, "Post rejected: {}", body);
                Err(FormError::Rejected {
                    status,
                    errors: FieldErrors::from_upstream(&body),
                })
            }
            Err(e) => {
                tracing::error!("Post submission failed: {}", e);
                Err(FormError::Fetch(e))
            }
        }
    }

    /// Wiring for a freshly loaded form: slug auto-fill, image preview and
    /// an empty, hidden preview box.
    pub fn form_hydration(&self) -> Hydration {
        let mut hydration = image_preview(None);
        hydration
            .bind(Binding::SlugAutofill {
                title: TITLE_INPUT.to_string(),
                slug: SLUG_INPUT.to_string(),
            })
            .bind(Binding::ImagePreview {
                input: IMAGE_INPUT.to_string(),
                preview: IMAGE_PREVIEW.to_string(),
            });
        hydration
    }

    /// Preview patches for a chosen image.
    pub fn preview(&self, image: Option<&ImageUpload>) -> Hydration {
        image_preview(image)
    }

    /// Number of submissions waiting on the API.
    pub fn in_flight(&self) -> usize {
        self.guard.in_flight()
    }
}
