//! Handlers of the blog post forms.

use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
};

use crate::application::services::SubmitOutcome;
use crate::dom::Hydration;
use crate::domain::entities::ImageUpload;
use crate::error::FormError;
use crate::forms::{FORM_FIELD, FieldErrors};
use crate::state::AppState;

/// Text fields and the optional image of a multipart form.
#[derive(Debug, Default)]
struct FormParts {
    fields: Vec<(String, String)>,
    image: Option<ImageUpload>,
}

async fn read_parts(mut multipart: Multipart) -> Result<FormParts, FormError> {
    let mut parts = FormParts::default();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return Err(unreadable(e)),
        };

        let name = field.name().unwrap_or_default().to_string();
        if name == "image" {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let content_type = field.content_type().map(str::to_string);
            let bytes = field.bytes().await.map_err(unreadable)?;
            if !file_name.is_empty() || !bytes.is_empty() {
                parts.image = Some(ImageUpload {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
        } else {
            let value = field.text().await.map_err(unreadable)?;
            parts.fields.push((name, value));
        }
    }

    Ok(parts)
}

fn unreadable(e: axum::extract::multipart::MultipartError) -> FormError {
    tracing::warn!("Unreadable form submission: {}", e);
    let mut errors = FieldErrors::default();
    errors.add(FORM_FIELD, "The form could not be read.");
    FormError::Invalid(errors)
}

/// `POST /forms/blog-posts`
///
/// # Response Codes
///
/// - **201 Created**: post created; body carries the redirect target
/// - **409 Conflict**: the same post is already being created
/// - **422 Unprocessable Entity**: field errors, with patches placing them
/// - **502 Bad Gateway**: the API failed
pub async fn create_post_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<SubmitOutcome>), FormError> {
    let parts = read_parts(multipart).await?;
    let outcome = state
        .post_form_service
        .submit(parts.fields, parts.image)
        .await?;
    Ok((StatusCode::CREATED, Json(outcome)))
}

/// `PUT /forms/blog-posts/{id}`
///
/// Same form as create; the image may be left out to keep the current one.
///
/// # Response Codes
///
/// - **200 OK**: post updated; body carries the redirect target
/// - **409 Conflict**: an update of this post is in flight
/// - **422 Unprocessable Entity**: field errors, with patches placing them
/// - **502 Bad Gateway**: the API failed
pub async fn update_post_handler(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
    multipart: Multipart,
) -> Result<Json<SubmitOutcome>, FormError> {
    let parts = read_parts(multipart).await?;
    let outcome = state
        .post_form_service
        .update(post_id, parts.fields, parts.image)
        .await?;
    Ok(Json(outcome))
}

/// `GET /forms/blog-posts`
pub async fn form_wiring_handler(State(state): State<AppState>) -> Json<Hydration> {
    Json(state.post_form_service.form_hydration())
}

/// `POST /forms/blog-posts/preview`
pub async fn image_preview_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Hydration>, FormError> {
    let parts = read_parts(multipart).await?;
    Ok(Json(state.post_form_service.preview(parts.image.as_ref())))
}
