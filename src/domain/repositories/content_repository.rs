//! Repository trait for the upstream content API.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::endpoint::Endpoint;
use crate::domain::entities::{ListPage, PostSubmission};
use crate::error::FetchError;

/// Read and write access to the upstream REST API.
///
/// Requests are issued once: there is no retry, backoff or timeout at this
/// layer. Callers decide what a failure means for the section they render.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpContentRepository`] - reqwest client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Fetches an endpoint and returns the parsed JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Status`] with the status and body on non-2xx,
    /// [`FetchError::Transport`] when the request fails and
    /// [`FetchError::Decode`] when the body is not JSON.
    async fn get_json(&self, endpoint: &Endpoint) -> Result<Value, FetchError>;

    /// Creates a blog post with a multipart `image` + `payload` request.
    ///
    /// # Errors
    ///
    /// Same as [`Self::get_json`]. Validation failures come back as
    /// [`FetchError::Status`] carrying the upstream error body.
    async fn create_post(&self, submission: &PostSubmission) -> Result<Value, FetchError>;

    /// Updates blog post `post_id` with the same multipart shape as
    /// [`Self::create_post`]; the `image` part is only sent when present.
    ///
    /// # Errors
    ///
    /// Same as [`Self::create_post`].
    async fn update_post(&self, post_id: i64, submission: &PostSubmission) -> Result<Value, FetchError>;
}

/// Fetches a list endpoint and decodes its rows leniently.
pub async fn fetch_list<T, R>(repo: &R, endpoint: &Endpoint) -> Result<ListPage<T>, FetchError>
where
    T: DeserializeOwned,
    R: ContentRepository + ?Sized,
{
    let value = repo.get_json(endpoint).await?;
    Ok(ListPage::from_value(&value))
}

/// Fetches a single-object endpoint.
pub async fn fetch_one<T, R>(repo: &R, endpoint: &Endpoint) -> Result<T, FetchError>
where
    T: DeserializeOwned,
    R: ContentRepository + ?Sized,
{
    let value = repo.get_json(endpoint).await?;
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::endpoint::ListQuery;
    use crate::domain::entities::{Post, PostKind};
    use serde_json::json;

    #[tokio::test]
    async fn test_fetch_list_decodes_items() {
        let mut repo = MockContentRepository::new();
        repo.expect_get_json()
            .withf(|e| e.path_and_query() == "/api/v1/blog-posts?per_page=10")
            .times(1)
            .returning(|_| Ok(json!({ "items": [{ "post_id": 1 }, { "post_id": 2 }] })));

        let page: ListPage<Post> =
            fetch_list(&repo, &Endpoint::list("blog-posts", ListQuery::per_page(10)))
                .await
                .unwrap();
        assert_eq!(page.items.len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_one_propagates_status() {
        let mut repo = MockContentRepository::new();
        repo.expect_get_json().returning(|_| {
            Err(FetchError::Status {
                url: "http://api/x".to_string(),
                status: 404,
                body: "missing".to_string(),
            })
        });

        let result: Result<Post, _> = fetch_one(
            &repo,
            &Endpoint::Post {
                kind: PostKind::Blog,
                ident: "nope".to_string(),
            },
        )
        .await;
        assert_eq!(result.unwrap_err().status(), Some(404));
    }
}
