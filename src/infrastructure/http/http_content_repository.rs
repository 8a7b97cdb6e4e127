//! reqwest implementation of the content repository.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, Response};
use serde_json::Value;
use url::Url;

use crate::domain::endpoint::Endpoint;
use crate::domain::entities::{PostKind, PostSubmission};
use crate::domain::repositories::ContentRepository;
use crate::error::FetchError;

/// Upstream REST API client.
///
/// Joins endpoint paths onto a fixed base URL and always asks for JSON.
#[derive(Clone)]
pub struct HttpContentRepository {
    client: Client,
    base_url: String,
}

impl HttpContentRepository {
    /// Creates a repository for the API at `base_url`.
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, endpoint: &Endpoint) -> Result<Url, FetchError> {
        Ok(Url::parse(&format!(
            "{}{}",
            self.base_url,
            endpoint.path_and_query()
        ))?)
    }

    /// Sends `image` (when present) and `payload` as multipart form data.
    async fn send_submission(
        &self,
        method: Method,
        endpoint: &Endpoint,
        submission: &PostSubmission,
    ) -> Result<Value, FetchError> {
        let url = self.url_for(endpoint)?;
        tracing::info!("Sending blog post ({}) to {}", method, url);

        let mut form = Form::new();
        if let Some(image) = &submission.image {
            let part = Part::bytes(image.bytes.clone())
                .file_name(image.file_name.clone())
                .mime_str(image.mime())?;
            form = form.part("image", part);
        }
        let payload = Part::text(submission.payload.to_string()).mime_str("application/json")?;
        form = form.part("payload", payload);

        let response = self
            .client
            .request(method, url.clone())
            .header(ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await?;

        let body = Self::read_body(&url, response).await?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }

    async fn read_body(url: &Url, response: Response) -> Result<String, FetchError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

#[async_trait]
impl ContentRepository for HttpContentRepository {
    async fn get_json(&self, endpoint: &Endpoint) -> Result<Value, FetchError> {
        let url = self.url_for(endpoint)?;
        tracing::info!("Fetching {}", url);

        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let body = Self::read_body(&url, response).await?;
        let value: Value = serde_json::from_str(&body)?;
        tracing::debug!(url = %url, "Payload shape: {}", shape_of(&value));
        Ok(value)
    }

    async fn create_post(&self, submission: &PostSubmission) -> Result<Value, FetchError> {
        let endpoint = Endpoint::list("blog-posts", Default::default());
        self.send_submission(Method::POST, &endpoint, submission).await
    }

    async fn update_post(&self, post_id: i64, submission: &PostSubmission) -> Result<Value, FetchError> {
        let endpoint = Endpoint::PostItem {
            kind: PostKind::Blog,
            id: post_id,
        };
        self.send_submission(Method::PATCH, &endpoint, submission).await
    }
}

fn shape_of(value: &Value) -> String {
    match value {
        Value::Array(items) => format!("array[{}]", items.len()),
        Value::Object(map) => {
            let keys: Vec<&str> = map.keys().map(String::as_str).take(8).collect();
            format!("object{{{}}}", keys.join(","))
        }
        Value::Null => "null".to_string(),
        _ => "scalar".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_base_url_is_trimmed() {
        let repo = HttpContentRepository::new("http://api.local:5000/");
        assert_eq!(repo.base_url(), "http://api.local:5000");
        let url = repo
            .url_for(&Endpoint::MostRead(crate::domain::entities::PostKind::Blog))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://api.local:5000/api/v1/analytics/most-read/blog"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let repo = HttpContentRepository::new("not a url");
        assert!(matches!(
            repo.url_for(&Endpoint::NewsMain),
            Err(FetchError::Url(_))
        ));
    }

    #[test]
    fn test_shape_of() {
        assert_eq!(shape_of(&json!([1, 2])), "array[2]");
        assert_eq!(shape_of(&json!({ "items": [] })), "object{items}");
    }
}
