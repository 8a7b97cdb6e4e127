//! Admin resource tables.

use std::sync::Arc;

use serde_json::Value;

use super::{section_data, section_patches};
use crate::dom::selectors::{
    ADMIN_SIDEBAR, ADMIN_TBODY, ADMIN_THEAD, SIDEBAR_BACKDROP, SIDEBAR_TOGGLE,
};
use crate::dom::{Binding, Hydration, Patch};
use crate::domain::endpoint::{Endpoint, ListQuery};
use crate::domain::repositories::{ContentRepository, fetch_list};
use crate::render::RenderContext;
use crate::render::admin_table::render_admin_table;
use crate::widgets::AdminSidebar;
use crate::widgets::sidebar::DESKTOP_BREAKPOINT_PX;

/// Rows requested when the page does not say otherwise.
pub const DEFAULT_PER_PAGE: u32 = 10;

pub struct AdminService<R: ContentRepository> {
    repository: Arc<R>,
    ctx: RenderContext,
}

impl<R: ContentRepository> AdminService<R> {
    pub fn new(repository: Arc<R>, ctx: RenderContext) -> Self {
        Self { repository, ctx }
    }

    /// Table of `resource` plus the sidebar wiring every admin page needs.
    ///
    /// The CSRF token is forwarded into delete forms. A failed request
    /// leaves the table untouched.
    pub async fn list(
        &self,
        resource: &str,
        per_page: Option<u32>,
        include_content: Option<bool>,
        csrf_token: Option<String>,
    ) -> Hydration {
        let mut hydration = Self::sidebar();

        let query = ListQuery {
            page: None,
            per_page: Some(per_page.unwrap_or(DEFAULT_PER_PAGE)),
            include_content,
        };
        let endpoint = Endpoint::list(resource, query);
        tracing::info!("Fetching admin resource {}", resource);

        let Some(rows) = section_data(
            resource,
            fetch_list::<Value, _>(self.repository.as_ref(), &endpoint).await,
        ) else {
            return hydration;
        };

        let ctx = self.ctx.clone().with_csrf_token(csrf_token);
        hydration.merge(section_patches(
            resource,
            render_admin_table(resource, &rows.items, &ctx).map(|table| {
                let mut patches = Vec::new();
                if let Some(head) = table.head {
                    patches.push(Patch::html(ADMIN_THEAD, head));
                }
                patches.push(Patch::html(ADMIN_TBODY, table.body));
                Hydration::from(patches)
            }),
        ));
        hydration
    }

    fn sidebar() -> Hydration {
        let mut hydration = Hydration::from(AdminSidebar::init_patches());
        hydration.bind(Binding::AdminSidebar {
            sidebar: ADMIN_SIDEBAR.to_string(),
            toggles: SIDEBAR_TOGGLE.to_string(),
            backdrop: SIDEBAR_BACKDROP.to_string(),
            breakpoint_px: DESKTOP_BREAKPOINT_PX,
        });
        hydration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockContentRepository;
    use crate::error::FetchError;
    use crate::render::admin_table::schema;
    use scraper::{Html, Selector};
    use serde_json::json;

    fn service(repo: MockContentRepository) -> AdminService<MockContentRepository> {
        AdminService::new(Arc::new(repo), RenderContext::default())
    }

    #[tokio::test]
    async fn test_empty_list_renders_single_placeholder_row() {
        let mut repo = MockContentRepository::new();
        repo.expect_get_json()
            .withf(|e| e.path_and_query() == "/api/v1/blog-posts?per_page=10")
            .times(1)
            .returning(|_| Ok(json!({ "items": [] })));

        let h = service(repo).list("blog-posts", None, None, None).await;

        let body = format!("<table><tbody>{}</tbody></table>", h.html_for(ADMIN_TBODY).unwrap());
        let doc = Html::parse_document(&body);
        let cells: Vec<_> = doc.select(&Selector::parse("td").unwrap()).collect();
        assert_eq!(cells.len(), 1);
        assert_eq!(
            cells[0].value().attr("colspan"),
            Some(schema("blog-posts").unwrap().len().to_string().as_str())
        );
        assert_eq!(cells[0].text().collect::<String>().trim(), "No results.");
        assert!(h.html_for(ADMIN_THEAD).is_some());
    }

    #[tokio::test]
    async fn test_rows_and_csrf_token() {
        let mut repo = MockContentRepository::new();
        repo.expect_get_json()
            .withf(|e| e.path_and_query() == "/api/v1/blog-posts?per_page=25&include_content=false")
            .times(1)
            .returning(|_| Ok(json!({ "items": [{ "post_id": 4, "slug": "four", "title": "Four" }] })));

        let h = service(repo)
            .list("blog-posts", Some(25), Some(false), Some("tok123".to_string()))
            .await;

        let body = h.html_for(ADMIN_TBODY).unwrap();
        assert!(body.contains("tok123"));
        assert!(body.contains("/admin/blog-posts/4"));
        assert!(h.bindings.iter().any(|b| matches!(b, Binding::AdminSidebar { .. })));
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_table() {
        let mut repo = MockContentRepository::new();
        repo.expect_get_json().times(1).returning(|_| {
            Err(FetchError::Status {
                url: "http://api/x".to_string(),
                status: 500,
                body: "oops".to_string(),
            })
        });

        let h = service(repo).list("users", None, None, None).await;
        assert!(h.html_for(ADMIN_TBODY).is_none());
        assert_eq!(h.bindings.len(), 1);
    }
}
