//! Admin list tables.
//!
//! Each admin resource has a declarative column schema. Cells are escaped
//! by the template; only the actions column carries prebuilt markup.

use askama::Template;
use serde_json::Value;

use super::RenderContext;
use super::format::admin_date;
use crate::domain::entities::{Post, PostKind};
use crate::utils::lenient::scalar_to_string;

const TRUNCATE: Option<&str> = Some("cell--truncate");
const ACTIONS: Option<&str> = Some("cell-actions");

/// How a column reads its value out of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accessor {
    /// Scalar at a JSON pointer, shown as text.
    Field(&'static str),
    /// Timestamp at a JSON pointer, shown as `YYYY-MM-DD HH:MM`.
    Date(&'static str),
    /// News-main start and end dates joined with ` – `.
    Window,
    /// Row action links.
    Actions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub header: &'static str,
    pub accessor: Accessor,
    pub class: Option<&'static str>,
    pub is_html: bool,
}

impl Column {
    const fn new(key: &'static str, header: &'static str, accessor: Accessor) -> Self {
        Self {
            key,
            header,
            accessor,
            class: None,
            is_html: false,
        }
    }

    const fn truncated(mut self) -> Self {
        self.class = TRUNCATE;
        self
    }

    const fn actions() -> Self {
        Self {
            key: "__actions__",
            header: "Actions",
            accessor: Accessor::Actions,
            class: ACTIONS,
            is_html: true,
        }
    }
}

use Accessor::{Date, Field, Window};

const BLOG_POSTS: &[Column] = &[
    Column::new("post_id", "ID", Field("/post_id")),
    Column::new("title", "Title", Field("/title")).truncated(),
    Column::new("slug", "Slug", Field("/slug")).truncated(),
    Column::new("category_title", "Category", Field("/category_title")),
    Column::new("author_first_name", "Author", Field("/author_first_name")),
    Column::new("image", "Image", Field("/image")).truncated(),
    Column::new("created_at", "Created", Date("/created_at")),
    Column::new("updated_at", "Updated", Date("/updated_at")),
    Column::actions(),
];

const BLOG_CATEGORIES: &[Column] = &[
    Column::new("blog_cat_id", "ID", Field("/blog_cat_id")),
    Column::new("title", "Title", Field("/title")).truncated(),
    Column::new("slug", "Slug", Field("/slug")).truncated(),
    Column::new("description", "Description", Field("/description")).truncated(),
    Column::new("created_at", "Created", Date("/created_at")),
    Column::new("updated_at", "Updated", Date("/updated_at")),
    Column::actions(),
];

const USERS: &[Column] = &[
    Column::new("my_user_id", "ID", Field("/my_user_id")),
    Column::new("first_name", "First", Field("/first_name")),
    Column::new("last_name", "Last", Field("/last_name")),
    Column::new("email", "Email", Field("/email")).truncated(),
    Column::new("gender", "Gender", Field("/gender")),
    Column::new("dob", "DOB", Date("/dob")),
    Column::new("zip_code", "ZIP", Field("/zip_code")),
    Column::new("city_state", "City/State", Field("/city_state")),
    Column::new("image", "Image", Field("/image")).truncated(),
    Column::new("created_at", "Created", Date("/created_at")),
    Column::new("updated_at", "Updated", Date("/updated_at")),
    Column::actions(),
];

const NEWS_MAIN: &[Column] = &[
    Column::new("news_main_id", "ID", Field("/news_main/news_main_id")),
    Column::new("title", "Title", Field("/post/title")).truncated(),
    Column::new("slug", "Slug", Field("/post/slug")).truncated(),
    Column::new("category_title", "Category", Field("/post/category_title")),
    Column::new("author_first_name", "Author", Field("/post/author_first_name")),
    Column::new("image", "Image", Field("/post/image")).truncated(),
    Column::new("window", "Window", Window),
    Column::new("created_at", "Created", Date("/news_main/created_at")),
    Column::new("updated_at", "Updated", Date("/news_main/updated_at")),
    Column::new("notes", "Notes", Field("/news_main/notes")).truncated(),
    Column::actions(),
];

const POST_ANALYTICS: &[Column] = &[
    Column::new("post_id", "Post ID", Field("/post_id")),
    Column::new("views", "Views", Field("/views")),
    Column::new("likes", "Likes", Field("/likes")),
    Column::new("comments", "Comments", Field("/comments")),
    Column::new("shares", "Shares", Field("/shares")),
    Column::new("created_at", "Created", Date("/created_at")),
    Column::new("updated_at", "Updated", Date("/updated_at")),
    Column::actions(),
];

const MOST_READ_BLOG: &[Column] = &[
    Column::new("post_id", "ID", Field("/post_id")),
    Column::new("title", "Title", Field("/title")).truncated(),
    Column::new("views", "Views", Field("/views")),
    Column::new("likes", "Likes", Field("/likes")),
    Column::new("comments", "Comments", Field("/comments")),
    Column::new("shares", "Shares", Field("/shares")),
];

const NEWS_ANALYTICS: &[Column] = &[
    Column::new("post_id", "ID", Field("/post_id")),
    Column::new("title", "Title", Field("/title")).truncated(),
    Column::new("slug", "Slug", Field("/slug")).truncated(),
    Column::new("views", "Views", Field("/views")),
    Column::new("likes", "Likes", Field("/likes")),
    Column::new("comments", "Comments", Field("/comments")),
    Column::new("shares", "Shares", Field("/shares")),
    Column::new("created_at", "Created", Date("/created_at")),
];

/// Column schema of an admin resource.
pub fn schema(resource: &str) -> Option<&'static [Column]> {
    match resource {
        // Blog and news posts share one layout.
        "blog-posts" | "news-posts" => Some(BLOG_POSTS),
        "blog-categories" => Some(BLOG_CATEGORIES),
        "users" => Some(USERS),
        "news-main" => Some(NEWS_MAIN),
        "post-analytics" => Some(POST_ANALYTICS),
        "analytics-most-read-blog" => Some(MOST_READ_BLOG),
        "analytics-most-read-news" | "analytics-latest-news" => Some(NEWS_ANALYTICS),
        _ => None,
    }
}

/// Resources with a schema.
pub const RESOURCES: [&str; 9] = [
    "blog-posts",
    "blog-categories",
    "news-posts",
    "users",
    "news-main",
    "post-analytics",
    "analytics-most-read-blog",
    "analytics-most-read-news",
    "analytics-latest-news",
];

struct HeadColumn {
    header: &'static str,
    is_actions: bool,
}

#[derive(Template)]
#[template(path = "fragments/admin_head.html")]
struct HeadTemplate {
    columns: Vec<HeadColumn>,
}

struct CellView {
    class: Option<&'static str>,
    title: Option<String>,
    text: String,
    is_html: bool,
}

#[derive(Template)]
#[template(path = "fragments/admin_body.html")]
struct BodyTemplate {
    rows: Vec<Vec<CellView>>,
    colspan: usize,
}

#[derive(Template)]
#[template(path = "fragments/admin_post_actions.html")]
struct PostActionsTemplate<'a> {
    id: String,
    view_href: String,
    csrf_token: Option<&'a str>,
}

#[derive(Template)]
#[template(path = "fragments/admin_default_actions.html")]
struct DefaultActionsTemplate;

/// Rendered table fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminTable {
    /// Header row, absent for resources without a schema.
    pub head: Option<String>,
    pub body: String,
}

/// Renders the header and body rows of `resource` for `rows`.
///
/// Unknown resources render no header and a one-column placeholder body.
pub fn render_admin_table(resource: &str, rows: &[Value], ctx: &RenderContext) -> askama::Result<AdminTable> {
    let Some(columns) = schema(resource) else {
        tracing::warn!("No schema defined for resource \"{}\"", resource);
        let body = BodyTemplate {
            rows: Vec::new(),
            colspan: 1,
        }
        .render()?;
        return Ok(AdminTable { head: None, body });
    };

    let head = HeadTemplate {
        columns: columns
            .iter()
            .map(|c| HeadColumn {
                header: c.header,
                is_actions: c.accessor == Accessor::Actions,
            })
            .collect(),
    }
    .render()?;

    let rows = rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|col| cell(resource, col, row, ctx))
                .collect::<askama::Result<Vec<_>>>()
        })
        .collect::<askama::Result<Vec<_>>>()?;

    let body = BodyTemplate {
        rows,
        colspan: columns.len(),
    }
    .render()?;

    Ok(AdminTable {
        head: Some(head),
        body,
    })
}

fn cell(resource: &str, col: &Column, row: &Value, ctx: &RenderContext) -> askama::Result<CellView> {
    let text = match col.accessor {
        Accessor::Field(ptr) => text_at(row, ptr),
        Accessor::Date(ptr) => date_at(row, ptr, ctx),
        Accessor::Window => [
            date_at(row, "/news_main/start_date", ctx),
            date_at(row, "/news_main/end_date", ctx),
        ]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" – "),
        Accessor::Actions => render_actions(resource, row, ctx)?,
    };

    let title = (col.class == TRUNCATE).then(|| text.clone());
    Ok(CellView {
        class: col.class,
        title,
        text,
        is_html: col.is_html,
    })
}

fn text_at(row: &Value, ptr: &str) -> String {
    row.pointer(ptr)
        .and_then(scalar_to_string)
        .unwrap_or_default()
}

fn date_at(row: &Value, ptr: &str, ctx: &RenderContext) -> String {
    let raw = row.pointer(ptr).and_then(scalar_to_string);
    admin_date(raw.as_deref(), ctx.display_offset)
}

fn render_actions(resource: &str, row: &Value, ctx: &RenderContext) -> askama::Result<String> {
    let id = row.get("post_id").and_then(scalar_to_string);
    match (resource, id) {
        ("blog-posts", Some(id)) => {
            let post: Post = serde_json::from_value(row.clone()).unwrap_or_default();
            PostActionsTemplate {
                view_href: post.href(PostKind::Blog),
                id,
                csrf_token: ctx.csrf_token.as_deref(),
            }
            .render()
        }
        _ => DefaultActionsTemplate.render(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};
    use serde_json::json;

    fn select_count(html: &str, css: &str) -> usize {
        let doc = Html::parse_fragment(&format!("<table><tbody>{html}</tbody></table>"));
        let sel = Selector::parse(css).unwrap();
        doc.select(&sel).count()
    }

    #[test]
    fn test_every_resource_has_schema() {
        for resource in RESOURCES {
            assert!(schema(resource).is_some(), "{resource}");
        }
        assert!(schema("widgets").is_none());
    }

    #[test]
    fn test_empty_rows_span_all_columns() {
        let table = render_admin_table("blog-posts", &[], &RenderContext::default()).unwrap();
        let doc = Html::parse_fragment(&format!("<table><tbody>{}</tbody></table>", table.body));
        let td = Selector::parse("td").unwrap();
        let cells: Vec<_> = doc.select(&td).collect();

        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].value().attr("colspan"), Some("9"));
        assert!(cells[0].value().attr("style").unwrap().contains("text-align:center"));
        assert_eq!(cells[0].text().collect::<String>().trim(), "No results.");
    }

    #[test]
    fn test_unknown_resource() {
        let table = render_admin_table("widgets", &[json!({ "a": 1 })], &RenderContext::default()).unwrap();
        assert!(table.head.is_none());
        assert!(table.body.contains("colspan=\"1\""));
    }

    #[test]
    fn test_header_row() {
        let table = render_admin_table("analytics-most-read-blog", &[], &RenderContext::default()).unwrap();
        let head = table.head.unwrap();
        assert_eq!(select_count(&head, "th"), MOST_READ_BLOG.len());
        assert!(!head.contains("width:160px"));

        let with_actions = render_admin_table("users", &[], &RenderContext::default()).unwrap();
        assert!(with_actions.head.unwrap().contains("<th style=\"width:160px;\">Actions</th>"));
    }

    #[test]
    fn test_cells_are_escaped_except_actions() {
        let row = json!({
            "post_id": 5,
            "slug": "hello",
            "title": "<script>alert(1)</script>",
            "created_at": "2025-10-05T15:04:00",
        });
        let ctx = RenderContext {
            csrf_token: Some("tok123".to_string()),
            ..Default::default()
        };
        let table = render_admin_table("blog-posts", &[row], &ctx).unwrap();

        assert!(!table.body.contains("<script>"));
        assert!(table.body.contains("2025-10-05 15:04"));
        assert!(table.body.contains("href=\"/blog/hello\""));
        assert!(table.body.contains("action=\"/admin/blog-posts/5\""));
        assert!(table.body.contains("value=\"tok123\""));
        assert_eq!(select_count(&table.body, "td"), BLOG_POSTS.len());
        assert_eq!(select_count(&table.body, "td.cell--truncate[title]"), 3);
        assert_eq!(select_count(&table.body, "td.cell-actions form"), 1);
    }

    #[test]
    fn test_other_resources_get_placeholder_actions() {
        let table = render_admin_table(
            "blog-categories",
            &[json!({ "blog_cat_id": 1, "title": "Food" })],
            &RenderContext::default(),
        )
        .unwrap();
        assert!(table.body.contains("<a href=\"#\" class=\"btn-link danger\">Delete</a>"));
        assert!(!table.body.contains("<form"));
    }

    #[test]
    fn test_news_main_window() {
        let row = json!({
            "news_main": {
                "news_main_id": 3,
                "start_date": "2025-10-01T08:00:00",
                "end_date": "2025-10-08T08:00:00"
            },
            "post": { "title": "Featured" }
        });
        let table = render_admin_table("news-main", &[row], &RenderContext::default()).unwrap();
        assert!(table.body.contains("2025-10-01 08:00 – 2025-10-08 08:00"));
        assert!(table.body.contains("Featured"));
    }
}
