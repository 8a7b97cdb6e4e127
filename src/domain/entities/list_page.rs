use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::utils::numbers::number_from_value;

/// Pagination metadata reported alongside a list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageMeta {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub pages: Option<u32>,
    pub total: Option<u64>,
}

/// One page of decoded list items.
#[derive(Debug, Clone)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Default for ListPage<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            meta: PageMeta::default(),
        }
    }
}

/// Keys under which list endpoints have been seen to return their rows.
const ITEM_KEYS: [&str; 3] = ["items", "news", "places"];

impl<T: DeserializeOwned> ListPage<T> {
    /// Decodes a list response.
    ///
    /// Accepts a bare array or an object carrying the rows under `items`
    /// (`news` and `places` are accepted as fallbacks). Any other shape
    /// yields an empty page. Rows that fail to decode are dropped.
    pub fn from_value(value: &Value) -> Self {
        let (rows, meta) = match value {
            Value::Array(rows) => (Some(rows), PageMeta::default()),
            Value::Object(map) => {
                let rows = ITEM_KEYS
                    .iter()
                    .find_map(|key| map.get(*key).and_then(Value::as_array));
                let meta = PageMeta {
                    page: map.get("page").and_then(as_u32),
                    per_page: map.get("per_page").and_then(as_u32),
                    pages: map.get("pages").and_then(as_u32),
                    total: map
                        .get("total")
                        .and_then(number_from_value)
                        .filter(|n| *n >= 0.0)
                        .map(|n| n as u64),
                };
                (rows, meta)
            }
            _ => (None, PageMeta::default()),
        };

        if rows.is_none() {
            tracing::debug!("List payload carried no item array");
        }

        let items = rows
            .map(|rows| {
                rows.iter()
                    .enumerate()
                    .filter_map(|(idx, row)| match T::deserialize(row) {
                        Ok(item) => Some(item),
                        Err(e) => {
                            tracing::debug!("Dropping list item {}: {}", idx, e);
                            None
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self { items, meta }
    }
}

impl<T> ListPage<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn as_u32(value: &Value) -> Option<u32> {
    number_from_value(value)
        .filter(|n| *n >= 0.0 && *n <= u32::MAX as f64)
        .map(|n| n as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: i64,
    }

    #[test]
    fn test_items_with_meta() {
        let page: ListPage<Row> = ListPage::from_value(&json!({
            "items": [{ "id": 1 }, { "id": 2 }],
            "page": 2, "per_page": 6, "pages": 4, "total": 20
        }));
        assert_eq!(page.items, vec![Row { id: 1 }, Row { id: 2 }]);
        assert_eq!(page.meta.page, Some(2));
        assert_eq!(page.meta.pages, Some(4));
        assert_eq!(page.meta.total, Some(20));
    }

    #[test]
    fn test_news_and_bare_array_shapes() {
        let news: ListPage<Row> = ListPage::from_value(&json!({ "news": [{ "id": 5 }] }));
        assert_eq!(news.items.len(), 1);

        let bare: ListPage<Row> = ListPage::from_value(&json!([{ "id": 1 }, { "id": 2 }]));
        assert_eq!(bare.items.len(), 2);
        assert_eq!(bare.meta, PageMeta::default());
    }

    #[test]
    fn test_shape_mismatch_is_empty() {
        let not_array: ListPage<Row> = ListPage::from_value(&json!({ "items": "nope" }));
        assert!(not_array.is_empty());

        let scalar: ListPage<Row> = ListPage::from_value(&json!(42));
        assert!(scalar.is_empty());
    }

    #[test]
    fn test_bad_rows_are_dropped() {
        let page: ListPage<Row> =
            ListPage::from_value(&json!({ "items": [{ "id": 1 }, { "id": "x" }, { "id": 3 }] }));
        assert_eq!(page.items, vec![Row { id: 1 }, Row { id: 3 }]);
    }
}
