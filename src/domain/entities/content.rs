//! Article body content.
//!
//! The API has shipped two content layouts over time: a flat map of
//! underscore keys (`section_1_paragraph_2`, `faq_q_3`) and an older nested
//! layout (`{"content": {"section-1": {"paragraph-1": ..}}}`). Both are
//! normalized here into one flat key space so renderers only ever see the
//! flat form.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::utils::lenient::scalar_to_string;

static VIDEO_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{6,}$").unwrap());

const SNIPPET_CANDIDATES: [&str; 4] = [
    "section_1_paragraph_1",
    "section_1_paragraph_2",
    "section_2_paragraph_1",
    "section_3_paragraph_1",
];

/// Normalized content block of a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Content {
    fields: BTreeMap<String, String>,
}

/// One body section: optional title plus paragraphs in index order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: Option<String>,
    pub paragraphs: Vec<String>,
}

/// Associated-press attribution block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssocPress {
    pub title: Option<String>,
    pub text: Option<String>,
}

/// Question/answer pair; either side may be missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Faq {
    pub index: u32,
    pub question: Option<String>,
    pub answer: Option<String>,
}

impl Content {
    /// Builds a content block from either API layout.
    ///
    /// Nested objects are flattened with `_` separators. When a nested
    /// `content` wrapper sits next to flat keys, the flat keys win.
    pub fn from_value(value: &Value) -> Self {
        let mut fields = BTreeMap::new();
        if let Value::Object(map) = value {
            if let Some(Value::Object(inner)) = map.get("content") {
                flatten_into(&mut fields, "", inner);
            }
            let outer: Map<String, Value> = map
                .iter()
                .filter(|(k, _)| k.as_str() != "content")
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();
            flatten_into(&mut fields, "", &outer);
        }
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Looks up a body section by key (`section-1`, `section_1`,
    /// `section-6-conclusion`, ...).
    ///
    /// Returns `None` when the section has neither a title nor paragraphs.
    pub fn section(&self, key: &str) -> Option<Section> {
        let base = normalize_key(key);
        let title = self.get(&format!("{base}_title")).map(str::to_string);

        let prefix = format!("{base}_paragraph_");
        let mut numbered: Vec<(u32, &String)> = self
            .fields
            .iter()
            .filter_map(|(k, v)| {
                let idx = k.strip_prefix(&prefix)?.parse::<u32>().ok()?;
                Some((idx, v))
            })
            .collect();
        numbered.sort_by_key(|(idx, _)| *idx);

        if title.is_none() && numbered.is_empty() {
            return None;
        }

        Some(Section {
            title,
            paragraphs: numbered.into_iter().map(|(_, v)| v.clone()).collect(),
        })
    }

    pub fn assoc_press(&self) -> Option<AssocPress> {
        let title = self.get("section_7_assoc_press_title").map(str::to_string);
        let text = self
            .get("section_7_assoc_press_paragraph_1")
            .map(str::to_string);
        if title.is_none() && text.is_none() {
            return None;
        }
        Some(AssocPress { title, text })
    }

    /// FAQ entries for every index that has a question or an answer, ascending.
    pub fn faqs(&self) -> Vec<Faq> {
        let indices: BTreeSet<u32> = self
            .fields
            .keys()
            .filter_map(|k| {
                k.strip_prefix("faq_q_")
                    .or_else(|| k.strip_prefix("faq_a_"))
                    .and_then(|n| n.parse::<u32>().ok())
            })
            .collect();

        indices
            .into_iter()
            .map(|index| Faq {
                index,
                question: self.get(&format!("faq_q_{index}")).map(str::to_string),
                answer: self.get(&format!("faq_a_{index}")).map(str::to_string),
            })
            .collect()
    }

    /// YouTube video id, if present and well formed.
    pub fn video_id(&self) -> Option<&str> {
        self.get("yt_vid_id")
            .filter(|id| VIDEO_ID_REGEX.is_match(id))
    }

    /// First paragraph of the body, used for card snippets.
    pub fn first_paragraph(&self) -> Option<&str> {
        SNIPPET_CANDIDATES
            .iter()
            .find_map(|key| self.get(key))
            .or_else(|| {
                self.fields
                    .iter()
                    .find(|(k, _)| k.starts_with("section_") && k.ends_with("_paragraph_1"))
                    .map(|(_, v)| v.as_str())
            })
    }
}

impl<'de> Deserialize<'de> for Content {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Content::from_value(&value))
    }
}

fn flatten_into(fields: &mut BTreeMap<String, String>, prefix: &str, map: &Map<String, Value>) {
    for (key, value) in map {
        let key = normalize_key(key);
        let full = if prefix.is_empty() {
            key
        } else {
            format!("{prefix}_{key}")
        };

        match value {
            Value::Object(inner) => flatten_into(fields, &full, inner),
            other => {
                if let Some(text) = scalar_to_string(other) {
                    fields.insert(full, text.trim().to_string());
                }
            }
        }
    }
}

/// `section-1` → `section_1`, `paragraph1` → `paragraph_1`.
fn normalize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 2);
    let mut prev: Option<char> = None;
    for ch in key.trim().chars() {
        let ch = if ch == '-' { '_' } else { ch };
        if ch.is_ascii_digit() && prev.is_some_and(|p| p.is_ascii_alphabetic()) {
            out.push('_');
        }
        out.push(ch);
        prev = Some(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("section-1"), "section_1");
        assert_eq!(normalize_key("section1"), "section_1");
        assert_eq!(normalize_key("section-6-conclusion"), "section_6_conclusion");
        assert_eq!(normalize_key("faq_q_3"), "faq_q_3");
    }

    #[test]
    fn test_flat_and_nested_layouts_agree() {
        let flat = Content::from_value(&json!({
            "section_1_title": "Intro",
            "section_1_paragraph_1": "First",
        }));
        let nested = Content::from_value(&json!({
            "content": { "section-1": { "title": "Intro", "paragraph-1": "First" } }
        }));
        let unwrapped = Content::from_value(&json!({
            "section-1": { "title": "Intro", "paragraph1": "First" }
        }));

        assert_eq!(flat, nested);
        assert_eq!(flat, unwrapped);
    }

    #[test]
    fn test_flat_keys_override_nested_wrapper() {
        let content = Content::from_value(&json!({
            "content": { "section-1": { "title": "Old" } },
            "section_1_title": "New",
        }));
        assert_eq!(content.get("section_1_title"), Some("New"));
    }

    #[test]
    fn test_section_orders_paragraphs_numerically() {
        let content = Content::from_value(&json!({
            "section_2_paragraph_10": "ten",
            "section_2_paragraph_2": "two",
            "section_2_paragraph_1": "one",
        }));
        let section = content.section("section-2").unwrap();
        assert_eq!(section.title, None);
        assert_eq!(section.paragraphs, vec!["one", "two", "ten"]);
    }

    #[test]
    fn test_section_skips_gaps_and_blank_values() {
        let content = Content::from_value(&json!({
            "section_1_title": "T",
            "section_1_paragraph_1": "a",
            "section_1_paragraph_3": "c",
            "section_1_paragraph_4": "   ",
        }));
        let section = content.section("section_1").unwrap();
        assert_eq!(section.paragraphs, vec!["a", "c"]);
    }

    #[test]
    fn test_missing_section_is_none() {
        let content = Content::from_value(&json!({ "section_1_title": "T" }));
        assert!(content.section("section_2").is_none());
        assert!(content.section("section-6-conclusion").is_none());
    }

    #[test]
    fn test_conclusion_section() {
        let content = Content::from_value(&json!({
            "section_6_conclusion_title": "Wrap up",
            "section_6_conclusion_paragraph_1": "Bye",
        }));
        let section = content.section("section-6-conclusion").unwrap();
        assert_eq!(section.title.as_deref(), Some("Wrap up"));
    }

    #[test]
    fn test_faqs_union_of_indices() {
        let content = Content::from_value(&json!({
            "faq_q_2": "Why?",
            "faq_a_2": "Because.",
            "faq_a_1": "Orphan answer",
            "faq_q_10": "Last?",
        }));
        let faqs = content.faqs();
        let indices: Vec<u32> = faqs.iter().map(|f| f.index).collect();
        assert_eq!(indices, vec![1, 2, 10]);
        assert_eq!(faqs[0].question, None);
        assert_eq!(faqs[0].answer.as_deref(), Some("Orphan answer"));
        assert_eq!(faqs[2].answer, None);
    }

    #[test]
    fn test_video_id_validation() {
        let ok = Content::from_value(&json!({ "yt_vid_id": "dQw4w9WgXcQ" }));
        let short = Content::from_value(&json!({ "yt_vid_id": "abc" }));
        let bad = Content::from_value(&json!({ "yt_vid_id": "abc def ghi" }));
        let non_ascii = Content::from_value(&json!({ "yt_vid_id": "vidéo_ñandú" }));
        assert_eq!(ok.video_id(), Some("dQw4w9WgXcQ"));
        assert_eq!(short.video_id(), None);
        assert_eq!(bad.video_id(), None);
        assert_eq!(non_ascii.video_id(), None);
    }

    #[test]
    fn test_first_paragraph_candidates() {
        let content = Content::from_value(&json!({
            "section_2_paragraph_1": "second",
            "section_1_paragraph_2": "  first-ish  ",
        }));
        assert_eq!(content.first_paragraph(), Some("first-ish"));

        let other = Content::from_value(&json!({ "section_5_paragraph_1": "late" }));
        assert_eq!(other.first_paragraph(), Some("late"));

        assert_eq!(Content::default().first_paragraph(), None);
    }

    #[test]
    fn test_scalars_are_stringified() {
        let content: Content = serde_json::from_value(json!({ "section_1_paragraph_1": 42 })).unwrap();
        assert_eq!(content.get("section_1_paragraph_1"), Some("42"));
    }

    #[test]
    fn test_non_object_is_empty() {
        assert!(Content::from_value(&json!("text")).is_empty());
        assert!(Content::from_value(&Value::Null).is_empty());
    }
}
