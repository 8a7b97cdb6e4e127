//! Article body fragments: sections, associated press, FAQs and video.

use askama::Template;

use crate::domain::entities::Content;
use crate::utils::encode::encode_component;

#[derive(Template)]
#[template(path = "fragments/section.html")]
struct SectionTemplate<'a> {
    title: Option<&'a str>,
    paragraphs: &'a [String],
}

#[derive(Template)]
#[template(path = "fragments/assoc_press.html")]
struct AssocPressTemplate<'a> {
    title: &'a str,
    text: Option<&'a str>,
}

struct FaqView {
    index: u32,
    question: String,
    answer: String,
}

#[derive(Template)]
#[template(path = "fragments/faqs.html")]
struct FaqsTemplate<'a> {
    article_title: &'a str,
    faqs: Vec<FaqView>,
}

#[derive(Template)]
#[template(path = "fragments/watch_now.html")]
struct WatchNowTemplate {
    video_id: String,
}

/// Renders one body section, or an empty string when it has no data.
pub fn render_section(content: &Content, key: &str) -> askama::Result<String> {
    match content.section(key) {
        None => Ok(String::new()),
        Some(section) => SectionTemplate {
            title: section.title.as_deref(),
            paragraphs: &section.paragraphs,
        }
        .render(),
    }
}

/// Renders the associated-press attribution, or an empty string.
pub fn render_assoc_press(content: &Content) -> askama::Result<String> {
    match content.assoc_press() {
        None => Ok(String::new()),
        Some(ap) => AssocPressTemplate {
            title: ap.title.as_deref().unwrap_or(""),
            text: ap.text.as_deref(),
        }
        .render(),
    }
}

/// Renders the FAQ block, or an empty string when there are no entries.
///
/// Missing questions read `Question <n>`; the heading falls back to
/// `This Article`.
pub fn render_faqs(content: &Content, article_title: Option<&str>) -> askama::Result<String> {
    let faqs: Vec<FaqView> = content
        .faqs()
        .into_iter()
        .map(|f| FaqView {
            index: f.index,
            question: f.question.unwrap_or_else(|| format!("Question {}", f.index)),
            answer: f.answer.unwrap_or_default(),
        })
        .collect();

    if faqs.is_empty() {
        return Ok(String::new());
    }

    FaqsTemplate {
        article_title: article_title.unwrap_or("This Article"),
        faqs,
    }
    .render()
}

/// Renders the YouTube embed for a valid video id.
pub fn render_watch_now(content: &Content) -> askama::Result<Option<String>> {
    content
        .video_id()
        .map(|id| {
            WatchNowTemplate {
                video_id: encode_component(id),
            }
            .render()
        })
        .transpose()
}
