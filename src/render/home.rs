//! Home page news cards and weather card.

use askama::Template;

use super::RenderContext;
use crate::domain::entities::{HomeNewsItem, Weather};

struct NewsCardView<'a> {
    img: String,
    title: &'a str,
    summary: &'a str,
}

#[derive(Template)]
#[template(path = "fragments/home_news.html")]
struct HomeNewsTemplate<'a> {
    items: Vec<NewsCardView<'a>>,
}

#[derive(Template)]
#[template(path = "fragments/weather.html")]
struct WeatherTemplate<'a> {
    icon: &'a str,
    condition: &'a str,
    temperature: &'a str,
    location: &'a str,
}

/// One `div.news-card` per item. Images are file names under `images/`.
pub fn render_home_news(items: &[HomeNewsItem], ctx: &RenderContext) -> askama::Result<String> {
    let items = items
        .iter()
        .map(|item| NewsCardView {
            img: format!(
                "{}images/{}",
                ctx.static_base,
                item.image.as_deref().unwrap_or("")
            ),
            title: item.title.as_deref().unwrap_or(""),
            summary: item.summary.as_deref().unwrap_or(""),
        })
        .collect();
    HomeNewsTemplate { items }.render()
}

pub fn render_weather(weather: &Weather) -> askama::Result<String> {
    WeatherTemplate {
        icon: weather.icon.as_deref().unwrap_or(""),
        condition: weather.condition.as_deref().unwrap_or(""),
        temperature: weather.temperature.as_deref().unwrap_or(""),
        location: weather.location.as_deref().unwrap_or(""),
    }
    .render()
}
