//! Home page: injected news cards, weather card and the mobile nav.

use super::section_patches;
use crate::dom::selectors::{HOME_NEWS, HOME_WEATHER, MENU_TOGGLE, MOBILE_NAV};
use crate::dom::{Binding, Hydration, Patch};
use crate::domain::entities::{HomeNewsItem, Weather};
use crate::render::RenderContext;
use crate::render::home::{render_home_news, render_weather};

pub struct HomeService {
    ctx: RenderContext,
}

impl HomeService {
    pub fn new(ctx: RenderContext) -> Self {
        Self { ctx }
    }

    /// Renders data the page already holds; nothing is fetched.
    ///
    /// The weather card is left untouched when no weather is supplied.
    pub fn render(&self, news: &[HomeNewsItem], weather: Option<&Weather>) -> Hydration {
        let mut hydration = section_patches(
            "home-news",
            render_home_news(news, &self.ctx).map(|html| Hydration::from(vec![Patch::html(HOME_NEWS, html)])),
        );

        if let Some(weather) = weather {
            hydration.merge(section_patches(
                "home-weather",
                render_weather(weather).map(|html| Hydration::from(vec![Patch::html(HOME_WEATHER, html)])),
            ));
        }

        hydration.bind(Binding::MobileNav {
            toggle: MENU_TOGGLE.to_string(),
            modal: MOBILE_NAV.to_string(),
        });
        hydration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_news_and_weather() {
        let news = vec![HomeNewsItem {
            title: Some("Parade".to_string()),
            image: Some("parade.jpg".to_string()),
            summary: Some("Downtown".to_string()),
        }];
        let weather = Weather {
            icon: Some("☀️".to_string()),
            condition: Some("Sunny".to_string()),
            temperature: Some("75°F".to_string()),
            location: Some("Atlanta".to_string()),
        };

        let h = HomeService::new(RenderContext::default()).render(&news, Some(&weather));
        assert!(h.html_for(HOME_NEWS).unwrap().contains("/static/images/parade.jpg"));
        assert!(h.html_for(HOME_WEATHER).unwrap().contains("Sunny"));
        assert_eq!(
            h.bindings,
            vec![Binding::MobileNav {
                toggle: MENU_TOGGLE.to_string(),
                modal: MOBILE_NAV.to_string(),
            }]
        );
    }

    #[test]
    fn test_weather_absent() {
        let h = HomeService::new(RenderContext::default()).render(&[], None);
        assert!(h.html_for(HOME_NEWS).is_some());
        assert_eq!(h.html_for(HOME_WEATHER), None);
    }
}
