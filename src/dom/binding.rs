use serde::{Deserialize, Serialize};

/// A marker to draw on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub lat: f64,
    pub lng: f64,
    /// Emoji drawn in the pin.
    pub icon: String,
    pub popup_html: String,
}

/// South-west / north-east corners enclosing every marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    /// Smallest box containing every point; `None` for no points.
    pub fn enclosing(points: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
        points.into_iter().fold(None, |acc, (lat, lng)| {
            Some(match acc {
                None => Bounds {
                    south: lat,
                    west: lng,
                    north: lat,
                    east: lng,
                },
                Some(b) => Bounds {
                    south: b.south.min(lat),
                    west: b.west.min(lng),
                    north: b.north.max(lat),
                    east: b.east.max(lng),
                },
            })
        })
    }
}

/// Interaction the page must wire after applying the patches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "widget", rename_all = "snake_case")]
pub enum Binding {
    Carousel {
        root: String,
        items: usize,
        interval_ms: u64,
    },
    FaqAccordion {
        root: String,
    },
    Pager {
        root: String,
        page: u32,
        pages: u32,
        per_page: u32,
        /// Fragment URL of the previous page, when there is one.
        prev: Option<String>,
        next: Option<String>,
    },
    AdminSidebar {
        sidebar: String,
        toggles: String,
        backdrop: String,
        breakpoint_px: u32,
    },
    MobileNav {
        toggle: String,
        modal: String,
    },
    ImagePreview {
        input: String,
        preview: String,
    },
    SlugAutofill {
        title: String,
        slug: String,
    },
    Map {
        root: String,
        markers: Vec<Marker>,
        bounds: Option<Bounds>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bounds_enclosing() {
        let bounds = Bounds::enclosing([(33.7, -84.4), (33.8, -84.3), (33.75, -84.5)]).unwrap();
        assert_eq!(bounds.south, 33.7);
        assert_eq!(bounds.north, 33.8);
        assert_eq!(bounds.west, -84.5);
        assert_eq!(bounds.east, -84.3);
        assert!(Bounds::enclosing(Vec::new()).is_none());
    }

    #[test]
    fn test_binding_wire_format() {
        let binding = Binding::FaqAccordion {
            root: ".faqs".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&binding).unwrap(),
            json!({ "widget": "faq_accordion", "root": ".faqs" })
        );
    }
}
