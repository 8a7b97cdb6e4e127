use serde::{Deserialize, Serialize};

/// One DOM mutation, applied to every element matching `selector`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Patch {
    SetHtml {
        selector: String,
        html: String,
    },
    SetText {
        selector: String,
        text: String,
    },
    SetAttr {
        selector: String,
        name: String,
        value: String,
    },
    RemoveAttr {
        selector: String,
        name: String,
    },
    AddClass {
        selector: String,
        class: String,
    },
    RemoveClass {
        selector: String,
        class: String,
    },
    SetStyle {
        selector: String,
        property: String,
        value: String,
    },
}

impl Patch {
    pub fn html(selector: impl Into<String>, html: impl Into<String>) -> Self {
        Patch::SetHtml {
            selector: selector.into(),
            html: html.into(),
        }
    }

    pub fn text(selector: impl Into<String>, text: impl Into<String>) -> Self {
        Patch::SetText {
            selector: selector.into(),
            text: text.into(),
        }
    }

    pub fn attr(selector: impl Into<String>, name: impl Into<String>, value: impl Into<String>) -> Self {
        Patch::SetAttr {
            selector: selector.into(),
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn remove_attr(selector: impl Into<String>, name: impl Into<String>) -> Self {
        Patch::RemoveAttr {
            selector: selector.into(),
            name: name.into(),
        }
    }

    pub fn add_class(selector: impl Into<String>, class: impl Into<String>) -> Self {
        Patch::AddClass {
            selector: selector.into(),
            class: class.into(),
        }
    }

    pub fn remove_class(selector: impl Into<String>, class: impl Into<String>) -> Self {
        Patch::RemoveClass {
            selector: selector.into(),
            class: class.into(),
        }
    }

    /// Adds or removes `class` depending on `on`.
    pub fn toggle_class(selector: impl Into<String>, class: impl Into<String>, on: bool) -> Self {
        if on {
            Self::add_class(selector, class)
        } else {
            Self::remove_class(selector, class)
        }
    }

    pub fn style(selector: impl Into<String>, property: impl Into<String>, value: impl Into<String>) -> Self {
        Patch::SetStyle {
            selector: selector.into(),
            property: property.into(),
            value: value.into(),
        }
    }

    /// `display: none`
    pub fn hide(selector: impl Into<String>) -> Self {
        Self::style(selector, "display", "none")
    }

    /// Restores a display value (`""` resets to the stylesheet default).
    pub fn show(selector: impl Into<String>, display: impl Into<String>) -> Self {
        Self::style(selector, "display", display)
    }

    /// Sets or clears a boolean attribute such as `disabled`.
    pub fn flag_attr(selector: impl Into<String>, name: impl Into<String>, on: bool) -> Self {
        if on {
            Self::attr(selector, name, "")
        } else {
            Self::remove_attr(selector, name)
        }
    }

    pub fn selector(&self) -> &str {
        match self {
            Patch::SetHtml { selector, .. }
            | Patch::SetText { selector, .. }
            | Patch::SetAttr { selector, .. }
            | Patch::RemoveAttr { selector, .. }
            | Patch::AddClass { selector, .. }
            | Patch::RemoveClass { selector, .. }
            | Patch::SetStyle { selector, .. } => selector,
        }
    }
}
