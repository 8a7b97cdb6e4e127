//! Per-field error messages and their placement next to inputs.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use validator::ValidationErrors;

use crate::dom::selectors::{FIELD_ERROR, SUBMIT_BUTTON, field_error};
use crate::dom::{Hydration, Patch};

/// Key for messages that belong to no single field.
pub const FORM_FIELD: &str = "form";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn merge(&mut self, other: FieldErrors) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }

    /// Collects `validator` failures, falling back to the error code when a
    /// rule carries no message.
    pub fn from_validation(errors: &ValidationErrors) -> Self {
        let mut out = Self::default();
        for (field, failures) in errors.field_errors() {
            for failure in failures {
                let message = failure
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value ({}).", failure.code));
                out.add(field.as_ref(), message);
            }
        }
        out
    }

    /// Extracts field messages from an upstream error body.
    ///
    /// Understands `{"error": {...}}` and `{"errors": {...}}` maps whose
    /// values are a message or a list of messages; nested maps are flattened
    /// to their leaf field names. A plain string error, or a body that is not
    /// JSON, lands under [`FORM_FIELD`].
    pub fn from_upstream(body: &str) -> Self {
        let mut out = Self::default();
        let parsed: Option<Value> = serde_json::from_str(body).ok();

        let detail = parsed
            .as_ref()
            .and_then(|v| v.get("errors").or_else(|| v.get("error")));

        match detail {
            Some(Value::Object(map)) => {
                for (field, value) in map {
                    collect(&mut out, field, value);
                }
            }
            Some(Value::String(message)) => out.add(FORM_FIELD, message.clone()),
            _ => {
                let text = body.trim();
                let message = if text.is_empty() || parsed.is_some() {
                    "The post could not be saved.".to_string()
                } else {
                    text.to_string()
                };
                out.add(FORM_FIELD, message);
            }
        }

        if out.is_empty() {
            out.add(FORM_FIELD, "The post could not be saved.");
        }
        out
    }

    /// Clears every error slot, fills the failing ones and re-enables the
    /// submit button.
    pub fn hydration(&self) -> Hydration {
        let mut hydration = Hydration::new();
        if self.is_empty() {
            return hydration;
        }
        hydration.push(Patch::text(FIELD_ERROR, ""));
        for (field, messages) in &self.0 {
            hydration.push(Patch::text(field_error(field), messages.join(" ")));
        }
        hydration.push(Patch::flag_attr(SUBMIT_BUTTON, "disabled", false));
        hydration
    }
}

fn collect(out: &mut FieldErrors, field: &str, value: &Value) {
    match value {
        Value::String(message) => out.add(field, message.clone()),
        Value::Array(items) => {
            for item in items {
                collect(out, field, item);
            }
        }
        Value::Object(map) => {
            for (inner, value) in map {
                collect(out, inner, value);
            }
        }
        Value::Null => {}
        other => out.add(field, other.to_string()),
    }
}
