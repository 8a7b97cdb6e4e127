//! Double-submit protection.

use dashmap::DashSet;

use crate::dom::Patch;
use crate::dom::selectors::SUBMIT_BUTTON;
use crate::error::FormError;

/// What a submission writes upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitTarget {
    Create,
    Update(i64),
}

impl SubmitTarget {
    /// Guard key: the slug being created, or the post being updated.
    pub fn key(&self, slug: &str) -> String {
        match self {
            SubmitTarget::Create => format!("create:{slug}"),
            SubmitTarget::Update(id) => format!("update:{id}"),
        }
    }
}

/// Lets one submission per form through at a time.
///
/// Submissions for different keys never block each other.
#[derive(Debug, Default)]
pub struct SubmitGuard {
    in_flight: DashSet<String>,
}

impl SubmitGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_in_flight(&self, key: &str) -> bool {
        self.in_flight.contains(key)
    }

    /// Number of submissions currently running.
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// Claims `key`; fails with [`FormError::InFlight`] when a submission
    /// already holds it. The claim is released when the ticket drops.
    pub fn begin(&self, key: impl Into<String>) -> Result<SubmitTicket<'_>, FormError> {
        let key = key.into();
        if !self.in_flight.insert(key.clone()) {
            return Err(FormError::InFlight);
        }
        Ok(SubmitTicket { guard: self, key })
    }
}

/// Held for the duration of one submission.
#[derive(Debug)]
pub struct SubmitTicket<'a> {
    guard: &'a SubmitGuard,
    key: String,
}

impl SubmitTicket<'_> {
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Disables the submit button while the request runs.
    pub fn disable_patch(&self) -> Patch {
        Patch::flag_attr(SUBMIT_BUTTON, "disabled", true)
    }
}

impl Drop for SubmitTicket<'_> {
    fn drop(&mut self) {
        self.guard.in_flight.remove(&self.key);
    }
}
