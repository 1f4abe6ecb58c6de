//! Entity spans returned by the annotation backend.

use serde::{Deserialize, Serialize};

/// A labeled entity span in the submitted text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySpan {
    /// Surface text of the entity.
    pub text: String,
    /// Annotation label, e.g. "GPE" or "LOC".
    pub label: String,
    /// Character offset of the span start.
    #[serde(default)]
    pub start: usize,
    /// Character offset one past the span end.
    #[serde(default)]
    pub end: usize,
}
