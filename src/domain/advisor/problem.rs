//! Problem description value object.

use crate::domain::foundation::ValidationError;

/// Minimum length of a meaningful problem description.
pub const MIN_PROBLEM_CHARS: usize = 20;

/// A free-text description of a team's current challenge.
///
/// Construction enforces the minimum-length policy; anything shorter is
/// rejected before any processing happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemDescription(String);

impl ProblemDescription {
    /// Validates and wraps a raw description.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(ValidationError::empty_field("problem_description"));
        }
        let length = raw.chars().count();
        if length < MIN_PROBLEM_CHARS {
            return Err(ValidationError::too_short(
                "problem_description",
                MIN_PROBLEM_CHARS,
                length,
            ));
        }
        Ok(Self(raw))
    }

    /// The verbatim description text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProblemDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
