//! Identifier types.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifies a single user submission through the pipeline.
///
/// A submission is one trip through access check, completion, document build,
/// serialization and upload. Nothing outlives it, so the id exists purely for
/// tracing and transient file naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(Uuid);

impl SubmissionId {
    /// Generates a fresh submission id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_ids_are_unique() {
        assert_ne!(SubmissionId::new(), SubmissionId::new());
    }

    #[test]
    fn display_matches_uuid() {
        let id = SubmissionId::new();
        assert_eq!(id.to_string(), id.as_uuid().to_string());
    }
}
