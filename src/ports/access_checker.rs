//! Access control port for gated submissions.
//!
//! The submission gate is modeled as a capability instead of a literal
//! string comparison in the request handler, so deployments can run open,
//! behind a shared passphrase, or behind something stronger without touching
//! the pipeline.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Port for checking whether a submission may proceed.
#[async_trait]
pub trait AccessChecker: Send + Sync {
    /// Checks the credential supplied with a submission.
    ///
    /// `supplied` is whatever the user entered, untrimmed; `None` when the
    /// request carried no credential at all.
    async fn check_submission(&self, supplied: Option<&str>) -> AccessResult;
}

/// Result of an access check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessResult {
    /// Access is granted.
    Allowed,
    /// Access is denied with a specific reason.
    Denied(AccessDeniedReason),
}

impl AccessResult {
    /// Returns true if access is allowed.
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessResult::Allowed)
    }

    /// Returns true if access is denied.
    pub fn is_denied(&self) -> bool {
        matches!(self, AccessResult::Denied(_))
    }

    /// Converts the result to a Result type, with denied becoming an error.
    pub fn into_result(self) -> Result<(), AccessDeniedReason> {
        match self {
            AccessResult::Allowed => Ok(()),
            AccessResult::Denied(reason) => Err(reason),
        }
    }
}

/// Reason why access was denied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AccessDeniedReason {
    /// The gate is enabled and the request carried no passphrase.
    PassphraseRequired,
    /// The supplied passphrase did not match.
    PassphraseMismatch,
}

impl AccessDeniedReason {
    /// User-facing message for the denial reason.
    pub fn user_message(&self) -> &'static str {
        match self {
            AccessDeniedReason::PassphraseRequired => {
                "A passphrase is required to generate summaries."
            }
            AccessDeniedReason::PassphraseMismatch => "The passphrase is incorrect.",
        }
    }
}

impl std::fmt::Display for AccessDeniedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.user_message())
    }
}
